use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
      from_email: "".to_string(),
    }
  }
}

impl SmtpConfig {
  /// Loads the SMTP settings from the process environment. Host and port
  /// fall back to Gmail on 587; the account identity and credential are
  /// required.
  pub fn from_env() -> anyhow::Result<Self> {
    use std::env;

    Ok(SmtpConfig {
      host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
      port: env::var("SMTP_PORT")
        .unwrap_or_else(|_| "587".to_string())
        .parse()
        .unwrap_or(587),
      username: env::var("SMTP_USERNAME").context("SMTP_USERNAME environment variable must be set.")?,
      password: env::var("SMTP_PASSWORD").context("SMTP_PASSWORD environment variable must be set.")?,
      from_email: env::var("SMTP_FROM_EMAIL").context("SMTP_FROM_EMAIL environment variable must be set.")?,
    })
  }
}

/// One outbound message, constructed per call and discarded after the send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutgoingEmail {
  pub to: String,
  pub subject: String,
  pub text_body: String,
  pub html_body: Option<String>,
}

impl OutgoingEmail {
  pub fn new(to: String, subject: String, text_body: String, html_body: Option<String>) -> Self {
    OutgoingEmail {
      to,
      subject,
      text_body,
      html_body,
    }
  }
}

/// Order data interpolated into the confirmation email. Plain data bag,
/// no invariants beyond the fields being present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetails {
  pub order_number: String,
  pub customer_name: String,
  pub items: Vec<serde_json::Value>,
  pub total_amount: String,
  pub shipping_address: String,
}
