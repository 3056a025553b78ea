use std::error::Error;

use lettre::{
  message::{header::ContentType, Mailbox, MultiPart, SinglePart},
  Message,
};

use super::{
  transport::{MailTransport, SmtpTransportClient},
  types::{OutgoingEmail, SmtpConfig},
};

/// Fixed confirmation string resolved on every successful send, regardless
/// of notification kind.
pub const SEND_CONFIRMATION: &str = "Password reset OTP sent to your email";

/// The single error callers see. Transport, address and build failures are
/// logged with their cause but surface uniformly; callers must treat any
/// error as "notification not delivered".
#[derive(Debug, PartialEq, Eq)]
pub enum EmailServiceError {
  SendFailure,
}

impl Error for EmailServiceError {}

impl std::fmt::Display for EmailServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      EmailServiceError::SendFailure => write!(f, "Error sending email"),
    }
  }
}

pub struct EmailService<T> {
  from_email: String,
  transport: T,
}

impl EmailService<SmtpTransportClient> {
  pub fn new(config: SmtpConfig) -> Self {
    let from_email = config.from_email.clone();
    EmailService {
      from_email,
      transport: SmtpTransportClient::new(config),
    }
  }
}

impl<T: MailTransport> EmailService<T> {
  pub fn with_transport(from_email: String, transport: T) -> Self {
    EmailService { from_email, transport }
  }

  pub fn transport(&self) -> &T {
    &self.transport
  }

  /// Submits one message to the configured relay. Single best-effort
  /// attempt, no retry and no queuing.
  pub async fn send(
    &self,
    to: &str,
    subject: &str,
    text_body: &str,
    html_body: Option<&str>,
  ) -> Result<String, EmailServiceError> {
    let message = self.build_message(to, subject, text_body, html_body).map_err(|e| {
      tracing::error!("Error sending email: {:?}", e);
      EmailServiceError::SendFailure
    })?;

    match self.transport.deliver(message).await {
      Ok(()) => {
        tracing::info!(to = %to, subject = %subject, "Email sent");
        Ok(SEND_CONFIRMATION.to_string())
      }
      Err(e) => {
        tracing::error!("Error sending email: {:?}", e);
        Err(EmailServiceError::SendFailure)
      }
    }
  }

  pub async fn send_email(&self, email: &OutgoingEmail) -> Result<String, EmailServiceError> {
    self
      .send(&email.to, &email.subject, &email.text_body, email.html_body.as_deref())
      .await
  }

  fn build_message(
    &self,
    to: &str,
    subject: &str,
    text_body: &str,
    html_body: Option<&str>,
  ) -> anyhow::Result<Message> {
    let from: Mailbox = format!("Ecomly Support <{}>", self.from_email).parse()?;
    let to: Mailbox = to.parse()?;
    let builder = Message::builder().from(from).to(to).subject(subject);

    let message = match html_body {
      Some(html) => builder.multipart(
        MultiPart::alternative()
          .singlepart(
            SinglePart::builder()
              .header(ContentType::TEXT_PLAIN)
              .body(text_body.to_string()),
          )
          .singlepart(SinglePart::builder().header(ContentType::TEXT_HTML).body(html.to_string())),
      )?,
      None => builder.header(ContentType::TEXT_PLAIN).body(text_body.to_string())?,
    };

    Ok(message)
  }
}
