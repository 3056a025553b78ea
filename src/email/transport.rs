use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::email::types::SmtpConfig;

/// Minimal delivery seam: one operation, so tests can substitute a fake
/// transport for the SMTP relay.
#[async_trait]
pub trait MailTransport: Send + Sync {
  async fn deliver(&self, message: Message) -> Result<()>;
}

/// Delivers through an SMTP relay. A fresh connection is opened for every
/// call and dropped afterwards; there is no pooling or reuse.
pub struct SmtpTransportClient {
  config: SmtpConfig,
}

impl SmtpTransportClient {
  pub fn new(config: SmtpConfig) -> Self {
    SmtpTransportClient { config }
  }

  fn build_transporter(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
    let creds = Credentials::new(self.config.username.clone(), self.config.password.clone());

    let transporter = if self.config.host == "localhost" || self.config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.host)
        .credentials(creds)
        .port(self.config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?
        .credentials(creds)
        .port(self.config.port)
        .build()
    };

    Ok(transporter)
  }
}

#[async_trait]
impl MailTransport for SmtpTransportClient {
  async fn deliver(&self, message: Message) -> Result<()> {
    let transporter = self.build_transporter()?;
    transporter.send(message).await?;
    Ok(())
  }
}
