use std::sync::Mutex;

use async_trait::async_trait;
use lettre::Message;

use ecomly_mailer::email::templates;
use ecomly_mailer::{EmailService, EmailServiceError, MailTransport, SmtpConfig};

struct RecordingTransport {
  delivered: Mutex<Vec<Message>>,
}

impl RecordingTransport {
  fn new() -> Self {
    RecordingTransport {
      delivered: Mutex::new(Vec::new()),
    }
  }

  fn formatted(&self) -> Vec<String> {
    self
      .delivered
      .lock()
      .unwrap()
      .iter()
      .map(|m| String::from_utf8_lossy(&m.formatted()).to_string())
      .collect()
  }
}

#[async_trait]
impl MailTransport for RecordingTransport {
  async fn deliver(&self, message: Message) -> anyhow::Result<()> {
    self.delivered.lock().unwrap().push(message);
    Ok(())
  }
}

struct FailingTransport;

#[async_trait]
impl MailTransport for FailingTransport {
  async fn deliver(&self, _message: Message) -> anyhow::Result<()> {
    Err(anyhow::anyhow!("550 relay access denied"))
  }
}

fn service() -> EmailService<RecordingTransport> {
  EmailService::with_transport("support@ecomly.example".to_string(), RecordingTransport::new())
}

#[tokio::test]
async fn password_reset_notification_reaches_transport() {
  let service = service();
  let body = templates::password_reset("482913");

  let confirmation = service
    .send(
      "customer@example.com",
      "Your Ecomly verification code",
      &body.text_body,
      Some(&body.html_body),
    )
    .await
    .unwrap();

  assert_eq!(confirmation, "Password reset OTP sent to your email");

  let messages = service.transport().formatted();
  assert_eq!(messages.len(), 1);
  assert!(messages[0].contains("customer@example.com"));
  assert!(messages[0].contains("482913"));
}

#[tokio::test]
async fn welcome_notification_can_be_sent_text_only() {
  let service = service();
  let body = templates::welcome("Hanako");

  let confirmation = service
    .send("hanako@example.com", "Welcome to Ecomly!", &body.text_body, None)
    .await
    .unwrap();

  assert_eq!(confirmation, "Password reset OTP sent to your email");
  assert_eq!(service.transport().formatted().len(), 1);
}

#[tokio::test]
async fn transport_failure_surfaces_as_generic_send_failure() {
  let service = EmailService::with_transport("support@ecomly.example".to_string(), FailingTransport);
  let body = templates::welcome("Hanako");

  let result = service
    .send("hanako@example.com", "Welcome to Ecomly!", &body.text_body, None)
    .await;

  assert_eq!(result.unwrap_err(), EmailServiceError::SendFailure);
}

#[tokio::test]
#[ignore]
async fn live_smtp_send() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  let config = SmtpConfig::from_env()?;
  let service = EmailService::new(config);

  let body = templates::welcome("Test User");
  let result = service
    .send("test@example.com", "Welcome to Ecomly!", &body.text_body, Some(&body.html_body))
    .await;

  assert!(result.is_ok());
  Ok(())
}
