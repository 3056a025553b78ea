use dotenvy::dotenv;

use ecomly_mailer::email::templates;
use ecomly_mailer::{EmailService, SmtpConfig};

/// Sends a single welcome email so the SMTP settings can be verified
/// against a real relay (or a local mailhog).
#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt::init();

  let mut args = std::env::args().skip(1);
  let to = args
    .next()
    .ok_or_else(|| anyhow::anyhow!("usage: ecomly-mailer <recipient> [name]"))?;
  let name = args.next().unwrap_or_else(|| "there".to_string());

  let config = SmtpConfig::from_env()?;
  let service = EmailService::new(config);

  let body = templates::welcome(&name);
  let confirmation = service
    .send(&to, "Welcome to Ecomly!", &body.text_body, Some(&body.html_body))
    .await?;

  println!("{}", confirmation);

  Ok(())
}
