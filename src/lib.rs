pub mod email;

pub use email::{
  EmailService, EmailServiceError, MailTransport, OrderDetails, OutgoingEmail, SmtpConfig, SmtpTransportClient,
};
