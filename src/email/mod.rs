//! Email sending functionality module
//!
//! This module provides transactional email sending for the Ecomly backend
//! using lettre, together with the static templates for the three
//! notification kinds (password-reset OTP, order confirmation, welcome).

mod service;
pub mod templates;
mod transport;
mod types;

pub use service::{EmailService, EmailServiceError, SEND_CONFIRMATION};
pub use transport::{MailTransport, SmtpTransportClient};
pub use types::{OrderDetails, OutgoingEmail, SmtpConfig};
