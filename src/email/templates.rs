//! Static bodies for the three notification kinds.
//!
//! Pure string interpolation into fixed templates: no validation, no side
//! effects, and no failure path. Output only varies with the input and the
//! current calendar year (copyright line in the HTML footer).

use chrono::{Datelike, Utc};

use super::types::OrderDetails;

const PASSWORD_RESET_HTML: &str = include_str!("templates/password_reset.html");
const ORDER_CONFIRMATION_HTML: &str = include_str!("templates/order_confirmation.html");
const WELCOME_HTML: &str = include_str!("templates/welcome.html");

/// Text and HTML renditions of one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailBody {
  pub text_body: String,
  pub html_body: String,
}

pub fn password_reset(otp: &str) -> EmailBody {
  let text_body = format!(
    "\
Hello,

You have requested a password reset for your Ecomly account.

Your verification code is: {otp}

This code will expire in 10 minutes. If you did not request this password reset, please ignore this email.

For security reasons, never share this code with anyone.

Best regards,
Ecomly Security Team"
  );

  let html_body = PASSWORD_RESET_HTML
    .replace("{{otp}}", otp)
    .replace("{{year}}", &current_year());

  EmailBody { text_body, html_body }
}

pub fn order_confirmation(details: &OrderDetails) -> EmailBody {
  let text_body = format!(
    "\
Hello {customer_name},

Thank you for your order! Your order #{order_number} has been confirmed.

Order Total: ${total_amount}

Your order will be shipped to:
{shipping_address}

You will receive a tracking number once your order ships.

Best regards,
Ecomly Team",
    customer_name = details.customer_name,
    order_number = details.order_number,
    total_amount = details.total_amount,
    shipping_address = details.shipping_address,
  );

  let html_body = ORDER_CONFIRMATION_HTML
    .replace("{{customer_name}}", &details.customer_name)
    .replace("{{order_number}}", &details.order_number)
    .replace("{{total_amount}}", &details.total_amount)
    .replace("{{shipping_address}}", &details.shipping_address)
    .replace("{{year}}", &current_year());

  EmailBody { text_body, html_body }
}

pub fn welcome(user_name: &str) -> EmailBody {
  let text_body = format!(
    "\
Welcome to Ecomly, {user_name}!

Thank you for joining our community. We're excited to have you on board!

Start exploring our amazing products and enjoy exclusive deals.

Best regards,
Ecomly Team"
  );

  let html_body = WELCOME_HTML
    .replace("{{user_name}}", user_name)
    .replace("{{year}}", &current_year());

  EmailBody { text_body, html_body }
}

fn current_year() -> String {
  Utc::now().year().to_string()
}
