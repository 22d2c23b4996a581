//! Service layer for external integrations.
//!
//! Holds the email provider client and the notification logic built on it.

pub mod email;
pub mod notifications;
mod templates;

pub use email::{EmailSender, OutgoingEmail, ResendClient, SendError, SentEmail};
pub use notifications::{
    notify_contact_request, notify_quote_request, render_quote_emails, DispatchError, Mailboxes,
    QuoteDelivery, QuoteEmails,
};
