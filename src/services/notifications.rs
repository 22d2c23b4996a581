//! Notification service
//!
//! Renders the transactional emails for quote and contact requests and hands
//! them to an [`EmailSender`]. Quote requests produce two emails, sent one
//! after the other: the business notification, then the customer
//! confirmation. Nothing is retried.

use serde::Serialize;
use thiserror::Error;

use super::email::{EmailSender, OutgoingEmail, SendError};
use super::templates;
use crate::catalog;
use crate::config::Settings;
use crate::domain::{AddOnService, ContactForm, QuoteRequest, Service};
use crate::pricing;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Business email failed: {0}")]
    Business(String),

    #[error("Customer email failed: {0}")]
    Customer(String),
}

/// Sender and recipient addresses for outgoing mail
#[derive(Debug, Clone)]
pub struct Mailboxes {
    pub from: String,
    pub business: String,
    /// When set, every message goes here instead of its real recipient
    pub redirect_to: Option<String>,
}

impl Mailboxes {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            from: settings.email_from.clone(),
            business: settings.business_email.clone(),
            redirect_to: settings.email_redirect_to.clone(),
        }
    }

    fn recipient(&self, address: &str) -> Vec<String> {
        vec![self.redirect_to.as_deref().unwrap_or(address).to_string()]
    }

    fn business_email(&self, subject: String, html: String) -> OutgoingEmail {
        OutgoingEmail {
            from: self.from.clone(),
            to: self.recipient(&self.business),
            subject,
            html,
        }
    }

    fn customer_email(&self, to: &str, subject: String, html: String) -> OutgoingEmail {
        OutgoingEmail {
            from: self.from.clone(),
            to: self.recipient(to),
            subject,
            html,
        }
    }
}

/// Provider ids of the two emails sent for a quote request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteDelivery {
    pub business: String,
    pub customer: String,
}

/// Both rendered emails for a quote request
#[derive(Debug, Clone)]
pub struct QuoteEmails {
    pub business: OutgoingEmail,
    pub customer: OutgoingEmail,
}

/// Render the business notification and customer confirmation for a quote.
///
/// Requested add-ons are resolved against the catalog; the estimate shown to
/// the business prices them through the regular add-on rules.
pub fn render_quote_emails(quote: &QuoteRequest, mailboxes: &Mailboxes) -> QuoteEmails {
    let selected: Vec<&Service> = catalog::selected(&quote.additional_services).collect();
    let add_ons: Vec<AddOnService> = selected.iter().map(|s| catalog::as_add_on(s)).collect();
    let estimate = pricing::calculate_quote_price(quote.service_type, quote.property_size, &add_ons);

    let business = mailboxes.business_email(
        format!("New Quote Request from {}", quote.customer_name),
        templates::business_quote_html(quote, &selected, &estimate),
    );
    let customer = mailboxes.customer_email(
        &quote.email,
        format!("Quote Confirmation for {}", quote.customer_name),
        templates::customer_quote_html(quote, &selected, &mailboxes.business),
    );

    QuoteEmails { business, customer }
}

/// Send both quote emails. A failure of either aborts the request; a customer
/// failure after a successful business send is still reported as a failure.
pub async fn notify_quote_request(
    sender: &dyn EmailSender,
    mailboxes: &Mailboxes,
    quote: &QuoteRequest,
) -> Result<QuoteDelivery, DispatchError> {
    let emails = render_quote_emails(quote, mailboxes);

    tracing::info!(customer = %quote.customer_name, "Sending business notification email");
    let business = sender
        .send(&emails.business)
        .await
        .map_err(|e| DispatchError::Business(provider_message(e)))?;

    tracing::info!(customer = %quote.customer_name, "Sending customer confirmation email");
    let customer = sender
        .send(&emails.customer)
        .await
        .map_err(|e| DispatchError::Customer(provider_message(e)))?;

    tracing::info!(
        business_email_id = %business.id,
        customer_email_id = %customer.id,
        "Quote request emails sent"
    );

    Ok(QuoteDelivery {
        business: business.id,
        customer: customer.id,
    })
}

/// Send the business notification for a contact inquiry
pub async fn notify_contact_request(
    sender: &dyn EmailSender,
    mailboxes: &Mailboxes,
    form: &ContactForm,
) -> Result<String, DispatchError> {
    let email = mailboxes.business_email(
        format!("New Contact Message: {}", form.subject),
        templates::business_contact_html(form),
    );

    let sent = sender
        .send(&email)
        .await
        .map_err(|e| DispatchError::Business(provider_message(e)))?;

    tracing::info!(email_id = %sent.id, "Contact notification sent");
    Ok(sent.id)
}

fn provider_message(error: SendError) -> String {
    error.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CallTime, ContactMethod, ContactReplyMethod, PropertySize, ServiceType, Urgency};
    use crate::services::email::SentEmail;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records messages and fails the n-th send (1-based) when asked to
    struct RecordingSender {
        sent: Mutex<Vec<OutgoingEmail>>,
        fail_on: Option<usize>,
    }

    impl RecordingSender {
        fn new(fail_on: Option<usize>) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_on,
            }
        }

        fn subjects(&self) -> Vec<String> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .map(|e| e.subject.clone())
                .collect()
        }
    }

    #[async_trait]
    impl EmailSender for RecordingSender {
        async fn send(&self, email: &OutgoingEmail) -> Result<SentEmail, SendError> {
            let mut sent = self.sent.lock().unwrap();
            sent.push(email.clone());
            let attempt = sent.len();

            if self.fail_on == Some(attempt) {
                return Err(SendError::Rejected {
                    status: 422,
                    message: "Invalid `to` field".to_string(),
                });
            }

            Ok(SentEmail {
                id: format!("email_{}", attempt),
            })
        }
    }

    fn mailboxes() -> Mailboxes {
        Mailboxes {
            from: "onboarding@resend.dev".to_string(),
            business: "owner@example.com".to_string(),
            redirect_to: None,
        }
    }

    fn quote() -> QuoteRequest {
        QuoteRequest {
            customer_name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            phone: "9191234567".to_string(),
            address: "123 Oak Street, Holly Springs".to_string(),
            service_type: ServiceType::Premium,
            property_size: PropertySize::Large,
            additional_services: vec!["mulching".to_string(), "not-a-service".to_string()],
            message: None,
            preferred_contact_method: ContactMethod::Phone,
            preferred_call_time: CallTime::Anytime,
            urgency: Urgency::Flexible,
        }
    }

    #[test]
    fn test_render_addresses_and_subjects() {
        let emails = render_quote_emails(&quote(), &mailboxes());

        assert_eq!(emails.business.to, vec!["owner@example.com"]);
        assert_eq!(emails.business.subject, "New Quote Request from John Smith");
        assert_eq!(emails.customer.to, vec!["john@example.com"]);
        assert_eq!(emails.customer.subject, "Quote Confirmation for John Smith");
        assert!(emails.business.html.contains("Mulching"));
        assert!(!emails.business.html.contains("not-a-service"));
        assert!(emails.business.html.contains("$200.00"));
    }

    #[test]
    fn test_redirect_overrides_every_recipient() {
        let mut mailboxes = mailboxes();
        mailboxes.redirect_to = Some("sandbox@example.com".to_string());

        let emails = render_quote_emails(&quote(), &mailboxes);

        assert_eq!(emails.business.to, vec!["sandbox@example.com"]);
        assert_eq!(emails.customer.to, vec!["sandbox@example.com"]);
    }

    #[tokio::test]
    async fn test_sends_business_then_customer() {
        let sender = RecordingSender::new(None);

        let delivery = notify_quote_request(&sender, &mailboxes(), &quote())
            .await
            .unwrap();

        assert_eq!(delivery.business, "email_1");
        assert_eq!(delivery.customer, "email_2");
        assert_eq!(
            sender.subjects(),
            vec![
                "New Quote Request from John Smith",
                "Quote Confirmation for John Smith"
            ]
        );
    }

    #[tokio::test]
    async fn test_business_failure_skips_customer_email() {
        let sender = RecordingSender::new(Some(1));

        let err = notify_quote_request(&sender, &mailboxes(), &quote())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Business email failed: Invalid `to` field");
        assert_eq!(sender.subjects().len(), 1);
    }

    #[tokio::test]
    async fn test_customer_failure_is_reported_after_business_sent() {
        let sender = RecordingSender::new(Some(2));

        let err = notify_quote_request(&sender, &mailboxes(), &quote())
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::Customer(_)));
        assert_eq!(err.to_string(), "Customer email failed: Invalid `to` field");
        assert_eq!(sender.subjects().len(), 2);
    }

    #[tokio::test]
    async fn test_contact_notification_goes_to_business() {
        let sender = RecordingSender::new(None);
        let form = ContactForm {
            name: "Ann Lee".to_string(),
            email: "ann@example.com".to_string(),
            phone: None,
            subject: "Mulch delivery".to_string(),
            message: "Do you deliver mulch on weekends?".to_string(),
            preferred_contact_method: ContactReplyMethod::Email,
        };

        let id = notify_contact_request(&sender, &mailboxes(), &form)
            .await
            .unwrap();

        assert_eq!(id, "email_1");
        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent[0].to, vec!["owner@example.com"]);
        assert_eq!(sent[0].subject, "New Contact Message: Mulch delivery");
    }
}
