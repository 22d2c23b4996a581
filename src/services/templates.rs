//! HTML bodies for transactional emails
//!
//! Every value that originates from form input goes through
//! [`escape_html`] before interpolation.

use crate::domain::{Choice, ContactForm, QuotePrice, QuoteRequest, Service, Urgency};
use crate::formatting::{
    capitalize, escape_html, format_currency, format_phone_number, property_size_label,
    service_type_label, urgency_label,
};

const BUSINESS_NAME: &str = "Fermanis &amp; Sons Lawncare";

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
    .header { background: #22c55e; color: white; padding: 20px; text-align: center; }
    .content { padding: 20px; }
    .section { margin-bottom: 20px; }
    .label { font-weight: bold; color: #16a34a; }
    .value { margin-left: 10px; }
    .highlight { background: #f0f9ff; padding: 15px; border-radius: 5px; border-left: 4px solid #22c55e; }
    .urgent { background: #fef2f2; border-left: 4px solid #ef4444; padding: 10px; }
    .next-steps { background: #22c55e; color: white; padding: 15px; border-radius: 5px; text-align: center; }
"#;

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><style>{STYLE}</style></head>
<body>
  <div class="header">
    <h1>{title}</h1>
    <p>{BUSINESS_NAME}</p>
  </div>
  <div class="content">
{body}
  </div>
</body>
</html>
"#
    )
}

fn field(label: &str, value: &str) -> String {
    format!(r#"<p><span class="label">{label}:</span><span class="value">{value}</span></p>"#)
}

fn notes_section(message: Option<&str>) -> String {
    match message.map(str::trim).filter(|m| !m.is_empty()) {
        Some(message) => format!(
            r#"<div class="section"><h2>Additional Notes</h2><p class="highlight">{}</p></div>"#,
            escape_html(message)
        ),
        None => String::new(),
    }
}

/// Notification sent to the business inbox for a new quote request
pub fn business_quote_html(quote: &QuoteRequest, selected: &[&Service], estimate: &QuotePrice) -> String {
    let name = escape_html(&quote.customer_name);
    let email = escape_html(&quote.email);
    let phone = format_phone_number(&quote.phone);
    let contact_method = capitalize(quote.preferred_contact_method.as_str());

    let mut body = String::new();

    if quote.urgency == Urgency::Asap {
        body.push_str(r#"<div class="urgent"><strong>URGENT REQUEST - ASAP Service Needed</strong></div>"#);
    }

    body.push_str(r#"<div class="section"><h2>Customer Information</h2>"#);
    body.push_str(&field("Name", &name));
    body.push_str(&field("Email", &email));
    body.push_str(&field("Phone", &escape_html(&phone)));
    body.push_str(&field("Address", &escape_html(&quote.address)));
    body.push_str("</div>");

    body.push_str(r#"<div class="section"><h2>Service Details</h2>"#);
    body.push_str(&field("Service Type", service_type_label(quote.service_type)));
    body.push_str(&field(
        "Property Size",
        &escape_html(property_size_label(quote.property_size)),
    ));
    body.push_str(&field("Urgency", urgency_label(quote.urgency)));
    body.push_str(&field("Estimated Price", &format_currency(estimate.total_price)));
    body.push_str("</div>");

    if !selected.is_empty() {
        body.push_str(r#"<div class="section"><h2>Additional Services Requested</h2><div class="highlight">"#);
        for service in selected {
            body.push_str(&format!("<p>&bull; {}</p>", escape_html(service.name)));
        }
        body.push_str("</div></div>");
    }

    body.push_str(r#"<div class="section"><h2>Contact Preferences</h2>"#);
    body.push_str(&field("Preferred Contact", &contact_method));
    body.push_str(&field(
        "Best Call Time",
        &capitalize(quote.preferred_call_time.as_str()),
    ));
    body.push_str("</div>");

    body.push_str(&notes_section(quote.message.as_deref()));

    body.push_str(&format!(
        r#"<div class="section next-steps"><h3>Next Steps</h3><p>Contact {name} within 24 hours via {method}</p><p><strong>Phone:</strong> {phone} | <strong>Email:</strong> {email}</p></div>"#,
        method = contact_method.to_lowercase(),
        phone = escape_html(&phone),
    ));

    page("New Quote Request", &body)
}

/// Confirmation sent to the customer after a quote request
pub fn customer_quote_html(quote: &QuoteRequest, selected: &[&Service], business_email: &str) -> String {
    let mut body = format!(
        r#"<p>Hi {name},</p>
<p>Thank you for choosing {BUSINESS_NAME}! We've received your quote request and will be in touch soon.</p>
<div class="highlight">
  <h3>What happens next?</h3>
  <p>&bull; We'll contact you within 24 hours via {method}</p>
  <p>&bull; We'll discuss your specific needs and provide a detailed quote</p>
  <p>&bull; If you approve, we'll schedule your service at your convenience</p>
</div>
<div class="section">
  <h3>Your Request Summary</h3>
  <p><strong>Service Type:</strong> {service_type}</p>
  <p><strong>Property Size:</strong> {property_size}</p>
  <p><strong>Timing:</strong> {timing}</p>
"#,
        name = escape_html(&quote.customer_name),
        method = quote.preferred_contact_method,
        service_type = service_type_label(quote.service_type),
        property_size = escape_html(property_size_label(quote.property_size)),
        timing = urgency_label(quote.urgency),
    );

    if !selected.is_empty() {
        let names: Vec<String> = selected.iter().map(|s| escape_html(s.name)).collect();
        body.push_str(&format!(
            "  <p><strong>Additional Services:</strong> {}</p>\n",
            names.join(", ")
        ));
    }

    body.push_str(&format!(
        r#"</div>
<div class="section">
  <h3>Questions? Contact Us Anytime</h3>
  <p><strong>Email:</strong> {}</p>
</div>
<p>Thank you for supporting our family business!</p>
<p>Best regards,<br>The Fermanis Family<br>{BUSINESS_NAME}</p>
"#,
        escape_html(business_email)
    ));

    page("Thank You for Your Quote Request!", &body)
}

/// Notification sent to the business inbox for a contact form message
pub fn business_contact_html(form: &ContactForm) -> String {
    let mut body = String::from(r#"<div class="section"><h2>Contact Details</h2>"#);
    body.push_str(&field("Name", &escape_html(&form.name)));
    body.push_str(&field("Email", &escape_html(&form.email)));
    if let Some(phone) = &form.phone {
        body.push_str(&field("Phone", &escape_html(&format_phone_number(phone))));
    }
    body.push_str(&field(
        "Preferred Contact",
        &capitalize(form.preferred_contact_method.as_str()),
    ));
    body.push_str("</div>");

    body.push_str(&format!(
        r#"<div class="section"><h2>{}</h2><p class="highlight">{}</p></div>"#,
        escape_html(&form.subject),
        escape_html(&form.message)
    ));

    page("New Contact Message", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::domain::{CallTime, ContactMethod, ContactReplyMethod, PropertySize, ServiceType};
    use rust_decimal::Decimal;

    fn quote(urgency: Urgency) -> QuoteRequest {
        QuoteRequest {
            customer_name: "<script>alert(1)</script>".to_string(),
            email: "jane@example.com".to_string(),
            phone: "9195550100".to_string(),
            address: "42 Maple Ave".to_string(),
            service_type: ServiceType::Basic,
            property_size: PropertySize::Small,
            additional_services: vec![],
            message: Some("Gate code is <1234>".to_string()),
            preferred_contact_method: ContactMethod::Text,
            preferred_call_time: CallTime::Evening,
            urgency,
        }
    }

    fn estimate(total: i64) -> QuotePrice {
        QuotePrice {
            base_price: Decimal::from(total),
            add_on_price: Decimal::ZERO,
            total_price: Decimal::from(total),
            breakdown: vec![],
        }
    }

    #[test]
    fn test_business_email_escapes_user_text() {
        let html = business_quote_html(&quote(Urgency::Flexible), &[], &estimate(50));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Gate code is &lt;1234&gt;"));
        assert!(html.contains("(919) 555-0100"));
        assert!(html.contains("Small (&lt; 1/4 acre)"));
        assert!(html.contains("$50.00"));
    }

    #[test]
    fn test_urgent_banner_only_for_asap() {
        let urgent = business_quote_html(&quote(Urgency::Asap), &[], &estimate(50));
        let relaxed = business_quote_html(&quote(Urgency::NextWeek), &[], &estimate(50));

        assert!(urgent.contains("URGENT REQUEST"));
        assert!(!relaxed.contains("URGENT REQUEST"));
        assert!(relaxed.contains("Next week"));
    }

    #[test]
    fn test_additional_services_listed() {
        let selected: Vec<&Service> = ["edging", "mulching"]
            .iter()
            .filter_map(|id| catalog::get_by_id(id))
            .collect();

        let business = business_quote_html(&quote(Urgency::Flexible), &selected, &estimate(50));
        let customer = customer_quote_html(&quote(Urgency::Flexible), &selected, "owner@example.com");

        assert!(business.contains("Additional Services Requested"));
        assert!(business.contains("&bull; Edging"));
        assert!(customer.contains("Edging, Mulching"));
        assert!(customer.contains("owner@example.com"));

        let without = customer_quote_html(&quote(Urgency::Flexible), &[], "owner@example.com");
        assert!(!without.contains("Additional Services:"));
    }

    #[test]
    fn test_contact_email_omits_missing_phone() {
        let form = ContactForm {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            phone: None,
            subject: "Hello & welcome".to_string(),
            message: "Just saying hi to the team.".to_string(),
            preferred_contact_method: ContactReplyMethod::Email,
        };

        let html = business_contact_html(&form);

        assert!(!html.contains("Phone:"));
        assert!(html.contains("Hello &amp; welcome"));
    }
}
