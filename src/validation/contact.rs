//! Contact form validation

use serde_json::{Map, Value};

use super::rules::{self, FieldChecker};
use super::ValidationErrors;
use crate::domain::{ContactForm, ContactReplyMethod};

pub fn apply_contact_defaults(fields: &mut Map<String, Value>) {
    rules::default_to(
        fields,
        "preferredContactMethod",
        ContactReplyMethod::default(),
    );
}

pub fn check_contact_form(fields: &Map<String, Value>) -> Result<ContactForm, ValidationErrors> {
    let mut checker = FieldChecker::new(fields);

    let name = checker.text("name", 2, "Name must be at least 2 characters");
    let email = checker.email("email");
    let phone = checker.optional_phone("phone");
    let subject = checker.text("subject", 3, "Subject must be at least 3 characters");
    let message = checker.text("message", 10, "Message must be at least 10 characters");
    let preferred_contact_method = checker.choice::<ContactReplyMethod>("preferredContactMethod");

    match (name, email, phone, subject, message, preferred_contact_method) {
        (
            Some(name),
            Some(email),
            Some(phone),
            Some(subject),
            Some(message),
            Some(preferred_contact_method),
        ) => Ok(ContactForm {
            name,
            email,
            phone,
            subject,
            message,
            preferred_contact_method,
        }),
        _ => Err(checker.into_errors()),
    }
}

pub fn validate_contact_form(input: &Value) -> Result<ContactForm, ValidationErrors> {
    let mut fields = rules::as_object(input)?.clone();
    apply_contact_defaults(&mut fields);
    check_contact_form(&fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_contact_form_defaults_to_email() {
        let form = validate_contact_form(&json!({
            "name": "Ann Lee",
            "email": "ann@example.com",
            "subject": "Mulch delivery",
            "message": "Do you deliver mulch on weekends?",
        }))
        .expect("valid form");

        assert_eq!(form.preferred_contact_method, ContactReplyMethod::Email);
        assert_eq!(form.phone, None);
    }

    #[test]
    fn test_phone_is_optional_but_checked_when_present() {
        let errors = validate_contact_form(&json!({
            "name": "Ann Lee",
            "email": "ann@example.com",
            "phone": "555-1234",
            "subject": "Mulch delivery",
            "message": "Do you deliver mulch on weekends?",
        }))
        .unwrap_err();

        assert_eq!(
            errors.message_for("phone"),
            Some("Please enter a 10-digit phone number")
        );
    }

    #[test]
    fn test_text_preference_is_not_offered() {
        let errors = validate_contact_form(&json!({
            "name": "Ann Lee",
            "email": "ann@example.com",
            "subject": "Mulch delivery",
            "message": "Do you deliver mulch on weekends?",
            "preferredContactMethod": "text",
        }))
        .unwrap_err();

        assert_eq!(
            errors.message_for("preferredContactMethod"),
            Some("Invalid enum value. Expected 'phone' | 'email', received 'text'")
        );
    }

    #[test]
    fn test_collects_length_errors() {
        let errors = validate_contact_form(&json!({
            "name": "A",
            "email": "ann@example.com",
            "subject": "Hi",
            "message": "Too short",
        }))
        .unwrap_err();

        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["name", "subject", "message"]
        );
        assert_eq!(
            errors.message_for("message"),
            Some("Message must be at least 10 characters")
        );
    }
}
