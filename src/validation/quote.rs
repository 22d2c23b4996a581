//! Quote request validation

use serde_json::{Map, Value};

use super::rules::{self, FieldChecker};
use super::ValidationErrors;
use crate::domain::{CallTime, ContactMethod, PropertySize, QuoteRequest, ServiceType, Urgency};

const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
const INVALID_ADDRESS: &str = "Please enter a valid address";

/// Fill defaults for absent keys. Present values, including `null`, are left
/// for the constraint step to judge.
pub fn apply_quote_defaults(fields: &mut Map<String, Value>) {
    rules::default_to(fields, "serviceType", ServiceType::default());
    rules::default_to(fields, "propertySize", PropertySize::default());
    rules::default_to(fields, "preferredContactMethod", ContactMethod::default());
    rules::default_to(fields, "preferredCallTime", CallTime::default());
    rules::default_to(fields, "urgency", Urgency::default());
}

/// Check every quote constraint without filling defaults. Unknown keys are
/// ignored.
pub fn check_quote_request(fields: &Map<String, Value>) -> Result<QuoteRequest, ValidationErrors> {
    let mut checker = FieldChecker::new(fields);

    let customer_name = checker.text("customerName", 2, NAME_TOO_SHORT);
    let email = checker.email("email");
    let phone = checker.phone("phone");
    let address = checker.text("address", 5, INVALID_ADDRESS);
    let service_type = checker.choice::<ServiceType>("serviceType");
    let property_size = checker.choice::<PropertySize>("propertySize");
    let additional_services = checker.string_set("additionalServices");
    let message = checker.optional_text("message");
    let preferred_contact_method = checker.choice::<ContactMethod>("preferredContactMethod");
    let preferred_call_time = checker.choice::<CallTime>("preferredCallTime");
    let urgency = checker.choice::<Urgency>("urgency");

    match (
        customer_name,
        email,
        phone,
        address,
        service_type,
        property_size,
        additional_services,
        message,
        preferred_contact_method,
        preferred_call_time,
        urgency,
    ) {
        (
            Some(customer_name),
            Some(email),
            Some(phone),
            Some(address),
            Some(service_type),
            Some(property_size),
            Some(additional_services),
            Some(message),
            Some(preferred_contact_method),
            Some(preferred_call_time),
            Some(urgency),
        ) => Ok(QuoteRequest {
            customer_name,
            email,
            phone,
            address,
            service_type,
            property_size,
            additional_services,
            message,
            preferred_contact_method,
            preferred_call_time,
            urgency,
        }),
        _ => Err(checker.into_errors()),
    }
}

/// Validate raw form input as a quote request: defaults first, then
/// constraints.
pub fn validate_quote_request(input: &Value) -> Result<QuoteRequest, ValidationErrors> {
    let mut fields = rules::as_object(input)?.clone();
    apply_quote_defaults(&mut fields);
    check_quote_request(&fields)
}
