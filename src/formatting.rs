//! Display formatting for prices, phone numbers and form choices

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{PropertySize, ServiceType, Urgency};

/// US dollar amount with thousands separators and two decimals, e.g. `$1,250.00`
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded);
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{}${}.{}", sign, grouped, cents)
}

/// `(XXX) XXX-XXXX` for ten-digit numbers; anything else is returned as given
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();

    if digits.len() != 10 {
        return phone.to_string();
    }

    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

/// First letter upper case, the rest lower case
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn property_size_label(size: PropertySize) -> &'static str {
    match size {
        PropertySize::Small => "Small (< 1/4 acre)",
        PropertySize::Medium => "Medium (1/4 - 1/2 acre)",
        PropertySize::Large => "Large (1/2 - 1 acre)",
        PropertySize::Xlarge => "Extra Large (> 1 acre)",
    }
}

pub fn service_type_label(service_type: ServiceType) -> &'static str {
    match service_type {
        ServiceType::Basic => "Basic Maintenance",
        ServiceType::Premium => "Premium Care Package",
        ServiceType::Custom => "Custom Service Package",
    }
}

pub fn urgency_label(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Asap => "ASAP",
        Urgency::ThisWeek => "This week",
        Urgency::NextWeek => "Next week",
        Urgency::Flexible => "Flexible timing",
    }
}

/// Escape text for interpolation into HTML element content and attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
