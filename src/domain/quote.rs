//! Quote domain types
//!
//! The customer-facing quote request and the computed, itemized quote price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

choice_enum! {
    /// Service tier requested by the customer
    #[derive(Default)]
    pub enum ServiceType {
        #[default]
        Basic => "basic",
        Premium => "premium",
        Custom => "custom",
    }
}

choice_enum! {
    /// Lawn size bucket used for base pricing
    #[derive(Default)]
    pub enum PropertySize {
        Small => "small",
        #[default]
        Medium => "medium",
        Large => "large",
        Xlarge => "xlarge",
    }
}

choice_enum! {
    /// How the customer wants to be reached about a quote
    #[derive(Default)]
    pub enum ContactMethod {
        #[default]
        Phone => "phone",
        Email => "email",
        Text => "text",
    }
}

choice_enum! {
    #[derive(Default)]
    pub enum CallTime {
        Morning => "morning",
        Afternoon => "afternoon",
        Evening => "evening",
        #[default]
        Anytime => "anytime",
    }
}

choice_enum! {
    #[derive(Default)]
    pub enum Urgency {
        Asap => "asap",
        ThisWeek => "this_week",
        NextWeek => "next_week",
        #[default]
        Flexible => "flexible",
    }
}

choice_enum! {
    /// Calendar season driving the seasonal price multiplier
    pub enum Season {
        Spring => "spring",
        Summer => "summer",
        Fall => "fall",
        Winter => "winter",
    }
}

impl Season {
    /// Season for a calendar month (1 = January). Out-of-range months fall
    /// back to winter.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Fall,
            _ => Self::Winter,
        }
    }
}

choice_enum! {
    /// Recurring service cadence that earns a discount
    pub enum Frequency {
        Weekly => "weekly",
        Biweekly => "biweekly",
        Monthly => "monthly",
    }
}

/// A validated, normalized quote request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub service_type: ServiceType,
    pub property_size: PropertySize,
    #[serde(default)]
    pub additional_services: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub preferred_contact_method: ContactMethod,
    pub preferred_call_time: CallTime,
    pub urgency: Urgency,
}

/// One priced line of a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLine {
    pub item: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Computed price for a quote. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePrice {
    pub base_price: Decimal,
    pub add_on_price: Decimal,
    pub total_price: Decimal,
    pub breakdown: Vec<PriceLine>,
}

impl QuotePrice {
    /// Sum of every breakdown line
    pub fn breakdown_total(&self) -> Decimal {
        self.breakdown.iter().map(|line| line.price).sum()
    }
}
