//! Service catalog domain types
//!
//! Catalog entries are static reference data; add-ons are the priced extras a
//! quote can carry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

choice_enum! {
    /// Catalog grouping shown on the services page
    pub enum ServiceCategory {
        Maintenance => "maintenance",
        Treatments => "treatments",
        Landscaping => "landscaping",
        Cleanup => "cleanup",
    }
}

/// Advertised price of a catalog service
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ServicePrice {
    Amount(Decimal),
    /// Display text such as "Contact for pricing"
    Display(&'static str),
}

/// Catalog entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub short_description: &'static str,
    pub price: ServicePrice,
    pub price_note: &'static str,
    pub features: &'static [&'static str],
    pub icon: &'static str,
    pub category: ServiceCategory,
    pub is_active: bool,
    pub seasonal_service: bool,
}

/// Price of an add-on as supplied by the caller.
///
/// Catalog data may carry prices as text; those are parsed by the pricing
/// calculator and degrade to zero when they are not numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AddOnPrice {
    Amount(f64),
    Text(String),
}

impl From<Decimal> for AddOnPrice {
    fn from(amount: Decimal) -> Self {
        Self::Text(amount.to_string())
    }
}

/// A selectable extra charge on a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnService {
    pub id: String,
    pub name: String,
    pub price: AddOnPrice,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatible_with: Option<Vec<String>>,
}

impl AddOnService {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: AddOnPrice,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: description.into(),
            compatible_with: None,
        }
    }
}

impl From<&Service> for AddOnService {
    fn from(service: &Service) -> Self {
        let price = match service.price {
            ServicePrice::Amount(amount) => AddOnPrice::from(amount),
            ServicePrice::Display(text) => AddOnPrice::Text(text.to_string()),
        };

        Self::new(service.id, service.name, price, service.short_description)
    }
}
