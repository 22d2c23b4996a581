//! Quote pricing calculator
//!
//! Pure, total functions over validated enums:
//! - Base price lookup by service type and property size
//! - Add-on summation (text prices degrade to zero)
//! - Itemized quote price
//! - Seasonal multipliers, recurring discounts and the free-estimate rule

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::domain::{
    AddOnPrice, AddOnService, Frequency, PriceLine, PropertySize, QuotePrice, Season, ServiceType,
};

/// Minimum total (inclusive) at which the estimate visit is free
pub const FREE_ESTIMATE_THRESHOLD: u32 = 100;

/// Largest price a single add-on may carry
pub const MAX_ADD_ON_PRICE: u32 = 1_000_000;

/// Leading number of a text price, e.g. "25" in "25 USD" or "2.5E1" in "2.5E1 USD"
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<mantissa>[+-]?(?:\d+(?:\.\d*)?|\.\d+))(?:[eE](?P<exponent>[+-]?\d+))?")
        .expect("valid price regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddOnPriceError {
    #[error("must be a positive number")]
    NotPositive,

    #[error("must not exceed {}", MAX_ADD_ON_PRICE)]
    TooLarge,
}

/// Check an add-on price against the accepted range and return its amount.
///
/// Numbers must be positive. Text without a leading number counts as zero;
/// text with a negative leading number is rejected.
pub fn check_add_on_price(price: &AddOnPrice) -> Result<Decimal, AddOnPriceError> {
    let amount = match price {
        AddOnPrice::Amount(amount) if !amount.is_finite() || *amount <= 0.0 => {
            return Err(AddOnPriceError::NotPositive)
        }
        AddOnPrice::Amount(amount) => {
            Decimal::try_from(*amount).map_err(|_| AddOnPriceError::TooLarge)?
        }
        AddOnPrice::Text(text) => parse_price_text(text)?,
    };

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AddOnPriceError::NotPositive);
    }
    if amount > Decimal::from(MAX_ADD_ON_PRICE) {
        return Err(AddOnPriceError::TooLarge);
    }

    Ok(amount)
}

/// Numeric value of an add-on price.
///
/// Text is read up to the end of its leading number; text with no leading
/// number counts as zero. Out-of-range prices are clamped to
/// `0..=MAX_ADD_ON_PRICE`, so sums never overflow.
pub fn add_on_amount(price: &AddOnPrice) -> Decimal {
    // TODO: surface unparsable catalog prices to the caller once the business
    // confirms whether "Contact for pricing" add-ons should be priced at zero.
    match check_add_on_price(price) {
        Ok(amount) => amount,
        Err(AddOnPriceError::NotPositive) => Decimal::ZERO,
        Err(AddOnPriceError::TooLarge) => Decimal::from(MAX_ADD_ON_PRICE),
    }
}

fn parse_price_text(text: &str) -> Result<Decimal, AddOnPriceError> {
    let Some(found) = LEADING_NUMBER.captures(text.trim_start()) else {
        return Ok(Decimal::ZERO);
    };

    let mantissa = found["mantissa"]
        .trim_start_matches('+')
        .trim_end_matches('.');

    let parsed = match found.name("exponent") {
        Some(exponent) => {
            Decimal::from_scientific(&format!("{}e{}", mantissa, exponent.as_str())).or_else(
                |e| {
                    // Exponents too small to represent round to zero
                    if exponent.as_str().starts_with('-') {
                        Ok(Decimal::ZERO)
                    } else {
                        Err(e)
                    }
                },
            )
        }
        None => Decimal::from_str(mantissa),
    };

    parsed.map_err(|_| AddOnPriceError::TooLarge)
}

/// Total price of the supplied add-ons
pub fn calculate_add_on_price(add_ons: &[AddOnService]) -> Decimal {
    add_ons.iter().map(|add_on| add_on_amount(&add_on.price)).sum()
}

/// Itemized breakdown: the base service line followed by one line per add-on
/// in input order
pub fn create_price_breakdown(
    base_price: Decimal,
    add_ons: &[AddOnService],
    service_type: ServiceType,
    property_size: PropertySize,
) -> Vec<PriceLine> {
    let mut breakdown = Vec::with_capacity(add_ons.len() + 1);

    breakdown.push(PriceLine {
        item: format!("{} service ({} property)", service_type, property_size),
        price: base_price,
        description: Some(format!("Base {} lawn care service", service_type)),
    });

    breakdown.extend(add_ons.iter().map(|add_on| PriceLine {
        item: add_on.name.clone(),
        price: add_on_amount(&add_on.price),
        description: Some(add_on.description.clone()),
    }));

    breakdown
}

/// Complete quote price including base service and add-ons. No rounding.
pub fn calculate_quote_price(
    service_type: ServiceType,
    property_size: PropertySize,
    add_ons: &[AddOnService],
) -> QuotePrice {
    let base_price = get_base_price(service_type, property_size);
    let add_on_price = calculate_add_on_price(add_ons);

    QuotePrice {
        base_price,
        add_on_price,
        total_price: base_price + add_on_price,
        breakdown: create_price_breakdown(base_price, add_ons, service_type, property_size),
    }
}

fn seasonal_multiplier(season: Season) -> Decimal {
    match season {
        Season::Spring => Decimal::new(110, 2),
        Season::Summer => Decimal::new(105, 2),
        Season::Fall => Decimal::ONE,
        Season::Winter => Decimal::new(80, 2),
    }
}

fn discount_rate(frequency: Frequency) -> Decimal {
    match frequency {
        Frequency::Weekly => Decimal::new(15, 2),
        Frequency::Biweekly => Decimal::new(10, 2),
        Frequency::Monthly => Decimal::new(5, 2),
    }
}

/// Round to the nearest whole unit, halves rounding up
fn round_half_up(value: Decimal) -> Decimal {
    (value + Decimal::new(5, 1)).floor()
}

/// Price adjusted for the season, rounded to a whole currency unit
pub fn apply_seasonal_pricing(price: Decimal, season: Season) -> Decimal {
    round_half_up(price * seasonal_multiplier(season))
}

/// Discount amount (not the discounted price) for a recurring schedule
pub fn calculate_recurring_discount(price: Decimal, frequency: Frequency) -> Decimal {
    round_half_up(price * discount_rate(frequency))
}

pub fn qualifies_for_free_estimate(total_price: Decimal) -> bool {
    total_price >= Decimal::from(FREE_ESTIMATE_THRESHOLD)
}

/// Inputs for a business-side estimate
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub service_type: ServiceType,
    pub property_size: PropertySize,
    #[serde(default)]
    pub add_ons: Vec<AddOnService>,
    /// Catalog service ids to price as add-ons; resolved by the caller
    #[serde(default)]
    pub add_on_ids: Vec<String>,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
}

/// Quote price with seasonal and recurring adjustments applied
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    #[serde(flatten)]
    pub quote: QuotePrice,
    pub season: Season,
    pub seasonal_total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_discount: Option<Decimal>,
    pub free_estimate: bool,
}

/// Combine every pricing rule into one estimate. `current_season` is used when
/// the request does not name a season.
pub fn estimate(request: &EstimateRequest, current_season: Season) -> Estimate {
    let quote = calculate_quote_price(
        request.service_type,
        request.property_size,
        &request.add_ons,
    );
    let season = request.season.unwrap_or(current_season);
    let seasonal_total = apply_seasonal_pricing(quote.total_price, season);
    let recurring_discount = request
        .frequency
        .map(|frequency| calculate_recurring_discount(seasonal_total, frequency));
    let free_estimate = qualifies_for_free_estimate(quote.total_price);

    Estimate {
        quote,
        season,
        seasonal_total,
        frequency: request.frequency,
        recurring_discount,
        free_estimate,
    }
}
