//! Domain types and DTOs
//!
//! These types define the data structures for quote requests, contact
//! inquiries, the service catalog and computed quote prices.

/// A closed set of string values accepted from form input.
///
/// Implemented by every enum the validation engine parses from raw text, so
/// that unknown values can be reported together with the accepted ones.
pub trait Choice: Copy + Sized + 'static {
    /// Every variant, in the order they are presented to users.
    const ALL: &'static [Self];

    /// Wire representation of the variant.
    fn as_str(&self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

/// Declares a string-valued enum with serde, `Display` and [`Choice`] wired to
/// the same wire names.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $crate::domain::Choice for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::domain::Choice::as_str(self))
            }
        }
    };
}

pub mod contact;
pub mod quote;
pub mod services;

// Re-export commonly used types
pub use contact::*;
pub use quote::*;
pub use services::*;
