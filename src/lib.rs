//! Quote pricing, form validation and notification email backend for a
//! lawn-care business.

pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod middleware;
pub mod pricing;
pub mod routes;
pub mod services;
pub mod validation;
