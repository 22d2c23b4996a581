//! Contact inquiry domain types

use serde::{Deserialize, Serialize};

choice_enum! {
    /// Reply channels offered on the contact form
    #[derive(Default)]
    pub enum ContactReplyMethod {
        Phone => "phone",
        #[default]
        Email => "email",
    }
}

/// A validated general contact inquiry. Independent of pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub preferred_contact_method: ContactReplyMethod,
}
