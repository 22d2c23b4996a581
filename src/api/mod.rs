//! Response bodies shared by the HTTP handlers

pub mod response;

pub use response::{DataResponse, SubmissionResponse};
