//! Client for the journal platform's REST API.
//!
//! Every operation is a method on [`ApiClient`], grouped by resource in the
//! modules below. Request bodies are validated locally before anything goes
//! on the wire.

pub mod auth;
pub mod catalog;
pub mod client;
pub mod config;
pub mod content;
pub mod manuscripts;
pub mod multipart;
pub mod users;

pub use client::{ApiClient, Reply};
pub use config::load_client_config;

use shared_types::AppError;
use validator::Validate;

pub(crate) fn validate<T: Validate>(body: &T) -> Result<(), AppError> {
    body.validate().map_err(AppError::from)
}
