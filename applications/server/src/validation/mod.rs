//! Request payload validation
//!
//! Two interchangeable front-ends turn a raw JSON body into the normalized
//! payloads the store accepts:
//!
//! - [`AnnotatedValidator`]: derive-based DTOs with field attributes
//! - [`SchemaValidator`]: a schema object assembled from field rules
//!
//! Both strip unknown fields (including `deleted` and the date fields) and
//! agree on which payloads are accepted and what they normalize to.

mod annotated;
mod payload;
mod schema;

pub use annotated::{AnnotatedValidator, CreateUserDto, UpdateUserDto};
pub use payload::JsonPayload;
pub use schema::{FieldRule, Schema, SchemaValidator};

use crate::error::ServerError;
use roster_core::{NewUser, UserChanges};
use serde_json::Value;
use thiserror::Error;

pub(crate) const NOT_AN_OBJECT: &str = "Request body must be a JSON object";

/// Human-readable reasons a payload was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .messages.join(", "))]
pub struct ValidationFailure {
    pub messages: Vec<String>,
}

impl ValidationFailure {
    pub fn new(mut messages: Vec<String>) -> Self {
        messages.sort();
        messages.dedup();
        Self { messages }
    }

    pub fn single(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }
}

impl From<ValidationFailure> for ServerError {
    fn from(failure: ValidationFailure) -> Self {
        ServerError::Validation(failure.messages)
    }
}

/// Turns raw request bodies into normalized store payloads
pub trait PayloadValidator: Send + Sync {
    /// Validate a create body
    fn validate_create(&self, raw: &Value) -> Result<NewUser, ValidationFailure>;

    /// Validate a partial update body
    fn validate_update(&self, raw: &Value) -> Result<UserChanges, ValidationFailure>;
}
