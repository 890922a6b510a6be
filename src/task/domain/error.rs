//! Validation failure type reporting every offending field.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Per-field validation failure map.
///
/// Keys are schema field names, values the messages collected for that
/// field. The map serializes directly as the HTTP 400 response body, so a
/// caller sees every offending field in one round trip. Keys serialize in
/// lexical order, which keeps responses deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[error("invalid fields: {}", field_list(.0))]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, Vec<String>>);

impl ValidationErrors {
    /// Creates an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against a field.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    /// Returns `true` when no field has failed validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the messages recorded for a field, if any.
    #[must_use]
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

/// Renders the offending field names for the `Display` implementation.
fn field_list(errors: &BTreeMap<&'static str, Vec<String>>) -> String {
    errors.keys().copied().collect::<Vec<_>>().join(", ")
}
