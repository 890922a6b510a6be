//! Explicit field schema and payload validation for task records.
//!
//! Candidate payloads arrive as JSON objects from the wire boundary. A
//! single validation pass walks [`TASK_FIELDS`] in declaration order and
//! either produces a complete [`TaskFields`] value (with defaults applied
//! to absent optional fields) or a [`ValidationErrors`] map naming every
//! offending field.

use super::error::ValidationErrors;
use super::task::TaskFields;
use serde_json::{Map, Value};

/// JSON type expected for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON string.
    Text,
    /// A JSON boolean.
    Boolean,
}

/// Value substituted when an optional field is absent from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// No default; the field is required.
    None,
    /// Empty text.
    EmptyText,
    /// Boolean `false`.
    False,
}

/// One entry in the ordered task field schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Payload key for this field.
    pub name: &'static str,
    /// Expected JSON type.
    pub kind: FieldKind,
    /// Whether the field must be present and non-null.
    pub required: bool,
    /// Whether whitespace-only text is acceptable. Blank-checked text is
    /// stored trimmed.
    pub allow_blank: bool,
    /// Default applied when an optional field is absent.
    pub default: FieldDefault,
}

const TITLE: FieldSpec = FieldSpec {
    name: "title",
    kind: FieldKind::Text,
    required: true,
    allow_blank: false,
    default: FieldDefault::None,
};

const DESCRIPTION: FieldSpec = FieldSpec {
    name: "description",
    kind: FieldKind::Text,
    required: false,
    allow_blank: true,
    default: FieldDefault::EmptyText,
};

const IS_COMPLETED: FieldSpec = FieldSpec {
    name: "is_completed",
    kind: FieldKind::Boolean,
    required: false,
    allow_blank: true,
    default: FieldDefault::False,
};

/// Ordered schema for candidate task payloads.
pub const TASK_FIELDS: [FieldSpec; 3] = [TITLE, DESCRIPTION, IS_COMPLETED];

/// Payload keys assigned by the server and ignored on input.
pub const SERVER_ASSIGNED_FIELDS: [&str; 3] = ["id", "created_at", "updated_at"];

const MSG_REQUIRED: &str = "This field is required.";
const MSG_BLANK: &str = "This field may not be blank.";
const MSG_NOT_TEXT: &str = "Expected a string value.";
const MSG_NOT_BOOLEAN: &str = "Expected a boolean value.";

/// Validates a candidate payload against [`TASK_FIELDS`].
///
/// Keys listed in [`SERVER_ASSIGNED_FIELDS`] and keys outside the schema
/// are ignored. A JSON `null` counts as an absent value.
///
/// # Errors
///
/// Returns a [`ValidationErrors`] map covering every offending field when
/// any schema check fails.
pub fn validate_payload(payload: &Map<String, Value>) -> Result<TaskFields, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let title = checked_text(payload, &TITLE, &mut errors);
    let description = checked_text(payload, &DESCRIPTION, &mut errors);
    let is_completed = checked_bool(payload, &IS_COMPLETED, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(TaskFields {
        title: title.unwrap_or_default(),
        description: description.unwrap_or_default(),
        is_completed: is_completed.unwrap_or(false),
    })
}

/// Returns the payload value for a field, treating JSON `null` as absent.
fn present<'a>(payload: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    payload.get(name).filter(|value| !value.is_null())
}

/// Validates a text field, returning its normalized value when valid.
fn checked_text(
    payload: &Map<String, Value>,
    spec: &FieldSpec,
    errors: &mut ValidationErrors,
) -> Option<String> {
    let Some(value) = present(payload, spec.name) else {
        if spec.required {
            errors.push(spec.name, MSG_REQUIRED);
        }
        return default_text(spec);
    };

    let Some(text) = value.as_str() else {
        errors.push(spec.name, MSG_NOT_TEXT);
        return None;
    };

    if spec.allow_blank {
        return Some(text.to_owned());
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        errors.push(spec.name, MSG_BLANK);
        return None;
    }
    Some(trimmed.to_owned())
}

/// Validates a boolean field, returning its value when valid.
fn checked_bool(
    payload: &Map<String, Value>,
    spec: &FieldSpec,
    errors: &mut ValidationErrors,
) -> Option<bool> {
    let Some(value) = present(payload, spec.name) else {
        if spec.required {
            errors.push(spec.name, MSG_REQUIRED);
        }
        return default_bool(spec);
    };

    let Some(flag) = value.as_bool() else {
        errors.push(spec.name, MSG_NOT_BOOLEAN);
        return None;
    };
    Some(flag)
}

const fn default_text(spec: &FieldSpec) -> Option<String> {
    match spec.default {
        FieldDefault::EmptyText => Some(String::new()),
        FieldDefault::None | FieldDefault::False => None,
    }
}

const fn default_bool(spec: &FieldSpec) -> Option<bool> {
    match spec.default {
        FieldDefault::False => Some(false),
        FieldDefault::None | FieldDefault::EmptyText => None,
    }
}
