use msg_types::{Label, ScalarType};
use thiserror::Error;

/// Result alias used across the runtime crate.
pub type MessageResult<T> = Result<T, MessageError>;

/// Errors raised by builders and message accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// Repeated field accessed outside `[0, count)`.
    #[error("index {index} out of range for field '{field}' with {count} element(s)")]
    IndexOutOfRange {
        field: String,
        index: usize,
        count: usize,
    },

    /// Required singular field was never set before build.
    #[error("message '{message}' is missing required field '{field}'")]
    MissingRequiredField { message: String, field: String },

    /// Field name is not declared by the message descriptor.
    #[error("message '{message}' has no field named '{field}'")]
    UnknownField { message: String, field: String },

    /// Value type does not match the declared scalar type.
    #[error("field '{field}' expects {expected} but got {found}")]
    TypeMismatch {
        field: String,
        expected: ScalarType,
        found: ScalarType,
    },

    /// Singular operation used on a repeated field or the other way round.
    #[error("field '{field}' is {actual}, not {requested}")]
    LabelMismatch {
        field: String,
        actual: Label,
        requested: Label,
    },

    /// Appending would exceed the field's declared max-items.
    #[error("field '{field}' is limited to {max_items} element(s)")]
    CapacityExceeded { field: String, max_items: usize },
}

impl MessageError {
    /* Shorthand used by repeated-field accessors */
    pub fn index_out_of_range(field: &str, index: usize, count: usize) -> Self {
        MessageError::IndexOutOfRange {
            field: field.to_string(),
            index,
            count,
        }
    }

    pub fn missing_required(message: &str, field: &str) -> Self {
        MessageError::MissingRequiredField {
            message: message.to_string(),
            field: field.to_string(),
        }
    }
}
