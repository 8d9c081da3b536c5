use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the schema crate.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors produced while loading or validating message schemas.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Schema file could not be read.
    #[error("failed to read schema file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Schema document is not valid YAML for the schema types.
    #[error("failed to parse schema: {0}")]
    Yaml(#[from] serde_yml::Error),

    /// A package, message or field name is not a usable identifier.
    #[error("invalid {what} name '{name}'")]
    InvalidIdentifier { what: &'static str, name: String },

    /// Field name declared twice within one message.
    #[error("message '{message}' declares field '{field}' more than once")]
    DuplicateField { message: String, field: String },

    /// Message full name registered twice in one pool.
    #[error("message '{message}' is already registered")]
    DuplicateMessage { message: String },

    /// `required` set on a repeated field.
    #[error("field '{field}' of message '{message}' is repeated and cannot be required")]
    RequiredRepeated { message: String, field: String },

    /// `max-items` set on a singular field.
    #[error("field '{field}' of message '{message}' is singular and cannot declare max-items")]
    MaxItemsOnSingular { message: String, field: String },

    /// Requested message is not present in the pool.
    #[error("message '{message}' not found in descriptor pool")]
    UnknownMessage { message: String },
}
