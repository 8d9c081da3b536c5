//! Message Schema Types
//!
//! This crate contains the schema description types for the message runtime.
//! It provides plain data structures describing message fields, validated
//! descriptors built from them, and a pool that loads descriptors from YAML.

pub mod descriptor;
pub mod errors;
pub mod pool;
pub mod types;

// Re-export commonly used types at the crate root
pub use descriptor::{FieldDescriptor, MessageDescriptor};
pub use errors::{SchemaError, SchemaResult};
pub use pool::DescriptorPool;
pub use types::*;
