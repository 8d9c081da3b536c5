//! Example messages
//!
//! Typed messages written in the shape a schema generator targets: a builder
//! with one move-chaining method per field, a consuming `build()`, and an
//! immutable message with per-field accessors. The schema that describes the
//! same types ships alongside them in `schemas/example.msg.yaml`.

pub mod document;
pub mod tag_set;

pub use document::{Document, DocumentBuilder};
pub use tag_set::{TagSet, TagSetBuilder};

use msg_types::{DescriptorPool, SchemaResult};

/// Schema describing every message in this crate.
pub const EXAMPLE_SCHEMA: &str = include_str!("../schemas/example.msg.yaml");

/// Descriptor pool loaded from [`EXAMPLE_SCHEMA`].
pub fn example_pool() -> SchemaResult<DescriptorPool> {
    DescriptorPool::from_yaml_str(EXAMPLE_SCHEMA)
}
