/* Descriptor pool - registry of validated message descriptors keyed by full name */

use crate::descriptor::MessageDescriptor;
use crate::errors::{SchemaError, SchemaResult};
use crate::types::SchemaFile;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct DescriptorPool {
    messages: BTreeMap<String, Arc<MessageDescriptor>>,
}

impl DescriptorPool {
    pub fn new() -> Self {
        Self::default()
    }

    /* Parse a YAML schema document and register all of its messages */
    pub fn from_yaml_str(yaml: &str) -> SchemaResult<Self> {
        let mut pool = Self::new();
        pool.add_yaml_str(yaml)?;
        Ok(pool)
    }

    /* Load a YAML schema file from disk */
    pub fn from_file(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let mut pool = Self::new();
        pool.add_file(path)?;
        Ok(pool)
    }

    pub fn add_yaml_str(&mut self, yaml: &str) -> SchemaResult<()> {
        let schema: SchemaFile = serde_yml::from_str(yaml)?;
        self.add_schema(&schema)
    }

    pub fn add_file(&mut self, path: impl AsRef<Path>) -> SchemaResult<()> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("loading message schema from {}", path.display());
        self.add_yaml_str(&contents)
    }

    /* Register every message of a schema. Either all messages are added or none are. */
    pub fn add_schema(&mut self, schema: &SchemaFile) -> SchemaResult<()> {
        let package = schema.package.as_deref();
        let mut staged = BTreeMap::new();
        for def in &schema.messages {
            let descriptor = MessageDescriptor::from_def(package, def)?;
            let full_name = descriptor.full_name().to_string();
            if self.messages.contains_key(&full_name) || staged.contains_key(&full_name) {
                return Err(SchemaError::DuplicateMessage { message: full_name });
            }
            staged.insert(full_name, Arc::new(descriptor));
        }

        tracing::debug!(
            package = package.unwrap_or(""),
            count = staged.len(),
            "registered message descriptors"
        );
        self.messages.extend(staged);
        Ok(())
    }

    pub fn get(&self, full_name: &str) -> Option<Arc<MessageDescriptor>> {
        self.messages.get(full_name).cloned()
    }

    /* Like get, but reports a missing message as an error */
    pub fn require(&self, full_name: &str) -> SchemaResult<Arc<MessageDescriptor>> {
        self.get(full_name).ok_or_else(|| SchemaError::UnknownMessage {
            message: full_name.to_string(),
        })
    }

    pub fn message_names(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
