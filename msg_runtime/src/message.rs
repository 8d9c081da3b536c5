/* Dynamic messages - descriptor-driven, immutable records addressed by field name */

use crate::builder::DynamicBuilder;
use crate::errors::{MessageError, MessageResult};
use crate::formatter::TextWriter;
use crate::traits::Message;
use crate::value::Value;
use msg_types::{FieldDescriptor, Label, MessageDescriptor};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/* Per-field storage, one slot per descriptor field in declaration order */
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FieldSlot {
    Singular(Option<Value>),
    Repeated(Vec<Value>),
}

impl FieldSlot {
    pub(crate) fn empty(field: &FieldDescriptor) -> Self {
        match field.label {
            Label::Singular => FieldSlot::Singular(None),
            Label::Repeated => FieldSlot::Repeated(Vec::new()),
        }
    }
}

/* Resolve a field by name and check that it has the requested label */
pub(crate) fn resolve_field<'d>(
    descriptor: &'d MessageDescriptor,
    field: &str,
    requested: Label,
) -> MessageResult<&'d FieldDescriptor> {
    let found = descriptor
        .field(field)
        .ok_or_else(|| MessageError::UnknownField {
            message: descriptor.full_name().to_string(),
            field: field.to_string(),
        })?;

    if found.label != requested {
        return Err(MessageError::LabelMismatch {
            field: field.to_string(),
            actual: found.label,
            requested,
        });
    }
    Ok(found)
}

/// Immutable record whose shape is given by a [`MessageDescriptor`].
///
/// Field storage sits behind an `Arc` and is never mutated after
/// [`DynamicBuilder::build`], so clones are cheap and a message can be read
/// from many threads at once without locking.
#[derive(Debug, Clone)]
pub struct DynamicMessage {
    descriptor: Arc<MessageDescriptor>,
    slots: Arc<Vec<FieldSlot>>,
}

impl DynamicMessage {
    pub(crate) fn from_parts(descriptor: Arc<MessageDescriptor>, slots: Vec<FieldSlot>) -> Self {
        Self {
            descriptor,
            slots: Arc::new(slots),
        }
    }

    pub fn descriptor(&self) -> &Arc<MessageDescriptor> {
        &self.descriptor
    }

    /* Element at a zero-based position of a repeated field */
    pub fn get_repeated(&self, field: &str, index: usize) -> MessageResult<&Value> {
        let values = self.repeated(field)?;
        values
            .get(index)
            .ok_or_else(|| MessageError::index_out_of_range(field, index, values.len()))
    }

    /* All elements of a repeated field, in insertion order */
    pub fn repeated(&self, field: &str) -> MessageResult<&[Value]> {
        let descriptor = resolve_field(&self.descriptor, field, Label::Repeated)?;
        match &self.slots[descriptor.index] {
            FieldSlot::Repeated(values) => Ok(values.as_slice()),
            FieldSlot::Singular(_) => unreachable!("slot layout follows the descriptor"),
        }
    }

    pub fn repeated_count(&self, field: &str) -> MessageResult<usize> {
        self.repeated(field).map(<[Value]>::len)
    }

    /* Current value of a singular field, or the type default when unset */
    pub fn get_singular(&self, field: &str) -> MessageResult<Cow<'_, Value>> {
        let descriptor = resolve_field(&self.descriptor, field, Label::Singular)?;
        match &self.slots[descriptor.index] {
            FieldSlot::Singular(Some(value)) => Ok(Cow::Borrowed(value)),
            FieldSlot::Singular(None) => Ok(Cow::Owned(Value::default_for(descriptor.scalar_type))),
            FieldSlot::Repeated(_) => unreachable!("slot layout follows the descriptor"),
        }
    }

    /* Whether a field carries data: singular set explicitly, repeated non-empty */
    pub fn has_field(&self, field: &str) -> MessageResult<bool> {
        let descriptor = self
            .descriptor
            .field(field)
            .ok_or_else(|| MessageError::UnknownField {
                message: self.descriptor.full_name().to_string(),
                field: field.to_string(),
            })?;
        Ok(match &self.slots[descriptor.index] {
            FieldSlot::Singular(value) => value.is_some(),
            FieldSlot::Repeated(values) => !values.is_empty(),
        })
    }

    /* New builder seeded with a copy of this message's fields */
    pub fn to_builder(&self) -> DynamicBuilder {
        DynamicBuilder::from_parts(Arc::clone(&self.descriptor), self.slots.as_ref().clone())
    }
}

impl PartialEq for DynamicMessage {
    fn eq(&self, other: &Self) -> bool {
        let same_shape = Arc::ptr_eq(&self.descriptor, &other.descriptor)
            || *self.descriptor == *other.descriptor;
        same_shape && (Arc::ptr_eq(&self.slots, &other.slots) || self.slots == other.slots)
    }
}

impl Message for DynamicMessage {
    type Builder = DynamicBuilder;

    fn full_name(&self) -> &str {
        self.descriptor.full_name()
    }

    fn to_builder(&self) -> DynamicBuilder {
        DynamicMessage::to_builder(self)
    }
}

impl fmt::Display for DynamicMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = TextWriter::new(f);
        for (field, slot) in self.descriptor.fields().iter().zip(self.slots.iter()) {
            match slot {
                FieldSlot::Singular(value) => writer.singular(&field.name, value.as_ref())?,
                FieldSlot::Repeated(values) => writer.repeated(&field.name, values.as_slice())?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msg_types::{FieldDef, MessageDef, ScalarType};

    fn document() -> Arc<MessageDescriptor> {
        let def = MessageDef::new(
            "Document",
            vec![
                FieldDef::singular("title", ScalarType::String),
                FieldDef::repeated("tags", ScalarType::String),
            ],
        );
        Arc::new(MessageDescriptor::from_def(Some("example"), &def).unwrap())
    }

    #[test]
    fn unset_singular_reads_as_default() {
        let message = DynamicBuilder::new(document()).build().unwrap();
        assert_eq!(
            message.get_singular("title").unwrap().into_owned(),
            Value::String(String::new())
        );
        assert!(!message.has_field("title").unwrap());
    }

    #[test]
    fn label_mismatch_is_reported_on_read() {
        let message = DynamicBuilder::new(document()).build().unwrap();
        assert_eq!(
            message.repeated_count("title").unwrap_err(),
            MessageError::LabelMismatch {
                field: "title".to_string(),
                actual: Label::Singular,
                requested: Label::Repeated,
            }
        );
        assert!(matches!(
            message.get_singular("tags"),
            Err(MessageError::LabelMismatch { .. })
        ));
    }

    #[test]
    fn equality_ignores_storage_identity() {
        let a = DynamicBuilder::new(document())
            .add_repeated("tags", "x")
            .unwrap()
            .build()
            .unwrap();
        let b = DynamicBuilder::new(document())
            .add_repeated("tags", "x")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn same_name_with_different_fields_is_not_equal() {
        let with_title = MessageDef::new("Sample", vec![FieldDef::singular("title", ScalarType::String)]);
        let with_name = MessageDef::new("Sample", vec![FieldDef::singular("name", ScalarType::String)]);
        let a = DynamicBuilder::new(Arc::new(
            MessageDescriptor::from_def(Some("test"), &with_title).unwrap(),
        ))
        .build()
        .unwrap();
        let b = DynamicBuilder::new(Arc::new(
            MessageDescriptor::from_def(Some("test"), &with_name).unwrap(),
        ))
        .build()
        .unwrap();

        assert_eq!(a.descriptor().full_name(), b.descriptor().full_name());
        assert_ne!(a, b);
    }

    #[test]
    fn separately_loaded_identical_descriptors_compare_equal() {
        let a = DynamicBuilder::new(document())
            .set_singular("title", "t")
            .unwrap()
            .build()
            .unwrap();
        let b = DynamicBuilder::new(document())
            .set_singular("title", "t")
            .unwrap()
            .build()
            .unwrap();
        assert!(!Arc::ptr_eq(a.descriptor(), b.descriptor()));
        assert_eq!(a, b);
    }

    #[test]
    fn display_lists_set_fields_in_declaration_order() {
        let message = DynamicBuilder::new(document())
            .add_repeated("tags", "a")
            .unwrap()
            .set_singular("title", "Notes")
            .unwrap()
            .add_repeated("tags", "b")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            message.to_string(),
            "title: \"Notes\"\ntags: \"a\"\ntags: \"b\"\n"
        );
    }
}
