/* Dynamic builder - accumulates field values by name before freezing them.
   The chaining mutators take the builder by value and hand it back, so calls
   chain and a builder has exactly one writer at any time. The try_* forms
   work in place and leave the builder untouched when they fail. */

use crate::errors::{MessageError, MessageResult};
use crate::message::{DynamicMessage, FieldSlot, resolve_field};
use crate::traits::Builder;
use crate::value::Value;
use msg_types::{FieldDescriptor, Label, MessageDescriptor};
use std::sync::Arc;

#[derive(Debug)]
pub struct DynamicBuilder {
    descriptor: Arc<MessageDescriptor>,
    slots: Vec<FieldSlot>,
}

impl DynamicBuilder {
    /* Empty builder: unset singular fields, empty repeated fields */
    pub fn new(descriptor: Arc<MessageDescriptor>) -> Self {
        let slots = descriptor.fields().iter().map(FieldSlot::empty).collect();
        Self { descriptor, slots }
    }

    pub(crate) fn from_parts(descriptor: Arc<MessageDescriptor>, slots: Vec<FieldSlot>) -> Self {
        Self { descriptor, slots }
    }

    pub fn descriptor(&self) -> &Arc<MessageDescriptor> {
        &self.descriptor
    }

    /* Append one value to a repeated field */
    pub fn add_repeated(mut self, field: &str, value: impl Into<Value>) -> MessageResult<Self> {
        self.try_add_repeated(field, value)?;
        Ok(self)
    }

    /* Append several values to a repeated field, in iteration order */
    pub fn extend_repeated<I>(mut self, field: &str, values: I) -> MessageResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.try_extend_repeated(field, values)?;
        Ok(self)
    }

    /* Overwrite a singular field; the last write wins */
    pub fn set_singular(mut self, field: &str, value: impl Into<Value>) -> MessageResult<Self> {
        self.try_set_singular(field, value)?;
        Ok(self)
    }

    /* Reset a field to its empty state */
    pub fn clear_field(mut self, field: &str) -> MessageResult<Self> {
        self.try_clear_field(field)?;
        Ok(self)
    }

    /* In-place append. On error the builder is left exactly as it was. */
    pub fn try_add_repeated(
        &mut self,
        field: &str,
        value: impl Into<Value>,
    ) -> MessageResult<&mut Self> {
        self.try_extend_repeated(field, [value])
    }

    /* In-place append of several values. Every value is checked before any is
       stored, so either all of them land or none do. */
    pub fn try_extend_repeated<I>(&mut self, field: &str, values: I) -> MessageResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let descriptor = resolve_field(&self.descriptor, field, Label::Repeated)?;
        let incoming: Vec<Value> = values.into_iter().map(Into::into).collect();
        for value in &incoming {
            check_type(descriptor, value)?;
        }

        let FieldSlot::Repeated(stored) = &mut self.slots[descriptor.index] else {
            unreachable!("slot layout follows the descriptor");
        };
        if let Some(max_items) = descriptor.max_items {
            if stored.len() + incoming.len() > max_items {
                return Err(MessageError::CapacityExceeded {
                    field: field.to_string(),
                    max_items,
                });
            }
        }
        stored.extend(incoming);
        Ok(self)
    }

    pub fn try_set_singular(
        &mut self,
        field: &str,
        value: impl Into<Value>,
    ) -> MessageResult<&mut Self> {
        let value = value.into();
        let descriptor = resolve_field(&self.descriptor, field, Label::Singular)?;
        check_type(descriptor, &value)?;
        self.slots[descriptor.index] = FieldSlot::Singular(Some(value));
        Ok(self)
    }

    pub fn try_clear_field(&mut self, field: &str) -> MessageResult<&mut Self> {
        let descriptor = self
            .descriptor
            .field(field)
            .ok_or_else(|| MessageError::UnknownField {
                message: self.descriptor.full_name().to_string(),
                field: field.to_string(),
            })?;
        self.slots[descriptor.index] = FieldSlot::empty(descriptor);
        Ok(self)
    }

    /* Number of values accumulated so far for a repeated field */
    pub fn repeated_len(&self, field: &str) -> MessageResult<usize> {
        let descriptor = resolve_field(&self.descriptor, field, Label::Repeated)?;
        match &self.slots[descriptor.index] {
            FieldSlot::Repeated(values) => Ok(values.len()),
            FieldSlot::Singular(_) => unreachable!("slot layout follows the descriptor"),
        }
    }

    /* Freeze the accumulated fields. Fails without producing a message
       when a required singular field was never set. */
    pub fn build(self) -> MessageResult<DynamicMessage> {
        for field in self.descriptor.required_fields() {
            if matches!(self.slots[field.index], FieldSlot::Singular(None)) {
                tracing::debug!(
                    message = self.descriptor.full_name(),
                    field = field.name.as_str(),
                    "build rejected: required field not set"
                );
                return Err(MessageError::missing_required(
                    self.descriptor.full_name(),
                    &field.name,
                ));
            }
        }

        tracing::trace!(
            message = self.descriptor.full_name(),
            fields = self.slots.len(),
            "built dynamic message"
        );
        Ok(DynamicMessage::from_parts(self.descriptor, self.slots))
    }
}

impl Builder for DynamicBuilder {
    type Output = DynamicMessage;

    fn build(self) -> MessageResult<DynamicMessage> {
        DynamicBuilder::build(self)
    }
}

fn check_type(field: &FieldDescriptor, value: &Value) -> MessageResult<()> {
    let found = value.scalar_type();
    if found != field.scalar_type {
        return Err(MessageError::TypeMismatch {
            field: field.name.clone(),
            expected: field.scalar_type,
            found,
        });
    }
    Ok(())
}
