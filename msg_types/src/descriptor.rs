/* Validated message descriptors.
   A descriptor is the checked, indexed form of a MessageDef. Runtimes hold
   descriptors behind an Arc and never mutate them after construction. */

use crate::errors::{SchemaError, SchemaResult};
use crate::types::{FieldDef, Label, MessageDef, ScalarType};
use std::collections::BTreeMap;

/* Single field of a message, with its position in declaration order */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub index: usize,
    pub name: String,
    pub scalar_type: ScalarType,
    pub label: Label,
    pub required: bool,
    pub max_items: Option<usize>,
}

impl FieldDescriptor {
    pub fn is_repeated(&self) -> bool {
        self.label == Label::Repeated
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDescriptor {
    full_name: String,
    name: String,
    fields: Vec<FieldDescriptor>,
    by_name: BTreeMap<String, usize>,
}

impl MessageDescriptor {
    /* Validate a message definition and build its descriptor */
    pub fn from_def(package: Option<&str>, def: &MessageDef) -> SchemaResult<Self> {
        if let Some(package) = package {
            for segment in package.split('.') {
                check_identifier("package", segment).map_err(|_| SchemaError::InvalidIdentifier {
                    what: "package",
                    name: package.to_string(),
                })?;
            }
        }
        check_identifier("message", &def.name)?;

        let full_name = match package {
            Some(package) => format!("{}.{}", package, def.name),
            None => def.name.clone(),
        };

        let mut fields = Vec::with_capacity(def.fields.len());
        let mut by_name = BTreeMap::new();
        for (index, field) in def.fields.iter().enumerate() {
            check_field(&full_name, field)?;
            if by_name.insert(field.name.clone(), index).is_some() {
                return Err(SchemaError::DuplicateField {
                    message: full_name,
                    field: field.name.clone(),
                });
            }
            fields.push(FieldDescriptor {
                index,
                name: field.name.clone(),
                scalar_type: field.scalar_type,
                label: field.label,
                required: field.required,
                max_items: field.max_items,
            });
        }

        Ok(Self {
            full_name,
            name: def.name.clone(),
            fields,
            by_name,
        })
    }

    /* Package-qualified name, e.g. "example.TagSet" */
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /* Unqualified message name */
    pub fn name(&self) -> &str {
        &self.name
    }

    /* Fields in declaration order */
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.by_name.get(name).map(|&index| &self.fields[index])
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /* Names of singular fields that must be set before build */
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| field.required)
    }
}

fn check_field(message: &str, field: &FieldDef) -> SchemaResult<()> {
    check_identifier("field", &field.name)?;
    match field.label {
        Label::Repeated if field.required => Err(SchemaError::RequiredRepeated {
            message: message.to_string(),
            field: field.name.clone(),
        }),
        Label::Singular if field.max_items.is_some() => Err(SchemaError::MaxItemsOnSingular {
            message: message.to_string(),
            field: field.name.clone(),
        }),
        _ => Ok(()),
    }
}

/* Identifiers follow [A-Za-z_][A-Za-z0-9_]* */
fn check_identifier(what: &'static str, name: &str) -> SchemaResult<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(SchemaError::InvalidIdentifier {
            what,
            name: name.to_string(),
        })
    }
}
