use serde_derive::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ScalarType {
    String,
    Bool,
    I32,
    I64,
    U32,
    U64,
    F32,
    F64,
    Bytes,
}

impl ScalarType {
    /* Schema spelling of the type, as written in YAML */
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Bool => "bool",
            ScalarType::I32 => "i32",
            ScalarType::I64 => "i64",
            ScalarType::U32 => "u32",
            ScalarType::U64 => "u64",
            ScalarType::F32 => "f32",
            ScalarType::F64 => "f64",
            ScalarType::Bytes => "bytes",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Label {
    #[default]
    Singular,
    Repeated,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Singular => f.write_str("singular"),
            Label::Repeated => f.write_str("repeated"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub scalar_type: ScalarType,
    #[serde(default)]
    pub label: Label,
    #[serde(default)]
    pub required: bool,
    /// Upper bound on the number of elements a repeated field may hold.
    #[serde(default)]
    pub max_items: Option<usize>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl FieldDef {
    pub fn singular(name: impl Into<String>, scalar_type: ScalarType) -> Self {
        Self {
            name: name.into(),
            scalar_type,
            label: Label::Singular,
            required: false,
            max_items: None,
            comment: None,
        }
    }

    pub fn repeated(name: impl Into<String>, scalar_type: ScalarType) -> Self {
        Self {
            label: Label::Repeated,
            ..Self::singular(name, scalar_type)
        }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct MessageDef {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl MessageDef {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields,
            comment: None,
        }
    }
}

/* Root of a schema YAML document */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct SchemaFile {
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub messages: Vec<MessageDef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_defaults_apply_when_keys_are_omitted() {
        let yaml = "name: tags\ntype: string\n";
        let field: FieldDef = serde_yml::from_str(yaml).expect("parse field");
        assert_eq!(field, FieldDef::singular("tags", ScalarType::String));
    }

    #[test]
    fn kebab_case_keys_are_accepted() {
        let yaml = "name: tags\ntype: string\nlabel: repeated\nmax-items: 4\n";
        let field: FieldDef = serde_yml::from_str(yaml).expect("parse field");
        assert_eq!(field.label, Label::Repeated);
        assert_eq!(field.max_items, Some(4));
    }

    #[test]
    fn unknown_scalar_type_is_rejected() {
        let yaml = "name: tags\ntype: varchar\n";
        assert!(serde_yml::from_str::<FieldDef>(yaml).is_err());
    }
}
