/* Descriptor pool loading tests, covering YAML parsing and file loading */

use msg_types::{DescriptorPool, Label, ScalarType, SchemaError};
use std::io::Write;

const EXAMPLE_SCHEMA: &str = r#"
package: example
messages:
  - name: TagSet
    fields:
      - name: tags
        type: string
        label: repeated
  - name: Document
    comment: Mixed singular and repeated fields
    fields:
      - name: id
        type: u64
        required: true
      - name: title
        type: string
      - name: tags
        type: string
        label: repeated
        max-items: 16
"#;

#[test]
fn yaml_schema_registers_all_messages() {
    let pool = DescriptorPool::from_yaml_str(EXAMPLE_SCHEMA).expect("schema loads");

    assert_eq!(pool.len(), 2);
    let names: Vec<_> = pool.message_names().collect();
    assert_eq!(names, ["example.Document", "example.TagSet"]);

    let tag_set = pool.require("example.TagSet").expect("TagSet registered");
    let tags = tag_set.field("tags").expect("tags field");
    assert_eq!(tags.scalar_type, ScalarType::String);
    assert_eq!(tags.label, Label::Repeated);
    assert!(!tags.required);

    let document = pool.require("example.Document").expect("Document registered");
    assert!(document.field("id").unwrap().required);
    assert_eq!(document.field("tags").unwrap().max_items, Some(16));
}

#[test]
fn unknown_message_is_reported() {
    let pool = DescriptorPool::from_yaml_str(EXAMPLE_SCHEMA).unwrap();
    assert!(pool.get("example.Missing").is_none());

    let err = pool.require("example.Missing").unwrap_err();
    assert!(matches!(err, SchemaError::UnknownMessage { ref message } if message == "example.Missing"));
}

#[test]
fn duplicate_message_leaves_pool_unchanged() {
    let mut pool = DescriptorPool::from_yaml_str(EXAMPLE_SCHEMA).unwrap();

    let again = r#"
package: example
messages:
  - name: Extra
  - name: TagSet
"#;
    let err = pool.add_yaml_str(again).unwrap_err();
    assert!(matches!(err, SchemaError::DuplicateMessage { ref message } if message == "example.TagSet"));
    assert!(pool.get("example.Extra").is_none());
    assert_eq!(pool.len(), 2);
}

#[test]
fn packages_keep_same_named_messages_apart() {
    let mut pool = DescriptorPool::from_yaml_str(EXAMPLE_SCHEMA).unwrap();
    pool.add_yaml_str("package: example.foo\nmessages:\n  - name: TagSet\n")
        .expect("distinct package");

    assert!(pool.get("example.TagSet").is_some());
    assert!(pool.get("example.foo.TagSet").is_some());
}

#[test]
fn malformed_yaml_is_a_yaml_error() {
    let err = DescriptorPool::from_yaml_str("messages: [name: {").unwrap_err();
    assert!(matches!(err, SchemaError::Yaml(_)));
}

#[test]
fn schema_file_loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(EXAMPLE_SCHEMA.as_bytes()).expect("write schema");

    let pool = DescriptorPool::from_file(file.path()).expect("file loads");
    assert!(pool.get("example.Document").is_some());
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.msg.yaml");

    let err = DescriptorPool::from_file(&path).unwrap_err();
    match err {
        SchemaError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}
