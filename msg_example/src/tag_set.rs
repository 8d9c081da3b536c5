use msg_runtime::formatter::TextWriter;
use msg_runtime::{Builder, Message, MessageResult, RepeatedField};
use std::fmt;

/// A bag of free-form string tags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSet {
    tags: RepeatedField<String>,
}

impl TagSet {
    pub const FULL_NAME: &'static str = "example.TagSet";

    pub fn builder() -> TagSetBuilder {
        TagSetBuilder::new()
    }

    /// Tag at `index`, in the order the tags were added.
    pub fn tags(&self, index: usize) -> MessageResult<&str> {
        self.tags.at("tags", index).map(String::as_str)
    }

    pub fn tags_count(&self) -> usize {
        self.tags.len()
    }

    pub fn tags_list(&self) -> &[String] {
        self.tags.as_slice()
    }

    pub fn to_builder(&self) -> TagSetBuilder {
        TagSetBuilder {
            tags: self.tags.to_vec(),
        }
    }
}

impl Message for TagSet {
    type Builder = TagSetBuilder;

    fn full_name(&self) -> &str {
        Self::FULL_NAME
    }

    fn to_builder(&self) -> TagSetBuilder {
        TagSet::to_builder(self)
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TextWriter::new(f).repeated("tags", self.tags.as_slice())
    }
}

/// Builder for [`TagSet`].
///
/// `build` consumes the builder, so it cannot be touched afterwards:
///
/// ```compile_fail
/// use msg_example::TagSet;
///
/// let builder = TagSet::builder().add_tags("a");
/// let _first = builder.build();
/// let _second = builder.add_tags("b");
/// ```
#[derive(Debug, Default)]
pub struct TagSetBuilder {
    tags: Vec<String>,
}

impl TagSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_tags(mut self, value: impl Into<String>) -> Self {
        self.tags.push(value.into());
        self
    }

    pub fn add_all_tags<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.tags.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn clear_tags(mut self) -> Self {
        self.tags.clear();
        self
    }

    pub fn build(self) -> TagSet {
        TagSet {
            tags: RepeatedField::from(self.tags),
        }
    }
}

impl Builder for TagSetBuilder {
    type Output = TagSet;

    fn build(self) -> MessageResult<TagSet> {
        Ok(TagSetBuilder::build(self))
    }
}
