use msg_runtime::formatter::TextWriter;
use msg_runtime::{Builder, Message, MessageError, MessageResult, RepeatedField};
use std::fmt;

/// Mixed singular and repeated fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    id: u64,
    title: Option<String>,
    tags: RepeatedField<String>,
    scores: RepeatedField<i64>,
}

impl Document {
    pub const FULL_NAME: &'static str = "example.Document";

    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Title, or the empty string when none was set.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn has_title(&self) -> bool {
        self.title.is_some()
    }

    pub fn tags(&self, index: usize) -> MessageResult<&str> {
        self.tags.at("tags", index).map(String::as_str)
    }

    pub fn tags_count(&self) -> usize {
        self.tags.len()
    }

    pub fn tags_list(&self) -> &[String] {
        self.tags.as_slice()
    }

    pub fn scores(&self, index: usize) -> MessageResult<i64> {
        self.scores.at("scores", index).copied()
    }

    pub fn scores_count(&self) -> usize {
        self.scores.len()
    }

    pub fn scores_list(&self) -> &[i64] {
        self.scores.as_slice()
    }

    pub fn to_builder(&self) -> DocumentBuilder {
        DocumentBuilder {
            id: Some(self.id),
            title: self.title.clone(),
            tags: self.tags.to_vec(),
            scores: self.scores.to_vec(),
        }
    }
}

impl Message for Document {
    type Builder = DocumentBuilder;

    fn full_name(&self) -> &str {
        Self::FULL_NAME
    }

    fn to_builder(&self) -> DocumentBuilder {
        Document::to_builder(self)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = TextWriter::new(f);
        writer.singular("id", Some(&self.id))?;
        writer.singular("title", self.title.as_ref())?;
        writer.repeated("tags", self.tags.as_slice())?;
        writer.repeated("scores", self.scores.as_slice())
    }
}

#[derive(Debug, Default)]
pub struct DocumentBuilder {
    id: Option<u64>,
    title: Option<String>,
    tags: Vec<String>,
    scores: Vec<i64>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_id(mut self, value: u64) -> Self {
        self.id = Some(value);
        self
    }

    pub fn set_title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    pub fn clear_title(mut self) -> Self {
        self.title = None;
        self
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

    pub fn add_scores(mut self, value: i64) -> Self {
        self.scores.push(value);
        self
    }

    pub fn add_all_scores(mut self, values: impl IntoIterator<Item = i64>) -> Self {
        self.scores.extend(values);
        self
    }

    /// Fails with [`MessageError::MissingRequiredField`] when `id` was never set.
    pub fn build(self) -> MessageResult<Document> {
        let id = self
            .id
            .ok_or_else(|| MessageError::missing_required(Document::FULL_NAME, "id"))?;

        Ok(Document {
            id,
            title: self.title,
            tags: RepeatedField::from(self.tags),
            scores: RepeatedField::from(self.scores),
        })
    }
}

impl Builder for DocumentBuilder {
    type Output = Document;

    fn build(self) -> MessageResult<Document> {
        DocumentBuilder::build(self)
    }
}
