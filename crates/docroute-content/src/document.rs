//! Parsed Markdown document

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::markdown::{MarkdownOptions, render_html};

/// A Markdown file split into metadata and content.
///
/// `html` stays empty until the document is rendered, either at load time
/// (eager pre-parse) or on the first call to [`Document::render`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Absolute path the document was loaded from
    pub path: PathBuf,
    /// Front matter as a JSON object
    pub meta: Map<String, Value>,
    /// Markdown body with the front matter removed
    pub raw_content: String,
    /// Rendered body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, meta: Map<String, Value>, raw_content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            meta,
            raw_content: raw_content.into(),
            html: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// HTML if the document has been rendered.
    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    pub fn is_rendered(&self) -> bool {
        self.html.is_some()
    }

    /// Render the body with `options` unless already rendered.
    pub fn render(&mut self, options: &MarkdownOptions) -> &str {
        self.html
            .get_or_insert_with(|| render_html(&self.raw_content, options))
    }

    /// Replace the Markdown body. Any rendered HTML is discarded.
    pub fn set_raw_content(&mut self, content: impl Into<String>) {
        self.raw_content = content.into();
        self.html = None;
    }

    pub fn set_html(&mut self, html: impl Into<String>) {
        self.html = Some(html.into());
    }

    /// Title from the `title` key, else the first level-one ATX heading.
    pub fn title(&self) -> Option<&str> {
        if let Some(title) = self.meta_str("title") {
            return Some(title);
        }
        self.raw_content.lines().find_map(|line| {
            line.strip_prefix("# ")
                .map(str::trim)
                .map(|heading| heading.trim_end_matches('#').trim_end())
                .filter(|heading| !heading.is_empty())
        })
    }

    /// String value of a metadata key; non-string values yield `None`.
    pub fn meta_str(&self, key: &str) -> Option<&str> {
        self.meta.get(key).and_then(Value::as_str)
    }
}
