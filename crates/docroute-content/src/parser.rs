//! Loading documents from disk

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use docroute_fs::io;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{Error, Result};
use crate::front_matter;
use crate::markdown::MarkdownOptions;

/// Transform applied to a freshly loaded document.
pub type PreParseFn = dyn Fn(&mut Document, &MarkdownOptions) -> Result<()> + Send + Sync;

/// What happens to the Markdown body once a document is loaded.
#[derive(Clone, Default)]
pub enum PreParseMode {
    /// Leave `html` empty; render on demand with [`Document::render`]
    #[default]
    Default,
    /// Render HTML while loading
    Eager,
    /// Hand the document to a caller-supplied transform
    Custom(Arc<PreParseFn>),
}

impl PreParseMode {
    pub fn custom<F>(transform: F) -> Self
    where
        F: Fn(&mut Document, &MarkdownOptions) -> Result<()> + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(transform))
    }
}

impl fmt::Debug for PreParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Eager => f.write_str("Eager"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Serializable subset of [`PreParseMode`] for configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreParseSetting {
    #[default]
    Default,
    Eager,
}

impl From<PreParseSetting> for PreParseMode {
    fn from(setting: PreParseSetting) -> Self {
        match setting {
            PreParseSetting::Default => Self::Default,
            PreParseSetting::Eager => Self::Eager,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub markdown: MarkdownOptions,
    pub pre_parse: PreParseMode,
}

impl ParseOptions {
    pub fn new(markdown: MarkdownOptions, pre_parse: PreParseMode) -> Self {
        Self {
            markdown,
            pre_parse,
        }
    }

    pub fn with_markdown(mut self, markdown: MarkdownOptions) -> Self {
        self.markdown = markdown;
        self
    }

    pub fn with_pre_parse(mut self, pre_parse: impl Into<PreParseMode>) -> Self {
        self.pre_parse = pre_parse.into();
        self
    }
}

/// Reads Markdown files into [`Document`]s.
#[derive(Debug, Clone, Default)]
pub struct DocumentParser {
    options: ParseOptions,
}

impl DocumentParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Load the file at `path`, usually a path returned by the resolver.
    ///
    /// Read failures are reported as [`Error::Read`], so a file that
    /// disappeared after resolution is distinguishable from a URL that
    /// never matched.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Document> {
        let path = path.as_ref();
        let source = io::read_text(path).map_err(Error::from_read)?;
        self.parse_str(path, &source)
    }

    /// Build a document from `source` as if it had been read from `path`.
    pub fn parse_str(&self, path: impl AsRef<Path>, source: &str) -> Result<Document> {
        let path = path.as_ref();
        let parts = front_matter::split(source);
        let meta = match parts.yaml {
            Some(yaml) => front_matter::parse_meta(yaml).map_err(|message| Error::FrontMatter {
                path: path.to_path_buf(),
                message,
            })?,
            None => Default::default(),
        };

        let mut document = Document::new(path, meta, parts.body);
        match &self.options.pre_parse {
            PreParseMode::Default => {}
            PreParseMode::Eager => {
                document.render(&self.options.markdown);
            }
            PreParseMode::Custom(transform) => transform(&mut document, &self.options.markdown)?,
        }

        tracing::debug!(
            path = %path.display(),
            keys = document.meta.len(),
            rendered = document.is_rendered(),
            "Parsed document"
        );
        Ok(document)
    }
}
