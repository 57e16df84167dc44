//! Writing documents back to the content root

use std::path::{Path, PathBuf};

use docroute_fs::{PathResolver, ResolverOptions, RobustnessConfig, io};
use serde::Serialize;
use serde_yaml::Value as YamlValue;

use crate::error::{Error, Result};

/// Writes metadata and Markdown to the file a URL maps to.
#[derive(Debug, Clone)]
pub struct DocumentWriter {
    root: PathBuf,
    resolver: PathResolver,
    robustness: RobustnessConfig,
}

impl DocumentWriter {
    pub fn new(root: impl Into<PathBuf>, options: ResolverOptions) -> Self {
        Self {
            root: root.into(),
            resolver: PathResolver::new(options),
            robustness: RobustnessConfig::default(),
        }
    }

    pub fn with_robustness(mut self, robustness: RobustnessConfig) -> Self {
        self.robustness = robustness;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path `url_path` is written to. No fallback search is performed,
    /// so `/my-page` always targets `my-page.md`.
    pub fn target(&self, url_path: &str) -> Result<PathBuf> {
        self.resolver
            .target_path(url_path, &self.root)?
            .ok_or_else(|| Error::InvalidTarget {
                url: url_path.to_string(),
            })
    }

    /// Write `meta` and `body` to the target of `url_path`, creating parent
    /// directories. Returns the written path.
    pub fn write<M: Serialize + ?Sized>(&self, url_path: &str, meta: &M, body: &str) -> Result<PathBuf> {
        let path = self.target(url_path)?;
        self.write_to(&path, meta, body)?;
        Ok(path)
    }

    /// Write to an explicit path, typically one returned by the resolver.
    pub fn write_to<M: Serialize + ?Sized>(&self, path: &Path, meta: &M, body: &str) -> Result<()> {
        let content = compose(meta, body)?;
        io::write_atomic(path, content.as_bytes(), self.robustness)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote document");
        Ok(())
    }
}

/// Lay out a document: front matter block, blank line, body.
///
/// Metadata that serializes to nothing (unit, `None` or an empty mapping)
/// produces the body alone. Anything other than a mapping is rejected.
pub fn compose<M: Serialize + ?Sized>(meta: &M, body: &str) -> Result<String> {
    let value = serde_yaml::to_value(meta).map_err(serialize_error)?;
    let mapping = match value {
        YamlValue::Null => return Ok(body.to_string()),
        YamlValue::Mapping(mapping) if mapping.is_empty() => return Ok(body.to_string()),
        YamlValue::Mapping(mapping) => mapping,
        _ => {
            return Err(Error::Serialize {
                message: "metadata must serialize to a mapping".into(),
            });
        }
    };

    let yaml = serde_yaml::to_string(&mapping).map_err(serialize_error)?;
    let mut out = String::with_capacity(yaml.len() + body.len() + 10);
    out.push_str("---\n");
    out.push_str(&yaml);
    if !yaml.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("---\n\n");
    out.push_str(body);
    Ok(out)
}

fn serialize_error(err: serde_yaml::Error) -> Error {
    Error::Serialize {
        message: err.to_string(),
    }
}
