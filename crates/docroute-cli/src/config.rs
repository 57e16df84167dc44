//! Site configuration loaded from `docroute.toml`

use std::path::Path;

use docroute_content::{MarkdownOptions, ParseOptions, PreParseSetting};
use docroute_fs::constants::CONFIG_FILE_NAME;
use docroute_fs::{ConfigStore, ResolverOptions};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Everything configurable about a content root.
///
/// ```toml
/// pre-parse = "eager"
///
/// [resolver]
/// default-page-name = "index"
/// file-extension = "md"
/// use-extension-in-url = false
///
/// [markdown]
/// footnotes = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SiteConfig {
    pub pre_parse: PreParseSetting,
    pub resolver: ResolverOptions,
    pub markdown: MarkdownOptions,
}

impl SiteConfig {
    /// Load from `explicit` if given, else from `docroute.toml` under `root`.
    ///
    /// A missing default file yields defaults; a missing explicit file is an
    /// error.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let store = ConfigStore::new();
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::user(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Ok(store.load(path)?)
            }
            None => Ok(store.load_or_default(root.join(CONFIG_FILE_NAME))?),
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::new(self.markdown, self.pre_parse.into())
    }
}
