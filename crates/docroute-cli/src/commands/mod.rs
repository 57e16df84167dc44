//! Command implementations for docroute-cli

pub mod config;
pub mod resolve;
pub mod show;
pub mod write;

use std::path::{Path, PathBuf};

use docroute_content::ContentStore;

use crate::config::SiteConfig;
use crate::error::{CliError, Result};

pub use config::run_config;
pub use resolve::run_resolve;
pub use show::run_show;
pub use write::run_write;

/// Content root and configuration shared by every command.
pub struct Context {
    pub root: PathBuf,
    pub config: SiteConfig,
}

impl Context {
    /// Canonicalize `root` and load its configuration.
    pub fn load(root: &Path, config_path: Option<&Path>) -> Result<Self> {
        let root = dunce::canonicalize(root).map_err(|_| {
            CliError::user(format!("content root not found: {}", root.display()))
        })?;
        if !root.is_dir() {
            return Err(CliError::user(format!(
                "content root is not a directory: {}",
                root.display()
            )));
        }
        let config = SiteConfig::load(&root, config_path)?;
        tracing::debug!(root = %root.display(), ?config, "Loaded site");
        Ok(Self { root, config })
    }

    pub fn store(&self) -> ContentStore {
        ContentStore::new(&self.root)
            .with_resolver_options(self.config.resolver.clone())
            .with_parse_options(self.config.parse_options())
    }

    /// `path` relative to the content root with forward slashes.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}
