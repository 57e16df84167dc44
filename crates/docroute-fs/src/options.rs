//! Naming-convention options for URL resolution

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FILE_EXTENSION, DEFAULT_PAGE_NAME};

/// Options controlling how URL paths map onto file names.
///
/// Every field is optional in config files; missing keys take the defaults
/// (`index`, `md`, `false`).
///
/// ```toml
/// [resolver]
/// default-page-name = "index"
/// file-extension = "md"
/// use-extension-in-url = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ResolverOptions {
    /// Page name used for `/` and for paths with a trailing slash.
    pub default_page_name: String,
    /// File extension, with or without the leading dot.
    pub file_extension: String,
    /// Allow URLs that already carry the extension to address files directly.
    pub use_extension_in_url: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            default_page_name: DEFAULT_PAGE_NAME.to_string(),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            use_extension_in_url: false,
        }
    }
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_page_name(mut self, name: impl Into<String>) -> Self {
        self.default_page_name = name.into();
        self
    }

    pub fn with_file_extension(mut self, extension: impl Into<String>) -> Self {
        self.file_extension = extension.into();
        self
    }

    pub fn with_extension_in_url(mut self, enabled: bool) -> Self {
        self.use_extension_in_url = enabled;
        self
    }

    /// The configured extension with a guaranteed leading dot.
    ///
    /// An empty extension stays empty, meaning files are addressed by
    /// their bare name.
    pub fn normalized_extension(&self) -> String {
        let ext = self.file_extension.as_str();
        if ext.is_empty() || ext.starts_with('.') {
            ext.to_string()
        } else {
            format!(".{ext}")
        }
    }

    /// File name of the default page, extension included.
    pub fn default_page_file(&self) -> String {
        format!("{}{}", self.default_page_name, self.normalized_extension())
    }
}
