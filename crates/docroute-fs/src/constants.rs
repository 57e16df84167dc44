//! Naming conventions shared by the resolver and the document writer.

/// Page looked up when a URL names a directory (`/` or a trailing slash).
pub const DEFAULT_PAGE_NAME: &str = "index";

/// Extension appended to URL paths, without the leading dot.
pub const DEFAULT_FILE_EXTENSION: &str = "md";

/// Character URLs use in place of a space in file and folder names.
pub const SLUG_SEPARATOR: char = '-';

/// Default config file name looked up in a content root.
pub const CONFIG_FILE_NAME: &str = "docroute.toml";
