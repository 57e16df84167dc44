//! Filesystem layer for docroute
//!
//! Resolves URL paths to Markdown files under a content root and provides
//! safe I/O and config loading for the crates built on top of it.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod options;
pub mod path;
pub mod resolver;

pub use config::{ConfigFormat, ConfigStore};
pub use error::{Error, Result};
pub use io::RobustnessConfig;
pub use options::ResolverOptions;
pub use path::NormalizedPath;
pub use resolver::{MatchKind, PathResolver, ResolvedPath, resolve, target_path};
