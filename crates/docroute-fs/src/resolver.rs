//! URL path to Markdown file resolution
//!
//! Maps a URL path such as `/guides/getting-started` onto a file below a
//! content root. Folder and file names may contain spaces while URLs use
//! dashes, so resolution tries progressively looser interpretations:
//!
//! 1. `/` alone maps to the default page in the root, with no fallback.
//! 2. The path is percent-decoded and a trailing slash expands to the
//!    default page name.
//! 3. With `use_extension_in_url`, a path already ending in the extension
//!    is checked literally and nothing else is tried.
//! 4. `<root>/<path><ext>` verbatim.
//! 5. The whole path with every `-` turned into a space.
//! 6. A segment-by-segment walk preferring the literal name of each
//!    segment over its de-dashed form. A segment matching neither form
//!    ends the walk.
//!
//! Literal names always win over de-dashed ones. Nothing is cached: every
//! call checks the filesystem afresh.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use percent_encoding::percent_decode_str;

use crate::constants::SLUG_SEPARATOR;
use crate::{Error, ResolverOptions, Result};

/// Longest single path component most filesystems accept.
const MAX_SEGMENT_LEN: usize = 255;

/// Which rule produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// `/` mapped to the default page in the root
    Root,
    /// URL already carried the extension and named the file directly
    Literal,
    /// `<root>/<path><ext>` existed as written
    Direct,
    /// Whole path matched after replacing dashes with spaces
    Slug,
    /// Matched by walking segments one at a time
    Segments,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Root => "root",
            Self::Literal => "literal",
            Self::Direct => "direct",
            Self::Slug => "slug",
            Self::Segments => "segments",
        };
        f.write_str(name)
    }
}

/// A successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Absolute path of the matched file
    pub path: PathBuf,
    /// Rule that matched
    pub kind: MatchKind,
}

/// A URL path after validation and decoding.
#[derive(Debug, PartialEq, Eq)]
enum Request {
    Root,
    Page(String),
}

/// Resolves URL paths against a content root.
///
/// Holds only immutable options, so one resolver can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct PathResolver {
    options: ResolverOptions,
    extension: String,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new(ResolverOptions::default())
    }
}

impl PathResolver {
    pub fn new(options: ResolverOptions) -> Self {
        let extension = options.normalized_extension();
        Self { options, extension }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Normalized extension, leading dot included.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Resolve `url_path` to an existing file below `root`.
    ///
    /// Returns `Ok(None)` when no file matches, including for malformed
    /// input. Errors are reserved for filesystem faults such as a parent
    /// directory that cannot be searched.
    pub fn resolve(&self, url_path: &str, root: impl AsRef<Path>) -> Result<Option<PathBuf>> {
        Ok(self.resolve_match(url_path, root)?.map(|found| found.path))
    }

    /// Like [`resolve`](Self::resolve), also reporting which rule matched.
    pub fn resolve_match(
        &self,
        url_path: &str,
        root: impl AsRef<Path>,
    ) -> Result<Option<ResolvedPath>> {
        let root = absolute_root(root.as_ref())?;
        let outcome = self.resolve_in(url_path, &root)?;
        match &outcome {
            Some(found) => {
                tracing::debug!(url = url_path, path = %found.path.display(), kind = %found.kind, "Resolved URL");
            }
            None => tracing::debug!(url = url_path, "No matching document"),
        }
        Ok(outcome)
    }

    /// Compute where a document for `url_path` lives, without searching.
    ///
    /// Applies the same decoding, default-page and extension rules as
    /// [`resolve`](Self::resolve) but performs no existence checks and no
    /// slug fallback. Used to pick the file a new document is written to.
    pub fn target_path(&self, url_path: &str, root: impl AsRef<Path>) -> Result<Option<PathBuf>> {
        let root = absolute_root(root.as_ref())?;
        let target = match self.prepare(url_path) {
            None => None,
            Some(Request::Root) => Some(root.join(self.options.default_page_file())),
            Some(Request::Page(path)) => {
                if self.addresses_file_directly(&path) {
                    confine(&root, &path)
                } else {
                    confine(&root, &format!("{}{}", path, self.extension))
                }
            }
        };
        Ok(target)
    }

    fn resolve_in(&self, url_path: &str, root: &Path) -> Result<Option<ResolvedPath>> {
        let path = match self.prepare(url_path) {
            None => return Ok(None),
            Some(Request::Root) => {
                let index = root.join(self.options.default_page_file());
                return Ok(is_file(&index)?.then_some(ResolvedPath {
                    path: index,
                    kind: MatchKind::Root,
                }));
            }
            Some(Request::Page(path)) => path,
        };

        if self.addresses_file_directly(&path) {
            return self.check(root, &path, MatchKind::Literal);
        }

        let direct = format!("{}{}", path, self.extension);
        if let Some(found) = self.check(root, &direct, MatchKind::Direct)? {
            return Ok(Some(found));
        }

        if path.contains(SLUG_SEPARATOR) {
            let spaced = format!("{}{}", unslug(&path), self.extension);
            if let Some(found) = self.check(root, &spaced, MatchKind::Slug)? {
                return Ok(Some(found));
            }
        }

        self.walk_segments(root, &path)
    }

    /// Validate, strip and decode a URL path.
    fn prepare(&self, url_path: &str) -> Option<Request> {
        let raw = url_path.split(['?', '#']).next().unwrap_or_default();
        if !raw.starts_with('/') {
            return None;
        }
        if raw == "/" {
            return Some(Request::Root);
        }

        let decoded = percent_decode_str(raw).decode_utf8().ok()?;
        let mut path = decoded.strip_prefix('/').unwrap_or(&decoded).to_string();
        if path.ends_with('/') || path.is_empty() {
            path.push_str(&self.options.default_page_name);
        }
        Some(Request::Page(path))
    }

    fn addresses_file_directly(&self, path: &str) -> bool {
        self.options.use_extension_in_url
            && !self.extension.is_empty()
            && path.ends_with(&self.extension)
    }

    fn check(&self, root: &Path, relative: &str, kind: MatchKind) -> Result<Option<ResolvedPath>> {
        let Some(candidate) = confine(root, relative) else {
            return Ok(None);
        };
        Ok(is_file(&candidate)?.then_some(ResolvedPath {
            path: candidate,
            kind,
        }))
    }

    /// Resolve one segment at a time, literal name first.
    fn walk_segments(&self, root: &Path, path: &str) -> Result<Option<ResolvedPath>> {
        let Some(segments) = segments(path) else {
            return Ok(None);
        };
        let last = segments.len() - 1;
        let mut current = root.to_path_buf();

        for (i, segment) in segments.iter().enumerate() {
            let is_last = i == last;
            let name = if is_last {
                format!("{}{}", segment, self.extension)
            } else {
                (*segment).to_string()
            };
            if name.len() > MAX_SEGMENT_LEN {
                return Ok(None);
            }

            let literal = current.join(&name);
            if entry_has_kind(&literal, is_last)? {
                current = literal;
                continue;
            }

            let spaced_name = unslug(&name);
            if spaced_name != name {
                let spaced = current.join(&spaced_name);
                if entry_has_kind(&spaced, is_last)? {
                    current = spaced;
                    continue;
                }
            }

            tracing::trace!(segment = %segment, "Segment matched neither literally nor de-dashed");
            return Ok(None);
        }

        let accepted = current
            .file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(&self.extension))
            && is_file(&current)?;

        Ok(accepted.then_some(ResolvedPath {
            path: current,
            kind: MatchKind::Segments,
        }))
    }
}

/// Resolve `url_path` below `root` using `options`.
///
/// Convenience wrapper around [`PathResolver::resolve`].
pub fn resolve(
    url_path: &str,
    root: impl AsRef<Path>,
    options: &ResolverOptions,
) -> Result<Option<PathBuf>> {
    PathResolver::new(options.clone()).resolve(url_path, root)
}

/// Compute the write target for `url_path` below `root` using `options`.
pub fn target_path(
    url_path: &str,
    root: impl AsRef<Path>,
    options: &ResolverOptions,
) -> Result<Option<PathBuf>> {
    PathResolver::new(options.clone()).target_path(url_path, root)
}

fn unslug(path: &str) -> String {
    path.replace(SLUG_SEPARATOR, " ")
}

/// Make `root` absolute and lexically drop `.` and `..` components.
fn absolute_root(root: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(root).map_err(|e| Error::io(root, e))?;
    let mut cleaned = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    Ok(cleaned)
}

/// Split a relative URL path into components that are safe to join.
///
/// Empty and `.` segments are skipped. Returns `None` if any segment could
/// climb out of the root or cannot be a file name.
fn segments(path: &str) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            s if s.len() > MAX_SEGMENT_LEN => return None,
            s if s.contains('\0') => return None,
            s if cfg!(windows) && s.contains(['\\', ':']) => return None,
            s => parts.push(s),
        }
    }
    (!parts.is_empty()).then_some(parts)
}

/// Join a relative URL path onto `root`, refusing anything that escapes it.
fn confine(root: &Path, relative: &str) -> Option<PathBuf> {
    let parts = segments(relative)?;
    let mut path = root.to_path_buf();
    for part in parts {
        path.push(part);
    }
    Some(path)
}

/// Look up metadata, treating every flavour of "not there" as absence.
fn entry_metadata(path: &Path) -> Result<Option<fs::Metadata>> {
    match fs::metadata(path) {
        Ok(meta) => {
            tracing::trace!(path = %path.display(), "Candidate hit");
            Ok(Some(meta))
        }
        Err(e) if is_absence(e.kind()) => {
            tracing::trace!(path = %path.display(), "Candidate miss");
            Ok(None)
        }
        Err(e) => Err(Error::io(path, e)),
    }
}

fn is_absence(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::NotFound | ErrorKind::NotADirectory | ErrorKind::InvalidInput
    )
}

fn is_file(path: &Path) -> Result<bool> {
    Ok(entry_metadata(path)?.is_some_and(|meta| meta.is_file()))
}

/// Files for the final segment, directories for everything before it.
fn entry_has_kind(path: &Path, want_file: bool) -> Result<bool> {
    Ok(entry_metadata(path)?.is_some_and(|meta| {
        if want_file {
            meta.is_file()
        } else {
            meta.is_dir()
        }
    }))
}
