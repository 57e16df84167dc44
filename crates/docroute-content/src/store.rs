//! Resolve-then-parse facade over a content root

use std::path::{Path, PathBuf};

use docroute_fs::{PathResolver, ResolverOptions};
use serde::Serialize;

use crate::document::Document;
use crate::error::Result;
use crate::parser::{DocumentParser, ParseOptions};
use crate::writer::DocumentWriter;

/// Reads and writes documents addressed by URL paths.
///
/// `get` returns `Ok(None)` for anything the resolver cannot match. Callers
/// should report that as a generic "not found" and keep filesystem paths
/// out of the message.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
    resolver: PathResolver,
    parser: DocumentParser,
    writer: DocumentWriter,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            resolver: PathResolver::default(),
            parser: DocumentParser::default(),
            writer: DocumentWriter::new(root.clone(), ResolverOptions::default()),
            root,
        }
    }

    pub fn with_resolver_options(mut self, options: ResolverOptions) -> Self {
        self.writer = DocumentWriter::new(self.root.clone(), options.clone());
        self.resolver = PathResolver::new(options);
        self
    }

    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parser = DocumentParser::new(options);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn parse_options(&self) -> &ParseOptions {
        self.parser.options()
    }

    /// Path of the file `url_path` resolves to, if any.
    pub fn resolve(&self, url_path: &str) -> Result<Option<PathBuf>> {
        Ok(self.resolver.resolve(url_path, &self.root)?)
    }

    /// Resolve `url_path` and load the matching document.
    pub fn get(&self, url_path: &str) -> Result<Option<Document>> {
        match self.resolve(url_path)? {
            Some(path) => self.parser.parse_file(path).map(Some),
            None => Ok(None),
        }
    }

    /// Write a document for `url_path`, returning the file written.
    pub fn save<M: Serialize + ?Sized>(&self, url_path: &str, meta: &M, body: &str) -> Result<PathBuf> {
        self.writer.write(url_path, meta, body)
    }
}
