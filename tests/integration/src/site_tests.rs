//! End-to-end resolution and parsing against the fixture sites
//!
//! Exercises the full read path: config loading -> URL resolution ->
//! front matter parsing -> HTML rendering.

use std::path::PathBuf;

use docroute_content::{ContentStore, MarkdownOptions, ParseOptions, PreParseSetting};
use docroute_fs::constants::CONFIG_FILE_NAME;
use docroute_fs::{ConfigStore, MatchKind, NormalizedPath, PathResolver, ResolverOptions};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Deserialize;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/sites")
        .join(name)
}

/// Mirrors the layout of `docroute.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct SiteFile {
    pre_parse: PreParseSetting,
    resolver: ResolverOptions,
    markdown: MarkdownOptions,
}

fn load_site(name: &str) -> (PathBuf, ContentStore) {
    let root = fixture(name);
    let config: SiteFile = ConfigStore::new()
        .load_or_default(&NormalizedPath::new(root.join(CONFIG_FILE_NAME)))
        .unwrap();
    let store = ContentStore::new(&root)
        .with_resolver_options(config.resolver)
        .with_parse_options(ParseOptions::new(config.markdown, config.pre_parse.into()));
    (root, store)
}

fn relative(root: &std::path::Path, path: PathBuf) -> String {
    let root = std::path::absolute(root).unwrap();
    let root = NormalizedPath::new(root);
    let path = NormalizedPath::new(path);
    path.as_str()
        .strip_prefix(root.as_str())
        .unwrap_or(path.as_str())
        .trim_start_matches('/')
        .to_string()
}

#[rstest]
#[case("/", Some("index.md"))]
#[case("/getting-started", Some("getting started.md"))]
#[case("/getting%20started", Some("getting started.md"))]
#[case("/guides/", Some("guides/index.md"))]
#[case("/guides/setup-notes", Some("guides/setup-notes.md"))]
#[case("/guides/advanced-topics/", Some("guides/advanced topics/index.md"))]
#[case("/guides/advanced-topics/error-handling", Some("guides/advanced topics/error handling.md"))]
#[case("/guides/advanced-topics/missing", None)]
#[case("/advanced-topics/error-handling", None)]
#[case("/guides/../index", None)]
fn handbook_urls(#[case] url: &str, #[case] expected: Option<&str>) {
    let (root, store) = load_site("handbook");
    let actual = store.resolve(url).unwrap().map(|path| relative(&root, path));
    assert_eq!(actual.as_deref(), expected, "resolving {url}");
}

#[test]
fn handbook_documents_parse() {
    let (_, store) = load_site("handbook");

    let home = store.get("/").unwrap().unwrap();
    assert_eq!(home.title(), Some("Handbook"));
    assert_eq!(home.meta["order"], serde_json::json!(0));
    assert!(home.raw_content.starts_with("# Handbook"));
    assert_eq!(home.html(), None);

    let mut guide = store.get("/guides/advanced-topics/error-handling").unwrap().unwrap();
    assert_eq!(guide.meta["draft"], serde_json::json!(true));
    let html = guide.render(&MarkdownOptions::default());
    assert!(html.contains("<del>errors</del>"));
}

#[test]
fn handbook_title_from_heading() {
    let (_, store) = load_site("handbook");
    let doc = store.get("/guides/").unwrap().unwrap();
    assert!(doc.meta.is_empty());
    assert_eq!(doc.title(), Some("Guides"));
}

#[test]
fn match_kinds_reported() {
    let root = fixture("handbook");
    let resolver = PathResolver::default();
    let kind = |url: &str| resolver.resolve_match(url, &root).unwrap().map(|found| found.kind);
    assert_eq!(kind("/"), Some(MatchKind::Root));
    assert_eq!(kind("/guides/setup-notes"), Some(MatchKind::Direct));
    assert_eq!(kind("/getting-started"), Some(MatchKind::Slug));
    assert_eq!(kind("/guides/advanced-topics/"), Some(MatchKind::Slug));
}

#[rstest]
#[case("/", Some("home.markdown"))]
#[case("/reference/", Some("reference/home.markdown"))]
#[case("/reference/api-list", Some("reference/api list.markdown"))]
#[case("/index", None)]
fn custom_config_urls(#[case] url: &str, #[case] expected: Option<&str>) {
    let (root, store) = load_site("custom");
    let actual = store.resolve(url).unwrap().map(|path| relative(&root, path));
    assert_eq!(actual.as_deref(), expected, "resolving {url}");
}

#[test]
fn custom_config_renders_eagerly_with_footnotes() {
    let (_, store) = load_site("custom");
    let doc = store.get("/").unwrap().unwrap();
    let html = doc.html().unwrap();
    assert!(html.contains("<h1>Custom Home</h1>"));
    assert!(html.contains("footnote-definition"));
}

#[test]
fn empty_body_with_front_matter() {
    let (_, store) = load_site("custom");
    let doc = store.get("/reference/api-list").unwrap().unwrap();
    assert_eq!(doc.title(), Some("API List"));
    assert_eq!(doc.raw_content, "");
    assert_eq!(doc.html(), Some(""));
}
