//! Write, read and rewrite documents through the public API
//!
//! Covers the writer and the resolver working on the same tree: documents
//! saved under dashed URLs, files created by hand with spaces in their
//! names, and concurrent writers.

use std::sync::Arc;
use std::thread;

use docroute_content::{ContentStore, Error, ParseOptions, PreParseMode};
use docroute_fs::RobustnessConfig;
use docroute_test_utils::TestSite;
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct PostMeta<'a> {
    title: &'a str,
    tags: Vec<&'a str>,
}

#[test]
fn create_update_and_reload() {
    let site = TestSite::new();
    let store = ContentStore::new(site.root());

    assert!(store.get("/blog/first-post").unwrap().is_none());

    let meta = PostMeta {
        title: "First Post",
        tags: vec!["news"],
    };
    store.save("/blog/first-post", &meta, "Version one.\n").unwrap();
    site.assert_file_exists("blog/first-post.md");

    let doc = store.get("/blog/first-post").unwrap().unwrap();
    assert_eq!(doc.title(), Some("First Post"));
    assert_eq!(doc.meta["tags"], json!(["news"]));

    store
        .save("/blog/first-post", &json!({"title": "First Post (edited)"}), "Version two.\n")
        .unwrap();
    let doc = store.get("/blog/first-post").unwrap().unwrap();
    assert_eq!(doc.title(), Some("First Post (edited)"));
    assert_eq!(doc.meta.get("tags"), None);
    assert_eq!(doc.raw_content, "Version two.\n");
}

#[test]
fn hand_written_file_with_spaces_is_editable() {
    let site = TestSite::new().page("team notes/weekly sync.md", "---\ntitle: Weekly\n---\n\nAgenda\n");
    let store = ContentStore::new(site.root());

    let doc = store.get("/team-notes/weekly-sync").unwrap().unwrap();
    assert_eq!(doc.path, site.path("team notes/weekly sync.md"));

    // Saving by URL targets the dashed name, so write back to the resolved path.
    let writer = docroute_content::DocumentWriter::new(site.root(), Default::default());
    writer
        .write_to(&doc.path, &doc.meta, "Agenda (updated)\n")
        .unwrap();

    let doc = store.get("/team-notes/weekly-sync").unwrap().unwrap();
    assert_eq!(doc.raw_content, "Agenda (updated)\n");
    site.assert_file_not_exists("team-notes/weekly-sync.md");
}

#[test]
fn dashed_file_shadows_spaced_file_after_save() {
    let site = TestSite::new().page("my page.md", "spaced");
    let store = ContentStore::new(site.root());

    let before = store.get("/my-page").unwrap().unwrap();
    assert_eq!(before.raw_content, "spaced");

    store.save("/my-page", &json!({}), "dashed").unwrap();
    let after = store.get("/my-page").unwrap().unwrap();
    assert_eq!(after.raw_content, "dashed");
    assert_eq!(after.path, site.path("my-page.md"));
}

#[test]
fn custom_pre_parse_sees_metadata() {
    let site = TestSite::new().page("page.md", "---\nlayout: wide\n---\n\nBody\n");
    let mode = PreParseMode::custom(|doc, options| {
        let layout = doc.meta_str("layout").unwrap_or("default").to_string();
        let inner = docroute_content::render_html(&doc.raw_content, options);
        doc.set_html(format!("<main class=\"{layout}\">{inner}</main>"));
        Ok(())
    });
    let store = ContentStore::new(site.root()).with_parse_options(ParseOptions::default().with_pre_parse(mode));

    let doc = store.get("/page").unwrap().unwrap();
    assert_eq!(doc.html(), Some("<main class=\"wide\"><p>Body</p>\n</main>"));
}

#[test]
fn concurrent_saves_to_distinct_documents() {
    let site = TestSite::new();
    let store = Arc::new(ContentStore::new(site.root()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store
                    .save(&format!("/posts/post-{i}"), &json!({"n": i}), "body")
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for i in 0..8 {
        let doc = store.get(&format!("/posts/post-{i}")).unwrap().unwrap();
        assert_eq!(doc.meta["n"], json!(i));
    }
}

#[test]
fn concurrent_saves_to_one_document_leave_a_complete_file() {
    let site = TestSite::new();
    let root = site.root().to_path_buf();

    let handles: Vec<_> = (0..6)
        .map(|i| {
            let root = root.clone();
            thread::spawn(move || {
                let writer = docroute_content::DocumentWriter::new(root, Default::default())
                    .with_robustness(RobustnessConfig {
                        enable_fsync: false,
                        ..RobustnessConfig::default()
                    });
                let _ = writer.write("/shared", &json!({"writer": i}), &format!("from {i}\n"));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let doc = ContentStore::new(site.root()).get("/shared").unwrap().unwrap();
    let writer = doc.meta["writer"].as_i64().unwrap();
    assert_eq!(doc.raw_content, format!("from {writer}\n"));
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_an_error_not_absence() {
    use std::os::unix::fs::PermissionsExt;

    let site = TestSite::new().page("locked.md", "secret");
    let path = site.path("locked.md");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();
    if std::fs::read(&path).is_ok() {
        // Running as root; permissions are not enforced.
        return;
    }

    let store = ContentStore::new(site.root());
    let err = store.get("/locked").unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
}
