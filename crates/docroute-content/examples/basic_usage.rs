//! Basic usage example for docroute-content

use docroute_content::{ContentStore, MarkdownOptions, ParseOptions, PreParseMode};
use serde_json::json;

fn main() -> docroute_content::Result<()> {
    let dir = tempfile::tempdir().map_err(|e| docroute_fs::Error::io(std::env::temp_dir(), e))?;

    let store = ContentStore::new(dir.path()).with_parse_options(
        ParseOptions::default()
            .with_markdown(MarkdownOptions::all())
            .with_pre_parse(PreParseMode::Eager),
    );

    // New documents land at the literal target path
    let written = store.save(
        "/getting-started",
        &json!({"title": "Getting Started", "tags": ["intro"]}),
        "# Getting Started\n\nInstall it -- then run it.\n",
    )?;
    println!("Wrote {}", written.display());

    // A file with a space in its name is reachable through its slug
    std::fs::write(dir.path().join("release notes.md"), "# Release Notes\n")
        .map_err(|e| docroute_fs::Error::io(dir.path(), e))?;

    for url in ["/getting-started", "/release-notes", "/missing"] {
        match store.get(url)? {
            Some(doc) => {
                println!("\n{url}: {}", doc.title().unwrap_or("(untitled)"));
                println!("{}", doc.html().unwrap_or_default());
            }
            None => println!("\n{url}: no matching document"),
        }
    }

    Ok(())
}
