//! Tests for error handling under adverse filesystem conditions
//!
//! Absence is never an error for the resolver; other filesystem faults are.

use docroute_fs::{Error, NormalizedPath, ResolverOptions, io, resolve};
use docroute_test_utils::TestSite;
use tempfile::tempdir;

#[test]
fn read_text_nonexistent_file_returns_error() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("does_not_exist.md"));

    let result = io::read_text(&path);

    assert!(result.is_err(), "Reading non-existent file should fail");
}

#[test]
fn write_text_to_nonexistent_parent_creates_directories() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("a").join("b").join("c").join("file.md"));

    let result = io::write_text(&path, "deep content");
    assert!(result.is_ok(), "write_text should create parent directories");

    let content = io::read_text(&path).unwrap();
    assert_eq!(content, "deep content");
}

#[test]
fn write_atomic_cleans_up_temp_file_on_success() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("target.md"));

    io::write_text(&path, "content").unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();

    assert!(
        entries.is_empty(),
        "No temp files should remain after successful write, found: {:?}",
        entries.iter().map(|e| e.file_name()).collect::<Vec<_>>()
    );
}

#[test]
fn file_in_place_of_directory_is_not_found() {
    // `sub` is a file, so probing `sub/page.md` fails with ENOTDIR
    let site = TestSite::new().page("sub", "not a folder");
    let result = resolve("/sub/page", site.root(), &ResolverOptions::default());
    assert_eq!(result.unwrap(), None);
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    fn is_root() -> bool {
        match std::process::Command::new("id").arg("-u").output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
            Err(_) => false,
        }
    }

    #[test]
    fn resolve_through_unsearchable_directory_returns_error() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let site = TestSite::new().page("locked/page.md", "# Locked");
        let locked = site.path("locked");
        fs::set_permissions(&locked, Permissions::from_mode(0o000)).unwrap();

        let result = resolve("/locked/page", site.root(), &ResolverOptions::default());

        let _ = fs::set_permissions(&locked, Permissions::from_mode(0o755));

        match result {
            Err(Error::Io { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("Expected a permission error, got {other:?}"),
        }
    }

    #[test]
    fn write_atomic_to_readonly_directory_returns_error() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let readonly_dir = dir.path().join("readonly");
        fs::create_dir(&readonly_dir).unwrap();

        fs::set_permissions(&readonly_dir, Permissions::from_mode(0o444)).unwrap();

        let path = NormalizedPath::new(readonly_dir.join("file.md"));
        let result = io::write_text(&path, "content");

        let _ = fs::set_permissions(&readonly_dir, Permissions::from_mode(0o755));

        assert!(result.is_err(), "Writing to read-only directory should fail");
    }

    #[test]
    fn read_text_permission_denied_returns_error() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("secret.md");
        fs::write(&file_path, "secret content").unwrap();

        fs::set_permissions(&file_path, Permissions::from_mode(0o000)).unwrap();

        let path = NormalizedPath::new(&file_path);
        let result = io::read_text(&path);

        let _ = fs::set_permissions(&file_path, Permissions::from_mode(0o644));

        assert!(result.is_err(), "Reading unreadable file should fail");
    }

    #[test]
    fn write_atomic_unwritable_parent_preserves_original() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let parent = dir.path().join("parent");
        fs::create_dir(&parent).unwrap();

        let file_path = parent.join("existing.md");
        fs::write(&file_path, "original").unwrap();
        fs::set_permissions(&parent, Permissions::from_mode(0o555)).unwrap();

        let path = NormalizedPath::new(&file_path);
        let result = io::write_text(&path, "new content");

        let _ = fs::set_permissions(&parent, Permissions::from_mode(0o755));

        assert!(result.is_err(), "Writing when parent is read-only should fail");

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(
            content, "original",
            "Original file content must be preserved when write fails"
        );
    }
}
