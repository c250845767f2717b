#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the site-audit binary.
#[macro_export]
macro_rules! site_audit {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("site-audit"))
    };
}

/// A temporary site tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, creating parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".site-audit.toml", content);
    }

    /// An ordinary page carrying a canonical link and the given body.
    pub fn create_page(&self, relative_path: &str, body: &str) {
        self.create_file(relative_path, &format!("{CANONICAL_HEAD}\n{body}\n"));
    }

    /// A list page declaring every default hreflang code.
    pub fn create_list_page(&self, relative_path: &str) {
        self.create_file(relative_path, LIST_HEAD);
    }

    pub fn create_nav(&self, content: &str) {
        self.create_file("assets/js/site-nav.js", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub const CANONICAL_HEAD: &str = r#"<link rel="canonical" href="https://example.com/">"#;

pub const LIST_HEAD: &str = r#"<link rel="alternate" hreflang="en">
<link rel="alternate" hreflang="zh-cn">
"#;

/// Config that only looks at `.htm` documents and skips head checks.
pub const HTM_LINKS_ONLY_CONFIG: &str = r#"
version = "1"

[scanner]
extension = "htm"

[head]
enabled = false
"#;

pub const INVALID_VERSION_CONFIG: &str = r#"
version = "99"
"#;
