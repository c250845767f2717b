use std::path::PathBuf;

use super::*;

fn not_found() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::NotFound, "file not found")
}

#[test]
fn error_display_config() {
    let err = SiteAuditError::Config("empty extension".to_string());
    assert_eq!(err.to_string(), "Configuration error: empty extension");
}

#[test]
fn error_display_root_access() {
    let err = SiteAuditError::RootAccess {
        path: PathBuf::from("public"),
        source: not_found(),
    };
    assert_eq!(err.to_string(), "Cannot access site root: public");
}

#[test]
fn error_display_file_read() {
    let err = SiteAuditError::FileRead {
        path: PathBuf::from("notes/index.html"),
        source: not_found(),
    };
    assert!(err.to_string().contains("notes/index.html"));
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(SiteAuditError::Config("x".to_string()).error_type(), "Config");
    assert_eq!(
        SiteAuditError::RootAccess {
            path: PathBuf::from("site"),
            source: not_found(),
        }
        .error_type(),
        "SiteRoot"
    );
    assert_eq!(
        SiteAuditError::Io(std::io::Error::other("boom")).error_type(),
        "IO"
    );
}

#[test]
fn error_message_and_detail() {
    let err = SiteAuditError::FileRead {
        path: PathBuf::from("a.html"),
        source: not_found(),
    };
    assert_eq!(err.message(), "a.html");
    assert!(err.detail().unwrap().contains("file not found"));

    let err = SiteAuditError::Config("bad".to_string());
    assert_eq!(err.message(), "bad");
    assert!(err.detail().is_none());
}

#[test]
fn suggestion_depends_on_io_kind() {
    let err = SiteAuditError::RootAccess {
        path: PathBuf::from("missing"),
        source: not_found(),
    };
    assert!(err.suggestion().unwrap().contains("path exists"));

    let err = SiteAuditError::FileRead {
        path: PathBuf::from("locked.html"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.suggestion().unwrap().contains("permissions"));

    let err = SiteAuditError::FileRead {
        path: PathBuf::from("odd.html"),
        source: std::io::Error::other("odd"),
    };
    assert!(err.suggestion().is_none());
}
