use std::path::PathBuf;

use super::*;

fn render_error(err: &SiteAuditError, mode: ColorMode) -> String {
    let mut buf = Vec::new();
    ErrorOutput::new(mode).write_error(&mut buf, err);
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_plain_format() {
    let err = SiteAuditError::RootAccess {
        path: PathBuf::from("public"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
    };
    let out = render_error(&err, ColorMode::Never);

    assert!(out.starts_with("✖ SiteRoot: public\n"));
    assert!(out.contains("  × No such file\n"));
    assert!(out.contains("  help: Check that the file path exists\n"));
}

#[test]
fn error_without_detail_has_single_line() {
    let err = SiteAuditError::Io(std::io::Error::other("disk gone"));
    let out = render_error(&err, ColorMode::Never);
    assert_eq!(out, "✖ IO: disk gone\n");
}

#[test]
fn error_colored_format_uses_ansi() {
    let err = SiteAuditError::Config("bad".to_string());
    let out = render_error(&err, ColorMode::Always);

    assert!(out.contains(ansi::RED));
    assert!(out.contains(ansi::RESET));
    assert!(out.contains("bad"));
}

#[test]
fn warning_plain_format() {
    let mut buf = Vec::new();
    ErrorOutput::new(ColorMode::Never).write_warning(
        &mut buf,
        "Navigation source not found: nav.js",
        None,
        Some("Only links found in markup are checked"),
    );
    let out = String::from_utf8(buf).unwrap();

    assert_eq!(
        out,
        "⚠ Warning: Navigation source not found: nav.js\n  help: Only links found in markup are checked\n"
    );
}
