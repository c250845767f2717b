use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` segments and fold `..` into the
/// preceding segment without touching the filesystem.
///
/// `..` never climbs above a root, so `/site/../../x` becomes `/x`. On a
/// relative path leading `..` segments are kept.
#[must_use]
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                normalized.push(component.as_os_str());
                depth = 0;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    normalized.pop();
                    depth -= 1;
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            Component::Normal(part) => {
                normalized.push(part);
                depth += 1;
            }
        }
    }

    normalized
}

/// Render a path with `/` separators regardless of platform.
#[must_use]
pub fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Path of `path` relative to `root`, with `/` separators.
///
/// Falls back to the full path when `path` is not under `root`.
#[must_use]
pub fn relative_slash(root: &Path, path: &Path) -> String {
    to_slash(path.strip_prefix(root).unwrap_or(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_current_dir_segments() {
        let path = normalize_lexically(Path::new("/site/./notes/./x.html"));
        assert_eq!(path, PathBuf::from("/site/notes/x.html"));
    }

    #[test]
    fn test_folds_parent_dir_segments() {
        let path = normalize_lexically(Path::new("/site/notes/../assets/z.css"));
        assert_eq!(path, PathBuf::from("/site/assets/z.css"));
    }

    #[test]
    fn test_parent_dir_stops_at_root() {
        let path = normalize_lexically(Path::new("/site/../../../x.html"));
        assert_eq!(path, PathBuf::from("/x.html"));
    }

    #[test]
    fn test_relative_path_keeps_leading_parent() {
        let path = normalize_lexically(Path::new("../a/./b/../c"));
        assert_eq!(path, PathBuf::from("../a/c"));
    }

    #[test]
    fn test_trailing_separator_is_dropped() {
        let path = normalize_lexically(Path::new("/site/projects/"));
        assert_eq!(path, PathBuf::from("/site/projects"));
    }

    #[test]
    fn test_to_slash_converts_backslashes() {
        assert_eq!(to_slash(Path::new("zh\\notes\\index.html")), "zh/notes/index.html");
    }

    #[test]
    fn test_relative_slash_strips_root() {
        let rel = relative_slash(Path::new("/site"), Path::new("/site/zh/index.html"));
        assert_eq!(rel, "zh/index.html");
    }

    #[test]
    fn test_relative_slash_outside_root_keeps_path() {
        let rel = relative_slash(Path::new("/site"), Path::new("/other/a.html"));
        assert_eq!(rel, "/other/a.html");
    }
}
