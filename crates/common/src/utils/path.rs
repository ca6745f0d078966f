use std::path::{Component, Path, PathBuf};

/// Lexically resolve `path` against `base`, collapsing `.` and `..` components.
///
/// The filesystem is never consulted, so the result is meaningful for paths that do not exist
/// yet.
///
/// ```
/// use std::path::Path;
/// use stowage_common::utils::path::resolve;
///
/// let resolved = resolve(Path::new("/project"), Path::new("./out/../storage_layout"));
/// assert_eq!(resolved, Path::new("/project/storage_layout"));
/// ```
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() { path.to_path_buf() } else { base.join(path) };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` above the root stays at the root
                if !matches!(resolved.components().next_back(), Some(Component::RootDir) | None) {
                    resolved.pop();
                }
            }
            other => resolved.push(other.as_os_str()),
        }
    }

    resolved
}

/// Whether `path` equals `root` or lies beneath it, comparing whole components.
///
/// ```
/// use std::path::Path;
/// use stowage_common::utils::path::is_within;
///
/// assert!(is_within(Path::new("/project"), Path::new("/project/storage_layout")));
/// assert!(!is_within(Path::new("/project"), Path::new("/project-other")));
/// ```
pub fn is_within(root: &Path, path: &Path) -> bool {
    path.starts_with(root)
}

/// Strip `prefix` from the front of `path`, returning the remainder as a `/`-separated string.
/// Paths outside `prefix` are returned unchanged.
pub fn strip_path_prefix(path: &Path, prefix: &Path) -> String {
    match path.strip_prefix(prefix) {
        Ok(rest) => rest
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative() {
        let resolved = resolve(Path::new("/project"), Path::new("storage_layout"));
        assert_eq!(resolved, PathBuf::from("/project/storage_layout"));
    }

    #[test]
    fn test_resolve_escapes_root() {
        let resolved = resolve(Path::new("/project"), Path::new("../elsewhere"));
        assert_eq!(resolved, PathBuf::from("/elsewhere"));
        assert!(!is_within(Path::new("/project"), &resolved));
    }

    #[test]
    fn test_resolve_absolute_ignores_base() {
        let resolved = resolve(Path::new("/project"), Path::new("/tmp/./layout"));
        assert_eq!(resolved, PathBuf::from("/tmp/layout"));
    }

    #[test]
    fn test_resolve_parent_of_root() {
        let resolved = resolve(Path::new("/"), Path::new("../../x"));
        assert_eq!(resolved, PathBuf::from("/x"));
    }

    #[test]
    fn test_is_within_component_boundary() {
        assert!(is_within(Path::new("/project"), Path::new("/project")));
        assert!(is_within(Path::new("/project"), Path::new("/project/a/b")));
        assert!(!is_within(Path::new("/project"), Path::new("/projectile")));
    }

    #[test]
    fn test_strip_path_prefix() {
        let stripped = strip_path_prefix(
            Path::new("/project/artifacts/build-info/abc.json"),
            Path::new("/project/artifacts"),
        );
        assert_eq!(stripped, "build-info/abc.json");

        let untouched = strip_path_prefix(Path::new("/other/abc.json"), Path::new("/project"));
        assert_eq!(untouched, "/other/abc.json");
    }
}
