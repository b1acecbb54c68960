use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path without touching the filesystem.
///
/// Drops `.` components and folds each `..` into the preceding normal
/// component. A `..` directly under the root of an absolute path is
/// dropped (`/..` is `/`); leading `..` components of a relative path are
/// kept.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(part) => out.push(part),
        }
    }

    out
}

/// Make `path` absolute against `base` and normalize it lexically.
///
/// `base` is expected to be absolute; an absolute `path` ignores it.
#[must_use]
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Check that `path` lies strictly below `base` once both are normalized.
///
/// `base` itself is not considered inside.
#[must_use]
pub fn is_strictly_within(path: &Path, base: &Path) -> bool {
    let path = normalize(path);
    let base = normalize(base);
    path != base && path.starts_with(&base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_cur_dir() {
        assert_eq!(normalize(Path::new("a/./b/.")), PathBuf::from("a/b"));
    }

    #[test]
    fn test_normalize_folds_parent_dir() {
        assert_eq!(normalize(Path::new("a/b/../c")), PathBuf::from("a/c"));
        assert_eq!(normalize(Path::new("a/b/../../c")), PathBuf::from("c"));
    }

    #[test]
    fn test_normalize_keeps_leading_parent_dir_on_relative() {
        assert_eq!(normalize(Path::new("../a")), PathBuf::from("../a"));
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
    }

    #[cfg(unix)]
    #[test]
    fn test_normalize_absolute_cannot_escape_root() {
        assert_eq!(normalize(Path::new("/../../etc")), PathBuf::from("/etc"));
        assert_eq!(normalize(Path::new("/a/..")), PathBuf::from("/"));
    }

    #[cfg(unix)]
    #[test]
    fn test_absolutize_relative() {
        assert_eq!(
            absolutize(Path::new("sub/../deep"), Path::new("/project")),
            PathBuf::from("/project/deep")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_absolutize_absolute_ignores_base() {
        assert_eq!(
            absolutize(Path::new("/other/./dir"), Path::new("/project")),
            PathBuf::from("/other/dir")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_is_strictly_within() {
        let base = Path::new("/p/node_modules");
        assert!(is_strictly_within(Path::new("/p/node_modules/pkg/a.json"), base));
        assert!(is_strictly_within(
            Path::new("/p/node_modules/@s/pkg/../other/a.json"),
            base
        ));
        assert!(!is_strictly_within(Path::new("/p/node_modules/../secret"), base));
        assert!(!is_strictly_within(Path::new("/p/node_modules"), base));
        assert!(!is_strictly_within(Path::new("/p/node_modules_evil/x"), base));
    }
}
