use std::path::{Component as PathComponent, Path, PathBuf};

/// PathRelativizer - lexical relative paths between directories
///
/// Works purely on path syntax: neither path has to exist, and symlinks
/// are not resolved. Output always uses `/` so generated descriptors are
/// the same on every host.
pub struct PathRelativizer;

impl PathRelativizer {
    /// Path of `target` as seen from `base`
    ///
    /// Equal paths give `"."`. Paths that share no root (one absolute and
    /// one relative, or different Windows prefixes) cannot be related and
    /// the normalized `target` is returned instead.
    ///
    /// # Examples
    /// ```
    /// use reactor_view::view_composition::services::PathRelativizer;
    /// use std::path::Path;
    ///
    /// let relative = PathRelativizer::relativize(Path::new("/r/a"), Path::new("/r/views/a_view"));
    /// assert_eq!(relative, "../../a");
    /// ```
    pub fn relativize(target: &Path, base: &Path) -> String {
        let target = Self::normalize(target);
        let base = Self::normalize(base);

        let target_parts: Vec<PathComponent> = target.components().collect();
        let base_parts: Vec<PathComponent> = base.components().collect();

        if Self::anchor(&target_parts) != Self::anchor(&base_parts) {
            return Self::to_portable_string(&target);
        }

        let common = target_parts
            .iter()
            .zip(&base_parts)
            .take_while(|(t, b)| t == b)
            .count();

        // `..` left over in the base points somewhere we cannot name.
        if base_parts[common..]
            .iter()
            .any(|part| matches!(part, PathComponent::ParentDir))
        {
            return Self::to_portable_string(&target);
        }

        let mut segments: Vec<String> = Vec::new();
        segments.extend(base_parts[common..].iter().map(|_| "..".to_string()));
        segments.extend(
            target_parts[common..]
                .iter()
                .map(|part| part.as_os_str().to_string_lossy().into_owned()),
        );

        if segments.is_empty() {
            ".".to_string()
        } else {
            segments.join("/")
        }
    }

    /// Removes `.` and folds `name/..` pairs without touching the filesystem
    ///
    /// Leading `..` of a relative path are kept; `..` directly under the
    /// root is dropped, as `/..` is `/`.
    pub fn normalize(path: &Path) -> PathBuf {
        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                PathComponent::CurDir => {}
                PathComponent::ParentDir => match normalized.components().next_back() {
                    Some(PathComponent::Normal(_)) => {
                        normalized.pop();
                    }
                    Some(PathComponent::RootDir) | Some(PathComponent::Prefix(_)) => {}
                    _ => normalized.push(".."),
                },
                other => normalized.push(other.as_os_str()),
            }
        }
        normalized
    }

    /// Prefix and root of a path, which must match for paths to be related
    fn anchor<'a>(parts: &[PathComponent<'a>]) -> Vec<PathComponent<'a>> {
        parts
            .iter()
            .take_while(|part| matches!(part, PathComponent::Prefix(_) | PathComponent::RootDir))
            .copied()
            .collect()
    }

    fn to_portable_string(path: &Path) -> String {
        let mut out = String::new();
        for component in path.components() {
            match component {
                PathComponent::Prefix(prefix) => {
                    out.push_str(&prefix.as_os_str().to_string_lossy())
                }
                PathComponent::RootDir => out.push('/'),
                other => {
                    if !out.is_empty() && !out.ends_with('/') {
                        out.push('/');
                    }
                    out.push_str(&other.as_os_str().to_string_lossy());
                }
            }
        }

        if out.is_empty() {
            ".".to_string()
        } else {
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(target: &str, base: &str) -> String {
        PathRelativizer::relativize(Path::new(target), Path::new(base))
    }

    #[test]
    fn test_sibling_of_view_root() {
        assert_eq!(rel("/r/a", "/r/views"), "../a");
    }

    #[test]
    fn test_component_outside_view_subtree() {
        assert_eq!(rel("/r/a", "/r/views/a_c_view"), "../../a");
        assert_eq!(rel("/r/modules/core/api", "/r/project-views/api_view"), "../../modules/core/api");
    }

    #[test]
    fn test_component_inside_view_root() {
        assert_eq!(rel("/r/views/v/nested/m", "/r/views/v"), "nested/m");
    }

    #[test]
    fn test_same_directory() {
        assert_eq!(rel("/r/views/v", "/r/views/v"), ".");
        assert_eq!(rel("/r/views/v/", "/r/views/./v"), ".");
    }

    #[test]
    fn test_unrelated_trees_share_only_root() {
        assert_eq!(rel("/src/a", "/tmp/views/v"), "../../../src/a");
    }

    #[test]
    fn test_inputs_are_normalized_first() {
        assert_eq!(rel("/r/x/../a/./", "/r/views/../views/v"), "../../a");
    }

    #[test]
    fn test_relative_inputs() {
        assert_eq!(rel("modules/a", "project-views/a_view"), "../../modules/a");
    }

    #[test]
    fn test_mixed_absolute_and_relative_returns_target() {
        assert_eq!(rel("modules/a", "/r/views/v"), "modules/a");
        assert_eq!(rel("/r/a", "views/v"), "/r/a");
    }

    #[test]
    fn test_base_escaping_upwards_returns_target() {
        assert_eq!(rel("a", "../views"), "a");
    }

    #[test]
    fn test_output_uses_forward_slashes() {
        let relative = rel("/r/deep/er/module", "/r/views/v");
        assert!(!relative.contains('\\'));
        assert_eq!(relative, "../../deep/er/module");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(PathRelativizer::normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(PathRelativizer::normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(PathRelativizer::normalize(Path::new("../a/..")), PathBuf::from(".."));
        assert_eq!(PathRelativizer::normalize(Path::new("a/../..")), PathBuf::from(".."));
    }

    #[test]
    fn test_round_trip_resolves_back_to_component() {
        let cases = [
            ("/r/a", "/r/views/a_c_view"),
            ("/r/views/v/inner", "/r/views/v"),
            ("/r/views/v", "/r/views/v"),
            ("/opt/src/x/y", "/home/dev/views/v"),
            ("/r/a/b/c", "/r/a"),
        ];

        for (component, root) in cases {
            let relative = rel(component, root);
            let resolved = PathRelativizer::normalize(&Path::new(root).join(&relative));
            assert_eq!(
                resolved,
                PathRelativizer::normalize(Path::new(component)),
                "{} relative to {} was {}",
                component,
                root,
                relative
            );
        }
    }
}
