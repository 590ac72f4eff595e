use std::path::{Path, PathBuf};

/// One buildable unit of the reactor.
///
/// Components are produced by a `ReactorReader` before composition starts
/// and are never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: String,
    packaging: String,
    base_directory: PathBuf,
    submodule_count: usize,
    artifact_id: Option<String>,
}

impl Component {
    pub fn new(
        name: impl Into<String>,
        packaging: impl Into<String>,
        base_directory: impl Into<PathBuf>,
        submodule_count: usize,
    ) -> Self {
        Self {
            name: name.into(),
            packaging: packaging.into(),
            base_directory: base_directory.into(),
            submodule_count,
            artifact_id: None,
        }
    }

    /// Attaches the coordinate segment the component is known by, for diagnostics
    pub fn with_artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn packaging(&self) -> &str {
        &self.packaging
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn submodule_count(&self) -> usize {
        self.submodule_count
    }

    pub fn artifact_id(&self) -> Option<&str> {
        self.artifact_id.as_deref()
    }

    /// A leaf has no modules of its own.
    pub fn is_leaf(&self) -> bool {
        self.submodule_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_accessors() {
        let component = Component::new("core", "jar", "/repo/core", 0).with_artifact_id("core-api");

        assert_eq!(component.name(), "core");
        assert_eq!(component.packaging(), "jar");
        assert_eq!(component.base_directory(), Path::new("/repo/core"));
        assert_eq!(component.submodule_count(), 0);
        assert_eq!(component.artifact_id(), Some("core-api"));
    }

    #[test]
    fn test_is_leaf() {
        assert!(Component::new("a", "jar", "/r/a", 0).is_leaf());
        assert!(!Component::new("b", "pom", "/r/b", 3).is_leaf());
    }
}
