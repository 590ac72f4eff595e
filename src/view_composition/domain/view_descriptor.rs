/// Packaging of every generated view
pub const AGGREGATOR_PACKAGING: &str = "aggregator";

/// The generated aggregator descriptor.
///
/// `modules` are forward-slash paths relative to the directory the
/// descriptor is written into, in reactor order. Two components that
/// resolve to the same path produce two identical entries; nothing here
/// deduplicates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDescriptor {
    model_version: String,
    group_id: String,
    artifact_id: String,
    modules: Vec<String>,
}

impl ViewDescriptor {
    pub fn new(
        model_version: impl Into<String>,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        modules: Vec<String>,
    ) -> Self {
        Self {
            model_version: model_version.into(),
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            modules,
        }
    }

    pub fn model_version(&self) -> &str {
        &self.model_version
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn packaging(&self) -> &'static str {
        AGGREGATOR_PACKAGING
    }

    pub fn modules(&self) -> &[String] {
        &self.modules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_accessors() {
        let descriptor = ViewDescriptor::new(
            "4.0.0",
            "com.example",
            "a_c_view",
            vec!["../a".to_string(), "../c".to_string()],
        );

        assert_eq!(descriptor.model_version(), "4.0.0");
        assert_eq!(descriptor.group_id(), "com.example");
        assert_eq!(descriptor.artifact_id(), "a_c_view");
        assert_eq!(descriptor.packaging(), "aggregator");
        assert_eq!(descriptor.modules(), ["../a", "../c"]);
    }
}
