use std::collections::BTreeSet;
use std::path::PathBuf;

/// Directory, below the execution root, that receives generated views
pub const DEFAULT_OUTPUT_BASE_DIRECTORY: &str = "project-views";

/// Options for one composition. Values are expected to be validated
/// already (see `ViewRequestBuilder`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    /// Skip components that have modules of their own
    pub only_leaf_projects: bool,
    /// Packaging types that never make it into a view
    pub excluded_packaging_types: BTreeSet<String>,
    /// Absolute, or relative to the execution root
    pub output_base_directory: PathBuf,
    pub explicit_view_name: Option<String>,
}

impl ViewOptions {
    pub fn with_excluded_packaging<I, S>(mut self, packaging_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_packaging_types = packaging_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_only_leaf_projects(mut self, only_leaf_projects: bool) -> Self {
        self.only_leaf_projects = only_leaf_projects;
        self
    }

    pub fn with_output_base_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.output_base_directory = directory.into();
        self
    }

    pub fn with_explicit_view_name(mut self, name: impl Into<String>) -> Self {
        self.explicit_view_name = Some(name.into());
        self
    }

    pub fn excludes_packaging(&self, packaging: &str) -> bool {
        self.excluded_packaging_types.contains(packaging)
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            only_leaf_projects: true,
            excluded_packaging_types: BTreeSet::new(),
            output_base_directory: PathBuf::from(DEFAULT_OUTPUT_BASE_DIRECTORY),
            explicit_view_name: None,
        }
    }
}
