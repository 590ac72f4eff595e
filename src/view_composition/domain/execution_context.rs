use std::path::PathBuf;

/// Host facts the view inherits: where the build was started and the
/// aggregator coordinates the view copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    pub execution_root_directory: PathBuf,
    pub inherited_model_version: String,
    pub inherited_group_id: String,
}

impl ExecutionContext {
    pub fn new(
        execution_root_directory: impl Into<PathBuf>,
        inherited_model_version: impl Into<String>,
        inherited_group_id: impl Into<String>,
    ) -> Self {
        Self {
            execution_root_directory: execution_root_directory.into(),
            inherited_model_version: inherited_model_version.into(),
            inherited_group_id: inherited_group_id.into(),
        }
    }
}
