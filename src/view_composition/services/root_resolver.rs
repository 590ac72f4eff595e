use crate::view_composition::domain::{ExecutionContext, ViewOptions};
use std::path::PathBuf;

/// RootResolver - computes the directory a view is generated into
///
/// `<output base>/<view name>` is used as-is when it is absolute;
/// otherwise it is placed below the execution root. Nothing is created
/// or checked on disk.
pub struct RootResolver;

impl RootResolver {
    pub fn resolve(options: &ViewOptions, context: &ExecutionContext, view_name: &str) -> PathBuf {
        let candidate = options.output_base_directory.join(view_name);
        if candidate.is_absolute() {
            return candidate;
        }

        context.execution_root_directory.join(candidate)
    }
}
