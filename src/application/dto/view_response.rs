use crate::view_composition::domain::ViewDescriptor;
use crate::view_composition::services::CompositionStats;
use std::path::PathBuf;

/// What happened when the rendered descriptor was handed to the writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceOutcome {
    /// The writer accepted the descriptor for this path
    Persisted { path: PathBuf },
    /// The writer failed; the composition itself is still valid
    Failed { path: PathBuf, reason: String },
}

impl PersistenceOutcome {
    pub fn is_persisted(&self) -> bool {
        matches!(self, PersistenceOutcome::Persisted { .. })
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            PersistenceOutcome::Persisted { path } | PersistenceOutcome::Failed { path, .. } => {
                path
            }
        }
    }
}

/// ViewResponse - Internal response DTO from the view generation use case
///
/// Returned even when persisting failed, so callers can retry the write
/// with `descriptor` and `target_directory`.
#[derive(Debug, Clone)]
pub struct ViewResponse {
    pub descriptor: ViewDescriptor,
    /// The view root the descriptor belongs in
    pub target_directory: PathBuf,
    pub stats: CompositionStats,
    /// The rendered descriptor as handed to the writer
    pub content: String,
    pub persistence: PersistenceOutcome,
}

impl ViewResponse {
    pub fn new(
        descriptor: ViewDescriptor,
        target_directory: PathBuf,
        stats: CompositionStats,
        content: String,
        persistence: PersistenceOutcome,
    ) -> Self {
        Self {
            descriptor,
            target_directory,
            stats,
            content,
            persistence,
        }
    }
}
