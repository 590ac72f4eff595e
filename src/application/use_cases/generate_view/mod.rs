use crate::application::dto::{PersistenceOutcome, ViewRequest, ViewResponse};
use crate::application::factories::FormatterFactory;
use crate::ports::outbound::{DescriptorWriter, ProgressReporter, ReactorReader};
use crate::shared::Result;
use crate::view_composition::domain::{ExecutionContext, Reactor};
use crate::view_composition::services::{CompositionStats, ViewComposer};
use std::path::Path;

/// GenerateViewUseCase - Core use case for view generation
///
/// Reads the reactor, composes the view, renders it and hands it to the
/// writer. Infrastructure is injected through generics.
///
/// # Type Parameters
/// * `RR` - ReactorReader implementation
/// * `DW` - DescriptorWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateViewUseCase<RR, DW, PR> {
    reactor_reader: RR,
    descriptor_writer: DW,
    progress_reporter: PR,
}

impl<RR, DW, PR> GenerateViewUseCase<RR, DW, PR>
where
    RR: ReactorReader,
    DW: DescriptorWriter,
    PR: ProgressReporter,
{
    /// Creates a new GenerateViewUseCase with injected dependencies
    pub fn new(reactor_reader: RR, descriptor_writer: DW, progress_reporter: PR) -> Self {
        Self {
            reactor_reader,
            descriptor_writer,
            progress_reporter,
        }
    }

    /// Executes the view generation use case
    ///
    /// # Errors
    /// Reading the reactor and rendering the descriptor are fatal. A
    /// failing writer is not: it is reported and recorded as
    /// `PersistenceOutcome::Failed` in an otherwise successful response.
    pub fn execute(&self, request: ViewRequest) -> Result<ViewResponse> {
        // Step 1: Read the reactor
        let reactor = self.read_and_report_reactor(&request.manifest_path)?;

        // Step 2: Compose the view
        let context = ExecutionContext::new(
            request.execution_root_directory(),
            reactor.model_version(),
            reactor.group_id(),
        );
        let composition = ViewComposer::compose(
            reactor.components(),
            &request.selection(),
            &request.view_options(),
            &context,
        );
        self.report_composition(composition.descriptor.artifact_id(), &composition.stats);

        // Step 3: Render
        self.progress_reporter
            .report(FormatterFactory::progress_message(request.format));
        let formatter = FormatterFactory::create(request.format);
        let content = formatter.format(&composition.descriptor)?;

        // Step 4: Persist, without failing the run
        let descriptor_path = composition.target_directory.join(formatter.file_name());
        let persistence = self.persist(&descriptor_path, &content);

        Ok(ViewResponse::new(
            composition.descriptor,
            composition.target_directory,
            composition.stats,
            content,
            persistence,
        ))
    }

    fn read_and_report_reactor(&self, manifest_path: &Path) -> Result<Reactor> {
        self.progress_reporter.report(&format!(
            "📖 Loading reactor manifest from: {}",
            manifest_path.display()
        ));

        let reactor = self.reactor_reader.read_reactor(manifest_path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} component(s)", reactor.len()));

        Ok(reactor)
    }

    fn report_composition(&self, view_name: &str, stats: &CompositionStats) {
        self.progress_reporter.report(&format!(
            "🧩 Composing view '{}': {} module(s) referenced",
            view_name, stats.included
        ));

        if stats.excluded_non_leaf > 0 {
            self.progress_reporter.report(&format!(
                "   - Skipped {} non-leaf component(s)",
                stats.excluded_non_leaf
            ));
        }
        if stats.excluded_packaging > 0 {
            self.progress_reporter.report(&format!(
                "   - Skipped {} component(s) by packaging",
                stats.excluded_packaging
            ));
        }

        if stats.total > 0 && stats.included == 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: All {} component(s) were filtered out; the view references no modules.",
                stats.total
            ));
        }
    }

    fn persist(&self, path: &Path, content: &str) -> PersistenceOutcome {
        match self.descriptor_writer.write(path, content) {
            Ok(()) => {
                self.progress_reporter
                    .report_completion(&format!("✅ Generated {}", path.display()));
                PersistenceOutcome::Persisted {
                    path: path.to_path_buf(),
                }
            }
            Err(e) => {
                tracing::error!("Cannot write {}: {:#}", path.display(), e);
                self.progress_reporter
                    .report_error(&format!("❌ Cannot write {}\n{}", path.display(), e));
                PersistenceOutcome::Failed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        }
    }
}
