//! reactor-view - Aggregator views over large multi-module reactors
//!
//! This library derives a synthetic aggregator descriptor that references a
//! filtered subset of a reactor's components by relative path, so a build
//! tool can be pointed at a small slice of a huge reactor.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`view_composition`): Pure composition logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use reactor_view::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case = GenerateViewUseCase::new(
//!     FileSystemReactorReader::new(),
//!     FileSystemDescriptorWriter::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = ViewRequest::builder()
//!     .manifest_path("/work/reactor.toml")
//!     .selected_projects(vec!["com.acme:billing".to_string()])
//!     .excluded_packaging(vec!["pom".to_string()])
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ports;
pub mod shared;
pub mod view_composition;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemDescriptorWriter, FileSystemReactorReader, StdoutDescriptorWriter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, PomFormatter};
    pub use crate::application::dto::{
        OutputFormat, PersistenceOutcome, ViewRequest, ViewResponse,
    };
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::GenerateViewUseCase;
    pub use crate::ports::outbound::{
        DescriptorFormatter, DescriptorWriter, ProgressReporter, ReactorReader,
    };
    pub use crate::shared::error::ViewError;
    pub use crate::shared::Result;
    pub use crate::view_composition::domain::{
        Component, ExecutionContext, Reactor, SelectionInput, ViewDescriptor, ViewOptions,
    };
    pub use crate::view_composition::services::{PathRelativizer, ViewComposer};
}
