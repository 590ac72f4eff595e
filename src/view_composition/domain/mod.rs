pub mod component;
pub mod execution_context;
pub mod reactor;
pub mod selection;
pub mod view_descriptor;
pub mod view_options;

pub use component::Component;
pub use execution_context::ExecutionContext;
pub use reactor::{Reactor, DEFAULT_MODEL_VERSION};
pub use selection::SelectionInput;
pub use view_descriptor::{ViewDescriptor, AGGREGATOR_PACKAGING};
pub use view_options::{ViewOptions, DEFAULT_OUTPUT_BASE_DIRECTORY};
