/// Data Transfer Objects for application layer
///
/// DTOs carry data between the application layer and adapters, keeping
/// the composition domain free of CLI and I/O concerns.
mod output_format;
mod view_request;
mod view_response;

pub use output_format::OutputFormat;
pub use view_request::{ViewRequest, ViewRequestBuilder};
pub use view_response::{PersistenceOutcome, ViewResponse};
