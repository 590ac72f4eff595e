/// Mock implementations for testing
mod mock_descriptor_writer;
mod mock_progress_reporter;
mod mock_reactor_reader;

pub use mock_descriptor_writer::MockDescriptorWriter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_reactor_reader::MockReactorReader;
