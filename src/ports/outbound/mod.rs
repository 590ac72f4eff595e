/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, ...).
pub mod descriptor_formatter;
pub mod descriptor_writer;
pub mod progress_reporter;
pub mod reactor_reader;

pub use descriptor_formatter::DescriptorFormatter;
pub use descriptor_writer::DescriptorWriter;
pub use progress_reporter::ProgressReporter;
pub use reactor_reader::ReactorReader;
