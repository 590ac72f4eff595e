/// Filesystem adapters for reading reactors and writing descriptors
mod descriptor_writer;
mod reactor_reader;

pub use descriptor_writer::{FileSystemDescriptorWriter, StdoutDescriptorWriter};
pub use reactor_reader::{FileSystemReactorReader, DEFAULT_MANIFEST_NAME};
