use crate::shared::Result;
use std::path::Path;

/// DescriptorWriter port for persisting a rendered descriptor
pub trait DescriptorWriter {
    /// Stores `content` at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The target directory cannot be created
    /// - The path is a symbolic link
    /// - Writing fails (permissions, disk full, ...)
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}
