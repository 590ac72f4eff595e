use crate::shared::Result;
use crate::view_composition::domain::ViewDescriptor;

/// DescriptorFormatter port for serializing a view descriptor
pub trait DescriptorFormatter {
    /// Renders the descriptor into the formatter's file format
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, descriptor: &ViewDescriptor) -> Result<String>;

    /// File name the rendered descriptor is stored under inside the view root
    fn file_name(&self) -> &'static str;
}
