use crate::shared::Result;
use crate::view_composition::domain::Reactor;
use std::path::Path;

/// ReactorReader port for enumerating the components of a reactor
///
/// Implementations return components in build order with their base
/// directories already absolute (or at least relative to the same
/// anchor as the execution root).
pub trait ReactorReader {
    /// Reads the reactor described by `manifest_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist
    /// - The manifest cannot be read or is malformed
    fn read_reactor(&self, manifest_path: &Path) -> Result<Reactor>;
}
