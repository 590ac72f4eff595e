use crate::ports::outbound::DescriptorWriter;
use crate::shared::error::ViewError;
use crate::shared::security::ensure_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// FileSystemDescriptorWriter adapter writing descriptors to disk
///
/// The view root usually does not exist yet, so missing parent
/// directories are created.
pub struct FileSystemDescriptorWriter;

impl FileSystemDescriptorWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_error(path: &Path, details: impl Into<String>) -> anyhow::Error {
        ViewError::FileWriteError {
            path: path.to_path_buf(),
            details: details.into(),
        }
        .into()
    }
}

impl Default for FileSystemDescriptorWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorWriter for FileSystemDescriptorWriter {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                Self::write_error(
                    path,
                    format!("Failed to create directory {}: {}", parent.display(), e),
                )
            })?;
        }

        ensure_not_symlink(path, "write")?;

        fs::write(path, content).map_err(|e| Self::write_error(path, e.to_string()))?;

        tracing::info!("Generated {}", path.display());
        Ok(())
    }
}

/// StdoutDescriptorWriter adapter printing descriptors instead of storing them
///
/// Used for `--stdout` runs; the target path is only logged.
pub struct StdoutDescriptorWriter;

impl StdoutDescriptorWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutDescriptorWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorWriter for StdoutDescriptorWriter {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        tracing::debug!("Printing descriptor for {} to stdout", path.display());
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
