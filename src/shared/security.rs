use crate::shared::error::ViewError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest reactor manifest we are willing to load (10 MB)
pub const MAX_MANIFEST_SIZE: u64 = 10 * 1024 * 1024;

/// Rejects `path` if it is a symbolic link.
///
/// A path that does not exist yet passes; callers that need the file to
/// exist check that separately.
pub fn ensure_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(());
    };

    if metadata.is_symlink() {
        return Err(ViewError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("Refusing to {} through a symbolic link", operation),
            hint: "Use the real path instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Checks that `path` is an existing regular file no larger than `max_size`.
///
/// Uses `symlink_metadata()` so a link is reported as a link rather
/// than as whatever it points to.
pub fn ensure_readable_file(path: &Path, description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ViewError::ManifestParseError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", description, e),
    })?;

    if metadata.is_symlink() {
        return Err(ViewError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", description),
            hint: "Use the real path instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(ViewError::ManifestParseError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", description),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(ViewError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} is too large ({} bytes, maximum {} bytes)",
                description,
                metadata.len(),
                max_size
            ),
            hint: "Split the reactor or check that the right file was passed".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Checks that `name` can only ever be a single directory name
///
/// Rejects separators (`/` or `\`), `.` and `..`, and absolute or
/// drive-prefixed names. Returns the reason on failure.
pub fn check_single_path_segment(name: &str) -> std::result::Result<(), String> {
    if name.contains('/') || name.contains('\\') {
        return Err(format!("'{}' must not contain path separators", name));
    }
    if name == "." || name == ".." {
        return Err(format!("'{}' is not a directory name", name));
    }
    if Path::new(name).is_absolute() || (cfg!(windows) && name.contains(':')) {
        return Err(format!("'{}' must not be an absolute path", name));
    }
    Ok(())
}
