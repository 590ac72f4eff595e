use crate::ports::outbound::ReactorReader;
use crate::shared::error::ViewError;
use crate::shared::security::{ensure_readable_file, MAX_MANIFEST_SIZE};
use crate::shared::Result;
use crate::view_composition::domain::{Component, Reactor, DEFAULT_MODEL_VERSION};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default manifest file name looked up in the working directory
pub const DEFAULT_MANIFEST_NAME: &str = "reactor.toml";

const DEFAULT_PACKAGING: &str = "jar";

#[derive(Debug, Deserialize)]
struct ReactorManifest {
    model_version: Option<String>,
    group_id: String,
    #[serde(default, rename = "component")]
    components: Vec<ManifestComponent>,
}

#[derive(Debug, Deserialize)]
struct ManifestComponent {
    name: String,
    packaging: Option<String>,
    base_dir: PathBuf,
    #[serde(default)]
    submodules: usize,
    artifact_id: Option<String>,
}

/// FileSystemReactorReader adapter reading a TOML reactor manifest
///
/// Relative `base_dir` entries are resolved against the directory that
/// contains the manifest, so a manifest can be committed next to the
/// reactor's root build file.
pub struct FileSystemReactorReader;

impl FileSystemReactorReader {
    pub fn new() -> Self {
        Self
    }

    fn parse(&self, manifest_path: &Path, content: &str) -> Result<Reactor> {
        let parse_error = |details: String| ViewError::ManifestParseError {
            path: manifest_path.to_path_buf(),
            details,
        };

        let manifest: ReactorManifest =
            toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;

        if manifest.group_id.trim().is_empty() {
            return Err(parse_error("group_id must not be empty".to_string()).into());
        }

        let manifest_dir = manifest_path.parent().unwrap_or_else(|| Path::new(""));

        let mut components = Vec::with_capacity(manifest.components.len());
        for (index, entry) in manifest.components.into_iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(
                    parse_error(format!("component[{}].name must not be empty", index)).into(),
                );
            }

            let packaging = entry
                .packaging
                .unwrap_or_else(|| DEFAULT_PACKAGING.to_string());
            if packaging.trim().is_empty() {
                return Err(parse_error(format!(
                    "component[{}] ({}) has an empty packaging",
                    index, entry.name
                ))
                .into());
            }

            let base_directory = if entry.base_dir.is_absolute() {
                entry.base_dir
            } else {
                manifest_dir.join(entry.base_dir)
            };

            let mut component =
                Component::new(entry.name, packaging, base_directory, entry.submodules);
            if let Some(artifact_id) = entry.artifact_id {
                component = component.with_artifact_id(artifact_id);
            }
            components.push(component);
        }

        Ok(Reactor::new(
            manifest
                .model_version
                .unwrap_or_else(|| DEFAULT_MODEL_VERSION.to_string()),
            manifest.group_id,
            components,
        ))
    }
}

impl Default for FileSystemReactorReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReactorReader for FileSystemReactorReader {
    fn read_reactor(&self, manifest_path: &Path) -> Result<Reactor> {
        if fs::symlink_metadata(manifest_path).is_err() {
            return Err(ViewError::ManifestNotFound {
                path: manifest_path.to_path_buf(),
                suggestion: format!(
                    "No reactor manifest at \"{}\".\n   \
                     Run from the reactor root or pass the manifest with --manifest.",
                    manifest_path.display()
                ),
            }
            .into());
        }

        ensure_readable_file(manifest_path, "reactor manifest", MAX_MANIFEST_SIZE)?;

        let content =
            fs::read_to_string(manifest_path).map_err(|e| ViewError::ManifestParseError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            })?;

        let reactor = self.parse(manifest_path, &content)?;
        tracing::debug!(
            "Read {} component(s) from {}",
            reactor.len(),
            manifest_path.display()
        );
        Ok(reactor)
    }
}
