use crate::application::dto::OutputFormat;
use crate::shared::error::ViewError;
use crate::shared::security::check_single_path_segment;
use crate::shared::Result;
use crate::view_composition::domain::{SelectionInput, ViewOptions, DEFAULT_OUTPUT_BASE_DIRECTORY};
use std::path::{Path, PathBuf};

/// Upper bound on `--exclude-packaging` entries
const MAX_EXCLUDED_PACKAGING_TYPES: usize = 64;

/// ViewRequest - Internal request DTO for the view generation use case
///
/// Build it with [`ViewRequestBuilder`] to get option validation.
#[derive(Debug, Clone)]
pub struct ViewRequest {
    /// Reactor manifest to read components from
    pub manifest_path: PathBuf,
    /// Where the build "runs"; defaults to the manifest's directory
    pub execution_root: Option<PathBuf>,
    /// Raw coordinates of the selected components, in order
    pub selected_projects: Vec<String>,
    pub view_name: Option<String>,
    pub output_base_directory: PathBuf,
    pub excluded_packaging: Vec<String>,
    pub only_leaf_projects: bool,
    pub format: OutputFormat,
}

impl ViewRequest {
    pub fn builder() -> ViewRequestBuilder {
        ViewRequestBuilder::default()
    }

    pub fn selection(&self) -> SelectionInput {
        SelectionInput::new(self.view_name.clone(), self.selected_projects.clone())
    }

    pub fn view_options(&self) -> ViewOptions {
        let mut options = ViewOptions::default()
            .with_only_leaf_projects(self.only_leaf_projects)
            .with_output_base_directory(self.output_base_directory.clone())
            .with_excluded_packaging(self.excluded_packaging.iter().cloned());
        options.explicit_view_name = self.view_name.clone();
        options
    }

    pub fn execution_root_directory(&self) -> PathBuf {
        match &self.execution_root {
            Some(root) => root.clone(),
            None => self
                .manifest_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        }
    }
}

/// Builder for [`ViewRequest`]
///
/// # Examples
/// ```
/// use reactor_view::application::dto::ViewRequest;
///
/// let request = ViewRequest::builder()
///     .manifest_path("/work/reactor.toml")
///     .selected_projects(vec!["com.acme:billing".to_string()])
///     .excluded_packaging(vec!["war".to_string()])
///     .build()
///     .unwrap();
///
/// assert!(request.only_leaf_projects);
/// assert_eq!(request.execution_root_directory(), std::path::PathBuf::from("/work"));
/// ```
#[derive(Debug, Clone)]
pub struct ViewRequestBuilder {
    manifest_path: Option<PathBuf>,
    execution_root: Option<PathBuf>,
    selected_projects: Vec<String>,
    view_name: Option<String>,
    output_base_directory: PathBuf,
    excluded_packaging: Vec<String>,
    only_leaf_projects: bool,
    format: OutputFormat,
}

impl Default for ViewRequestBuilder {
    fn default() -> Self {
        Self {
            manifest_path: None,
            execution_root: None,
            selected_projects: Vec::new(),
            view_name: None,
            output_base_directory: PathBuf::from(DEFAULT_OUTPUT_BASE_DIRECTORY),
            excluded_packaging: Vec::new(),
            only_leaf_projects: true,
            format: OutputFormat::default(),
        }
    }
}

impl ViewRequestBuilder {
    pub fn manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = Some(path.into());
        self
    }

    pub fn execution_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.execution_root = Some(root.into());
        self
    }

    pub fn selected_projects(mut self, projects: Vec<String>) -> Self {
        self.selected_projects = projects;
        self
    }

    pub fn view_name(mut self, name: Option<String>) -> Self {
        self.view_name = name;
        self
    }

    pub fn output_base_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.output_base_directory = directory.into();
        self
    }

    pub fn excluded_packaging(mut self, packaging_types: Vec<String>) -> Self {
        self.excluded_packaging = packaging_types;
        self
    }

    pub fn only_leaf_projects(mut self, only_leaf_projects: bool) -> Self {
        self.only_leaf_projects = only_leaf_projects;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Validates the options and builds the request
    ///
    /// # Errors
    /// Returns `ViewError::Validation` if:
    /// - No manifest path was given
    /// - The output base directory is empty
    /// - A selected identifier is blank
    /// - The view name is not a single directory name (separators, `.`,
    ///   `..` or an absolute path)
    /// - An excluded packaging type is blank or contains whitespace
    /// - More than 64 packaging types are excluded
    pub fn build(self) -> Result<ViewRequest> {
        let manifest_path = self
            .manifest_path
            .ok_or_else(|| validation("manifest path is required"))?;

        if self.output_base_directory.as_os_str().is_empty() {
            return Err(validation("output directory must not be empty").into());
        }

        if self.selected_projects.iter().any(|id| id.trim().is_empty()) {
            return Err(validation("selected project identifiers must not be blank").into());
        }

        if self.excluded_packaging.len() > MAX_EXCLUDED_PACKAGING_TYPES {
            return Err(validation(format!(
                "too many excluded packaging types: {} (maximum: {})",
                self.excluded_packaging.len(),
                MAX_EXCLUDED_PACKAGING_TYPES
            ))
            .into());
        }

        let excluded_packaging = self
            .excluded_packaging
            .into_iter()
            .map(|packaging| validate_packaging(&packaging))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let view_name = self.view_name.filter(|name| !name.trim().is_empty());
        if let Some(ref name) = view_name {
            check_single_path_segment(name)
                .map_err(|reason| validation(format!("invalid view name: {}", reason)))?;
        }

        Ok(ViewRequest {
            manifest_path,
            execution_root: self.execution_root,
            selected_projects: self.selected_projects,
            view_name,
            output_base_directory: self.output_base_directory,
            excluded_packaging,
            only_leaf_projects: self.only_leaf_projects,
            format: self.format,
        })
    }
}

fn validation(message: impl Into<String>) -> ViewError {
    ViewError::Validation {
        message: message.into(),
    }
}

fn validate_packaging(packaging: &str) -> std::result::Result<String, ViewError> {
    let trimmed = packaging.trim();
    if trimmed.is_empty() {
        return Err(validation(
            "excluded packaging list contains an empty entry (check for stray commas)",
        ));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(validation(format!(
            "excluded packaging type '{}' must not contain whitespace",
            trimmed
        )));
    }
    Ok(trimmed.to_string())
}
