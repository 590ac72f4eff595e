use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use reactor_view::adapters::outbound::console::StderrProgressReporter;
use reactor_view::adapters::outbound::filesystem::{
    FileSystemDescriptorWriter, FileSystemReactorReader, StdoutDescriptorWriter,
    DEFAULT_MANIFEST_NAME,
};
use reactor_view::application::dto::{ViewRequest, ViewResponse};
use reactor_view::application::use_cases::GenerateViewUseCase;
use reactor_view::cli::Args;
use reactor_view::config::{self, ConfigFile};
use reactor_view::logging;
use reactor_view::ports::outbound::DescriptorWriter;
use reactor_view::shared::error::ExitCode;
use reactor_view::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::InvalidArguments,
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    if let Err(e) = logging::init_logging(args.verbose) {
        eprintln!("⚠️  Warning: {}", e);
    }

    let current_dir = std::env::current_dir().context("Failed to determine current directory")?;
    let manifest_path = absolutize(
        &current_dir,
        args.manifest.as_deref().unwrap_or(DEFAULT_MANIFEST_NAME),
    );

    let config = load_config(&args, &current_dir, &manifest_path)?;
    let request = build_request(&args, config, &current_dir, manifest_path)?;
    tracing::debug!("Resolved request: {:?}", request);

    let reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    let response = if args.stdout {
        execute(StdoutDescriptorWriter::new(), reporter, request)?
    } else {
        execute(FileSystemDescriptorWriter::new(), reporter, request)?
    };

    if !response.persistence.is_persisted() {
        tracing::warn!(
            "View '{}' was composed but not persisted",
            response.descriptor.artifact_id()
        );
    }

    Ok(())
}

/// Runs the use case with the chosen writer and reporter
fn execute<DW: DescriptorWriter>(
    writer: DW,
    reporter: StderrProgressReporter,
    request: ViewRequest,
) -> Result<ViewResponse> {
    let use_case = GenerateViewUseCase::new(FileSystemReactorReader::new(), writer, reporter);
    use_case.execute(request)
}

/// `--config` wins; otherwise look next to the manifest
fn load_config(
    args: &Args,
    current_dir: &Path,
    manifest_path: &Path,
) -> Result<Option<ConfigFile>> {
    if let Some(path) = args.config.as_deref() {
        let path = absolutize(current_dir, path);
        let config = config::load_config_from_path(&path)?;
        eprintln!("📋 Loaded config from: {}", path.display());
        return Ok(Some(config));
    }

    let Some(dir) = manifest_path.parent() else {
        return Ok(None);
    };
    let config = config::discover_config(dir)?;
    if config.is_some() {
        eprintln!(
            "📋 Auto-discovered config file: {}",
            dir.join(config::CONFIG_FILENAME).display()
        );
    }
    Ok(config)
}

/// Merges CLI options over config file values over defaults
fn build_request(
    args: &Args,
    config: Option<ConfigFile>,
    current_dir: &Path,
    manifest_path: PathBuf,
) -> Result<ViewRequest> {
    let config = config.unwrap_or_default();

    let mut builder = ViewRequest::builder()
        .manifest_path(manifest_path)
        .selected_projects(args.projects.clone())
        .view_name(args.view_name.clone().or(config.view_name.clone()));

    if let Some(root) = args.root.as_deref() {
        builder = builder.execution_root(absolutize(current_dir, root));
    }

    if let Some(output_dir) = args.output_dir.as_ref().or(config.output_dir.as_ref()) {
        builder = builder.output_base_directory(output_dir);
    }

    let excluded_packaging = if args.exclude_packaging.is_empty() {
        config.exclude_packaging.clone().unwrap_or_default()
    } else {
        args.exclude_packaging.clone()
    };
    builder = builder.excluded_packaging(excluded_packaging);

    let only_leaf_projects = if args.include_aggregators {
        false
    } else {
        config.only_leaf_projects.unwrap_or(true)
    };
    builder = builder.only_leaf_projects(only_leaf_projects);

    if let Some(format) = args.format.or(config.output_format()) {
        builder = builder.format(format);
    }

    builder.build()
}

fn absolutize(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactor_view::application::dto::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("reactor-view").chain(args.iter().copied())).unwrap()
    }

    fn config(yaml: &str) -> ConfigFile {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(config::CONFIG_FILENAME);
        fs::write(&path, yaml).unwrap();
        config::load_config_from_path(&path).unwrap()
    }

    #[test]
    fn test_absolutize() {
        assert_eq!(
            absolutize(Path::new("/work"), "reactor.toml"),
            PathBuf::from("/work/reactor.toml")
        );
        assert_eq!(
            absolutize(Path::new("/work"), "/other/reactor.toml"),
            PathBuf::from("/other/reactor.toml")
        );
    }

    #[test]
    fn test_build_request_defaults() {
        let request = build_request(
            &parse(&[]),
            None,
            Path::new("/work"),
            PathBuf::from("/work/reactor.toml"),
        )
        .unwrap();

        assert_eq!(request.output_base_directory, PathBuf::from("project-views"));
        assert!(request.only_leaf_projects);
        assert!(request.excluded_packaging.is_empty());
        assert_eq!(request.format, OutputFormat::Pom);
        assert_eq!(request.execution_root_directory(), PathBuf::from("/work"));
    }

    #[test]
    fn test_config_values_apply_when_cli_is_silent() {
        let config = config(
            "output_dir: views\nexclude_packaging: [pom]\nonly_leaf_projects: false\nview_name: slice\nformat: json\n",
        );
        let request = build_request(
            &parse(&[]),
            Some(config),
            Path::new("/work"),
            PathBuf::from("/work/reactor.toml"),
        )
        .unwrap();

        assert_eq!(request.output_base_directory, PathBuf::from("views"));
        assert_eq!(request.excluded_packaging, ["pom"]);
        assert!(!request.only_leaf_projects);
        assert_eq!(request.view_name.as_deref(), Some("slice"));
        assert_eq!(request.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_overrides_config() {
        let config =
            config("output_dir: views\nexclude_packaging: [pom]\nformat: json\nview_name: slice\n");
        let args = parse(&[
            "-o", "elsewhere", "-x", "war", "-f", "pom", "-n", "mine", "-r", "root",
        ]);
        let request = build_request(
            &args,
            Some(config),
            Path::new("/work"),
            PathBuf::from("/work/reactor.toml"),
        )
        .unwrap();

        assert_eq!(request.output_base_directory, PathBuf::from("elsewhere"));
        assert_eq!(request.excluded_packaging, ["war"]);
        assert_eq!(request.format, OutputFormat::Pom);
        assert_eq!(request.view_name.as_deref(), Some("mine"));
        assert_eq!(request.execution_root_directory(), PathBuf::from("/work/root"));
    }

    #[test]
    fn test_include_aggregators_overrides_config() {
        let config = config("only_leaf_projects: true\n");
        let request = build_request(
            &parse(&["--include-aggregators"]),
            Some(config),
            Path::new("/work"),
            PathBuf::from("/work/reactor.toml"),
        )
        .unwrap();

        assert!(!request.only_leaf_projects);
    }

    #[test]
    fn test_load_config_discovers_next_to_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(config::CONFIG_FILENAME), "format: json\n").unwrap();

        let loaded = load_config(&parse(&[]), dir.path(), &dir.path().join("reactor.toml"))
            .unwrap()
            .unwrap();
        assert_eq!(loaded.output_format(), Some(OutputFormat::Json));
    }

    #[test]
    fn test_load_config_explicit_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = load_config(
            &parse(&["-c", "missing.yml"]),
            dir.path(),
            &dir.path().join("reactor.toml"),
        );
        assert!(result.is_err());
    }
}
