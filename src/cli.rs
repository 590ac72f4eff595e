use clap::Parser;

use crate::application::dto::OutputFormat;

/// Generate a lightweight aggregator view over a subset of a reactor
#[derive(Parser, Debug)]
#[command(name = "reactor-view")]
#[command(version)]
#[command(
    about = "Generate an aggregator descriptor that references a selected slice of a multi-module reactor",
    long_about = None
)]
pub struct Args {
    /// Path to the reactor manifest (defaults to ./reactor.toml)
    #[arg(short, long, value_name = "FILE")]
    pub manifest: Option<String>,

    /// Execution root the output directory is resolved against
    /// (defaults to the manifest's directory)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<String>,

    /// Selected project coordinates; only used to derive the view name.
    /// Comma separated or repeated: -p com.acme:billing -p com.acme:web
    #[arg(short, long, value_name = "COORDS", value_delimiter = ',')]
    pub projects: Vec<String>,

    /// Base directory for generated views (default: project-views)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Packaging types to leave out of the view.
    /// Comma separated or repeated: -x pom -x war
    #[arg(short = 'x', long, value_name = "PACKAGING", value_delimiter = ',')]
    pub exclude_packaging: Vec<String>,

    /// Also reference components that declare submodules
    #[arg(long)]
    pub include_aggregators: bool,

    /// Explicit view name (the "_view" suffix is not appended)
    #[arg(short = 'n', long, value_name = "NAME")]
    pub view_name: Option<String>,

    /// Output format: pom or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Print the descriptor to stdout instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Path to a config file (defaults to reactor-view.config.yml next to the manifest)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("reactor-view").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(args.manifest.is_none());
        assert!(args.root.is_none());
        assert!(args.projects.is_empty());
        assert!(args.output_dir.is_none());
        assert!(args.exclude_packaging.is_empty());
        assert!(!args.include_aggregators);
        assert!(args.view_name.is_none());
        assert!(args.format.is_none());
        assert!(!args.stdout);
        assert!(args.config.is_none());
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_projects_comma_separated_and_repeated() {
        let args = parse(&["-p", "g:a,g:b", "--projects", "g:c"]);
        assert_eq!(args.projects, ["g:a", "g:b", "g:c"]);
    }

    #[test]
    fn test_exclude_packaging_comma_separated() {
        let args = parse(&["-x", "pom,war"]);
        assert_eq!(args.exclude_packaging, ["pom", "war"]);
    }

    #[test]
    fn test_format_parses() {
        let args = parse(&["--format", "JSON"]);
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = Args::try_parse_from(["reactor-view", "--format", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags() {
        let args = parse(&[
            "-m",
            "build/reactor.toml",
            "-r",
            "/work",
            "-o",
            "views",
            "-n",
            "slice",
            "--include-aggregators",
            "--stdout",
            "-c",
            "custom.yml",
            "-v",
            "-q",
        ]);
        assert_eq!(args.manifest.as_deref(), Some("build/reactor.toml"));
        assert_eq!(args.root.as_deref(), Some("/work"));
        assert_eq!(args.output_dir.as_deref(), Some("views"));
        assert_eq!(args.view_name.as_deref(), Some("slice"));
        assert!(args.include_aggregators);
        assert!(args.stdout);
        assert_eq!(args.config.as_deref(), Some("custom.yml"));
        assert!(args.verbose);
        assert!(args.quiet);
    }
}
