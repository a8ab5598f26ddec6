//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// rpcdoc - API method reference pages from service definitions
///
/// Reads extracted service and method definitions and writes one MDX page
/// per method, named after the kebab-cased method name.
#[derive(Parser, Debug)]
#[command(
    name = "rpcdoc",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "RPCDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one page per method into an output directory
    Generate(GenerateArgs),

    /// Render a single method page to stdout without writing files
    Preview(PreviewArgs),

    /// List methods with their derived file names and flags
    List(ListArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the generate command
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the definitions file (JSON or YAML)
    #[arg(value_name = "DEFINITIONS")]
    pub definitions: PathBuf,

    /// Root output directory (overrides the configured one)
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Stop at the first method that fails
    #[arg(long)]
    pub fail_fast: bool,

    /// Do not generate pages for deprecated methods
    #[arg(long)]
    pub skip_deprecated: bool,

    /// Do not write an index.md landing page per service
    #[arg(long)]
    pub no_index: bool,
}

/// Arguments for the preview command
#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Path to the definitions file (JSON or YAML)
    #[arg(value_name = "DEFINITIONS")]
    pub definitions: PathBuf,

    /// Name of the method to render
    #[arg(short, long)]
    pub method: String,

    /// Restrict the lookup to one service
    #[arg(short, long)]
    pub service: Option<String>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Path to the definitions file (JSON or YAML)
    #[arg(value_name = "DEFINITIONS")]
    pub definitions: PathBuf,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli {
            verbose: 2,
            quiet: false,
            config: None,
            output: OutputFormat::Human,
            no_color: false,
            command: Commands::List(ListArgs {
                definitions: PathBuf::from("api.json"),
            }),
        };
        assert_eq!(cli.verbosity_level(), 2);

        let quiet_cli = Cli { quiet: true, ..cli };
        assert_eq!(quiet_cli.verbosity_level(), 0);
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::parse_from([
            "rpcdoc",
            "generate",
            "api.yaml",
            "--out-dir",
            "site/docs",
            "--fail-fast",
        ]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.definitions, PathBuf::from("api.yaml"));
                assert_eq!(args.out_dir, Some(PathBuf::from("site/docs")));
                assert!(args.fail_fast);
                assert!(!args.skip_deprecated);
                assert!(!args.no_index);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_preview_requires_method() {
        assert!(Cli::try_parse_from(["rpcdoc", "preview", "api.json"]).is_err());

        let cli = Cli::try_parse_from(["rpcdoc", "preview", "api.json", "-m", "GetInfo", "-s", "Lightning"]).unwrap();
        match cli.command {
            Commands::Preview(args) => {
                assert_eq!(args.method, "GetInfo");
                assert_eq!(args.service.as_deref(), Some("Lightning"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
