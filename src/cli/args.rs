//! CLI argument definitions
//!
//! All Clap derive structs for `folio` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::content::site::Page;
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Typed content registry and tooling for a personal portfolio site.
#[derive(Parser, Debug)]
#[command(name = "folio", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "FOLIO_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect the content tree page by page.
    Sections(SectionsCommand),

    /// Check the content tree for integrity issues.
    Validate(ValidateArgs),

    /// Write the content tree as JSON or YAML files.
    Export(ExportArgs),

    /// Generate MDX pages from the content tree.
    Pages(PagesArgs),

    /// Serve the content over a read-only HTTP API.
    Serve(ServeArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version and build information.
    Version(VersionArgs),
}

// ============================================================================
// Sections Command
// ============================================================================

/// Content inspection commands.
#[derive(Args, Debug)]
pub struct SectionsCommand {
    /// Sections subcommand.
    #[command(subcommand)]
    pub subcommand: SectionsSubcommand,
}

/// Sections subcommands.
#[derive(Subcommand, Debug)]
pub enum SectionsSubcommand {
    /// List every page with its header copy.
    List(SectionsListArgs),

    /// Display the full content of one page.
    Show(SectionsShowArgs),
}

/// Arguments for `sections list`.
#[derive(Args, Debug)]
pub struct SectionsListArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `sections show`.
#[derive(Args, Debug)]
pub struct SectionsShowArgs {
    /// Page slug (home, about, blog, work, gallery).
    pub slug: String,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Validate / Export / Pages
// ============================================================================

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Treat warnings as errors.
    #[arg(long)]
    pub strict: bool,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Directory to write the exported files into.
    #[arg(short, long)]
    pub out: PathBuf,

    /// Serialization format for the exported files.
    #[arg(short, long, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output (YAML is always readable).
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for `pages`.
#[derive(Args, Debug)]
pub struct PagesArgs {
    /// Directory to write the MDX pages into.
    #[arg(short, long)]
    pub out: PathBuf,

    /// Generate a single page instead of all of them.
    #[arg(long)]
    pub page: Option<Page>,
}

// ============================================================================
// Serve Command
// ============================================================================

/// Arguments for `serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Bind address as `port`, `:port`, or `host:port`.
    #[arg(
        long,
        default_value = crate::server::DEFAULT_BIND_ADDR,
        env = "FOLIO_HTTP_ADDR"
    )]
    pub http: String,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Serialization format for exported content files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// JSON files.
    #[default]
    Json,
    /// YAML files.
    Yaml,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
