//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod export;
pub mod pages;
pub mod sections;
pub mod serve;
pub mod validate;
pub mod version;

use crate::cli::args::{Cli, Commands, SectionsSubcommand};
use crate::error::FolioError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli) -> Result<(), FolioError> {
    match cli.command {
        Commands::Sections(cmd) => match cmd.subcommand {
            SectionsSubcommand::List(args) => sections::list(&args),
            SectionsSubcommand::Show(args) => sections::show(&args),
        },
        Commands::Validate(args) => validate::run(&args),
        Commands::Export(args) => export::run(&args),
        Commands::Pages(args) => pages::run(&args),
        Commands::Serve(args) => serve::run(&args).await,
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}
