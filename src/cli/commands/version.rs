//! Version information display
//!
//! Prints version and build metadata in human or JSON format.

use crate::built_info;
use crate::cli::args::{OutputFormat, VersionArgs};

/// Print version and build information.
pub fn run(args: &VersionArgs) {
    let name = env!("CARGO_PKG_NAME");
    let version = built_info::PKG_VERSION;
    let commit = built_info::GIT_COMMIT_HASH_SHORT.unwrap_or("unknown");

    match args.format {
        OutputFormat::Human => {
            println!("{name} {version} ({commit})");
        }
        OutputFormat::Json => {
            let info = serde_json::json!({
                "name": name,
                "version": version,
                "commit": commit,
                "builtAt": built_info::BUILT_TIME_UTC,
                "rustc": built_info::RUSTC_VERSION,
            });
            println!("{info}");
        }
    }
}
