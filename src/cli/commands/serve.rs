//! Serve command handler
//!
//! Starts the read-only content API.

use crate::cli::args::ServeArgs;
use crate::error::FolioError;
use crate::server::{parse_bind_addr, serve};

/// Start the preview server on the configured address.
///
/// # Errors
///
/// Returns a server error if the address is invalid or the server
/// fails to bind or run.
pub async fn run(args: &ServeArgs) -> Result<(), FolioError> {
    let addr = parse_bind_addr(&args.http)?;
    serve(addr).await?;
    Ok(())
}
