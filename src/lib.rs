//! `folio` - Typed content registry and tooling for a personal portfolio site
//!
//! This library holds the site's content as typed records, validates it,
//! renders it to MDX pages, and serves it over a read-only HTTP API.

pub mod cli;
pub mod content;
pub mod error;
pub mod observability;
pub mod render;
pub mod server;

/// Build-time metadata collected by the `built` crate.
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
