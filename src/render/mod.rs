//! Page rendering module
//!
//! Turns the content tree into MDX pages for the site build.

pub mod blocks;
pub mod frontmatter;
pub mod page;

pub use page::render_page;
