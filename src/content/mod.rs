//! Content module
//!
//! The typed content tree, the built-in data behind the site, and the
//! integrity checks that run over it.

pub mod schema;
pub mod site;
pub mod validation;

pub use schema::*;
pub use site::{Page, PageSummary, find_page, page_slugs, site, suggest_page};
pub use validation::{ValidationResult, Validator};
