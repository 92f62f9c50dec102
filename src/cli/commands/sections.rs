//! Sections command handlers
//!
//! Implements `sections list` and `sections show`.

use crate::cli::args::{OutputFormat, SectionsListArgs, SectionsShowArgs};
use crate::content::site::{Page, find_page, page_slugs, site, suggest_page};
use crate::error::{ContentError, FolioError};

/// List every page with its header copy.
///
/// Displays the pages in navigation order (human) or as a JSON array.
///
/// # Errors
///
/// Returns a content error if output serialization fails.
pub fn list(args: &SectionsListArgs) -> Result<(), FolioError> {
    let content = site();
    let summaries: Vec<_> = Page::all().iter().map(|p| content.summary(*p)).collect();

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        OutputFormat::Human => {
            let total = summaries.len();
            println!("Site Pages ({total})\n");

            for summary in &summaries {
                println!(
                    "  {:<10}{:<12}{}",
                    summary.slug, summary.label, summary.title
                );
                println!("  {:<10}{:<12}{}", "", "", summary.description);
                println!();
            }

            println!("Show a page:  folio sections show <slug>");
            println!("Export all:   folio export --out <dir>");
        }
    }

    Ok(())
}

/// Display the full content of one page.
///
/// Prints YAML to stdout (suitable for reading) or JSON with `--format json`.
///
/// # Errors
///
/// Returns a usage error if the slug does not match any page.
pub fn show(args: &SectionsShowArgs) -> Result<(), FolioError> {
    let Some(page) = find_page(&args.slug) else {
        eprintln!("Available pages:");
        for slug in page_slugs() {
            eprintln!("  {slug}");
        }
        return Err(ContentError::UnknownPage {
            slug: args.slug.clone(),
            suggestion: suggest_page(&args.slug),
        }
        .into());
    };

    let value = site().page_value(page)?;
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&value)?),
        OutputFormat::Human => print!("{}", serde_yaml::to_string(&value)?),
    }

    Ok(())
}
