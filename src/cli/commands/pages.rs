//! Pages command handler
//!
//! Generates MDX pages from the content tree.

use std::fs;

use crate::cli::args::PagesArgs;
use crate::content::site::{Page, site};
use crate::error::FolioError;
use crate::render::render_page;

/// Generate MDX pages into the output directory.
///
/// Writes one `<slug>.mdx` per page, or a single page with `--page`.
///
/// # Errors
///
/// Returns an I/O error if the output directory cannot be created or a
/// page cannot be written.
pub fn run(args: &PagesArgs) -> Result<(), FolioError> {
    let content = site();
    fs::create_dir_all(&args.out)?;

    eprintln!("Generating pages...");
    eprintln!("  output: {}", args.out.display());

    let targets: Vec<Page> = match args.page {
        Some(page) => vec![page],
        None => Page::all().to_vec(),
    };

    for page in &targets {
        let mdx = render_page(content, *page);
        let out_file = args.out.join(format!("{}.mdx", page.slug()));
        fs::write(&out_file, mdx)?;
    }

    eprintln!("Generated {} page(s)", targets.len());
    Ok(())
}
