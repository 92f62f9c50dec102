//! Export command handler
//!
//! Writes the content tree to disk for the website build to consume.

use std::fs;
use std::path::PathBuf;

use crate::cli::args::{ExportArgs, ExportFormat};
use crate::content::site::{Page, site};
use crate::error::FolioError;

/// Write the content tree as one file per record plus the full tree.
///
/// Produces `content.<ext>` with the whole tree, `person`, `social` and
/// `newsletter` files, and one file per page.
///
/// # Errors
///
/// Returns an I/O error if the output directory cannot be created or a
/// file cannot be written, or a content error if serialization fails.
pub fn run(args: &ExportArgs) -> Result<(), FolioError> {
    let content = site();
    fs::create_dir_all(&args.out)?;

    eprintln!("Exporting content...");
    eprintln!("  output: {}", args.out.display());

    let mut written = Vec::new();
    written.push(write_record(
        args,
        "content",
        &serde_json::to_value(content)?,
    )?);
    written.push(write_record(
        args,
        "person",
        &serde_json::to_value(&content.person)?,
    )?);
    written.push(write_record(
        args,
        "social",
        &serde_json::to_value(&content.social)?,
    )?);
    written.push(write_record(
        args,
        "newsletter",
        &serde_json::to_value(&content.newsletter)?,
    )?);

    for page in Page::all() {
        written.push(write_record(args, page.slug(), &content.page_value(*page)?)?);
    }

    eprintln!("Exported {} files", written.len());
    Ok(())
}

/// Serialize one record into the output directory. Returns the path written.
fn write_record(
    args: &ExportArgs,
    name: &str,
    value: &serde_json::Value,
) -> Result<PathBuf, FolioError> {
    let (extension, mut body) = match args.format {
        ExportFormat::Json => {
            let rendered = if args.pretty {
                serde_json::to_string_pretty(value)?
            } else {
                serde_json::to_string(value)?
            };
            ("json", rendered)
        }
        ExportFormat::Yaml => ("yaml", serde_yaml::to_string(value)?),
    };
    if !body.ends_with('\n') {
        body.push('\n');
    }

    let path = args.out.join(format!("{name}.{extension}"));
    fs::write(&path, body)?;
    Ok(path)
}

/// Names of the files an export produces, relative to the output directory.
#[must_use]
pub fn export_file_names(format: ExportFormat) -> Vec<String> {
    let extension = match format {
        ExportFormat::Json => "json",
        ExportFormat::Yaml => "yaml",
    };
    let mut names = vec![
        format!("content.{extension}"),
        format!("person.{extension}"),
        format!("social.{extension}"),
        format!("newsletter.{extension}"),
    ];
    for page in Page::all() {
        names.push(format!("{}.{extension}", page.slug()));
    }
    names
}
