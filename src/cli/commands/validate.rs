//! Validate command handler
//!
//! Runs the content integrity checks and reports every finding.

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::content::site::site;
use crate::content::validation::Validator;
use crate::error::{ContentError, FolioError};

/// Check the content tree for integrity issues.
///
/// Reports every error and warning found. Warnings do not fail the run
/// unless `--strict` is given.
///
/// # Errors
///
/// Returns a content error when validation fails.
pub fn run(args: &ValidateArgs) -> Result<(), FolioError> {
    let mut validator = Validator::new();
    let result = validator.validate(site());

    match args.format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "errors": result
                    .errors
                    .iter()
                    .map(|i| serde_json::json!({ "path": i.path, "message": i.message }))
                    .collect::<Vec<_>>(),
                "warnings": result
                    .warnings
                    .iter()
                    .map(|i| serde_json::json!({ "path": i.path, "message": i.message }))
                    .collect::<Vec<_>>(),
                "valid": !result.has_errors(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            for issue in result.errors.iter().chain(result.warnings.iter()) {
                eprintln!("{issue}");
            }

            let error_total = result.errors.len();
            let warning_total = result.warnings.len();
            if error_total > 0 || warning_total > 0 {
                eprintln!("\n{error_total} error(s), {warning_total} warning(s)");
            } else {
                eprintln!("Validation passed");
            }
        }
    }

    let failing = if args.strict {
        result.errors.len() + result.warnings.len()
    } else {
        result.errors.len()
    };

    if failing > 0 {
        let mut issues = result.errors;
        issues.extend(result.warnings);
        return Err(ContentError::ValidationFailed {
            error_count: failing,
            issues,
        }
        .into());
    }

    Ok(())
}
