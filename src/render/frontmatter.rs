//! YAML frontmatter generation for MDX pages.

use crate::content::site::PageSummary;

/// Generate YAML frontmatter for a page.
///
/// Produces frontmatter with `slug`, `title`, and `description`, plus any
/// page-specific extra lines the caller supplies.
#[must_use]
pub fn generate_frontmatter(summary: &PageSummary, extra: &[String]) -> String {
    let mut lines = Vec::new();
    lines.push("---".to_string());
    lines.push(format!("slug: {}", summary.slug));
    lines.push(format!("title: {}", quote_yaml_string(&summary.title)));
    lines.push(format!(
        "description: {}",
        quote_yaml_string(&summary.description)
    ));
    for line in extra {
        lines.push(line.clone());
    }
    lines.push("---".to_string());
    lines.join("\n")
}

/// Quote a YAML string value if it contains special characters.
fn quote_yaml_string(s: &str) -> String {
    if s.contains(':') || s.contains('#') || s.contains('"') || s.starts_with(' ') {
        let escaped = s.replace('"', "\\\"");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}
