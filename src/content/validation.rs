//! Content validation
//!
//! This module checks the content tree for integrity problems before it is
//! exported, rendered, or served. Validation runs on the fully assembled
//! [`SiteContent`] value.
//!
//! Validation collects ALL issues (doesn't stop at first) to provide
//! comprehensive feedback in one pass.

use std::collections::HashSet;

use url::Url;

use crate::content::schema::{ContentImage, Experience, Institution, SiteContent, Skill};
use crate::error::{Severity, ValidationIssue};

// ============================================================================
// Public API
// ============================================================================

/// Result of content validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (the tree must not ship with these).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Content validator.
///
/// Checks required fields, derived-string consistency, link and time zone
/// well-formedness, and image metadata across the whole tree.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a content tree and returns the result.
    ///
    /// This method collects all errors and warnings rather than stopping
    /// at the first issue.
    pub fn validate(&mut self, content: &SiteContent) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.validate_person(content);
        self.validate_social(content);
        self.validate_newsletter(content);
        self.validate_home(content);
        self.validate_about(content);
        self.validate_listing_pages(content);

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ========================================================================
    // Person
    // ========================================================================

    /// Validates the person profile.
    fn validate_person(&mut self, content: &SiteContent) {
        let person = &content.person;

        self.require_text("person.firstName", &person.first_name, "First name");
        self.require_text("person.lastName", &person.last_name, "Last name");
        self.require_text("person.role", &person.role, "Role");
        self.require_text("person.avatar", &person.avatar, "Avatar path");
        self.require_text("person.location", &person.location, "Location");

        // name must never drift from its parts
        let expected = format!("{} {}", person.first_name, person.last_name);
        self.check_derived("person.name", &person.name, &expected);

        // The UI feeds this to a live clock, so a bad zone breaks rendering.
        if !person.location.is_empty() && person.location.parse::<chrono_tz::Tz>().is_err() {
            self.add_error(
                "person.location",
                &format!(
                    "'{}' is not a valid IANA time zone identifier (e.g. 'America/Toronto')",
                    person.location
                ),
            );
        }

        if !person.avatar.is_empty() && !person.avatar.starts_with('/') {
            self.add_warning(
                "person.avatar",
                "Avatar path should be site-absolute (start with '/')",
            );
        }

        for (idx, language) in person.languages.iter().enumerate() {
            if language.trim().is_empty() {
                self.add_error(
                    &format!("person.languages[{idx}]"),
                    "Language entries cannot be empty",
                );
            }
        }
    }

    // ========================================================================
    // Social Links
    // ========================================================================

    /// Validates the social link list.
    fn validate_social(&mut self, content: &SiteContent) {
        let mut names = HashSet::new();

        for (idx, link) in content.social.iter().enumerate() {
            let path = format!("social[{idx}]");

            self.require_text(&format!("{path}.name"), &link.name, "Link name");
            self.require_text(&format!("{path}.icon"), &link.icon, "Icon identifier");
            self.require_text(&format!("{path}.link"), &link.link, "Link URL");

            if !names.insert(&link.name) {
                self.add_error(
                    &format!("{path}.name"),
                    &format!("Duplicate social link name: '{}'", link.name),
                );
            }

            if !link.link.is_empty() {
                self.check_link(&format!("{path}.link"), &link.link, true);
            }

            // Icons resolve against the site's icon set, which is keyed
            // by lowercase kebab-case identifiers.
            if !link.icon.is_empty() && !is_kebab_case(&link.icon) {
                self.add_warning(
                    &format!("{path}.icon"),
                    &format!("Icon identifier '{}' should be lowercase kebab-case", link.icon),
                );
            }
        }
    }

    // ========================================================================
    // Newsletter
    // ========================================================================

    /// Validates the newsletter section.
    fn validate_newsletter(&mut self, content: &SiteContent) {
        let newsletter = &content.newsletter;

        if newsletter.display {
            self.require_text("newsletter.title", &newsletter.title, "Newsletter title");
            self.require_text(
                "newsletter.description",
                &newsletter.description,
                "Newsletter description",
            );
        }

        // The title is derived from the first name even when hidden.
        if !newsletter.title.is_empty() {
            self.check_derived(
                "newsletter.title",
                &newsletter.title,
                &content.person.newsletter_title(),
            );
        }
    }

    // ========================================================================
    // Home Page
    // ========================================================================

    /// Validates the landing page.
    fn validate_home(&mut self, content: &SiteContent) {
        let home = &content.home;

        self.require_text("home.label", &home.label, "Label");
        self.require_text("home.title", &home.title, "Title");
        self.require_text("home.description", &home.description, "Description");
        self.require_text("home.headline", &home.headline, "Headline");
        self.require_text("home.subline", &home.subline, "Subline");

        self.check_derived("home.title", &home.title, &content.person.portfolio_title());
        self.check_derived(
            "home.description",
            &home.description,
            &content.person.portfolio_description(),
        );
    }

    // ========================================================================
    // About Page
    // ========================================================================

    /// Validates the about page and its blocks.
    fn validate_about(&mut self, content: &SiteContent) {
        let about = &content.about;

        self.require_text("about.label", &about.label, "Label");
        self.require_text("about.title", &about.title, "Title");
        self.require_text("about.description", &about.description, "Description");
        self.check_derived(
            "about.description",
            &about.description,
            &content.person.about_description(),
        );

        // Calendar: the link must be present and sound when the block shows;
        // a hidden block may keep a link around, but not a broken one.
        if about.calendar.display {
            self.require_text("about.calendar.link", &about.calendar.link, "Calendar link");
        }
        if !about.calendar.link.is_empty() {
            self.check_link("about.calendar.link", &about.calendar.link, false);
        }

        if about.intro.display {
            self.require_text("about.intro.title", &about.intro.title, "Intro title");
            if about.intro.description.is_empty() {
                self.add_warning(
                    "about.intro.description",
                    "Intro is displayed but has no paragraphs",
                );
            }
        }
        for (idx, paragraph) in about.intro.description.iter().enumerate() {
            if paragraph.trim().is_empty() {
                self.add_error(
                    &format!("about.intro.description[{idx}]"),
                    "Paragraphs cannot be empty",
                );
            }
        }

        if about.work.display {
            self.require_text("about.work.title", &about.work.title, "Section title");
            if about.work.experiences.is_empty() {
                self.add_warning(
                    "about.work.experiences",
                    "Work section is displayed but has no experiences",
                );
            }
        }
        self.validate_experiences(&about.work.experiences, "about.work.experiences");

        if about.studies.display {
            self.require_text("about.studies.title", &about.studies.title, "Section title");
            if about.studies.institutions.is_empty() {
                self.add_warning(
                    "about.studies.institutions",
                    "Studies section is displayed but has no institutions",
                );
            }
        }
        self.validate_institutions(&about.studies.institutions, "about.studies.institutions");

        if about.technical.display {
            self.require_text(
                "about.technical.title",
                &about.technical.title,
                "Section title",
            );
            if about.technical.skills.is_empty() {
                self.add_warning(
                    "about.technical.skills",
                    "Technical section is displayed but has no skills",
                );
            }
        }
        self.validate_skills(&about.technical.skills, "about.technical.skills");
    }

    // ========================================================================
    // Blog, Work and Gallery Pages
    // ========================================================================

    /// Validates the listing pages' header copy.
    fn validate_listing_pages(&mut self, content: &SiteContent) {
        let person = &content.person;

        self.require_text("blog.label", &content.blog.label, "Label");
        self.require_text("blog.title", &content.blog.title, "Title");
        self.require_text("blog.description", &content.blog.description, "Description");
        self.check_derived(
            "blog.description",
            &content.blog.description,
            &person.blog_description(),
        );

        self.require_text("work.label", &content.work.label, "Label");
        self.require_text("work.title", &content.work.title, "Title");
        self.require_text("work.description", &content.work.description, "Description");
        self.check_derived(
            "work.description",
            &content.work.description,
            &person.work_description(),
        );

        self.require_text("gallery.label", &content.gallery.label, "Label");
        self.require_text("gallery.title", &content.gallery.title, "Title");
        self.require_text(
            "gallery.description",
            &content.gallery.description,
            "Description",
        );
        self.check_derived(
            "gallery.description",
            &content.gallery.description,
            &person.gallery_description(),
        );

        self.validate_images(&content.gallery.images, "gallery.images");
    }

    // ========================================================================
    // Records
    // ========================================================================

    /// Validates the work history records.
    fn validate_experiences(&mut self, experiences: &[Experience], base_path: &str) {
        for (idx, exp) in experiences.iter().enumerate() {
            let path = format!("{base_path}[{idx}]");

            self.require_text(&format!("{path}.company"), &exp.company, "Company name");
            self.require_text(&format!("{path}.timeframe"), &exp.timeframe, "Timeframe");
            self.require_text(&format!("{path}.role"), &exp.role, "Role");

            if exp.achievements.is_empty() {
                self.add_error(
                    &format!("{path}.achievements"),
                    "An experience needs at least one achievement",
                );
            }
            for (a_idx, achievement) in exp.achievements.iter().enumerate() {
                if achievement.trim().is_empty() {
                    self.add_error(
                        &format!("{path}.achievements[{a_idx}]"),
                        "Achievements cannot be empty",
                    );
                }
            }

            self.validate_images(&exp.images, &format!("{path}.images"));
        }
    }

    /// Validates the education records.
    fn validate_institutions(&mut self, institutions: &[Institution], base_path: &str) {
        for (idx, institution) in institutions.iter().enumerate() {
            let path = format!("{base_path}[{idx}]");

            self.require_text(&format!("{path}.name"), &institution.name, "Institution name");

            if institution.description.is_empty() {
                self.add_error(
                    &format!("{path}.description"),
                    "An institution needs at least one description line",
                );
            }
            for (d_idx, line) in institution.description.iter().enumerate() {
                if line.trim().is_empty() {
                    self.add_error(
                        &format!("{path}.description[{d_idx}]"),
                        "Description lines cannot be empty",
                    );
                }
            }
        }
    }

    /// Validates the skill records.
    fn validate_skills(&mut self, skills: &[Skill], base_path: &str) {
        for (idx, skill) in skills.iter().enumerate() {
            let path = format!("{base_path}[{idx}]");

            self.require_text(&format!("{path}.title"), &skill.title, "Skill title");
            self.require_text(
                &format!("{path}.description"),
                &skill.description,
                "Skill description",
            );

            self.validate_images(&skill.images, &format!("{path}.images"));
        }
    }

    /// Validates image records.
    fn validate_images(&mut self, images: &[ContentImage], base_path: &str) {
        for (idx, image) in images.iter().enumerate() {
            let path = format!("{base_path}[{idx}]");

            self.require_text(&format!("{path}.src"), &image.src, "Image path");

            if !image.src.is_empty() && !image.src.starts_with('/') {
                self.add_warning(
                    &format!("{path}.src"),
                    "Image path should be site-absolute (start with '/')",
                );
            }

            if image.alt.trim().is_empty() {
                self.add_warning(&format!("{path}.alt"), "Image has empty alt text");
            }

            if image.width == 0 || image.height == 0 {
                self.add_error(
                    &path,
                    &format!(
                        "Image dimensions must be positive (got {}x{})",
                        image.width, image.height
                    ),
                );
            }
        }
    }

    // ========================================================================
    // Helper Methods
    // ========================================================================

    /// Checks a link for well-formedness and an allowed scheme.
    fn check_link(&mut self, path: &str, link: &str, allow_mailto: bool) {
        let Ok(url) = Url::parse(link) else {
            self.add_error(path, &format!("'{link}' is not a valid URL"));
            return;
        };

        match url.scheme() {
            // The url crate rejects host-less http(s) URLs at parse time,
            // so reaching here means the host is present.
            "http" | "https" => {}
            "mailto" if allow_mailto => {
                let address = url.path();
                if address.is_empty() || !address.contains('@') {
                    self.add_error(path, &format!("'{link}' is missing a mail address"));
                }
            }
            scheme => {
                let expected = if allow_mailto {
                    "http, https, or mailto"
                } else {
                    "http or https"
                };
                self.add_error(
                    path,
                    &format!("Unsupported scheme '{scheme}' in '{link}' (expected {expected})"),
                );
            }
        }
    }

    /// Checks that a stored value matches what it is derived from.
    fn check_derived(&mut self, path: &str, actual: &str, expected: &str) {
        if actual != expected {
            self.add_error(
                path,
                &format!("Value '{actual}' does not match the derived '{expected}'"),
            );
        }
    }

    /// Requires a non-blank text field.
    fn require_text(&mut self, path: &str, value: &str, what: &str) {
        if value.trim().is_empty() {
            self.add_error(path, &format!("{what} is required and cannot be empty"));
        }
    }

    /// Adds an error to the collection.
    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    /// Adds a warning to the collection.
    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Returns `true` for lowercase kebab-case identifiers like "github".
fn is_kebab_case(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

// ============================================================================
// Tests
// ============================================================================
