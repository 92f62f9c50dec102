//! Content schema types
//!
//! This module defines the typed records that make up the site's content
//! tree. The records are plain data: every value is fixed at build time and
//! the only computation is the handful of name-derived strings on [`Person`].
//!
//! Serialization uses camelCase keys (`firstName`, `tableOfContent`,
//! `subItems`, ...) because downstream consumers read the exported JSON by
//! those names. Renaming a field here is a breaking change for the site.

use serde::{Deserialize, Serialize};

// ============================================================================
// Site Content (root)
// ============================================================================

/// The complete content tree for the site.
///
/// One value of this type describes everything the site renders: who the
/// person is, where to find them, and the copy for every page. Sections own
/// their data outright; nothing is shared or referenced between branches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    /// The person the portfolio belongs to
    pub person: Person,

    /// External profile links, in display order
    pub social: Vec<SocialLink>,

    /// Newsletter signup section
    pub newsletter: Newsletter,

    /// Landing page content
    pub home: Home,

    /// About page content
    pub about: About,

    /// Blog page header content
    pub blog: Blog,

    /// Projects page header content
    pub work: WorkPage,

    /// Gallery page content
    pub gallery: Gallery,
}

// ============================================================================
// Person
// ============================================================================

/// The site owner's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Full display name, always `"{firstName} {lastName}"`.
    ///
    /// Materialized as a field so the serialized record carries it; build
    /// through [`Person::new`] so it cannot drift from its parts.
    pub name: String,

    /// Professional role, used verbatim in page descriptions
    pub role: String,

    /// Site-absolute path to the avatar image
    pub avatar: String,

    /// IANA time zone identifier (e.g. `America/Toronto`), drives the
    /// live local-time display
    pub location: String,

    /// Languages the person speaks; an empty list hides the block
    pub languages: Vec<String>,
}

impl Person {
    /// Build a person record, deriving `name` from the name parts.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: impl Into<String>,
        avatar: impl Into<String>,
        location: impl Into<String>,
        languages: Vec<String>,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let name = format!("{first_name} {last_name}");
        Self {
            first_name,
            last_name,
            name,
            role: role.into(),
            avatar: avatar.into(),
            location: location.into(),
            languages,
        }
    }

    /// Title for the landing page: `"{name}'s Portfolio"`.
    #[must_use]
    pub fn portfolio_title(&self) -> String {
        format!("{}'s Portfolio", self.name)
    }

    /// Meta description for the landing page.
    #[must_use]
    pub fn portfolio_description(&self) -> String {
        format!("Portfolio website showcasing my work as a {}", self.role)
    }

    /// Meta description for the about page.
    #[must_use]
    pub fn about_description(&self) -> String {
        format!("Meet {}, {} from {}", self.name, self.role, self.location)
    }

    /// Meta description for the blog page.
    #[must_use]
    pub fn blog_description(&self) -> String {
        format!("Read what {} has been up to recently", self.name)
    }

    /// Meta description for the projects page.
    #[must_use]
    pub fn work_description(&self) -> String {
        format!("Design and dev projects by {}", self.name)
    }

    /// Meta description for the gallery page.
    #[must_use]
    pub fn gallery_description(&self) -> String {
        format!("A photo collection by {}", self.name)
    }

    /// Newsletter section title: `"Subscribe to {firstName}'s Newsletter"`.
    #[must_use]
    pub fn newsletter_title(&self) -> String {
        format!("Subscribe to {}'s Newsletter", self.first_name)
    }
}

// ============================================================================
// Social Links
// ============================================================================

/// One external profile link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    /// Display name (e.g. "GitHub")
    pub name: String,

    /// Icon identifier, resolved by the site's icon set
    pub icon: String,

    /// Target URL; `http(s)` or `mailto`
    pub link: String,
}

// ============================================================================
// Newsletter
// ============================================================================

/// Newsletter signup section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    /// Whether the signup form renders at all
    pub display: bool,

    /// Section title
    pub title: String,

    /// Pitch line under the title
    pub description: String,
}

// ============================================================================
// Home Page
// ============================================================================

/// Landing page content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Home {
    /// Navigation label
    pub label: String,

    /// Page title, derived from the person's name
    pub title: String,

    /// Meta description, derived from the person's role
    pub description: String,

    /// Large headline
    pub headline: String,

    /// Supporting line under the headline
    pub subline: String,
}

// ============================================================================
// About Page
// ============================================================================

/// About page content and its per-block display toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    /// Navigation label
    pub label: String,

    /// Page title
    pub title: String,

    /// Meta description, derived from name, role and location
    pub description: String,

    /// Table-of-contents sidebar settings
    pub table_of_content: TableOfContent,

    /// Avatar column settings
    pub avatar: AvatarToggle,

    /// Booking-link settings
    pub calendar: Calendar,

    /// Introduction block
    pub intro: Intro,

    /// Work experience block
    pub work: WorkSection,

    /// Education block
    pub studies: StudiesSection,

    /// Technical skills block
    pub technical: TechnicalSection,
}

/// Table-of-contents sidebar settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOfContent {
    /// Whether the sidebar renders
    pub display: bool,

    /// Whether entries within a section are listed too
    pub sub_items: bool,
}

/// Avatar column settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarToggle {
    /// Whether the avatar column renders
    pub display: bool,
}

/// Booking-link settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    /// Whether the booking link renders
    pub display: bool,

    /// Scheduling page URL
    pub link: String,
}

/// Introduction block: a title over ordered paragraphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intro {
    /// Whether the block renders
    pub display: bool,

    /// Block heading
    pub title: String,

    /// Paragraphs, in reading order
    pub description: Vec<String>,
}

/// Work experience block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSection {
    /// Whether the block renders
    pub display: bool,

    /// Block heading
    pub title: String,

    /// Positions held, most recent first
    pub experiences: Vec<Experience>,
}

/// Education block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudiesSection {
    /// Whether the block renders
    pub display: bool,

    /// Block heading
    pub title: String,

    /// Schools attended
    pub institutions: Vec<Institution>,
}

/// Technical skills block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSection {
    /// Whether the block renders
    pub display: bool,

    /// Block heading
    pub title: String,

    /// Skills, in display order
    pub skills: Vec<Skill>,
}

// ============================================================================
// Records
// ============================================================================

/// One position in the work history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Employer name, also used as the block heading
    pub company: String,

    /// Human-readable date range (e.g. "Jan 2024 - May 2024")
    pub timeframe: String,

    /// Position title
    pub role: String,

    /// What was accomplished, one bullet per entry
    pub achievements: Vec<String>,

    /// Optional showcase images
    pub images: Vec<ContentImage>,
}

/// One school in the education history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    /// School name
    pub name: String,

    /// Description lines, in reading order
    pub description: Vec<String>,
}

/// One entry in the technical skills list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Skill name
    pub title: String,

    /// What the person does with it
    pub description: String,

    /// Optional showcase images
    pub images: Vec<ContentImage>,
}

/// An image reference with layout hints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentImage {
    /// Site-absolute path to the image
    pub src: String,

    /// Alternative text
    pub alt: String,

    /// Aspect-ratio width
    pub width: u32,

    /// Aspect-ratio height
    pub height: u32,
}

// ============================================================================
// Blog, Work and Gallery Pages
// ============================================================================

/// Blog page header content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    /// Navigation label
    pub label: String,

    /// Page title
    pub title: String,

    /// Meta description, derived from the person's name
    pub description: String,
}

/// Projects page header content.
///
/// Named `WorkPage` to keep it apart from the about page's [`WorkSection`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkPage {
    /// Navigation label
    pub label: String,

    /// Page title
    pub title: String,

    /// Meta description, derived from the person's name
    pub description: String,
}

/// Gallery page content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gallery {
    /// Navigation label
    pub label: String,

    /// Page title
    pub title: String,

    /// Meta description, derived from the person's name
    pub description: String,

    /// Photos, in display order
    pub images: Vec<ContentImage>,
}

// ============================================================================
// Tests
// ============================================================================
