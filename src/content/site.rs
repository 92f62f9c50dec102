//! Built-in site content
//!
//! The content tree embedded in the binary at compile time. This is the
//! single source of truth for everything the site shows; editing it and
//! rebuilding is the whole publishing workflow.

use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

use crate::content::schema::{
    About, AvatarToggle, Blog, Calendar, ContentImage, Experience, Gallery, Home, Institution,
    Intro, Newsletter, Person, SiteContent, Skill, SocialLink, StudiesSection, TableOfContent,
    TechnicalSection, WorkPage, WorkSection,
};
use crate::error::Result;

// ============================================================================
// Pages
// ============================================================================

/// The site's pages, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Page {
    /// Landing page.
    Home,
    /// About page.
    About,
    /// Blog page.
    Blog,
    /// Projects page.
    Work,
    /// Gallery page.
    Gallery,
}

impl Page {
    /// Returns the URL slug for this page.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Blog => "blog",
            Self::Work => "work",
            Self::Gallery => "gallery",
        }
    }

    /// Returns all pages in navigation order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Home, Self::About, Self::Blog, Self::Work, Self::Gallery]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// One row in a page listing: the slug plus the page's header copy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    /// URL slug
    pub slug: String,
    /// Navigation label
    pub label: String,
    /// Page title
    pub title: String,
    /// Meta description
    pub description: String,
}

// ============================================================================
// Registry
// ============================================================================

/// The content tree, assembled once on first access.
static SITE: LazyLock<SiteContent> = LazyLock::new(build_site);

/// Assemble the built-in content.
///
/// Page titles and descriptions that depend on the person are derived
/// through [`Person`]'s methods rather than spelled out again, so the
/// copy cannot drift from the profile.
fn build_site() -> SiteContent {
    let person = Person::new(
        "Billy",
        "Lee",
        "Full Stack Developer",
        "/images/avatar.jpg",
        "America/Toronto",
        vec![],
    );

    let social = vec![
        SocialLink {
            name: "GitHub".to_string(),
            icon: "github".to_string(),
            link: "https://github.com/pl3lee".to_string(),
        },
        SocialLink {
            name: "LinkedIn".to_string(),
            icon: "linkedin".to_string(),
            link: "https://www.linkedin.com/in/billy-pl-lee/".to_string(),
        },
        SocialLink {
            name: "Email".to_string(),
            icon: "email".to_string(),
            link: "mailto:billy.pl.lee@gmail.com".to_string(),
        },
    ];

    let newsletter = Newsletter {
        display: false,
        title: person.newsletter_title(),
        description: "I occasionally write about design, technology, and share thoughts \
                      on the intersection of creativity and engineering."
            .to_string(),
    };

    let home = Home {
        label: "Home".to_string(),
        title: person.portfolio_title(),
        description: person.portfolio_description(),
        headline: "Full Stack Developer".to_string(),
        subline: "I'm Billy, a recent graduate from the University of Waterloo, and a \
                  current part time student at Georgia Tech."
            .to_string(),
    };

    let about = About {
        label: "About".to_string(),
        title: "About me".to_string(),
        description: person.about_description(),
        table_of_content: TableOfContent {
            display: true,
            sub_items: false,
        },
        avatar: AvatarToggle { display: true },
        calendar: Calendar {
            display: false,
            link: "https://cal.com".to_string(),
        },
        intro: Intro {
            display: true,
            title: "Introduction".to_string(),
            description: vec![
                "I am a Math graduate from the University of Waterloo, and I am currently \
                 working on my Master's in Computer Science at Georgia Tech."
                    .to_string(),
                "My enthusiasm for solving real-world problems led me to create UWPlan, a \
                 Next.js-powered degree planning tool that serves over 500 daily users, \
                 helping students map their courses and visualize their academic progress."
                    .to_string(),
                "I love to tinker with technology. I built a home server using Unraid and \
                 have set up numerous self-hosted services for me and my friends' needs."
                    .to_string(),
            ],
        },
        work: WorkSection {
            display: true,
            title: "Work Experience".to_string(),
            experiences: vec![
                Experience {
                    company: "University of Waterloo".to_string(),
                    timeframe: "Jan 2024 - May 2024".to_string(),
                    role: "Lead Developer".to_string(),
                    achievements: vec![
                        "Led the development of a Next.js-based web platform for a \
                         figures-of-speech research group, serving 10+ researchers and \
                         enabling user submissions and annotations of figure instances."
                            .to_string(),
                        "Revamped the CI/CD pipeline using GitLab, Docker, and Docker \
                         Compose, reducing deployment time by 70%."
                            .to_string(),
                        "Established a robust staging environment to improve testing \
                         efficiency and reduce production defects by 90%, ensuring a more \
                         reliable and high-quality development workflow."
                            .to_string(),
                        "Coordinated an Agile workflow, leading weekly stand-ups and code \
                         reviews for a team of 5 developers, and implemented a documentation \
                         site to maintain comprehensive, up-to-date project documentation."
                            .to_string(),
                    ],
                    images: vec![],
                },
                Experience {
                    company: "University of Waterloo".to_string(),
                    timeframe: "Sept 2023 - Dec 2023".to_string(),
                    role: "Full Stack Developer".to_string(),
                    achievements: vec![
                        "Implemented advanced features like dynamic highlighting \
                         functionality with rich text support using Tiptap."
                            .to_string(),
                        "Reduced page load time by 80% by consolidating data retrieval to a \
                         single API call with server-side props, utilizing Context API for \
                         efficient data distribution, and implementing pagination to \
                         minimize data overload."
                            .to_string(),
                        "Engineered and tested 10 Golang REST endpoints backed by MySQL, \
                         improving query response times by 20%."
                            .to_string(),
                        "Authored comprehensive tests using Jest and React Testing Library, \
                         increasing code coverage by 30%."
                            .to_string(),
                    ],
                    images: vec![],
                },
                Experience {
                    company: "Hewlett Packard Enterprise".to_string(),
                    timeframe: "May 2023 - Aug 2023".to_string(),
                    role: "Software Developer Intern".to_string(),
                    achievements: vec![
                        "Developed and launched a React.js-based demo portal viewed by 10 \
                         internal stakeholders, effectively showcasing HPE GreenLake \
                         solutions and reducing the average demo preparation time by 50%."
                            .to_string(),
                        "Automated and optimized demo workflows with Python and Bash \
                         scripts, and provisioned VM environments for demonstrations, \
                         reducing manual setup time by 80%."
                            .to_string(),
                    ],
                    images: vec![],
                },
                Experience {
                    company: "Bolee Machine Tool Ltd.".to_string(),
                    timeframe: "Apr 2023 - May 2023".to_string(),
                    role: "Software Developer Intern".to_string(),
                    achievements: vec![
                        "Tackled the challenge of time-consuming manual product entries on \
                         the company's WordPress e-commerce site, previously reliant on a \
                         lengthy admin GUI process of around 5 minutes per product."
                            .to_string(),
                        "Revolutionized product management by developing a Python-based \
                         automation tool using Selenium for the company's WordPress \
                         e-commerce site; achieved a 99% reduction in time required for \
                         bulk price updates."
                            .to_string(),
                        "Managed and configured company VPN and NAS storage servers to \
                         enhance data security and accessibility."
                            .to_string(),
                    ],
                    images: vec![],
                },
            ],
        },
        studies: StudiesSection {
            display: true,
            title: "Studies".to_string(),
            institutions: vec![
                Institution {
                    name: "Georgia Institute of Technology".to_string(),
                    description: vec![
                        "Honours Bachelor of Mathematics".to_string(),
                        "Master of Science in Computer Science".to_string(),
                        "Specialization in Computing Systems".to_string(),
                    ],
                },
                Institution {
                    name: "University of Waterloo".to_string(),
                    description: vec![
                        "Honours Bachelor of Mathematics".to_string(),
                        "Dean's Honour (GPA: 3.9/4.0)".to_string(),
                        "Double Major in Computational Mathematics and Combinatorics & \
                         Optimization"
                            .to_string(),
                        "Minor in Computer Science".to_string(),
                    ],
                },
            ],
        },
        technical: TechnicalSection {
            display: false,
            title: "Technical skills".to_string(),
            skills: vec![
                Skill {
                    title: "Figma".to_string(),
                    description: "Able to prototype in Figma with Once UI with unnatural speed."
                        .to_string(),
                    images: vec![
                        ContentImage {
                            src: "/images/projects/project-01/cover-02.jpg".to_string(),
                            alt: "Project image".to_string(),
                            width: 16,
                            height: 9,
                        },
                        ContentImage {
                            src: "/images/projects/project-01/cover-03.jpg".to_string(),
                            alt: "Project image".to_string(),
                            width: 16,
                            height: 9,
                        },
                    ],
                },
                Skill {
                    title: "Next.js".to_string(),
                    description: "Building next gen apps with Next.js + Once UI + Supabase."
                        .to_string(),
                    images: vec![ContentImage {
                        src: "/images/projects/project-01/cover-04.jpg".to_string(),
                        alt: "Project image".to_string(),
                        width: 16,
                        height: 9,
                    }],
                },
            ],
        },
    };

    let blog = Blog {
        label: "Blog".to_string(),
        title: "Writing about tech...".to_string(),
        description: person.blog_description(),
    };

    let work = WorkPage {
        label: "Projects".to_string(),
        title: "My projects".to_string(),
        description: person.work_description(),
    };

    let gallery = Gallery {
        label: "Gallery".to_string(),
        title: "My photo gallery".to_string(),
        description: person.gallery_description(),
        images: vec![],
    };

    SiteContent {
        person,
        social,
        newsletter,
        home,
        about,
        blog,
        work,
        gallery,
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Returns the built-in content tree.
#[must_use]
pub fn site() -> &'static SiteContent {
    &SITE
}

/// Look up a page by exact slug.
#[must_use]
pub fn find_page(slug: &str) -> Option<Page> {
    Page::all().iter().copied().find(|p| p.slug() == slug)
}

/// Suggest a similar page slug for typo correction.
///
/// Returns the closest match if its Damerau-Levenshtein distance is ≤ 2.
#[must_use]
pub fn suggest_page(input: &str) -> Option<String> {
    Page::all()
        .iter()
        .map(|p| (p.slug(), strsim::damerau_levenshtein(input, p.slug())))
        .filter(|(_, dist)| *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(slug, _)| slug.to_string())
}

/// Returns all page slugs in navigation order.
#[must_use]
pub fn page_slugs() -> Vec<&'static str> {
    Page::all().iter().map(|p| p.slug()).collect()
}

impl SiteContent {
    /// Returns the listing row for one page.
    #[must_use]
    pub fn summary(&self, page: Page) -> PageSummary {
        let (label, title, description) = match page {
            Page::Home => (&self.home.label, &self.home.title, &self.home.description),
            Page::About => (&self.about.label, &self.about.title, &self.about.description),
            Page::Blog => (&self.blog.label, &self.blog.title, &self.blog.description),
            Page::Work => (&self.work.label, &self.work.title, &self.work.description),
            Page::Gallery => (
                &self.gallery.label,
                &self.gallery.title,
                &self.gallery.description,
            ),
        };
        PageSummary {
            slug: page.slug().to_string(),
            label: label.clone(),
            title: title.clone(),
            description: description.clone(),
        }
    }

    /// Returns one page's content as a JSON value.
    pub fn page_value(&self, page: Page) -> Result<serde_json::Value> {
        let value = match page {
            Page::Home => serde_json::to_value(&self.home)?,
            Page::About => serde_json::to_value(&self.about)?,
            Page::Blog => serde_json::to_value(&self.blog)?,
            Page::Work => serde_json::to_value(&self.work)?,
            Page::Gallery => serde_json::to_value(&self.gallery)?,
        };
        Ok(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
