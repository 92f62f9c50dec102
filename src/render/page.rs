//! Per-page MDX generation.
//!
//! Assembles frontmatter and content blocks into one complete MDX file per
//! page. Output is deterministic given the same content tree, and blocks
//! with `display: false` are left out entirely.

use crate::content::schema::SiteContent;
use crate::content::site::Page;
use crate::render::blocks::{
    experience_block, image_line, institution_block, skill_block, social_line,
};
use crate::render::frontmatter::generate_frontmatter;

/// Marker comment at the top of every generated page.
const BANNER: &str = "<!-- Auto-generated. Do not edit. -->";

/// Generate a complete MDX page.
#[must_use]
pub fn render_page(content: &SiteContent, page: Page) -> String {
    let summary = content.summary(page);
    let mut sections = Vec::new();

    sections.push(BANNER.to_string());
    sections.push(String::new());

    sections.push(generate_frontmatter(&summary, &frontmatter_extras(content, page)));
    sections.push(String::new());

    match page {
        Page::Home => render_home(&mut sections, content),
        Page::About => render_about(&mut sections, content),
        Page::Blog => render_listing(&mut sections, &content.blog.title, &content.blog.description),
        Page::Work => render_listing(&mut sections, &content.work.title, &content.work.description),
        Page::Gallery => render_gallery(&mut sections, content),
    }

    sections.join("\n")
}

/// Page-specific frontmatter lines.
fn frontmatter_extras(content: &SiteContent, page: Page) -> Vec<String> {
    let mut extra = Vec::new();
    if page == Page::About {
        let toc = &content.about.table_of_content;
        if toc.display {
            if !toc.sub_items {
                extra.push("toc_max_heading_level: 2".to_string());
            }
        } else {
            extra.push("hide_table_of_contents: true".to_string());
        }
    }
    extra
}

/// Render the landing page body.
fn render_home(sections: &mut Vec<String>, content: &SiteContent) {
    sections.push(format!("# {}", content.home.headline));
    sections.push(String::new());
    sections.push(content.home.subline.clone());

    if content.newsletter.display {
        sections.push(String::new());
        sections.push(format!("## {}", content.newsletter.title));
        sections.push(String::new());
        sections.push(content.newsletter.description.clone());
    }
}

/// Render the about page body.
fn render_about(sections: &mut Vec<String>, content: &SiteContent) {
    let about = &content.about;
    let person = &content.person;

    sections.push(format!("# {}", about.title));
    sections.push(String::new());

    if about.avatar.display {
        sections.push(format!("![{}]({})", person.name, person.avatar));
        sections.push(String::new());
    }

    sections.push(format!("{} based in {}.", person.role, person.location));

    if !person.languages.is_empty() {
        sections.push(String::new());
        sections.push(format!("Languages: {}", person.languages.join(", ")));
    }

    if about.calendar.display {
        sections.push(String::new());
        sections.push(format!("[Schedule a call]({})", about.calendar.link));
    }

    sections.push(String::new());
    for link in &content.social {
        sections.push(social_line(link));
    }

    if about.intro.display {
        sections.push(String::new());
        sections.push(format!("## {}", about.intro.title));
        for paragraph in &about.intro.description {
            sections.push(String::new());
            sections.push(paragraph.clone());
        }
    }

    if about.work.display {
        sections.push(String::new());
        sections.push(format!("## {}", about.work.title));
        for exp in &about.work.experiences {
            sections.push(String::new());
            sections.push(experience_block(exp));
        }
    }

    if about.studies.display {
        sections.push(String::new());
        sections.push(format!("## {}", about.studies.title));
        for institution in &about.studies.institutions {
            sections.push(String::new());
            sections.push(institution_block(institution));
        }
    }

    if about.technical.display {
        sections.push(String::new());
        sections.push(format!("## {}", about.technical.title));
        for skill in &about.technical.skills {
            sections.push(String::new());
            sections.push(skill_block(skill));
        }
    }
}

/// Render a listing page header (blog and projects).
fn render_listing(sections: &mut Vec<String>, title: &str, description: &str) {
    sections.push(format!("# {title}"));
    sections.push(String::new());
    sections.push(description.to_string());
}

/// Render the gallery page body.
fn render_gallery(sections: &mut Vec<String>, content: &SiteContent) {
    render_listing(
        sections,
        &content.gallery.title,
        &content.gallery.description,
    );

    if !content.gallery.images.is_empty() {
        sections.push(String::new());
        for image in &content.gallery.images {
            sections.push(image_line(image));
        }
    }
}
