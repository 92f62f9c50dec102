//! Markdown fragments for individual content records.
//!
//! Each function maps one record to a deterministic piece of markdown.

use crate::content::schema::{ContentImage, Experience, Institution, Skill, SocialLink};

/// Render a social link as a list entry.
#[must_use]
pub fn social_line(link: &SocialLink) -> String {
    format!("- [{}]({})", link.name, link.link)
}

/// Render an image reference.
#[must_use]
pub fn image_line(image: &ContentImage) -> String {
    format!("![{}]({})", image.alt, image.src)
}

/// Render one work experience as a heading, a role line, and bullets.
#[must_use]
pub fn experience_block(exp: &Experience) -> String {
    let mut lines = Vec::new();
    lines.push(format!("### {}", exp.company));
    lines.push(String::new());
    lines.push(format!("**{}** · {}", exp.role, exp.timeframe));
    lines.push(String::new());
    for achievement in &exp.achievements {
        lines.push(format!("- {achievement}"));
    }
    if !exp.images.is_empty() {
        lines.push(String::new());
        for image in &exp.images {
            lines.push(image_line(image));
        }
    }
    lines.join("\n")
}

/// Render one institution as a heading over its description paragraphs.
#[must_use]
pub fn institution_block(institution: &Institution) -> String {
    let mut lines = Vec::new();
    lines.push(format!("### {}", institution.name));
    for paragraph in &institution.description {
        lines.push(String::new());
        lines.push(paragraph.clone());
    }
    lines.join("\n")
}

/// Render one skill as a heading, its description, and any images.
#[must_use]
pub fn skill_block(skill: &Skill) -> String {
    let mut lines = Vec::new();
    lines.push(format!("### {}", skill.title));
    lines.push(String::new());
    lines.push(skill.description.clone());
    if !skill.images.is_empty() {
        lines.push(String::new());
        for image in &skill.images {
            lines.push(image_line(image));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_line() {
        let link = SocialLink {
            name: "GitHub".to_string(),
            icon: "github".to_string(),
            link: "https://github.com/pl3lee".to_string(),
        };
        assert_eq!(social_line(&link), "- [GitHub](https://github.com/pl3lee)");
    }

    #[test]
    fn test_image_line() {
        let image = ContentImage {
            src: "/images/projects/project-01/cover-02.jpg".to_string(),
            alt: "Project image".to_string(),
            width: 16,
            height: 9,
        };
        assert_eq!(
            image_line(&image),
            "![Project image](/images/projects/project-01/cover-02.jpg)"
        );
    }

    #[test]
    fn test_experience_block_structure() {
        let exp = Experience {
            company: "Acme".to_string(),
            timeframe: "Jan 2024 - May 2024".to_string(),
            role: "Engineer".to_string(),
            achievements: vec!["Did a thing.".to_string(), "Did another.".to_string()],
            images: vec![],
        };
        let block = experience_block(&exp);
        assert!(block.starts_with("### Acme"));
        assert!(block.contains("**Engineer** · Jan 2024 - May 2024"));
        assert!(block.contains("- Did a thing."));
        assert!(block.contains("- Did another."));
        assert!(!block.contains("!["));
    }

    #[test]
    fn test_institution_block_paragraphs() {
        let institution = Institution {
            name: "University of Waterloo".to_string(),
            description: vec![
                "Honours Bachelor of Mathematics".to_string(),
                "Minor in Computer Science".to_string(),
            ],
        };
        let block = institution_block(&institution);
        assert!(block.starts_with("### University of Waterloo"));
        // Paragraphs are blank-line separated.
        assert!(block.contains("\n\nHonours Bachelor of Mathematics"));
        assert!(block.contains("\n\nMinor in Computer Science"));
    }

    #[test]
    fn test_skill_block_with_images() {
        let skill = Skill {
            title: "Figma".to_string(),
            description: "Prototyping.".to_string(),
            images: vec![ContentImage {
                src: "/images/projects/project-01/cover-02.jpg".to_string(),
                alt: "Project image".to_string(),
                width: 16,
                height: 9,
            }],
        };
        let block = skill_block(&skill);
        assert!(block.starts_with("### Figma"));
        assert!(block.contains("Prototyping."));
        assert!(block.contains("![Project image]"));
    }
}
