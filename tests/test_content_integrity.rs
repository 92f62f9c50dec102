//! Integration checks for the content tree's serialization contract and
//! the consistency of copy derived from the person record.

use folio::content::schema::SiteContent;
use folio::content::site::{Page, find_page, page_slugs, site, suggest_page};
use folio::content::validation::Validator;
use folio::render::render_page;

// ============================================================================
// Serialization contract
// ============================================================================

#[test]
fn tree_serializes_with_camel_case_keys() {
    let value = serde_json::to_value(site()).expect("tree should serialize");

    assert_eq!(value["person"]["firstName"], "Billy");
    assert_eq!(value["person"]["lastName"], "Lee");
    assert_eq!(value["about"]["tableOfContent"]["subItems"], false);
    assert!(value["person"].get("first_name").is_none());
    assert!(value["about"].get("table_of_content").is_none());
}

#[test]
fn tree_round_trips_losslessly() {
    let first = serde_json::to_string(site()).expect("serialize");
    let parsed: SiteContent = serde_json::from_str(&first).expect("deserialize");
    let second = serde_json::to_string(&parsed).expect("serialize again");
    assert_eq!(first, second);
}

#[test]
fn derived_name_is_materialized_on_the_wire() {
    let value = serde_json::to_value(&site().person).expect("person should serialize");
    assert_eq!(value["name"], "Billy Lee");
}

// ============================================================================
// Derived copy
// ============================================================================

#[test]
fn page_copy_never_drifts_from_person() {
    let content = site();
    let person = &content.person;

    assert_eq!(content.home.title, person.portfolio_title());
    assert_eq!(content.home.description, person.portfolio_description());
    assert_eq!(content.about.description, person.about_description());
    assert_eq!(content.blog.description, person.blog_description());
    assert_eq!(content.work.description, person.work_description());
    assert_eq!(content.gallery.description, person.gallery_description());
    assert_eq!(content.newsletter.title, person.newsletter_title());
}

#[test]
fn builtin_tree_validates_clean() {
    let result = Validator::new().validate(site());
    assert!(
        result.errors.is_empty(),
        "unexpected errors: {:?}",
        result.errors
    );
    assert!(
        result.warnings.is_empty(),
        "unexpected warnings: {:?}",
        result.warnings
    );
}

// ============================================================================
// Registry surface
// ============================================================================

#[test]
fn pages_enumerate_in_navigation_order() {
    assert_eq!(page_slugs(), vec!["home", "about", "blog", "work", "gallery"]);
}

#[test]
fn every_slug_resolves_and_summarizes() {
    let content = site();
    for page in Page::all() {
        assert_eq!(find_page(page.slug()), Some(*page));
        let summary = content.summary(*page);
        assert_eq!(summary.slug, page.slug());
        assert!(!summary.title.is_empty());
        assert!(!summary.description.is_empty());
    }
}

#[test]
fn close_typos_get_suggestions() {
    assert_eq!(suggest_page("galery"), Some("gallery".to_string()));
    assert_eq!(suggest_page("hoem"), Some("home".to_string()));
    assert_eq!(suggest_page("zzzzzz"), None);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn rendered_pages_are_stable_across_calls() {
    for page in Page::all() {
        let a = render_page(site(), *page);
        let b = render_page(site(), *page);
        assert_eq!(a, b, "render of {page} should be deterministic");
    }
}

#[test]
fn rendered_pages_carry_their_frontmatter() {
    for page in Page::all() {
        let mdx = render_page(site(), *page);
        assert!(
            mdx.contains(&format!("slug: {page}")),
            "{page} frontmatter should carry its slug"
        );
    }
}
