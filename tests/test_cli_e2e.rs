mod common;

use common::FolioProcess;
use folio::error::ExitCode;

// ============================================================================
// version command
// ============================================================================

#[test]
fn version_human() {
    let output = FolioProcess::spawn_command(&["version"]);
    assert!(
        output.status.success(),
        "version should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("folio"),
        "version output should contain 'folio': {stdout}"
    );
    // Check for semver-like pattern (digits.digits.digits)
    assert!(
        stdout.contains('.'),
        "version output should contain a version number: {stdout}"
    );
}

#[test]
fn version_json() {
    let output = FolioProcess::spawn_command(&["version", "--format", "json"]);
    assert!(
        output.status.success(),
        "version --format json should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("version JSON should be valid");
    assert_eq!(parsed["name"], "folio");
    assert!(
        parsed.get("version").is_some(),
        "JSON should have 'version' key: {stdout}"
    );
    assert!(
        parsed.get("rustc").is_some(),
        "JSON should have 'rustc' key: {stdout}"
    );
}

// ============================================================================
// completions command
// ============================================================================

#[test]
fn completions_bash() {
    let output = FolioProcess::spawn_command(&["completions", "bash"]);
    assert!(
        output.status.success(),
        "completions bash should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "completions bash should produce output");
    assert!(
        stdout.contains("folio"),
        "bash completions should reference folio: {stdout}"
    );
}

#[test]
fn completions_zsh() {
    let output = FolioProcess::spawn_command(&["completions", "zsh"]);
    assert!(
        output.status.success(),
        "completions zsh should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "completions zsh should produce output");
}

#[test]
fn completions_fish() {
    let output = FolioProcess::spawn_command(&["completions", "fish"]);
    assert!(
        output.status.success(),
        "completions fish should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "completions fish should produce output");
}

// ============================================================================
// sections command
// ============================================================================

#[test]
fn sections_list_human() {
    let output = FolioProcess::spawn_command(&["sections", "list"]);
    assert!(
        output.status.success(),
        "sections list should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    for slug in ["home", "about", "blog", "work", "gallery"] {
        assert!(stdout.contains(slug), "listing should mention {slug}");
    }
    assert!(
        stdout.contains("Projects"),
        "work page label should be 'Projects': {stdout}"
    );
}

#[test]
fn sections_list_json() {
    let output = FolioProcess::spawn_command(&["sections", "list", "--format", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("listing JSON should be valid");
    let rows = parsed.as_array().expect("listing should be an array");
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["slug"], "home");
    assert_eq!(rows[0]["title"], "Billy Lee's Portfolio");
}

#[test]
fn sections_show_about() {
    let output = FolioProcess::spawn_command(&["sections", "show", "about", "--format", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("page JSON");
    assert_eq!(parsed["title"], "About me");
    assert_eq!(parsed["calendar"]["link"], "https://cal.com");
    assert_eq!(
        parsed["work"]["experiences"][0]["company"],
        "University of Waterloo"
    );
}

#[test]
fn sections_show_unknown_slug_suggests() {
    let output = FolioProcess::spawn_command(&["sections", "show", "galery"]);
    assert!(!output.status.success(), "unknown slug should fail");
    assert_eq!(output.status.code(), Some(ExitCode::USAGE_ERROR));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("did you mean 'gallery'"),
        "stderr should suggest the close slug: {stderr}"
    );
    assert!(
        stderr.contains("Available pages"),
        "stderr should list valid slugs: {stderr}"
    );
}

// ============================================================================
// validate command
// ============================================================================

#[test]
fn validate_builtin_content_passes() {
    let output = FolioProcess::spawn_command(&["validate"]);
    assert!(
        output.status.success(),
        "validate should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Validation passed"),
        "expected pass summary: {stderr}"
    );
}

#[test]
fn validate_strict_builtin_content_passes() {
    let output = FolioProcess::spawn_command(&["validate", "--strict"]);
    assert!(
        output.status.success(),
        "validate --strict should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn validate_json_report() {
    let output = FolioProcess::spawn_command(&["validate", "--format", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("report JSON");
    assert_eq!(parsed["valid"], true);
    assert_eq!(parsed["errors"].as_array().map(Vec::len), Some(0));
    assert_eq!(parsed["warnings"].as_array().map(Vec::len), Some(0));
}

// ============================================================================
// export command
// ============================================================================

#[test]
fn export_json_tree() {
    let tmpdir = tempfile::tempdir().expect("failed to create temp dir");
    let out = tmpdir.path().join("content");

    let output = FolioProcess::spawn_command(&["export", "--out", out.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "export should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let tree = std::fs::read_to_string(out.join("content.json")).expect("content.json");
    let parsed: serde_json::Value = serde_json::from_str(&tree).expect("tree JSON");
    assert_eq!(parsed["person"]["name"], "Billy Lee");
    assert_eq!(parsed["gallery"]["label"], "Gallery");

    for name in ["person.json", "social.json", "newsletter.json", "work.json"] {
        assert!(out.join(name).exists(), "export should write {name}");
    }
}

#[test]
fn export_yaml_pretty() {
    let tmpdir = tempfile::tempdir().expect("failed to create temp dir");
    let out = tmpdir.path().join("content");

    let output = FolioProcess::spawn_command(&[
        "export",
        "--out",
        out.to_str().unwrap(),
        "--format",
        "yaml",
    ]);
    assert!(output.status.success());

    let social = std::fs::read_to_string(out.join("social.yaml")).expect("social.yaml");
    assert!(
        social.contains("name: GitHub"),
        "YAML export should carry the social names: {social}"
    );
}

// ============================================================================
// pages command
// ============================================================================

#[test]
fn pages_generates_all_mdx() {
    let tmpdir = tempfile::tempdir().expect("failed to create temp dir");
    let out = tmpdir.path().join("pages");

    let output = FolioProcess::spawn_command(&["pages", "--out", out.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "pages should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    for slug in ["home", "about", "blog", "work", "gallery"] {
        assert!(
            out.join(format!("{slug}.mdx")).exists(),
            "pages should write {slug}.mdx"
        );
    }

    let about = std::fs::read_to_string(out.join("about.mdx")).expect("about.mdx");
    assert!(about.starts_with("<!-- Auto-generated. Do not edit. -->"));
    assert!(about.contains("## Work Experience"));
}

#[test]
fn pages_single_page() {
    let tmpdir = tempfile::tempdir().expect("failed to create temp dir");
    let out = tmpdir.path().join("pages");

    let output = FolioProcess::spawn_command(&[
        "pages",
        "--out",
        out.to_str().unwrap(),
        "--page",
        "home",
    ]);
    assert!(output.status.success());
    assert!(out.join("home.mdx").exists());
    assert!(!out.join("about.mdx").exists());
}

// ============================================================================
// serve command
// ============================================================================

#[test]
fn serve_rejects_invalid_addr() {
    let output = FolioProcess::spawn_command(&["serve", "--http", "not-an-address"]);
    assert!(!output.status.success(), "invalid addr should fail");
    assert_eq!(output.status.code(), Some(ExitCode::SERVER_ERROR));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid bind address"),
        "stderr should explain the bad address: {stderr}"
    );
}
