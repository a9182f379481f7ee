use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn folio_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("folio"));
    cmd.current_dir(dir.path())
        .env_remove("FOLIO_CONFIG")
        .env_remove("FOLIO_EMAIL_SERVICE_ID")
        .env_remove("FOLIO_EMAIL_TEMPLATE_ID")
        .env_remove("FOLIO_EMAIL_PUBLIC_KEY")
        .env("NO_COLOR", "1");
    cmd
}

const CONTENT: &str = r#"
profile:
  name: Ada Lovelace
  title: Analyst
  tagline: Notes on the engine
  hero_introduction: Hello
  biography: First paragraph.
  contact:
    email: ada@example.com
    phone: "0000"
    location: London
    linkedin: https://linkedin.com/in/ada
  resume_url: /assets/ada.pdf
projects:
  - id: "1"
    title: Difference Engine
    slug: difference-engine
    description: Tables
    long_description: Computes polynomial tables
    category: app
    cover_image: /assets/difference.png
    year: "1822"
  - id: "2"
    title: Analytical Engine
    slug: analytical-engine
    description: A machine
    long_description: A general purpose machine
    category: ai
    cover_image: /assets/engine.png
    year: "1843"
skills:
  - name: Mathematics
    category: technical
    level: 99
"#;

fn write_site(dir: &TempDir, content: &str) {
    std::fs::write(dir.path().join("content.yml"), content).unwrap();
    std::fs::write(
        dir.path().join(".folio.yml"),
        "content:\n  path: content.yml\n",
    )
    .unwrap();
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    let temp_dir = TempDir::new().unwrap();
    folio_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("portfolio"));
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();
    folio_cmd(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    folio_cmd(&temp_dir)
        .args(["--config", "nope.yml", "projects"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

// =============================================================================
// Built-in content
// =============================================================================

#[test]
fn test_projects_lists_builtin_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let output = folio_cmd(&temp_dir).arg("projects").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let quantum = stdout.find("quantum96").unwrap();
    let chess = stdout.find("chess-tic-tac-toe").unwrap();
    assert!(quantum < chess);
}

#[test]
fn test_projects_category_filter() {
    let temp_dir = TempDir::new().unwrap();
    folio_cmd(&temp_dir)
        .args(["projects", "--category", "ai"])
        .assert()
        .success()
        .stdout(predicate::str::contains("accident-detection"))
        .stdout(predicate::str::contains("quantum96").not());
}

#[test]
fn test_show_project() {
    let temp_dir = TempDir::new().unwrap();
    folio_cmd(&temp_dir)
        .args(["show", "quantum96"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quantum96"))
        .stdout(predicate::str::contains("/project/quantum96"));
}

#[test]
fn test_show_project_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = folio_cmd(&temp_dir)
        .args(["show", "quantum96", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let project: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(project["slug"], "quantum96");
    assert_eq!(project["category"], "web");
}

#[test]
fn test_show_unknown_slug_fails() {
    let temp_dir = TempDir::new().unwrap();
    folio_cmd(&temp_dir)
        .args(["show", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project not found"));
}

#[test]
fn test_show_is_case_sensitive() {
    let temp_dir = TempDir::new().unwrap();
    folio_cmd(&temp_dir)
        .args(["show", "Quantum96"])
        .assert()
        .failure();
}

#[test]
fn test_skills_json_groups() {
    let temp_dir = TempDir::new().unwrap();
    let output = folio_cmd(&temp_dir)
        .args(["skills", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let groups: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(groups["technical"].as_array().unwrap().len(), 6);
    assert_eq!(groups["soft"].as_array().unwrap().len(), 6);
    assert_eq!(groups["languages"].as_array().unwrap().len(), 2);
}

#[test]
fn test_skills_text_headings() {
    let temp_dir = TempDir::new().unwrap();
    folio_cmd(&temp_dir)
        .arg("skills")
        .assert()
        .success()
        .stdout(predicate::str::contains("Technical Skills"))
        .stdout(predicate::str::contains("Languages"));
}

#[test]
fn test_certificates_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = folio_cmd(&temp_dir)
        .args(["certificates", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let certificates: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(certificates.as_array().unwrap().len(), 5);
}

#[test]
fn test_check_builtin() {
    let temp_dir = TempDir::new().unwrap();
    folio_cmd(&temp_dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in content"))
        .stdout(predicate::str::contains("4 projects"));
}

// =============================================================================
// Custom content
// =============================================================================

#[test]
fn test_custom_catalog_from_config() {
    let temp_dir = TempDir::new().unwrap();
    write_site(&temp_dir, CONTENT);

    folio_cmd(&temp_dir)
        .arg("projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("difference-engine"))
        .stdout(predicate::str::contains("quantum96").not());
}

#[test]
fn test_config_discovered_from_subdirectory() {
    let temp_dir = TempDir::new().unwrap();
    write_site(&temp_dir, CONTENT);
    let nested = temp_dir.path().join("drafts");
    std::fs::create_dir(&nested).unwrap();

    Command::new(assert_cmd::cargo::cargo_bin!("folio"))
        .current_dir(&nested)
        .env_remove("FOLIO_CONFIG")
        .args(["show", "analytical-engine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Analytical Engine"));
}

#[test]
fn test_check_reports_violations() {
    let temp_dir = TempDir::new().unwrap();
    let broken = CONTENT.replace("slug: analytical-engine", "slug: difference-engine");
    write_site(&temp_dir, &broken);

    folio_cmd(&temp_dir)
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("duplicate project slug 'difference-engine'"));
}

#[test]
fn test_invalid_catalog_blocks_listing() {
    let temp_dir = TempDir::new().unwrap();
    let broken = CONTENT.replace("level: 99", "level: 150");
    write_site(&temp_dir, &broken);

    folio_cmd(&temp_dir)
        .arg("projects")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Catalog integrity error"));
}

// =============================================================================
// Contact
// =============================================================================

#[test]
fn test_contact_rejects_invalid_form() {
    let temp_dir = TempDir::new().unwrap();
    folio_cmd(&temp_dir)
        .args([
            "contact",
            "--name",
            "Ada",
            "--email",
            "not-an-email",
            "--subject",
            "Hi",
            "--message",
            "Hello",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("email"));
}

#[test]
fn test_contact_without_credentials_reports_failure() {
    let temp_dir = TempDir::new().unwrap();
    folio_cmd(&temp_dir)
        .args([
            "contact",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--subject",
            "Hi",
            "--message",
            "Hello",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error sending message"));
}
