use super::*;
use crate::extension_config::GithubFieldValues;

fn scenario_with_files(files: &[&str]) -> Scenario {
    Scenario {
        name: "github-actions-basic".to_string(),
        description: "Basic GitHub Actions CI/CD".to_string(),
        config: ExtensionConfig::github(
            "gh-ci",
            GithubFieldValues {
                enable_actions: true,
                ..GithubFieldValues::default()
            },
        ),
        expected_files: files.iter().map(|f| f.to_string()).collect(),
    }
}

#[test]
fn test_validate_accepts_relative_paths() {
    let scenario = scenario_with_files(&[".github/workflows/ci.yml", ".github/dependabot.yml"]);
    assert!(scenario.validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_expected_files() {
    let scenario = scenario_with_files(&[]);
    assert_eq!(
        scenario.validate(),
        Err(RegistryError::EmptyExpectedFiles {
            scenario: "github-actions-basic".to_string(),
        })
    );
}

#[test]
fn test_validate_rejects_empty_path() {
    let scenario = scenario_with_files(&[".github/workflows/ci.yml", ""]);
    assert!(matches!(
        scenario.validate(),
        Err(RegistryError::InvalidExpectedPath { path, .. }) if path.is_empty()
    ));
}

#[test]
fn test_validate_rejects_absolute_path() {
    let scenario = scenario_with_files(&["/etc/ci.yml"]);
    assert!(matches!(
        scenario.validate(),
        Err(RegistryError::InvalidExpectedPath { reason, .. })
            if reason == "path must be relative"
    ));
}

#[test]
fn test_deserializes_from_fixture_shape() {
    let scenario: Scenario = serde_json::from_str(
        r#"{
            "name": "github-actions-basic",
            "description": "Basic GitHub Actions CI/CD",
            "config": {
                "moduleId": "gh-ci",
                "kind": "extension",
                "type": "github",
                "layers": ["ops"],
                "enabled": true,
                "fieldValues": { "enableActions": true }
            },
            "expectedFiles": [".github/workflows/ci.yml"]
        }"#,
    )
    .unwrap();

    assert_eq!(scenario.name, "github-actions-basic");
    assert_eq!(scenario.expected_files, vec![".github/workflows/ci.yml"]);
    assert!(scenario.validate().is_ok());
}
