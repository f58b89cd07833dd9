use super::*;
use crate::extension_config::{ExtensionConfig, GithubFieldValues};

const REGISTRY_TOML: &str = r#"
moduleId = "vcs-github"
moduleName = "GitHub CI/CD & Actions"

[[scenarios]]
name = "github-actions-basic"
description = "Basic GitHub Actions CI/CD"
expectedFiles = [".github/workflows/ci.yml"]

[scenarios.config]
moduleId = "gh-ci"
kind = "extension"
type = "github"
layers = ["ops"]
enabled = true

[scenarios.config.fieldValues]
enableActions = true
enableDependabot = false

[[templateValidations]]
name = "oidc-authentication"
description = "Workflows must use OIDC for AWS authentication"
template = "cicd/.github/actions/aws-credentials/action.yml.mustache"
contains = ["id-token: write", "aws-actions/configure-aws-credentials", "role-to-assume"]
"#;

fn sample_scenario(name: &str) -> Scenario {
    Scenario {
        name: name.to_string(),
        description: "Basic GitHub Actions CI/CD".to_string(),
        config: ExtensionConfig::github(
            "gh-ci",
            GithubFieldValues {
                enable_actions: true,
                ..GithubFieldValues::default()
            },
        ),
        expected_files: vec![".github/workflows/ci.yml".to_string()],
    }
}

fn sample_validation(name: &str) -> TemplateValidation {
    TemplateValidation {
        name: name.to_string(),
        description: "Workflows must use OIDC for AWS authentication".to_string(),
        template: "cicd/.github/actions/aws-credentials/action.yml.mustache".to_string(),
        contains: vec!["id-token: write".to_string()],
    }
}

fn sample_module() -> ModuleDescriptor {
    ModuleDescriptor::new("vcs-github", "GitHub CI/CD & Actions")
}

#[test]
fn test_from_toml_str_loads_registry() {
    let registry = FixtureRegistry::from_toml_str(REGISTRY_TOML).unwrap();

    assert_eq!(registry.module().module_id, "vcs-github");
    assert_eq!(registry.scenarios().count(), 1);
    assert_eq!(registry.template_validations().count(), 1);

    let scenario = registry.scenario("github-actions-basic").unwrap();
    assert_eq!(scenario.config.module_id, "gh-ci");
    assert_eq!(scenario.expected_files, vec![".github/workflows/ci.yml"]);

    let validation = registry.template_validation("oidc-authentication").unwrap();
    assert_eq!(validation.contains.len(), 3);
}

#[test]
fn test_from_toml_str_rejects_malformed_document() {
    let result = FixtureRegistry::from_toml_str("moduleId = ");
    assert!(matches!(result, Err(RegistryError::Parse { .. })));
}

#[test]
fn test_from_toml_str_rejects_invariant_violation() {
    let toml = r#"
moduleId = "vcs-github"
moduleName = "GitHub CI/CD & Actions"

[[scenarios]]
name = "github-actions-basic"
description = "Basic GitHub Actions CI/CD"
expectedFiles = []

[scenarios.config]
moduleId = "gh-ci"
kind = "extension"
type = "github"
enabled = true

[scenarios.config.fieldValues]
enableActions = true
"#;
    let result = FixtureRegistry::from_toml_str(toml);
    assert!(matches!(
        result,
        Err(RegistryError::EmptyExpectedFiles { .. })
    ));
}

#[test]
fn test_new_rejects_duplicate_scenario_names() {
    let result = FixtureRegistry::new(
        sample_module(),
        vec![sample_scenario("github-actions-basic"), sample_scenario("github-actions-basic")],
        vec![],
    );
    assert_eq!(
        result.unwrap_err(),
        RegistryError::DuplicateScenarioName {
            name: "github-actions-basic".to_string(),
        }
    );
}

#[test]
fn test_new_rejects_duplicate_validation_names() {
    let result = FixtureRegistry::new(
        sample_module(),
        vec![],
        vec![sample_validation("oidc-authentication"), sample_validation("oidc-authentication")],
    );
    assert_eq!(
        result.unwrap_err(),
        RegistryError::DuplicateValidationName {
            name: "oidc-authentication".to_string(),
        }
    );
}

#[test]
fn test_iterators_are_restartable() {
    let registry = FixtureRegistry::from_toml_str(REGISTRY_TOML).unwrap();

    let first_pass: Vec<&str> = registry.scenarios().map(|s| s.name.as_str()).collect();
    let second_pass: Vec<&str> = registry.scenarios().map(|s| s.name.as_str()).collect();
    assert_eq!(first_pass, second_pass);
}

#[test]
fn test_len_counts_all_records() {
    let registry = FixtureRegistry::new(
        sample_module(),
        vec![sample_scenario("github-actions-basic")],
        vec![sample_validation("oidc-authentication")],
    )
    .unwrap();
    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
}

#[test]
fn test_empty_registry_is_valid() {
    let registry = FixtureRegistry::new(sample_module(), vec![], vec![]).unwrap();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}
