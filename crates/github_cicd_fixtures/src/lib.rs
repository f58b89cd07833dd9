//! Fixture registry for the GitHub CI/CD extension module.
//!
//! This crate provides the pre-configured verification fixtures for the
//! `vcs-github` extension: generation scenarios covering GitHub Actions
//! CI/CD, the security suite, and multi-environment deployment, plus
//! template validations for the Terraform state management and deployment
//! workflow templates. Fixtures ensure consistent expectations across
//! harness runs.

use fixture_registry::{
    ExtensionConfig, FixtureRegistry, GithubFieldValues, ModuleDescriptor, Scenario,
    TemplateValidation,
};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Identity of the GitHub CI/CD extension module.
pub fn module_descriptor() -> ModuleDescriptor {
    ModuleDescriptor::new("vcs-github", "GitHub CI/CD & Actions")
}

/// The complete fixture registry for the GitHub CI/CD extension.
///
/// The returned registry is validated; the invariants hold by construction
/// (the fixture data is static), so this never fails in practice.
pub fn registry() -> FixtureRegistry {
    FixtureRegistry::new(
        module_descriptor(),
        vec![
            scenarios::actions_basic(),
            scenarios::full_security(),
            scenarios::multi_env_deploy(),
        ],
        vec![
            template_validations::state_corruption_recovery(),
            template_validations::dynamodb_lock_clearing(),
            template_validations::ssh_key_generation(),
            template_validations::bootstrap_import_fallback(),
            template_validations::oidc_authentication(),
            template_validations::deployment_summary(),
        ],
    )
    .unwrap_or_else(|e| panic!("built-in GitHub fixture registry is invalid: {e}"))
}

/// Generation scenarios for the GitHub extension.
pub mod scenarios {
    use super::*;

    /// Basic GitHub Actions CI/CD: only the CI workflow is generated.
    pub fn actions_basic() -> Scenario {
        Scenario {
            name: "github-actions-basic".to_string(),
            description: "Basic GitHub Actions CI/CD".to_string(),
            config: ExtensionConfig::github(
                "gh-ci",
                GithubFieldValues {
                    enable_actions: true,
                    ..GithubFieldValues::default()
                },
            )
            .with_layer("ops"),
            expected_files: vec![".github/workflows/ci.yml".to_string()],
        }
    }

    /// Full security suite: Dependabot, CodeQL, and secret scanning on top
    /// of the CI workflow.
    pub fn full_security() -> Scenario {
        Scenario {
            name: "github-full-security".to_string(),
            description: "GitHub with full security suite".to_string(),
            config: ExtensionConfig::github(
                "gh-secure",
                GithubFieldValues {
                    enable_actions: true,
                    enable_dependabot: true,
                    enable_code_scanning: true,
                    enable_secret_scanning: true,
                    ..GithubFieldValues::default()
                },
            )
            .with_layer("ops"),
            expected_files: vec![
                ".github/workflows/ci.yml".to_string(),
                ".github/dependabot.yml".to_string(),
                ".github/workflows/codeql.yml".to_string(),
            ],
        }
    }

    /// Multi-environment deployment: one deploy workflow per environment in
    /// rollout order, auto-merge disabled.
    pub fn multi_env_deploy() -> Scenario {
        Scenario {
            name: "github-multi-env-deploy".to_string(),
            description: "GitHub Actions with multi-environment deployment".to_string(),
            config: ExtensionConfig::github(
                "gh-deploy",
                GithubFieldValues {
                    enable_actions: true,
                    enable_deployment: true,
                    deploy_environments: vec![
                        "dev".to_string(),
                        "staging".to_string(),
                        "prod".to_string(),
                    ],
                    ..GithubFieldValues::default()
                },
            )
            .with_layer("ops"),
            expected_files: vec![
                ".github/workflows/ci.yml".to_string(),
                ".github/workflows/deploy-dev.yml".to_string(),
                ".github/workflows/deploy-staging.yml".to_string(),
                ".github/workflows/deploy-prod.yml".to_string(),
            ],
        }
    }
}

/// Template validations for the CI/CD workflow templates.
///
/// These validate that the workflow templates contain the recovery and
/// security patterns the module promises, independent of any rendering.
pub mod template_validations {
    use super::*;

    fn validation(
        name: &str,
        description: &str,
        template: &str,
        contains: &[&str],
    ) -> TemplateValidation {
        TemplateValidation {
            name: name.to_string(),
            description: description.to_string(),
            template: template.to_string(),
            contains: contains.iter().map(|entry| entry.to_string()).collect(),
        }
    }

    /// P0: the Terraform apply workflow must detect and recover from state
    /// corruption.
    pub fn state_corruption_recovery() -> TemplateValidation {
        validation(
            "state-corruption-recovery",
            "P0: Terraform apply workflow must detect and recover from state corruption",
            "cicd/.github/workflows/Appinfra-030-apply.yml.mustache",
            &[
                "state data in S3 does not have the expected content",
                "State corruption detected",
                "-reconfigure",
                "attempting recovery",
            ],
        )
    }

    /// P1: the bootstrap workflow must clear stale DynamoDB locks.
    pub fn dynamodb_lock_clearing() -> TemplateValidation {
        validation(
            "dynamodb-lock-clearing",
            "P1: Bootstrap workflow must clear stale DynamoDB locks",
            "cicd/.github/workflows/Appinfra-020-bootstrap.yml.mustache",
            &[
                "Clear DynamoDB Locks",
                "dynamodb scan",
                "dynamodb delete-item",
                "Cleared all locks",
            ],
        )
    }

    /// P1: the apply workflow must generate SSH keys if missing.
    pub fn ssh_key_generation() -> TemplateValidation {
        validation(
            "ssh-key-generation",
            "P1: Apply workflow must generate SSH keys if missing",
            "cicd/.github/workflows/Appinfra-030-apply.yml.mustache",
            &[
                "Check and Generate SSH Keys",
                "ssh-keygen -t rsa -b 4096",
                "s3 cp",
            ],
        )
    }

    /// P1: the bootstrap workflow must handle existing resources via
    /// terraform import.
    pub fn bootstrap_import_fallback() -> TemplateValidation {
        validation(
            "bootstrap-import-fallback",
            "P1: Bootstrap workflow must handle existing resources via terraform import",
            "cicd/.github/workflows/Appinfra-020-bootstrap.yml.mustache",
            &[
                "BucketAlreadyOwnedByYou",
                "terraform import",
                "attempting to import",
            ],
        )
    }

    /// P1: workflows must use OIDC for AWS authentication.
    pub fn oidc_authentication() -> TemplateValidation {
        validation(
            "oidc-authentication",
            "P1: Workflows must use OIDC for AWS authentication",
            "cicd/.github/actions/aws-credentials/action.yml.mustache",
            &[
                "id-token: write",
                "aws-actions/configure-aws-credentials",
                "role-to-assume",
            ],
        )
    }

    /// P2: workflows must include a deployment summary in
    /// GITHUB_STEP_SUMMARY.
    pub fn deployment_summary() -> TemplateValidation {
        validation(
            "deployment-summary",
            "P2: Workflows must include deployment summary in GITHUB_STEP_SUMMARY",
            "cicd/.github/workflows/Appinfra-030-apply.yml.mustache",
            &[
                "GITHUB_STEP_SUMMARY",
                "Deployment Summary",
                "Deployment Successful",
            ],
        )
    }
}
