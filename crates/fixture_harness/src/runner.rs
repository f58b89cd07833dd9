//! Fixture runner: evaluates registry records against collaborators.
//!
//! Each record is a stateless assertion over immutable fixture data plus one
//! external call. Records are evaluated independently; a failing record
//! never aborts the run, outcomes accumulate into a [`FixtureReport`].

use std::time::{Duration, Instant};
use tracing::{info, warn};

use fixture_registry::{FixtureRegistry, ModuleDescriptor, Scenario, TemplateValidation};

use crate::errors::Error;
use crate::generator::ExtensionGenerator;
use crate::template_store::TemplateStore;

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;

/// Result of evaluating a single scenario or template validation.
#[derive(Debug)]
pub struct CheckOutcome {
    /// Name of the record this outcome belongs to.
    pub name: String,
    /// Description of the record, carried for diagnostics.
    pub description: String,
    pub passed: bool,
    /// The failure, when `passed` is false.
    pub error: Option<Error>,
    pub duration: Duration,
}

impl CheckOutcome {
    fn pass(name: &str, description: &str, duration: Duration) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            passed: true,
            error: None,
            duration,
        }
    }

    fn fail(name: &str, description: &str, error: Error, duration: Duration) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            passed: false,
            error: Some(error),
            duration,
        }
    }
}

/// Accumulated outcomes for a full registry run.
#[derive(Debug)]
pub struct FixtureReport {
    /// The module the evaluated registry describes.
    pub module: ModuleDescriptor,
    pub scenario_outcomes: Vec<CheckOutcome>,
    pub validation_outcomes: Vec<CheckOutcome>,
}

impl FixtureReport {
    pub fn new(module: ModuleDescriptor) -> Self {
        Self {
            module,
            scenario_outcomes: Vec::new(),
            validation_outcomes: Vec::new(),
        }
    }

    /// All outcomes, scenarios first.
    pub fn outcomes(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.scenario_outcomes
            .iter()
            .chain(self.validation_outcomes.iter())
    }

    pub fn total(&self) -> usize {
        self.scenario_outcomes.len() + self.validation_outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Runner pairing a generator and a template store with registry records.
pub struct FixtureRunner<G, S> {
    generator: G,
    store: S,
}

impl<G, S> FixtureRunner<G, S>
where
    G: ExtensionGenerator,
    S: TemplateStore,
{
    pub fn new(generator: G, store: S) -> Self {
        Self { generator, store }
    }

    /// Evaluate one generation scenario.
    ///
    /// Invokes the generator with the scenario configuration and asserts
    /// that every expected file path is present in the produced set.
    /// Containment, not equality: extra generated files are tolerated.
    pub async fn run_scenario(&self, scenario: &Scenario) -> CheckOutcome {
        info!(scenario = scenario.name, "Running generation scenario");
        let start = Instant::now();

        let produced = match self.generator.generate(&scenario.config).await {
            Ok(produced) => produced,
            Err(e) => {
                warn!(scenario = scenario.name, error = %e, "Generator invocation failed");
                return CheckOutcome::fail(
                    &scenario.name,
                    &scenario.description,
                    Error::GeneratorFailure {
                        scenario: scenario.name.clone(),
                        source: e,
                    },
                    start.elapsed(),
                );
            }
        };

        let missing: Vec<String> = scenario
            .expected_files
            .iter()
            .filter(|path| !produced.contains(*path))
            .cloned()
            .collect();

        if missing.is_empty() {
            CheckOutcome::pass(&scenario.name, &scenario.description, start.elapsed())
        } else {
            warn!(
                scenario = scenario.name,
                missing = ?missing,
                "Expected output files absent from generated set"
            );
            CheckOutcome::fail(
                &scenario.name,
                &scenario.description,
                Error::MissingOutputFile {
                    scenario: scenario.name.clone(),
                    missing,
                },
                start.elapsed(),
            )
        }
    }

    /// Evaluate one template validation.
    ///
    /// Loads the raw template content and asserts that every required
    /// fragment occurs as a literal substring. Reports all absent fragments,
    /// not just the first.
    pub async fn run_template_validation(&self, validation: &TemplateValidation) -> CheckOutcome {
        info!(
            validation = validation.name,
            template = validation.template,
            "Running template validation"
        );
        let start = Instant::now();

        let content = match self.store.read_template(&validation.template).await {
            Ok(content) => content,
            Err(e) => {
                warn!(validation = validation.name, error = %e, "Template load failed");
                return CheckOutcome::fail(
                    &validation.name,
                    &validation.description,
                    Error::TemplateUnavailable {
                        validation: validation.name.clone(),
                        source: e,
                    },
                    start.elapsed(),
                );
            }
        };

        let missing: Vec<String> = validation
            .contains
            .iter()
            .filter(|fragment| !content.contains(fragment.as_str()))
            .cloned()
            .collect();

        if missing.is_empty() {
            CheckOutcome::pass(&validation.name, &validation.description, start.elapsed())
        } else {
            warn!(
                validation = validation.name,
                template = validation.template,
                missing = ?missing,
                "Required content absent from template"
            );
            CheckOutcome::fail(
                &validation.name,
                &validation.description,
                Error::MissingExpectedContent {
                    validation: validation.name.clone(),
                    template: validation.template.clone(),
                    missing,
                },
                start.elapsed(),
            )
        }
    }

    /// Evaluate every scenario in a registry.
    pub async fn run_scenarios(&self, registry: &FixtureRegistry) -> Vec<CheckOutcome> {
        let mut outcomes = Vec::new();
        for scenario in registry.scenarios() {
            outcomes.push(self.run_scenario(scenario).await);
        }
        outcomes
    }

    /// Evaluate every template validation in a registry.
    pub async fn run_template_validations(&self, registry: &FixtureRegistry) -> Vec<CheckOutcome> {
        let mut outcomes = Vec::new();
        for validation in registry.template_validations() {
            outcomes.push(self.run_template_validation(validation).await);
        }
        outcomes
    }

    /// Evaluate an entire registry and accumulate the outcomes.
    pub async fn run_all(&self, registry: &FixtureRegistry) -> FixtureReport {
        info!(
            module_id = registry.module().module_id,
            records = registry.len(),
            "Starting fixture run"
        );

        let report = FixtureReport {
            module: registry.module().clone(),
            scenario_outcomes: self.run_scenarios(registry).await,
            validation_outcomes: self.run_template_validations(registry).await,
        };

        info!(
            module_id = report.module.module_id,
            total = report.total(),
            passed = report.passed(),
            failed = report.failed(),
            "Fixture run completed"
        );

        report
    }
}
