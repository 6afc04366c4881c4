// Scenario runner
//
// Runs scenarios strictly one after another, each with its own driver (for
// Playwright: its own browser context) and its own seeded random source.
// Scenario seeds are derived from the run seed and the scenario name, so a
// filtered rerun with the same run seed replays the same fixtures.

use crate::config::SuiteConfig;
use crate::driver::DriverFactory;
use crate::error::Result;
use crate::markers::{Marker, Outcome, classify, is_nondestructive};
use crate::scenarios::{Scenario, ScenarioContext};
use crate::session::Session;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Result of one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    /// Seed of the scenario's random source.
    pub seed: u64,
    pub markers: Vec<Marker>,
    pub outcome: Outcome,
    pub duration_ms: u64,
}

/// Counts per outcome kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub expected_failures: usize,
    pub unexpected_passes: usize,
    pub skipped: usize,
}

/// Everything a run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub base_url: String,
    pub scenarios: Vec<ScenarioReport>,
}

impl RunReport {
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for report in &self.scenarios {
            match report.outcome {
                Outcome::Passed => summary.passed += 1,
                Outcome::Failed { .. } => summary.failed += 1,
                Outcome::ExpectedFailure { .. } => summary.expected_failures += 1,
                Outcome::UnexpectedPass { .. } => summary.unexpected_passes += 1,
                Outcome::Skipped { .. } => summary.skipped += 1,
            }
        }
        summary
    }

    /// True when no scenario failed and no expected failure started passing.
    pub fn is_success(&self) -> bool {
        !self.scenarios.iter().any(|r| r.outcome.is_failure())
    }

    pub fn outcome_of(&self, name: &str) -> Option<&Outcome> {
        self.scenarios
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.outcome)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Seed for the scenario called `name` within a run seeded with `run_seed`.
///
/// FNV-1a over the name, mixed into the run seed, so scenarios of one run
/// never share a random source.
pub fn scenario_seed(run_seed: u64, name: &str) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let name_hash = name
        .bytes()
        .fold(FNV_OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME));
    run_seed.rotate_left(32) ^ name_hash
}

pub struct Runner {
    config: Arc<SuiteConfig>,
    factory: Arc<dyn DriverFactory>,
}

impl Runner {
    pub fn new(config: SuiteConfig, factory: Arc<dyn DriverFactory>) -> Self {
        Self {
            config: Arc::new(config),
            factory,
        }
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    pub async fn run(&self, scenarios: &[Scenario]) -> RunReport {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        tracing::info!(
            "Running {} scenario(s) against {} (seed {})",
            scenarios.len(),
            self.config.base_url,
            seed
        );

        let mut reports = Vec::with_capacity(scenarios.len());
        for scenario in scenarios {
            let scenario_seed = scenario_seed(seed, scenario.name);
            let start = Instant::now();
            let outcome = self.run_one(scenario, scenario_seed).await;
            let duration_ms = start.elapsed().as_millis() as u64;

            match &outcome {
                Outcome::Failed { message } => {
                    tracing::warn!("{} {}: {}", outcome.label(), scenario.name, message)
                }
                Outcome::UnexpectedPass { reason } => tracing::warn!(
                    "{} {}: passed although marked ({})",
                    outcome.label(),
                    scenario.name,
                    reason
                ),
                _ => tracing::info!("{} {} ({}ms)", outcome.label(), scenario.name, duration_ms),
            }

            reports.push(ScenarioReport {
                name: scenario.name.to_string(),
                seed: scenario_seed,
                markers: scenario.markers.to_vec(),
                outcome,
                duration_ms,
            });
        }

        RunReport {
            seed,
            base_url: self.config.base_url.to_string(),
            scenarios: reports,
        }
    }

    async fn run_one(&self, scenario: &Scenario, seed: u64) -> Outcome {
        if !self.config.destructive && !is_nondestructive(scenario.markers) {
            return Outcome::Skipped {
                reason: "destructive scenario; enable destructive runs to include it".to_string(),
            };
        }

        tracing::info!("Starting {} (seed {})", scenario.name, seed);
        // Driver setup problems are never what an expected-failure marker documents.
        let driver = match self.factory.open_driver().await {
            Ok(driver) => driver,
            Err(e) => {
                return Outcome::Failed {
                    message: e.context("opening a browser session").to_string(),
                };
            }
        };

        let session = Session::new(Arc::clone(&driver), &self.config);
        let ctx = ScenarioContext::new(session, Arc::clone(&self.config), seed);
        let result = (scenario.run)(ctx).await;

        if let Err(e) = driver.close().await {
            tracing::warn!("Failed to close session for {}: {}", scenario.name, e);
        }

        classify(scenario.markers, result)
    }
}
