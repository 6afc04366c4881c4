// mozillians-e2e: run the Mozillians profile scenarios against a live site
//
//   cargo run -p mozillians-cli -- --base-url https://mozillians-dev.allizom.org/ --destructive
//
// Credentials come from the config file or MOZILLIANS_EMAIL / MOZILLIANS_PASSWORD.

use anyhow::{Context, Result};
use clap::Parser;
use mozillians_e2e::scenarios::{self, Scenario};
use mozillians_e2e::{BrowserKind, Credentials, Marker, PlaywrightLauncher, Runner, SuiteConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use url::Url;

#[derive(Parser)]
#[command(name = "mozillians-e2e", about = "Mozillians profile end-to-end scenarios")]
struct Cli {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Root URL of the site under test
    #[arg(long)]
    base_url: Option<Url>,

    /// chromium, firefox or webkit
    #[arg(long)]
    browser: Option<BrowserKind>,

    /// Show the browser window
    #[arg(long)]
    headed: bool,

    /// Also run scenarios that create or change data
    #[arg(long)]
    destructive: bool,

    /// Seed for random choices, for reproducing a run
    #[arg(long)]
    seed: Option<u64>,

    /// Only run scenarios whose name contains this text
    #[arg(long)]
    filter: Option<String>,

    /// List the selected scenarios and exit
    #[arg(long)]
    list: bool,

    /// Write the run report as JSON
    #[arg(long)]
    report: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let selected = scenarios::select(scenarios::catalog(), cli.filter.as_deref());

    if cli.list {
        print_list(&selected);
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    config.validate()?;

    let launcher = PlaywrightLauncher::launch(&config)
        .await
        .with_context(|| format!("launching {}", config.browser))?;
    let launcher = Arc::new(launcher);
    let runner = Runner::new(config, launcher.clone());
    let report = runner.run(&selected).await;
    drop(runner);

    match Arc::try_unwrap(launcher) {
        Ok(launcher) => launcher.close().await?,
        Err(_) => tracing::warn!("Browser still in use; leaving it to exit with the process"),
    }

    for scenario in &report.scenarios {
        println!("{:<8} {}", scenario.outcome.label(), scenario.name);
    }
    let summary = report.summary();
    println!(
        "\n{} passed, {} failed, {} xfailed, {} xpassed, {} skipped (seed {})",
        summary.passed,
        summary.failed,
        summary.expected_failures,
        summary.unexpected_passes,
        summary.skipped,
        report.seed
    );

    if let Some(path) = &cli.report {
        report
            .write_json(path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn load_config(cli: &Cli) -> Result<SuiteConfig> {
    let mut config = match (&cli.config, &cli.base_url) {
        (Some(path), _) => SuiteConfig::from_file(path)?.with_env_overrides()?,
        (None, Some(url)) => {
            SuiteConfig::new(url.clone(), Credentials::default()).with_env_overrides()?
        }
        (None, None) => SuiteConfig::from_env()
            .context("pass --config or --base-url, or set MOZILLIANS_BASE_URL")?,
    };

    if let Some(url) = &cli.base_url {
        config.base_url = url.clone();
    }
    if let Some(browser) = cli.browser {
        config = config.browser(browser);
    }
    if cli.headed {
        config = config.headless(false);
    }
    if cli.destructive {
        config = config.destructive(true);
    }
    if let Some(seed) = cli.seed {
        config = config.seed(seed);
    }
    Ok(config)
}

fn print_list(selected: &[Scenario]) {
    for scenario in selected {
        let markers: Vec<String> = scenario
            .markers
            .iter()
            .map(|m| match m {
                Marker::Nondestructive => "nondestructive".to_string(),
                Marker::ExpectedFailure { reason } => format!("xfail: {}", reason),
            })
            .collect();
        println!("{} [{}]", scenario.name, markers.join("; "));
    }
}
