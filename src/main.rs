use anyhow::Context;
use funding_check::config::Config;
use funding_check::exchanges;
use funding_check::{Runner, SharedAssertions, SkipFile};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    tracing::info!(
        "funding-check starting: exchanges {:?}, symbols {:?}",
        config.exchanges,
        config.symbols
    );

    // ── 1. Load per-exchange skip rules ───────────────────────────
    let skip_file = match &config.skip_tests_path {
        Some(path) => SkipFile::load(path)?,
        None => SkipFile::default(),
    };

    // ── 2. Build connectors sharing one HTTP client ────────────────
    let client = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .context("failed to build HTTP client")?;

    let connectors = config
        .exchanges
        .iter()
        .map(|name| exchanges::by_name(name, client.clone()))
        .collect::<Result<Vec<_>, _>>()?;

    // ── 3. Run every exchange × symbol check ───────────────────────
    let assertions = SharedAssertions::new().strict_timestamps(config.strict_timestamps);
    let runner = Runner::new(connectors, config.symbols.clone(), skip_file, assertions);
    let report = runner.run().await;

    tracing::info!("{} passed, {} failed", report.passed(), report.failed());

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} checks failed",
            report.failed(),
            report.outcomes.len()
        );
    }

    Ok(())
}
