//! Scenario orchestration
//!
//! Every UI scenario runs inside [`run_ui_scenario`]: acquire a fresh session,
//! open the application root, hand a loaded [`HomePage`] to the scenario, and
//! release the session afterwards whether the scenario passed or not. A
//! leaked browser process would outlive the test run, so release is
//! unconditional.

use std::future::Future;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::SuiteConfig;
use crate::error::E2eResult;
use crate::pages::HomePage;
use crate::session::SessionManager;
use crate::wait::WaitPolicy;

/// Initialize tracing output for test binaries. Safe to call repeatedly.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

/// One bounded probe against a URL; connection failures mean "not there".
async fn probe(url: &str) -> bool {
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
    {
        Ok(client) => client,
        Err(_) => return false,
    };
    match client.get(url).send().await {
        Ok(response) => response.status().is_success(),
        Err(_) => false,
    }
}

/// True when both the application under test and the WebDriver endpoint
/// respond. UI scenarios skip (with a notice) when this is false.
pub async fn ui_available(config: &SuiteConfig) -> bool {
    let status_url = format!("{}/status", config.webdriver_url.trim_end_matches('/'));
    if !probe(&status_url).await {
        warn!(webdriver = %config.webdriver_url, "WebDriver endpoint not reachable");
        return false;
    }
    if !probe(&config.app_url).await {
        warn!(app = %config.app_url, "application under test not reachable");
        return false;
    }
    true
}

/// True when the forecast REST service responds.
pub async fn api_available(config: &SuiteConfig) -> bool {
    let url = format!("{}/weatherforecast", config.api_url.trim_end_matches('/'));
    let reachable = probe(&url).await;
    if !reachable {
        warn!(api = %config.api_url, "forecast service not reachable");
    }
    reachable
}

/// Run one UI scenario with scoped session acquisition.
///
/// The session is closed after the scenario completes, pass or fail; a close
/// failure only surfaces when the scenario itself succeeded.
pub async fn run_ui_scenario<F, Fut>(config: &SuiteConfig, scenario: F) -> E2eResult<()>
where
    F: FnOnce(HomePage) -> Fut,
    Fut: Future<Output = E2eResult<()>>,
{
    let mut manager = SessionManager::new(config.clone());
    let session = manager.get_or_launch().await?;
    let wait = WaitPolicy::from_config(config);

    let outcome = async {
        session.goto(&config.app_url).await?;
        let home = HomePage::new(session.clone(), wait);
        home.wait_for_load().await?;
        scenario(home).await
    }
    .await;

    let closed = manager.close().await;
    if outcome.is_ok() {
        info!("scenario passed");
    }
    outcome.and(closed)
}
