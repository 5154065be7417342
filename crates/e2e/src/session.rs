//! Browser session lifecycle
//!
//! A [`Session`] is one live WebDriver-controlled browser. Sessions are owned
//! explicitly: the orchestration layer creates a [`SessionManager`] per
//! scenario and threads the session into each page object, so there is no
//! hidden global driver and scenarios stay isolated from each other.

use std::sync::atomic::{AtomicU64, Ordering};

use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use tracing::{debug, info};

use crate::config::{Browser, SuiteConfig};
use crate::error::E2eResult;

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

/// Handle to one live browser instance.
///
/// Cloning yields another handle to the same underlying session; the
/// `serial` identifies the instance across handles.
#[derive(Clone)]
pub struct Session {
    client: Client,
    kind: Browser,
    serial: u64,
}

impl Session {
    /// Launch a browser of the configured kind through the WebDriver
    /// endpoint and size its window per the configuration.
    pub async fn launch(config: &SuiteConfig) -> E2eResult<Self> {
        let caps = capabilities(config);
        debug!(webdriver = %config.webdriver_url, browser = %config.browser, "connecting WebDriver session");

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(&config.webdriver_url)
            .await?;
        client
            .set_window_size(config.window_width, config.window_height)
            .await?;

        let serial = NEXT_SERIAL.fetch_add(1, Ordering::Relaxed);
        info!(browser = %config.browser, serial, "browser session active");

        Ok(Self {
            client,
            kind: config.browser,
            serial,
        })
    }

    /// Browser kind this session was launched with
    pub fn kind(&self) -> Browser {
        self.kind
    }

    /// Process-unique identity of this session instance
    pub fn serial(&self) -> u64 {
        self.serial
    }

    /// Raw WebDriver client for page objects
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Navigate the browser to an absolute URL
    pub async fn goto(&self, url: &str) -> E2eResult<()> {
        debug!(url, "navigating");
        self.client.goto(url).await?;
        Ok(())
    }

    /// Current URL of the browser
    pub async fn current_url(&self) -> E2eResult<url::Url> {
        Ok(self.client.current_url().await?)
    }

    /// Reload the current page
    pub async fn refresh(&self) -> E2eResult<()> {
        self.client.refresh().await?;
        Ok(())
    }

    /// Quit the browser. Consumes the handle; clones of this session become
    /// unusable once the underlying browser is gone.
    pub async fn close(self) -> E2eResult<()> {
        info!(serial = self.serial, "closing browser session");
        self.client.close().await?;
        Ok(())
    }
}

/// W3C capabilities for the configured browser kind.
fn capabilities(config: &SuiteConfig) -> serde_json::Map<String, serde_json::Value> {
    let mut caps = serde_json::Map::new();
    match config.browser {
        Browser::Chrome => {
            caps.insert("browserName".to_string(), json!("chrome"));
            let mut args = vec![format!(
                "--window-size={},{}",
                config.window_width, config.window_height
            )];
            if config.headless {
                args.push("--headless=new".to_string());
            }
            caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
        }
        Browser::Firefox => {
            caps.insert("browserName".to_string(), json!("firefox"));
            let mut args: Vec<String> = Vec::new();
            if config.headless {
                args.push("-headless".to_string());
            }
            caps.insert("moz:firefoxOptions".to_string(), json!({ "args": args }));
        }
    }
    caps
}

/// Owns at most one live [`Session`] and hands out cached handles.
///
/// State machine: Unset --get_or_launch--> Active --close--> Unset.
/// Re-acquisition while Active returns the cached session; `close` while
/// Unset is a no-op.
pub struct SessionManager {
    config: SuiteConfig,
    session: Option<Session>,
}

impl SessionManager {
    pub fn new(config: SuiteConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Whether a session is currently active
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Lazily launch a session of the configured kind; idempotent while
    /// the session stays open.
    pub async fn get_or_launch(&mut self) -> E2eResult<Session> {
        let session = match self.session.take() {
            Some(session) => session,
            None => Session::launch(&self.config).await?,
        };
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Quit the active session, if any, and clear the cache.
    pub async fn close(&mut self) -> E2eResult<()> {
        if let Some(session) = self.session.take() {
            session.close().await?;
        }
        Ok(())
    }
}
