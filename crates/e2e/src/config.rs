//! Suite configuration
//!
//! Settings are resolved once: an optional TOML file (every field has a
//! default) with `E2E_*` environment variable overrides on top. An
//! unrecognized browser kind is a hard error naming the offending value,
//! never a silent fallback.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{E2eError, E2eResult};

/// Browser kind driving the UI scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Chrome,
    Firefox,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Firefox => "firefox",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Browser {
    type Err = E2eError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chrome" => Ok(Browser::Chrome),
            "firefox" => Ok(Browser::Firefox),
            other => Err(E2eError::UnsupportedBrowser(other.to_string())),
        }
    }
}

/// Suite configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Browser kind to launch
    pub browser: Browser,

    /// Base URL of the web application under test
    pub app_url: String,

    /// Base URL of the forecast REST service
    pub api_url: String,

    /// WebDriver endpoint to connect sessions through
    pub webdriver_url: String,

    /// Maximum duration a query/action polls before failing
    pub wait_budget_ms: u64,

    /// Interval between polls within the wait budget
    pub poll_interval_ms: u64,

    /// Run the browser headless
    pub headless: bool,

    /// Browser window width
    pub window_width: u32,

    /// Browser window height
    pub window_height: u32,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            browser: Browser::Chrome,
            app_url: "http://localhost:8080".to_string(),
            api_url: "http://localhost:8081".to_string(),
            webdriver_url: "http://localhost:4444".to_string(),
            wait_budget_ms: 10_000,
            poll_interval_ms: 250,
            headless: true,
            window_width: 1920,
            window_height: 1080,
        }
    }
}

impl SuiteConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> E2eResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            E2eError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str(&raw).map_err(|e| {
            E2eError::Configuration(format!("invalid config {}: {}", path.display(), e))
        })
    }

    /// Resolve configuration: `E2E_CONFIG` file if set, then `E2E_*`
    /// environment variable overrides
    pub fn from_env() -> E2eResult<Self> {
        let mut config = match std::env::var("E2E_CONFIG") {
            Ok(path) => Self::load(Path::new(&path))?,
            Err(_) => Self::default(),
        };

        if let Ok(v) = std::env::var("E2E_BROWSER") {
            config.browser = v.parse()?;
        }
        if let Ok(v) = std::env::var("E2E_APP_URL") {
            config.app_url = v;
        }
        if let Ok(v) = std::env::var("E2E_API_URL") {
            config.api_url = v;
        }
        if let Ok(v) = std::env::var("E2E_WEBDRIVER_URL") {
            config.webdriver_url = v;
        }
        if let Ok(v) = std::env::var("E2E_HEADLESS") {
            config.headless = v != "0" && v != "false";
        }

        Ok(config)
    }

    /// Wait budget as a duration
    pub fn wait_budget(&self) -> Duration {
        Duration::from_millis(self.wait_budget_ms)
    }

    /// Poll interval as a duration
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_parses_recognized_kinds() {
        assert_eq!("chrome".parse::<Browser>().unwrap(), Browser::Chrome);
        assert_eq!("firefox".parse::<Browser>().unwrap(), Browser::Firefox);
    }

    #[test]
    fn browser_rejects_unknown_kind_by_name() {
        let err = "safari".parse::<Browser>().unwrap_err();
        match err {
            E2eError::UnsupportedBrowser(kind) => assert_eq!(kind, "safari"),
            other => panic!("expected UnsupportedBrowser, got {}", other),
        }
    }

    #[test]
    fn defaults_point_at_local_endpoints() {
        let config = SuiteConfig::default();
        assert_eq!(config.browser, Browser::Chrome);
        assert_eq!(config.app_url, "http://localhost:8080");
        assert_eq!(config.api_url, "http://localhost:8081");
        assert_eq!(config.wait_budget(), Duration::from_secs(10));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: SuiteConfig = toml::from_str(
            r#"
browser = "firefox"
app_url = "http://10.0.0.5:8080"
"#,
        )
        .unwrap();
        assert_eq!(config.browser, Browser::Firefox);
        assert_eq!(config.app_url, "http://10.0.0.5:8080");
        assert_eq!(config.wait_budget_ms, 10_000);
    }

    #[test]
    fn unknown_browser_in_toml_is_rejected() {
        let result = toml::from_str::<SuiteConfig>("browser = \"opera\"");
        assert!(result.is_err());
    }

    #[test]
    fn load_missing_file_is_a_configuration_error() {
        let err = SuiteConfig::load(Path::new("/nonexistent/e2e.toml")).unwrap_err();
        assert!(matches!(err, E2eError::Configuration(_)));
    }
}
