//! Forecast REST API client and model
//!
//! Thin typed wrapper over `/weatherforecast`: list, fetch by id, create.
//! Status-code expectations live here so scenarios read as plain assertions
//! on typed records.

use std::sync::OnceLock;

use regex::Regex;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{E2eError, E2eResult};

/// The fixed vocabulary the service draws summaries from.
pub const SUMMARIES: [&str; 11] = [
    "Undefined",
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

/// True if `summary` belongs to the fixed vocabulary.
pub fn is_known_summary(summary: &str) -> bool {
    SUMMARIES.contains(&summary)
}

/// `YYYY-MM-DD`
pub fn is_iso_date(s: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"))
        .is_match(s)
}

/// `MM/DD/YYYY`, the rendering used by the weather table and CSV fixtures
pub fn is_us_date(s: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("valid regex"))
        .is_match(s)
}

/// An optionally signed integer, as rendered in temperature cells
pub fn is_integer(s: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?\d+$").expect("valid regex"))
        .is_match(s)
}

/// A forecast record as returned by the service.
///
/// `temperature_f` is derived server-side from `temperature_c`; the suite
/// decodes it but does not re-verify the conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub id: i64,
    pub date: String,
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub summary: String,
}

/// Body of a create request: the service assigns `id` and `temperatureF`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewForecast {
    pub date: String,
    pub temperature_c: i32,
    pub summary: String,
}

/// Client for the `/weatherforecast` resource.
#[derive(Debug)]
pub struct ForecastClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ForecastClient {
    pub fn new(base_url: &str) -> E2eResult<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| E2eError::Configuration(format!("invalid API base URL {base_url}: {e}")))?;
        let endpoint = base
            .join("weatherforecast")
            .map_err(|e| E2eError::Configuration(format!("invalid API base URL {base_url}: {e}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
        })
    }

    fn item_url(&self, id: i64) -> E2eResult<Url> {
        Url::parse(&format!("{}/{}", self.endpoint, id))
            .map_err(|e| E2eError::Configuration(format!("invalid forecast id URL: {e}")))
    }

    /// GET the full forecast list; anything but 200 is a failure.
    pub async fn list(&self) -> E2eResult<Vec<WeatherForecast>> {
        let response = self.http.get(self.endpoint.clone()).send().await?;
        let status = response.status();
        debug!(%status, "GET /weatherforecast");
        if status != StatusCode::OK {
            return Err(E2eError::Assertion(format!(
                "GET /weatherforecast returned {status}, expected 200 OK"
            )));
        }
        Ok(response.json().await?)
    }

    /// GET one forecast by id; 404 maps to `None`, any other non-200 status
    /// is a failure.
    pub async fn get(&self, id: i64) -> E2eResult<Option<WeatherForecast>> {
        let response = self.http.get(self.item_url(id)?).send().await?;
        let status = response.status();
        debug!(%status, id, "GET /weatherforecast/{{id}}");
        match status {
            StatusCode::OK => Ok(Some(response.json().await?)),
            StatusCode::NOT_FOUND => Ok(None),
            other => Err(E2eError::Assertion(format!(
                "GET /weatherforecast/{id} returned {other}, expected 200 or 404"
            ))),
        }
    }

    /// POST a new forecast; anything but 201 is a failure.
    pub async fn create(&self, forecast: &NewForecast) -> E2eResult<WeatherForecast> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(forecast)
            .send()
            .await?;
        let status = response.status();
        debug!(%status, "POST /weatherforecast");
        if status != StatusCode::CREATED {
            return Err(E2eError::Assertion(format!(
                "POST /weatherforecast returned {status}, expected 201 Created"
            )));
        }
        Ok(response.json().await?)
    }
}
