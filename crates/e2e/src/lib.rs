//! WeatherApp E2E & API Test Suite
//!
//! Exercises the WeatherApp sample application's UI pages (home, counter,
//! weather) through a W3C WebDriver session and its forecast REST endpoint
//! through a typed HTTP client.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     UI scenario (tests/ui.rs)              │
//! │   run_ui_scenario                                          │
//! │     ├── SessionManager::get_or_launch() -> Session         │
//! │     ├── HomePage::wait_for_load()                          │
//! │     ├── <scenario steps over page objects>                 │
//! │     └── SessionManager::close()        (always)            │
//! ├────────────────────────────────────────────────────────────┤
//! │   Page objects (pages/)                                    │
//! │     HomePage ──navigate──> WeatherPage / CounterPage       │
//! │     queries/actions bounded by one WaitPolicy              │
//! ├────────────────────────────────────────────────────────────┤
//! │   API scenario (tests/api.rs)                              │
//! │     ForecastClient ── GET/POST /weatherforecast ──> asserts│
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The application under test and the WebDriver server are external; the
//! integration suites skip with a notice when either is unreachable.

pub mod api;
pub mod config;
pub mod error;
pub mod fixture;
pub mod pages;
pub mod runner;
pub mod session;
pub mod wait;

pub use api::{ForecastClient, NewForecast, WeatherForecast, SUMMARIES};
pub use config::{Browser, SuiteConfig};
pub use error::{E2eError, E2eResult};
pub use fixture::CsvFixture;
pub use pages::{CounterPage, HomePage, WeatherPage};
pub use runner::run_ui_scenario;
pub use session::{Session, SessionManager};
pub use wait::WaitPolicy;
