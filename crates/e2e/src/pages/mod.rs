//! Page objects over the WeatherApp UI
//!
//! Each page object binds a live [`Session`] to the named locators of one
//! logical page and exposes semantic queries and actions instead of raw
//! element lookup, so a locator change stays isolated to one place per page.
//! Page objects hold no mutable state of their own; queries are pure reads
//! and actions only affect the remote page.

mod counter;
mod home;
mod weather;

pub use counter::CounterPage;
pub use home::HomePage;
pub use weather::WeatherPage;

use fantoccini::elements::Element;
use fantoccini::Locator;

use crate::error::{E2eError, E2eResult};
use crate::session::Session;
use crate::wait::WaitPolicy;

/// Wait for an element to be present, bounded by the scenario's wait policy.
///
/// Absence after the budget elapses surfaces as [`E2eError::ElementNotFound`]
/// naming the selector.
pub(crate) async fn wait_for_element(
    session: &Session,
    wait: &WaitPolicy,
    locator: Locator<'static>,
    selector: &str,
) -> E2eResult<Element> {
    session
        .client()
        .wait()
        .at_most(wait.budget)
        .every(wait.interval)
        .for_element(locator)
        .await
        .map_err(|e| match e {
            fantoccini::error::CmdError::WaitTimeout => E2eError::ElementNotFound {
                selector: selector.to_string(),
            },
            other => E2eError::WebDriver(other),
        })
}
