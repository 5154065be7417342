//! Counter page object

use fantoccini::Locator;

use super::wait_for_element;
use crate::error::E2eResult;
use crate::session::Session;
use crate::wait::WaitPolicy;

const COUNTER_HEADER: Locator<'static> = Locator::XPath("//h1[text()='Counter']");
const COUNTER_VALUE: Locator<'static> = Locator::XPath("//p[@role='status']");
const INCREMENT_BUTTON: Locator<'static> = Locator::XPath("//button[text()='Click me']");

pub struct CounterPage {
    session: Session,
    wait: WaitPolicy,
}

impl CounterPage {
    pub fn new(session: Session, wait: WaitPolicy) -> Self {
        Self { session, wait }
    }

    /// Post-navigation marker: the Counter header.
    pub async fn wait_for_header(&self) -> E2eResult<()> {
        wait_for_element(&self.session, &self.wait, COUNTER_HEADER, "h1 'Counter'").await?;
        Ok(())
    }

    pub async fn header_text(&self) -> E2eResult<String> {
        let header =
            wait_for_element(&self.session, &self.wait, COUNTER_HEADER, "h1 'Counter'").await?;
        Ok(header.text().await?)
    }

    /// Rendered counter status line, e.g. `Current count: 0`
    pub async fn counter_value(&self) -> E2eResult<String> {
        let status =
            wait_for_element(&self.session, &self.wait, COUNTER_VALUE, "counter status").await?;
        Ok(status.text().await?)
    }

    pub async fn click_increment(&self) -> E2eResult<()> {
        let button =
            wait_for_element(&self.session, &self.wait, INCREMENT_BUTTON, "'Click me' button")
                .await?;
        button.click().await?;
        Ok(())
    }
}
