//! Home page object

use fantoccini::elements::Element;
use fantoccini::Locator;

use super::{wait_for_element, CounterPage, WeatherPage};
use crate::error::{E2eError, E2eResult};
use crate::session::Session;
use crate::wait::WaitPolicy;

const MENU_ITEMS: Locator<'static> = Locator::Css(".nav-item .nav-link");
const HOME_HEADER: Locator<'static> = Locator::Css("h1");
const WELCOME_TEXT: Locator<'static> =
    Locator::XPath("//article[@class='content px-4'][contains(.,'Hello, world!')]");
const ABOUT_LINK: Locator<'static> =
    Locator::Css("a[href='https://learn.microsoft.com/aspnet/core/']");
const WEATHER_LINK: Locator<'static> = Locator::Css("a[href='weather']");
const COUNTER_LINK: Locator<'static> = Locator::Css("a[href='counter']");

pub struct HomePage {
    session: Session,
    wait: WaitPolicy,
}

impl HomePage {
    pub fn new(session: Session, wait: WaitPolicy) -> Self {
        Self { session, wait }
    }

    /// Session this page is bound to
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Wait for the home page load marker (the navigation menu).
    pub async fn wait_for_load(&self) -> E2eResult<()> {
        wait_for_element(&self.session, &self.wait, MENU_ITEMS, ".nav-item .nav-link").await?;
        Ok(())
    }

    /// All navigation menu entries
    pub async fn menu_items(&self) -> E2eResult<Vec<Element>> {
        Ok(self.session.client().find_all(MENU_ITEMS).await?)
    }

    pub async fn header_text(&self) -> E2eResult<String> {
        let header = wait_for_element(&self.session, &self.wait, HOME_HEADER, "h1").await?;
        Ok(header.text().await?)
    }

    pub async fn is_welcome_text_displayed(&self) -> E2eResult<bool> {
        let article =
            wait_for_element(&self.session, &self.wait, WELCOME_TEXT, "welcome article").await?;
        Ok(article.is_displayed().await?)
    }

    pub async fn is_about_link_displayed(&self) -> E2eResult<bool> {
        let link = wait_for_element(&self.session, &self.wait, ABOUT_LINK, "About link").await?;
        Ok(link.is_displayed().await?)
    }

    pub async fn about_link_text(&self) -> E2eResult<String> {
        let link = wait_for_element(&self.session, &self.wait, ABOUT_LINK, "About link").await?;
        Ok(link.text().await?)
    }

    pub async fn about_link_href(&self) -> E2eResult<Option<String>> {
        let link = wait_for_element(&self.session, &self.wait, ABOUT_LINK, "About link").await?;
        Ok(link.attr("href").await?)
    }

    /// Click the Weather navigation link and return the Weather page object
    /// once its post-navigation marker is present.
    pub async fn navigate_to_weather(&self) -> E2eResult<WeatherPage> {
        let link =
            wait_for_element(&self.session, &self.wait, WEATHER_LINK, "a[href='weather']").await?;
        link.click().await?;

        let page = WeatherPage::new(self.session.clone(), self.wait);
        match page.wait_for_header().await {
            Ok(()) => Ok(page),
            Err(E2eError::ElementNotFound { .. }) | Err(E2eError::Timeout(_)) => {
                Err(E2eError::Navigation(
                    "Weather page header never appeared after clicking the Weather link"
                        .to_string(),
                ))
            }
            Err(other) => Err(other),
        }
    }

    /// Click the Counter navigation link and return the Counter page object
    /// once its post-navigation marker is present.
    pub async fn navigate_to_counter(&self) -> E2eResult<CounterPage> {
        let link =
            wait_for_element(&self.session, &self.wait, COUNTER_LINK, "a[href='counter']").await?;
        link.click().await?;

        let page = CounterPage::new(self.session.clone(), self.wait);
        match page.wait_for_header().await {
            Ok(()) => Ok(page),
            Err(E2eError::ElementNotFound { .. }) | Err(E2eError::Timeout(_)) => {
                Err(E2eError::Navigation(
                    "Counter page header never appeared after clicking the Counter link"
                        .to_string(),
                ))
            }
            Err(other) => Err(other),
        }
    }
}
