//! Weather page object

use std::path::Path;

use fantoccini::elements::Element;
use fantoccini::Locator;

use super::wait_for_element;
use crate::error::E2eResult;
use crate::session::Session;
use crate::wait::WaitPolicy;

const WEATHER_HEADER: Locator<'static> = Locator::XPath("//h1[text()='Weather']");
const DESCRIPTION_TEXT: Locator<'static> =
    Locator::XPath("//p[contains(text(), 'This component demonstrates showing data.')]");
const DOWNLOAD_BUTTON: Locator<'static> =
    Locator::XPath("//button[text()='Download Forecast Data']");
const FILE_INPUT: Locator<'static> = Locator::Css("input[type='file']");
const WEATHER_TABLE: Locator<'static> = Locator::Css("table.table");
const TABLE_ROWS: Locator<'static> = Locator::XPath("//table[@class='table']/tbody/tr");
const ROW_CELLS: Locator<'static> = Locator::Css("td");
const ERROR_MARKERS: Locator<'static> =
    Locator::XPath("//*[contains(@class, 'error') or contains(@class, 'popup')]");

pub struct WeatherPage {
    session: Session,
    wait: WaitPolicy,
}

impl WeatherPage {
    pub fn new(session: Session, wait: WaitPolicy) -> Self {
        Self { session, wait }
    }

    /// Post-navigation marker: the Weather header.
    pub async fn wait_for_header(&self) -> E2eResult<()> {
        wait_for_element(&self.session, &self.wait, WEATHER_HEADER, "h1 'Weather'").await?;
        Ok(())
    }

    pub async fn header_text(&self) -> E2eResult<String> {
        let header =
            wait_for_element(&self.session, &self.wait, WEATHER_HEADER, "h1 'Weather'").await?;
        Ok(header.text().await?)
    }

    pub async fn current_url(&self) -> E2eResult<url::Url> {
        self.session.current_url().await
    }

    pub async fn is_description_displayed(&self) -> E2eResult<bool> {
        let p = wait_for_element(&self.session, &self.wait, DESCRIPTION_TEXT, "description text")
            .await?;
        Ok(p.is_displayed().await?)
    }

    pub async fn is_download_button_displayed(&self) -> E2eResult<bool> {
        let button =
            wait_for_element(&self.session, &self.wait, DOWNLOAD_BUTTON, "download button").await?;
        Ok(button.is_displayed().await?)
    }

    pub async fn is_download_button_enabled(&self) -> E2eResult<bool> {
        let button =
            wait_for_element(&self.session, &self.wait, DOWNLOAD_BUTTON, "download button").await?;
        Ok(button.is_enabled().await?)
    }

    pub async fn is_file_input_displayed(&self) -> E2eResult<bool> {
        let input =
            wait_for_element(&self.session, &self.wait, FILE_INPUT, "input[type='file']").await?;
        Ok(input.is_displayed().await?)
    }

    /// Wait until the forecast table is present.
    pub async fn wait_for_table(&self) -> E2eResult<()> {
        wait_for_element(&self.session, &self.wait, WEATHER_TABLE, "table.table").await?;
        Ok(())
    }

    /// Data rows of the forecast table
    pub async fn table_rows(&self) -> E2eResult<Vec<Element>> {
        self.wait_for_table().await?;
        Ok(self.session.client().find_all(TABLE_ROWS).await?)
    }

    /// Cells of one table row
    pub async fn row_cells(&self, row: &Element) -> E2eResult<Vec<Element>> {
        Ok(row.find_all(ROW_CELLS).await?)
    }

    /// Capture the rendered text of every table row, in order.
    ///
    /// This reads the DOM as it is right now; two captures separated by a
    /// mutating action (refresh, upload) may legitimately differ.
    pub async fn capture_table(&self) -> E2eResult<Vec<String>> {
        let mut snapshot = Vec::new();
        for row in self.table_rows().await? {
            snapshot.push(row.text().await?);
        }
        Ok(snapshot)
    }

    /// Feed a local file path to the page's file input.
    pub async fn upload_file(&self, path: &Path) -> E2eResult<()> {
        let input =
            wait_for_element(&self.session, &self.wait, FILE_INPUT, "input[type='file']").await?;
        input.send_keys(&path.to_string_lossy()).await?;
        Ok(())
    }

    pub async fn click_download(&self) -> E2eResult<()> {
        let button =
            wait_for_element(&self.session, &self.wait, DOWNLOAD_BUTTON, "download button").await?;
        button.click().await?;
        Ok(())
    }

    /// Reload the page and wait for the table to come back.
    pub async fn refresh(&self) -> E2eResult<()> {
        self.session.refresh().await?;
        self.wait_for_table().await
    }

    /// Elements that look like error or popup markers, if any
    pub async fn error_messages(&self) -> E2eResult<Vec<Element>> {
        Ok(self.session.client().find_all(ERROR_MARKERS).await?)
    }
}
