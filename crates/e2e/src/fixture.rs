//! CSV upload fixtures
//!
//! The weather page accepts a CSV file with header
//! `Date,Temp. (C),Temp. (F),Summary` and `MM/DD/YYYY,int,int,string` rows.
//! Fixtures are written under a temporary directory owned by the handle, so
//! the file stays alive until the upload scenario is done with it.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{E2eError, E2eResult};

const CSV_HEADER: &str = "Date,Temp. (C),Temp. (F),Summary";

/// One row of an upload fixture.
#[derive(Debug, Clone)]
pub struct ForecastRow {
    pub date: String,
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub summary: String,
}

impl ForecastRow {
    pub fn new(date: &str, temperature_c: i32, temperature_f: i32, summary: &str) -> Self {
        Self {
            date: date.to_string(),
            temperature_c,
            temperature_f,
            summary: summary.to_string(),
        }
    }
}

/// A CSV file on disk, deleted with the handle.
pub struct CsvFixture {
    // Held for its Drop; the path below lives inside it.
    _dir: TempDir,
    path: PathBuf,
}

impl CsvFixture {
    /// The canonical well-formed fixture used by the upload scenario.
    pub fn sample() -> E2eResult<Self> {
        Self::with_rows(&[
            ForecastRow::new("07/28/2024", 25, 77, "Sunny"),
            ForecastRow::new("07/29/2024", 30, 86, "Hot"),
            ForecastRow::new("07/30/2024", 20, 68, "Mild"),
        ])
    }

    /// Write a fixture with the given rows.
    pub fn with_rows(rows: &[ForecastRow]) -> E2eResult<Self> {
        let dir = TempDir::new()
            .map_err(|e| E2eError::Fixture(format!("cannot create fixture dir: {e}")))?;
        let path = dir.path().join("test_weather_data.csv");

        let mut content = String::from(CSV_HEADER);
        content.push('\n');
        for row in rows {
            content.push_str(&format!(
                "{},{},{},{}\n",
                row.date, row.temperature_c, row.temperature_f, row.summary
            ));
        }

        std::fs::write(&path, content)
            .map_err(|e| E2eError::Fixture(format!("cannot write {}: {e}", path.display())))?;

        Ok(Self { _dir: dir, path })
    }

    /// Absolute path to hand to the page's file input
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::is_us_date;

    #[test]
    fn sample_fixture_has_header_and_three_rows() {
        let fixture = CsvFixture::sample().unwrap();
        let content = std::fs::read_to_string(fixture.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], "Date,Temp. (C),Temp. (F),Summary");
        assert_eq!(lines.len(), 4);
        for line in &lines[1..] {
            let date = line.split(',').next().unwrap();
            assert!(is_us_date(date), "fixture date should be MM/DD/YYYY: {line}");
        }
    }

    #[test]
    fn fixture_file_is_removed_with_the_handle() {
        let path = {
            let fixture = CsvFixture::sample().unwrap();
            fixture.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn custom_rows_are_rendered_in_order() {
        let fixture = CsvFixture::with_rows(&[
            ForecastRow::new("01/02/2024", -5, 23, "Freezing"),
            ForecastRow::new("01/03/2024", 0, 32, "Chilly"),
        ])
        .unwrap();
        let content = std::fs::read_to_string(fixture.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[1], "01/02/2024,-5,23,Freezing");
        assert_eq!(lines[2], "01/03/2024,0,32,Chilly");
    }
}
