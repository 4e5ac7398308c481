use crate::utils::error::{AlertError, Result};
use chrono::{Datelike, Duration, NaiveDate};

/// The calendar day one run reports on. All date checks go through here so
/// the three feed formats (URL paths, ISO timestamps, date ranges) agree on
/// what "today" means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    target: NaiveDate,
}

impl DateWindow {
    pub fn new(target: NaiveDate) -> Self {
        Self { target }
    }

    /// Display form used in published messages, month and day unpadded.
    pub fn the_date(&self) -> String {
        format!(
            "{}/{}/{}",
            self.target.month(),
            self.target.day(),
            self.target.year()
        )
    }

    /// Every M-D-Y spelling the site embeds in menu page paths. Editors pad
    /// month and day inconsistently and use both two and four digit years,
    /// so "2024-02-03" yields "2-3-24" through "02-03-2024".
    pub fn path_fragments(&self) -> Vec<String> {
        let month = self.target.month();
        let day = self.target.day();
        let years = [
            format!("{:02}", self.target.year() % 100),
            self.target.year().to_string(),
        ];

        let mut fragments = Vec::with_capacity(8);
        for year in &years {
            for fragment in [
                format!("{}-{}-{}", month, day, year),
                format!("{}-{:02}-{}", month, day, year),
                format!("{:02}-{}-{}", month, day, year),
                format!("{:02}-{:02}-{}", month, day, year),
            ] {
                if !fragments.contains(&fragment) {
                    fragments.push(fragment);
                }
            }
        }
        fragments
    }

    pub fn matches_path(&self, path: &str) -> bool {
        self.path_fragments()
            .iter()
            .any(|fragment| path.contains(fragment.as_str()))
    }

    /// Whether an ISO-8601 timestamp falls on the target day. Time of day
    /// and timezone suffix are ignored; menus are published in local time.
    pub fn matches_timestamp(&self, timestamp: &str) -> Result<bool> {
        Ok(calendar_date(timestamp)? == self.target)
    }

    /// A serving period covers the target day when it starts on it. Periods
    /// may run past midnight, so the end may fall on the next day but no
    /// later.
    pub fn matches_range(&self, from: &str, to: &str) -> Result<bool> {
        let start = calendar_date(from)?;
        let end = calendar_date(to)?;
        Ok(start == self.target && (end == self.target || end == self.target + Duration::days(1)))
    }
}

/// Calendar-date prefix of an ISO-8601 timestamp.
fn calendar_date(timestamp: &str) -> Result<NaiveDate> {
    let date_part = timestamp.split('T').next().unwrap_or(timestamp);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| AlertError::ParseError {
        message: format!("timestamp {:?} has no YYYY-MM-DD date", timestamp),
    })
}
