//! Reporting windows
//!
//! Daily, weekly (Sunday-start), and month-to-date windows, always anchored
//! to an explicit "today".

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use core_kernel::PremiumPeriod;

/// The dashboard's reporting windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl ReportingPeriod {
    /// The inclusive date range this window covers, ending today
    pub fn date_range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let start = match self {
            ReportingPeriod::Daily => today,
            ReportingPeriod::Weekly => {
                today - Duration::days(today.weekday().num_days_from_sunday() as i64)
            }
            ReportingPeriod::Monthly => PremiumPeriod::from_date(today).first_day(),
        };
        (start, today)
    }

    /// True when the date falls inside this window
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        let (start, end) = self.date_range(today);
        start <= date && date <= end
    }

    /// Human label for the window, as shown on the dashboard
    pub fn label(&self, today: NaiveDate) -> String {
        let (start, end) = self.date_range(today);
        match self {
            ReportingPeriod::Daily => start.format("%b %-d, %Y").to_string(),
            ReportingPeriod::Weekly => format!(
                "{} - {}",
                start.format("%b %-d"),
                end.format("%b %-d")
            ),
            ReportingPeriod::Monthly => PremiumPeriod::from_date(today).to_string(),
        }
    }
}
