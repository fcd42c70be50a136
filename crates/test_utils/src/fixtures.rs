//! Pre-built test fixtures
//!
//! Fixed, predictable dates and amounts. Every suite that needs "a policy
//! that started mid-January 2024" reaches for the same one.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::Money;
use rust_decimal_macros::dec;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard inception date (Jan 15, 2024)
    pub fn inception() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    /// Submission timestamp matching the standard inception date
    pub fn submitted_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    /// An approval timestamp shortly after submission
    pub fn approved_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 16, 9, 0, 0).unwrap()
    }

    /// "Today" for arrears tests: five full months after inception
    pub fn mid_june() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()
    }
}

/// Fixture for money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The Standard-plan holder-only monthly premium
    pub fn standard_base() -> Money {
        Money::usd(dec!(2.50))
    }

    /// A typical monthly payment amount
    pub fn monthly_payment() -> Money {
        Money::usd(dec!(5.00))
    }
}
