//! Money with precise decimal arithmetic
//!
//! Premiums and balances are small recurring amounts where binary floating
//! point drifts; all monetary values go through rust_decimal instead.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use thiserror::Error;

/// Currencies the agency transacts in
///
/// USD is the operating currency for all premium tables; ZWG and ZAR appear
/// only on imported legacy books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Zwg,
    Zar,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Zwg => "ZiG",
            Currency::Zar => "R",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Zwg => "ZWG",
            Currency::Zar => "ZAR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),
}

/// A monetary amount with associated currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value, rounded to the currency's minor unit
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(currency.decimal_places()),
            currency,
        }
    }

    /// Creates a USD amount, the agency's operating currency
    pub fn usd(amount: Decimal) -> Self {
        Self::new(amount, Currency::Usd)
    }

    /// Creates Money from an integer amount in minor units (cents)
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        let divisor = Decimal::new(10_i64.pow(currency.decimal_places()), 0);
        Self::new(Decimal::new(minor_units, 0) / divisor, currency)
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(Money::new(self.amount + other.amount, self.currency))
    }

    /// Checked subtraction that returns an error on currency mismatch
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(Money::new(self.amount - other.amount, self.currency))
    }

    /// Multiplies by a scalar (per-head and months-due calculations)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor, self.currency)
    }

    /// Multiplies by a whole count of months or heads
    pub fn times(&self, count: u32) -> Self {
        self.multiply(Decimal::from(count))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:.dp$}",
            self.currency.symbol(),
            self.amount,
            dp = self.currency.decimal_places() as usize
        )
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other)
            .expect("Currency mismatch in Money::add")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other)
            .expect("Currency mismatch in Money::sub")
    }
}

impl Sum for Money {
    /// Sums an iterator of Money, starting from USD zero
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(Currency::Usd), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_constructor_rounds_to_cents() {
        let m = Money::usd(dec!(2.505));
        assert_eq!(m.amount(), dec!(2.50));
        assert_eq!(m.currency(), Currency::Usd);
    }

    #[test]
    fn test_from_minor() {
        assert_eq!(Money::from_minor(1825, Currency::Usd), Money::usd(dec!(18.25)));
    }

    #[test]
    fn test_checked_add_same_currency() {
        let total = Money::usd(dec!(2.50)).checked_add(&Money::usd(dec!(1.25))).unwrap();
        assert_eq!(total, Money::usd(dec!(3.75)));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let result = Money::usd(dec!(1)).checked_add(&Money::new(dec!(1), Currency::Zar));
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_checked_sub_can_go_negative() {
        let shortfall = Money::usd(dec!(2.50)).checked_sub(&Money::usd(dec!(5.00))).unwrap();
        assert_eq!(shortfall, Money::usd(dec!(-2.50)));
        assert!(shortfall.is_negative());
        assert!(!shortfall.is_positive());
    }

    #[test]
    fn test_times_whole_months() {
        assert_eq!(Money::usd(dec!(5.00)).times(4), Money::usd(dec!(20.00)));
        assert_eq!(Money::usd(dec!(5.00)).times(0), Money::usd(dec!(0)));
    }

    #[test]
    fn test_sum_iterator() {
        let total: Money = [dec!(1.00), dec!(7.00), dec!(18.00)]
            .into_iter()
            .map(Money::usd)
            .sum();
        assert_eq!(total, Money::usd(dec!(26.00)));
    }

    #[test]
    fn test_display_uses_symbol() {
        assert_eq!(Money::usd(dec!(72)).to_string(), "$72.00");
    }
}
