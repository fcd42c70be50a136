//! Arrears and effective-status engine
//!
//! Pure computation over (customer, payments made, today). The stored
//! status participates only two ways: Cancelled is terminal and never
//! recomputed, and a manually-set Inactive survives even when the customer
//! is caught up.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{whole_months_between, Money, PremiumPeriod};
use domain_policy::{Customer, PolicyStatus};

use crate::payment::PaymentRecord;

/// What a customer owes and where their policy stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSummary {
    /// Months the policy should have been paid for, inception month included
    pub months_elapsed: u32,
    pub payments_made: u32,
    /// max(0, elapsed - paid)
    pub months_due: u32,
    /// months_due at the current monthly total premium
    ///
    /// Uses the current premium rather than the historical premium at each
    /// due month; a deliberate simplification carried over from the rating
    /// rules.
    pub outstanding_balance: Money,
    /// The period label the next submitted payment should carry
    pub next_payment_period: PremiumPeriod,
    pub effective_status: PolicyStatus,
}

/// Assesses a customer against their payment ledger
pub fn assess(customer: &Customer, ledger: &[PaymentRecord], today: NaiveDate) -> BalanceSummary {
    let payments_made = ledger.iter().filter(|p| p.is_for(customer.id)).count() as u32;
    assess_with_count(customer, payments_made, today)
}

/// Assesses a customer when the caller has already counted ledger rows
pub fn assess_with_count(
    customer: &Customer,
    payments_made: u32,
    today: NaiveDate,
) -> BalanceSummary {
    // +1 counts the inception month itself as the first month due
    let months_elapsed = whole_months_between(customer.inception_date, today) + 1;
    let months_due = months_elapsed.saturating_sub(payments_made);
    let outstanding_balance = customer.total_premium.times(months_due);
    let next_payment_period =
        PremiumPeriod::from_date(customer.inception_date).advance(payments_made);

    BalanceSummary {
        months_elapsed,
        payments_made,
        months_due,
        outstanding_balance,
        next_payment_period,
        effective_status: effective_status(customer.status, months_due),
    }
}

/// The status ladder: Cancelled is terminal, two months of arrears
/// deactivate, one month is overdue, and a manual Inactive wins when the
/// customer is caught up
fn effective_status(stored: PolicyStatus, months_due: u32) -> PolicyStatus {
    if stored.is_terminal() {
        return stored;
    }
    if months_due >= 2 {
        return PolicyStatus::Inactive;
    }
    if months_due == 1 {
        return PolicyStatus::Overdue;
    }
    if stored == PolicyStatus::Inactive {
        return PolicyStatus::Inactive;
    }
    PolicyStatus::Active
}
