//! Billing Domain - Payment Ledger and Arrears Engine
//!
//! Payments are persisted ledger rows keyed by customer id - one row per
//! covered month - and everything else is derived from them. The arrears
//! engine is a pure function of (customer, ledger slice, today):
//!
//! ```text
//! months_elapsed = whole calendar months since inception + 1   (inception month counts)
//! months_due     = max(0, months_elapsed - payments_made)
//! balance        = months_due * current total premium
//! status         = Cancelled > Inactive (due >= 2) > Overdue (due == 1)
//!                  > manually-set Inactive > Active
//! ```
//!
//! "Today" is always an explicit parameter so the engine stays pure and
//! testable with fixed clocks.

pub mod payment;
pub mod balance;
pub mod statement;
pub mod error;

pub use payment::{PaymentRecord, PaymentMethod, PaymentKind};
pub use balance::{BalanceSummary, assess, assess_with_count};
pub use statement::{StatementLine, ReceiptStatus, statement_for};
pub use error::BillingError;
