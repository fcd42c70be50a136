//! Billing domain errors

use thiserror::Error;

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum BillingError {
    /// Ledger rows must carry a positive amount
    #[error("Payment amount must be positive, got {0}")]
    NonPositiveAmount(String),

    /// Currency mismatch between payment and premium
    #[error("Money error: {0}")]
    Money(#[from] core_kernel::MoneyError),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}
