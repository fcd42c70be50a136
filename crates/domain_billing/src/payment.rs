//! Persisted payment ledger rows
//!
//! Each approved payment becomes one independent ledger row keyed by
//! customer id. The row count per customer is the "payments made" input to
//! the arrears engine; the request that produced a row is not consulted
//! again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CustomerId, Money, PaymentId, PremiumPeriod};

use crate::error::BillingError;

/// How the premium was collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    EcoCash,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "Stop Order")]
    StopOrder,
}

/// Whether this is the first payment on a new policy or a renewal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentKind {
    Initial,
    Renewal,
}

/// One month of premium, received and receipted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: PaymentId,
    pub customer_id: CustomerId,
    pub amount: Money,
    pub method: PaymentMethod,
    pub kind: PaymentKind,
    /// The billing period this payment covers
    pub period: PremiumPeriod,
    pub receipt_filename: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl PaymentRecord {
    /// Creates a ledger row, rejecting non-positive amounts
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PaymentId,
        customer_id: CustomerId,
        amount: Money,
        method: PaymentMethod,
        kind: PaymentKind,
        period: PremiumPeriod,
        receipt_filename: Option<String>,
        recorded_at: DateTime<Utc>,
    ) -> Result<Self, BillingError> {
        if !amount.is_positive() {
            return Err(BillingError::NonPositiveAmount(amount.to_string()));
        }
        Ok(Self {
            id,
            customer_id,
            amount,
            method,
            kind,
            period,
            receipt_filename,
            recorded_at,
        })
    }

    /// True when this row belongs to the given customer
    pub fn is_for(&self, customer_id: CustomerId) -> bool {
        self.customer_id == customer_id
    }
}
