//! Customer statement view
//!
//! A flattened, newest-first payment history for the customer detail
//! screen. Ledger rows render as paid lines; a submitted-but-unapproved
//! payment can be appended as a pending line by the workflow layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CustomerId, Money, PremiumPeriod};

use crate::payment::{PaymentKind, PaymentMethod, PaymentRecord};

/// Whether the money has actually been receipted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiptStatus {
    Paid,
    Pending,
}

/// One line on a customer statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementLine {
    pub date: DateTime<Utc>,
    pub description: String,
    pub amount: Money,
    pub status: ReceiptStatus,
    pub method: Option<PaymentMethod>,
    pub receipt_filename: Option<String>,
}

impl StatementLine {
    fn from_record(record: &PaymentRecord) -> Self {
        let description = match record.kind {
            PaymentKind::Initial => "Initial Policy Payment".to_string(),
            PaymentKind::Renewal => format!("Payment for {}", record.period),
        };
        Self {
            date: record.recorded_at,
            description,
            amount: record.amount,
            status: ReceiptStatus::Paid,
            method: Some(record.method),
            receipt_filename: record.receipt_filename.clone(),
        }
    }

    /// A submitted payment still awaiting approval
    pub fn pending_submission(
        date: DateTime<Utc>,
        period: PremiumPeriod,
        amount: Money,
        method: PaymentMethod,
    ) -> Self {
        Self {
            date,
            description: format!("Payment for {}", period),
            amount,
            status: ReceiptStatus::Pending,
            method: Some(method),
            receipt_filename: None,
        }
    }
}

/// Builds the statement for one customer from the ledger, newest first
pub fn statement_for(customer_id: CustomerId, ledger: &[PaymentRecord]) -> Vec<StatementLine> {
    let mut lines: Vec<StatementLine> = ledger
        .iter()
        .filter(|r| r.is_for(customer_id))
        .map(StatementLine::from_record)
        .collect();
    lines.sort_by(|a, b| b.date.cmp(&a.date));
    lines
}
