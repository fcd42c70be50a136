//! Analytics Domain
//!
//! Dashboard metrics for head office and per-agent views: production in a
//! reporting window (new customers, policies written, premium collected)
//! and the present health of the book (arrears, status mix). Everything is
//! computed from the same inputs the rest of the core uses - customers,
//! requests, and the payment ledger - with "today" passed in explicitly.

pub mod period;
pub mod metrics;

pub use period::ReportingPeriod;
pub use metrics::{AgencyMetrics, compute};
