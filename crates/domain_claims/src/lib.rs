//! Claims Domain
//!
//! A claim is filed against a covered participant's death and moves through
//! a short lifecycle:
//!
//! ```text
//! Pending -> Approved -> Paid
//!         \-> Rejected
//! ```
//!
//! Approval and payout stamp their dates; everything else about claim
//! handling (documents, payout execution) belongs to the surrounding
//! application.

pub mod claim;
pub mod error;

pub use claim::{Claim, ClaimStatus, FiledBy};
pub use error::ClaimError;
