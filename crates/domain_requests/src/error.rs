//! Request workflow errors
//!
//! These cover caller mistakes (approving a settled request, applying the
//! wrong variant). Business rejections - policy-number collisions, missing
//! id numbers - are not errors; they come back as
//! [`crate::approval::NewPolicyOutcome::Rejected`].

use thiserror::Error;

use core_kernel::{CustomerId, RequestId};
use domain_billing::BillingError;
use domain_policy::PolicyError;

use crate::request::RequestStatus;

/// Errors that can occur in the request workflow
#[derive(Debug, Error)]
pub enum RequestError {
    /// Approved/Rejected are terminal; re-approval attempts land here
    #[error("Request {id} is {status:?}, not Pending")]
    RequestNotPending {
        id: RequestId,
        status: RequestStatus,
    },

    /// An applier was handed the wrong request variant
    #[error("Expected a {expected} request")]
    WrongKind { expected: &'static str },

    /// The request references a customer missing from the book
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// Policy invariant violated while materializing a customer
    #[error("Policy error: {0}")]
    Policy(#[from] PolicyError),

    /// Ledger row construction failed
    #[error("Billing error: {0}")]
    Billing(#[from] BillingError),
}
