//! Request Workflow Domain
//!
//! Agents never write to the book directly; every change travels as a
//! pending request that head office approves or rejects. Approved and
//! Rejected are terminal - the caller serializes concurrent approval
//! attempts on the same request, and a second attempt surfaces as
//! [`RequestError::RequestNotPending`] rather than a double-applied change.
//!
//! Approving a New Policy request is the one transition with real
//! side-structure: it materializes a customer, enforcing policy-number
//! uniqueness across the book. A collision is a business outcome (the
//! request flips to Rejected with an explanatory note), never an error.

pub mod request;
pub mod approval;
pub mod error;

pub use request::{
    ChangeRequest, RequestKind, RequestStatus, PolicyApplication, ParticipantDraft,
    CustomerDetails,
};
pub use approval::{
    approve_new_policy, apply_edit_details, apply_add_dependent, apply_package_change,
    apply_payment, payment_record_from_request, next_participant_id, target_customer_mut,
    NewPolicyOutcome,
};
pub use error::RequestError;
