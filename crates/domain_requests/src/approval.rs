//! The approval processor
//!
//! Approving a New Policy request materializes a customer exactly once:
//! the policy number derives from the applicant's national id, collisions
//! convert the approval into a rejection with a note, and ids are allocated
//! max + 1 over the existing book (a contiguous block for participants).
//! Every other variant applies as a direct field update on the referenced
//! customer.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use core_kernel::{add_months, CustomerId, ParticipantId, PaymentId, PremiumPeriod};
use domain_billing::PaymentRecord;
use domain_policy::{
    derive_policy_number, premium, Customer, FuneralPackage, PolicyStatus,
};

use crate::error::RequestError;
use crate::request::{ChangeRequest, CustomerDetails, ParticipantDraft, RequestKind};

/// Qualifying period between inception and the start of claimable cover
const COVER_WAIT_MONTHS: u32 = 3;

/// The business outcome of a New Policy approval action
///
/// Both arms are successful executions of the workflow; `Rejected` is the
/// defined outcome for collisions and unusable id numbers, reported back to
/// the approving admin.
#[derive(Debug, Clone, PartialEq)]
pub enum NewPolicyOutcome {
    /// The materialized customer, ready for the caller to persist
    Approved(Box<Customer>),
    /// The request was auto-rejected; the note explains why
    Rejected { note: String },
}

/// Allocates the next participant id over the whole book
///
/// Participant ids are globally sequential, so new dependents and new
/// policies draw from the same counter.
pub fn next_participant_id(existing: &[Customer]) -> ParticipantId {
    ParticipantId::next_after(
        existing
            .iter()
            .flat_map(|c| c.participants.iter().map(|p| p.id)),
    )
}

/// Transitions a New Policy request out of Pending, materializing a
/// customer on success
///
/// The request must still be Pending (the caller serializes concurrent
/// approvals; a second attempt errors instead of double-materializing) and
/// must be the New Policy variant. The returned customer is not yet
/// persisted - the caller owns that, along with broadcasting the change.
pub fn approve_new_policy(
    request: &mut ChangeRequest,
    existing_customers: &[Customer],
    now: DateTime<Utc>,
) -> Result<NewPolicyOutcome, RequestError> {
    request.ensure_pending()?;
    let RequestKind::NewPolicy { application } = &request.kind else {
        return Err(RequestError::WrongKind {
            expected: "New Policy",
        });
    };

    let Some(policy_number) = derive_policy_number(&application.id_number) else {
        // Never materialize a customer with an empty policy number
        let note = "Rejected: Application id number yields no policy number.".to_string();
        warn!(request_id = %request.id, "new policy application has no usable id number");
        request.mark_rejected(Some(note.clone()))?;
        return Ok(NewPolicyOutcome::Rejected { note });
    };

    if existing_customers
        .iter()
        .any(|c| c.policy_number == policy_number)
    {
        let note = format!("Rejected: Policy number {} already exists.", policy_number);
        warn!(
            request_id = %request.id,
            policy_number = %policy_number,
            "policy number collision, converting approval to rejection"
        );
        request.mark_rejected(Some(note.clone()))?;
        return Ok(NewPolicyOutcome::Rejected { note });
    }

    let application = application.clone();
    let customer_id = CustomerId::next_after(existing_customers.iter().map(|c| c.id));
    let first_participant_id = next_participant_id(existing_customers);

    // Contiguous id block, in application order
    let participants: Vec<_> = application
        .participants
        .into_iter()
        .enumerate()
        .map(|(offset, draft)| {
            draft.into_participant(ParticipantId::new(
                first_participant_id.value() + offset as u64,
            ))
        })
        .collect();

    let inception_date = request.created_at.date_naive();
    let breakdown = premium::calculate(application.funeral_package, &participants);

    let customer = Customer {
        id: customer_id,
        uuid: Uuid::new_v4(),
        policy_number,
        first_name: application.first_name,
        surname: application.surname,
        id_number: application.id_number,
        date_of_birth: application.date_of_birth,
        gender: application.gender,
        phone: application.phone,
        email: application.email,
        street_address: application.street_address,
        town: application.town,
        postal_address: application.postal_address,
        inception_date,
        cover_date: add_months(inception_date, COVER_WAIT_MONTHS),
        status: PolicyStatus::Active,
        assigned_agent_id: request.agent_id,
        funeral_package: application.funeral_package,
        participants,
        policy_premium: breakdown.policy_premium,
        addon_premium: breakdown.addon_premium,
        total_premium: breakdown.total_premium,
        premium_period: PremiumPeriod::from_date(inception_date),
        latest_receipt_date: Some(inception_date),
        date_created: now,
        last_updated: now,
    };
    customer.validate()?;

    request.mark_approved(None)?;
    info!(
        request_id = %request.id,
        customer_id = %customer.id,
        policy_number = %customer.policy_number,
        "new policy approved and materialized"
    );
    Ok(NewPolicyOutcome::Approved(Box::new(customer)))
}

/// Resolves the customer a request targets within the caller's book
///
/// The appliers below mutate a customer in place; callers resolve the
/// request's customer id through this first so a stale reference surfaces
/// as [`RequestError::CustomerNotFound`] instead of a silent no-op.
pub fn target_customer_mut(
    customers: &mut [Customer],
    customer_id: CustomerId,
) -> Result<&mut Customer, RequestError> {
    customers
        .iter_mut()
        .find(|c| c.id == customer_id)
        .ok_or(RequestError::CustomerNotFound(customer_id))
}

/// Applies an approved Edit Customer Details request
pub fn apply_edit_details(
    customer: &mut Customer,
    new_values: &CustomerDetails,
    now: DateTime<Utc>,
) {
    customer.first_name = new_values.first_name.clone();
    customer.surname = new_values.surname.clone();
    customer.phone = new_values.phone.clone();
    customer.email = new_values.email.clone();
    customer.street_address = new_values.street_address.clone();
    customer.town = new_values.town.clone();
    customer.postal_address = new_values.postal_address.clone();
    customer.last_updated = now;
}

/// Applies an approved Add Dependent request and reprices the policy
///
/// `new_id` comes from [`next_participant_id`] over the whole book, keeping
/// the global participant counter monotonic.
pub fn apply_add_dependent(
    customer: &mut Customer,
    dependent: ParticipantDraft,
    new_id: ParticipantId,
    now: DateTime<Utc>,
) {
    debug!(customer_id = %customer.id, participant_id = %new_id, "adding dependent");
    customer.participants.push(dependent.into_participant(new_id));
    customer.refresh_premium();
    customer.last_updated = now;
}

/// Applies an approved Policy Upgrade/Downgrade request and reprices
pub fn apply_package_change(
    customer: &mut Customer,
    new_package: FuneralPackage,
    now: DateTime<Utc>,
) {
    customer.funeral_package = new_package;
    customer.refresh_premium();
    customer.last_updated = now;
}

/// Applies an approved payment: the customer is current again
pub fn apply_payment(customer: &mut Customer, record: &PaymentRecord, now: DateTime<Utc>) {
    customer.premium_period = record.period;
    customer.latest_receipt_date = Some(record.recorded_at.date_naive());
    if customer.status != PolicyStatus::Cancelled {
        customer.status = PolicyStatus::Active;
    }
    customer.last_updated = now;
}

/// Builds the ledger row for an approved Make Payment request
pub fn payment_record_from_request(
    request: &ChangeRequest,
    payment_id: PaymentId,
    recorded_at: DateTime<Utc>,
) -> Result<PaymentRecord, RequestError> {
    let RequestKind::MakePayment {
        customer_id,
        amount,
        kind,
        method,
        period,
        receipt_filename,
    } = &request.kind
    else {
        return Err(RequestError::WrongKind {
            expected: "Make Payment",
        });
    };

    let record = PaymentRecord::new(
        payment_id,
        *customer_id,
        *amount,
        *method,
        *kind,
        *period,
        receipt_filename.clone(),
        recorded_at,
    )?;
    Ok(record)
}
