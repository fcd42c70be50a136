//! Claim record and lifecycle

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AdminId, AgentId, ClaimId, CustomerId, Money, ParticipantId};
use domain_policy::{Customer, Participant};

use crate::error::ClaimError;

/// Claim lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
    Paid,
}

/// Who filed the claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FiledBy {
    Agent(AgentId),
    Admin(AdminId),
}

/// A funeral claim against a covered participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub id: ClaimId,
    pub customer_id: CustomerId,
    pub policy_number: String,
    pub customer_name: String,
    pub deceased_name: String,
    pub deceased_participant_id: ParticipantId,
    pub date_of_death: NaiveDate,
    pub claim_amount: Money,
    pub status: ClaimStatus,
    pub filed_by: FiledBy,
    pub filed_by_name: String,
    pub filed_date: DateTime<Utc>,
    pub approved_date: Option<DateTime<Utc>>,
    pub paid_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub death_certificate_filename: Option<String>,
}

impl Claim {
    /// Files a new pending claim against a covered participant
    ///
    /// Snapshots the policy number and display names at filing time so the
    /// claim record stays readable even if the policy is edited later.
    #[allow(clippy::too_many_arguments)]
    pub fn file(
        id: ClaimId,
        customer: &Customer,
        deceased: &Participant,
        date_of_death: NaiveDate,
        claim_amount: Money,
        filed_by: FiledBy,
        filed_by_name: impl Into<String>,
        filed_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_id: customer.id,
            policy_number: customer.policy_number.clone(),
            customer_name: customer.full_name(),
            deceased_name: deceased.full_name(),
            deceased_participant_id: deceased.id,
            date_of_death,
            claim_amount,
            status: ClaimStatus::Pending,
            filed_by,
            filed_by_name: filed_by_name.into(),
            filed_date,
            approved_date: None,
            paid_date: None,
            notes: None,
            death_certificate_filename: None,
        }
    }

    /// Moves the claim to a new status, stamping approval/payout dates
    ///
    /// Valid transitions are Pending to Approved/Rejected and Approved to
    /// Paid; anything else is an error and leaves the claim untouched.
    pub fn update_status(
        &mut self,
        status: ClaimStatus,
        at: DateTime<Utc>,
    ) -> Result<(), ClaimError> {
        if !self.can_transition_to(status) {
            return Err(ClaimError::InvalidStatusTransition {
                from: format!("{:?}", self.status),
                to: format!("{:?}", status),
            });
        }
        match status {
            ClaimStatus::Approved => self.approved_date = Some(at),
            ClaimStatus::Paid => self.paid_date = Some(at),
            _ => {}
        }
        self.status = status;
        Ok(())
    }

    fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!(
            (self.status, target),
            (Pending, Approved) | (Pending, Rejected) | (Approved, Paid)
        )
    }
}
