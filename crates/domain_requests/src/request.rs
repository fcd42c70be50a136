//! Change requests - the tagged variants agents submit
//!
//! Each variant carries only its own payload, discriminated by the stored
//! "requestType" tag. A request references an existing customer by id,
//! except New Policy, which embeds the full application used to materialize
//! the customer on approval.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{AgentId, CustomerId, Money, ParticipantId, PremiumPeriod, RequestId};
use domain_billing::{PaymentKind, PaymentMethod};
use domain_policy::{
    CashBack, FuneralPackage, Gender, MedicalAid, Participant, Relationship,
};

use crate::error::RequestError;

/// Workflow status of a request; Approved and Rejected are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    /// True once the request can no longer transition
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }
}

/// A participant as captured on a form, before the store assigns ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantDraft {
    pub first_name: String,
    pub surname: String,
    pub relationship: Relationship,
    pub date_of_birth: NaiveDate,
    pub id_number: Option<String>,
    pub gender: Option<Gender>,
    #[serde(default)]
    pub is_student: bool,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub street_address: Option<String>,
    pub town: Option<String>,
    pub postal_address: Option<String>,
    #[serde(default)]
    pub medical_aid: MedicalAid,
    #[serde(default)]
    pub cash_back: CashBack,
}

impl ParticipantDraft {
    /// Materializes the draft with a store-assigned id
    pub fn into_participant(self, id: ParticipantId) -> Participant {
        Participant {
            id,
            uuid: Uuid::new_v4(),
            first_name: self.first_name,
            surname: self.surname,
            relationship: self.relationship,
            date_of_birth: self.date_of_birth,
            id_number: self.id_number,
            gender: self.gender,
            is_student: self.is_student,
            phone: self.phone,
            email: self.email,
            street_address: self.street_address,
            town: self.town,
            postal_address: self.postal_address,
            medical_aid: self.medical_aid,
            cash_back: self.cash_back,
        }
    }
}

/// A full new-policy application embedded in a New Policy request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyApplication {
    pub first_name: String,
    pub surname: String,
    pub id_number: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub street_address: String,
    pub town: String,
    pub postal_address: String,
    pub funeral_package: FuneralPackage,
    pub participants: Vec<ParticipantDraft>,
}

/// The editable contact fields on a customer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub first_name: String,
    pub surname: String,
    pub phone: String,
    pub email: String,
    pub street_address: String,
    pub town: String,
    pub postal_address: String,
}

/// Variant-specific request payloads, tagged the way the store tags them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "requestType")]
pub enum RequestKind {
    #[serde(rename = "New Policy")]
    NewPolicy { application: PolicyApplication },

    #[serde(rename = "Edit Customer Details")]
    EditDetails {
        customer_id: CustomerId,
        /// Snapshot at submission time, shown to the approving admin
        old_values: CustomerDetails,
        new_values: CustomerDetails,
    },

    #[serde(rename = "Add Dependent")]
    AddDependent {
        customer_id: CustomerId,
        dependent: ParticipantDraft,
    },

    #[serde(rename = "Policy Upgrade")]
    PolicyUpgrade {
        customer_id: CustomerId,
        new_package: FuneralPackage,
    },

    #[serde(rename = "Policy Downgrade")]
    PolicyDowngrade {
        customer_id: CustomerId,
        new_package: FuneralPackage,
    },

    #[serde(rename = "Make Payment")]
    MakePayment {
        customer_id: CustomerId,
        amount: Money,
        kind: PaymentKind,
        method: PaymentMethod,
        period: PremiumPeriod,
        receipt_filename: Option<String>,
    },
}

/// A pending change proposed by an agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRequest {
    pub id: RequestId,
    pub agent_id: AgentId,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub admin_notes: Option<String>,
    #[serde(flatten)]
    pub kind: RequestKind,
}

impl ChangeRequest {
    /// Creates a new pending request
    pub fn pending(
        id: RequestId,
        agent_id: AgentId,
        created_at: DateTime<Utc>,
        kind: RequestKind,
    ) -> Self {
        Self {
            id,
            agent_id,
            status: RequestStatus::Pending,
            created_at,
            admin_notes: None,
            kind,
        }
    }

    /// The customer this request targets; New Policy has none yet
    pub fn customer_id(&self) -> Option<CustomerId> {
        match &self.kind {
            RequestKind::NewPolicy { .. } => None,
            RequestKind::EditDetails { customer_id, .. }
            | RequestKind::AddDependent { customer_id, .. }
            | RequestKind::PolicyUpgrade { customer_id, .. }
            | RequestKind::PolicyDowngrade { customer_id, .. }
            | RequestKind::MakePayment { customer_id, .. } => Some(*customer_id),
        }
    }

    /// Marks the request approved, recording any admin notes
    ///
    /// Direct status overwrite for the non-materializing variants; New
    /// Policy approval goes through [`crate::approval::approve_new_policy`].
    pub fn mark_approved(&mut self, notes: Option<String>) -> Result<(), RequestError> {
        self.ensure_pending()?;
        self.status = RequestStatus::Approved;
        self.admin_notes = notes;
        Ok(())
    }

    /// Marks the request rejected, recording any admin notes
    pub fn mark_rejected(&mut self, notes: Option<String>) -> Result<(), RequestError> {
        self.ensure_pending()?;
        self.status = RequestStatus::Rejected;
        self.admin_notes = notes;
        Ok(())
    }

    pub(crate) fn ensure_pending(&self) -> Result<(), RequestError> {
        if self.status.is_terminal() {
            return Err(RequestError::RequestNotPending {
                id: self.id,
                status: self.status,
            });
        }
        Ok(())
    }
}
