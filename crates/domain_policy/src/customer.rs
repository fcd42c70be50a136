//! Customer aggregate - one funeral-assurance policy
//!
//! # Invariants
//!
//! - `total_premium = policy_premium + addon_premium`, maintained by
//!   [`Customer::refresh_premium`]
//! - Exactly one participant has relationship Self once the policy exists
//! - Cancelled is terminal: the billing engine never overrides it

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{AgentId, CustomerId, Money, PremiumPeriod};

use crate::error::PolicyError;
use crate::package::FuneralPackage;
use crate::participant::{Gender, Participant};
use crate::premium;

/// Policy lifecycle status
///
/// Active/Overdue/Inactive are derived from arrears by the billing engine;
/// Cancelled (and a manually set Inactive) are operator decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyStatus {
    Active,
    Inactive,
    Overdue,
    Cancelled,
}

impl PolicyStatus {
    /// True for the terminal, never-recomputed state
    pub fn is_terminal(&self) -> bool {
        matches!(self, PolicyStatus::Cancelled)
    }
}

/// A funeral-assurance policy and its covered household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub uuid: Uuid,
    /// Unique across the book; derived from the holder's national id
    pub policy_number: String,
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
    pub inception_date: NaiveDate,
    /// End of the qualifying period; claims pay out from this date
    pub cover_date: NaiveDate,
    pub status: PolicyStatus,
    pub assigned_agent_id: AgentId,
    pub funeral_package: FuneralPackage,
    pub participants: Vec<Participant>,
    pub policy_premium: Money,
    pub addon_premium: Money,
    pub total_premium: Money,
    /// The billing period the most recent payment covered
    pub premium_period: PremiumPeriod,
    pub latest_receipt_date: Option<NaiveDate>,
    pub date_created: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Customer {
    /// The unique Self participant, once the policy exists
    pub fn policyholder(&self) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|p| p.relationship.is_policyholder())
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }

    /// Recomputes the premium fields from the current package and
    /// participant list, restoring `total = policy + addon`
    pub fn refresh_premium(&mut self) {
        let breakdown = premium::calculate(self.funeral_package, &self.participants);
        self.policy_premium = breakdown.policy_premium;
        self.addon_premium = breakdown.addon_premium;
        self.total_premium = breakdown.total_premium;
    }

    /// Checks the aggregate invariants
    ///
    /// A materialized policy must carry a policy number, exactly one Self
    /// participant, and premium fields that reconcile.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.policy_number.is_empty() {
            return Err(PolicyError::MissingRequiredField("policy_number".into()));
        }
        let holders = self
            .participants
            .iter()
            .filter(|p| p.relationship.is_policyholder())
            .count();
        if holders != 1 {
            return Err(PolicyError::PolicyholderCount(holders));
        }
        if self
            .policy_premium
            .checked_add(&self.addon_premium)
            .map_err(|e| PolicyError::validation(e.to_string()))?
            != self.total_premium
        {
            return Err(PolicyError::validation(
                "total premium does not equal policy + addon",
            ));
        }
        Ok(())
    }
}

/// Derives the policy number from a national id number
///
/// Strips everything non-alphanumeric ("63-123456A-78" becomes
/// "63123456A78"). Returns `None` when nothing remains; a policy must never
/// be issued with an empty policy number.
pub fn derive_policy_number(id_number: &str) -> Option<String> {
    let cleaned: String = id_number.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
