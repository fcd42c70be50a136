//! Covered participants and their display suffixes
//!
//! Every policy covers an ordered list of participants, exactly one of whom
//! is the policyholder ("Self" in the stored schema). Each participant gets
//! a stable 3-digit display suffix derived from relationship class and
//! insertion order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use core_kernel::ParticipantId;

use crate::package::{CashBack, MedicalAid};

/// Relationship of a participant to the policyholder
///
/// The last four variants only occur on imported legacy books; they carry
/// no suffix base and no special rating treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    #[serde(rename = "Self")]
    Policyholder,
    Spouse,
    Child,
    #[serde(rename = "Other Dependent")]
    OtherDependent,
    Stepchild,
    Grandchild,
    Sibling,
    Grandparent,
}

impl Relationship {
    /// True for the unique "Self" participant
    pub fn is_policyholder(&self) -> bool {
        matches!(self, Relationship::Policyholder)
    }

    /// True for relationships priced at the dependent rate under the
    /// family-unit rating rule
    pub fn is_dependent(&self) -> bool {
        matches!(self, Relationship::Child | Relationship::OtherDependent)
    }

    /// Suffix numbering base for this relationship class, if it has one
    fn suffix_base(&self) -> Option<u16> {
        match self {
            Relationship::Spouse => Some(101),
            Relationship::Child => Some(201),
            Relationship::OtherDependent => Some(301),
            _ => None,
        }
    }
}

/// Gender as captured on the application form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// A person covered under a policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub uuid: Uuid,
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

impl Participant {
    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }
}

/// A participant's 3-digit display code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantSuffix {
    Assigned(u16),
    /// Relationship class has no numbering base, or the participant is not
    /// in the supplied list
    Unassigned,
}

impl fmt::Display for ParticipantSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantSuffix::Assigned(code) => write!(f, "{:03}", code),
            ParticipantSuffix::Unassigned => write!(f, "N/A"),
        }
    }
}

/// Assigns the display suffix for a participant within their policy
///
/// The policyholder is always "000". Everyone else is numbered within their
/// relationship class, ordered by ascending id (ids are assigned
/// sequentially, so this tracks insertion order): Spouse from 101, Child
/// from 201, Other Dependent from 301. Adding participants never renumbers
/// existing ones as long as ids are never reused or reordered.
pub fn participant_suffix(
    participant: &Participant,
    all_participants: &[Participant],
) -> ParticipantSuffix {
    if participant.relationship.is_policyholder() {
        return ParticipantSuffix::Assigned(0);
    }

    let Some(base) = participant.relationship.suffix_base() else {
        return ParticipantSuffix::Unassigned;
    };

    let mut peers: Vec<ParticipantId> = all_participants
        .iter()
        .filter(|p| p.relationship == participant.relationship)
        .map(|p| p.id)
        .collect();
    peers.sort();

    match peers.iter().position(|id| *id == participant.id) {
        Some(index) => ParticipantSuffix::Assigned(base + index as u16),
        None => ParticipantSuffix::Unassigned,
    }
}
