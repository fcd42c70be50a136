//! Policy Domain
//!
//! This crate carries the funeral-assurance policy model: the package
//! catalog with its static rate tables, covered participants and their
//! display suffixes, the customer aggregate, and the monthly premium
//! calculator.
//!
//! # Rating families
//!
//! ```text
//! Standard / Premium / Platinum   base + per-dependent
//! Alkaane                         flat rate per covered person
//! Muslim Standard                 family-unit (couple base, spouse/dependent increments)
//! ```
//!
//! The calculator is a pure function of package + participant list; add-on
//! premiums (medical aid, cash-back) price per participant on top of the
//! policy premium, and the invariant `total = policy + addon` holds exactly.

pub mod package;
pub mod participant;
pub mod customer;
pub mod premium;
pub mod error;

pub use package::{FuneralPackage, PackagePricing, MedicalAid, CashBack};
pub use participant::{Participant, Relationship, Gender, ParticipantSuffix, participant_suffix};
pub use customer::{Customer, PolicyStatus, derive_policy_number};
pub use premium::{PremiumBreakdown, calculate, policy_premium};
pub use error::PolicyError;
