//! Monthly premium calculation
//!
//! A pure function of the funeral package and the participant list. The
//! policy premium follows the package's rating family; add-on premiums sum
//! each participant's medical-aid and cash-back rates on top.

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

use crate::package::{FuneralPackage, PackagePricing};
use crate::participant::Participant;

/// The monthly premium, split the way the store persists it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    pub policy_premium: Money,
    pub addon_premium: Money,
    pub total_premium: Money,
}

impl PremiumBreakdown {
    fn new(policy_premium: Money, addon_premium: Money) -> Self {
        Self {
            policy_premium,
            addon_premium,
            total_premium: policy_premium + addon_premium,
        }
    }
}

/// Computes the monthly premium for a package and participant list
///
/// Total is always exactly policy + addon. An empty participant list (a
/// draft application with nobody attached yet) prices at zero on every
/// rating family except per-person, where it is zero anyway.
pub fn calculate(package: FuneralPackage, participants: &[Participant]) -> PremiumBreakdown {
    let policy_premium = policy_premium(package.pricing(), participants);
    let addon_premium = addon_premium(participants);
    PremiumBreakdown::new(policy_premium, addon_premium)
}

/// Rates the policy premium for a pricing rule directly
///
/// Used by [`calculate`] via the package catalog, and directly for
/// community-rated books whose flat family rate is configured per book
/// rather than drawn from the catalog.
pub fn policy_premium(pricing: PackagePricing, participants: &[Participant]) -> Money {
    let zero = Money::zero(Currency::Usd);
    let headcount = participants.len() as u32;

    match pricing {
        PackagePricing::PerPerson { rate } => rate.times(headcount),

        PackagePricing::BasePlusDependent { base, per_dependent } => {
            if headcount == 0 {
                return zero;
            }
            // The -1 excludes the policyholder from the dependent surcharge
            let dependents = headcount.saturating_sub(1);
            base + per_dependent.times(dependents)
        }

        PackagePricing::FamilyUnit {
            couple_base,
            holder_base,
            extra_spouse,
            dependent,
        } => {
            if headcount == 0 {
                return zero;
            }
            let spouses = participants
                .iter()
                .filter(|p| p.relationship == crate::participant::Relationship::Spouse)
                .count() as u32;
            let dependents = participants
                .iter()
                .filter(|p| p.relationship.is_dependent())
                .count() as u32;

            if spouses > 0 {
                // Couple base covers holder + first spouse
                couple_base
                    + extra_spouse.times(spouses.saturating_sub(1))
                    + dependent.times(dependents)
            } else {
                holder_base + dependent.times(dependents)
            }
        }

        PackagePricing::FlatFamily { rate } => rate,
    }
}

fn addon_premium(participants: &[Participant]) -> Money {
    participants
        .iter()
        .map(|p| p.medical_aid.monthly_rate() + p.cash_back.monthly_rate())
        .sum()
}
