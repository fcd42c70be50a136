//! Premium Calculator Tests
//!
//! Covers every rating family against the published rate card, the empty
//! and draft-state edge cases, and the algebraic properties that must hold
//! for any participant list:
//!
//! - total == policy + addon, exactly
//! - base + per-dependent: N >= 1 implies base + (N-1) * per_dependent; N == 0 is zero
//! - per-person: N * rate
//! - family-unit: couple base vs holder-only base, spouse and dependent increments

use chrono::NaiveDate;
use core_kernel::{Money, ParticipantId};
use domain_policy::{
    calculate, CashBack, FuneralPackage, MedicalAid, Participant, Relationship,
};
use proptest::prelude::*;
use rust_decimal_macros::dec;
use uuid::Uuid;

fn participant(id: u64, relationship: Relationship) -> Participant {
    Participant {
        id: ParticipantId::new(id),
        uuid: Uuid::new_v4(),
        first_name: "Test".into(),
        surname: "Person".into(),
        relationship,
        date_of_birth: NaiveDate::from_ymd_opt(1985, 6, 15).unwrap(),
        id_number: None,
        gender: None,
        is_student: false,
        phone: None,
        email: None,
        street_address: None,
        town: None,
        postal_address: None,
        medical_aid: MedicalAid::None,
        cash_back: CashBack::None,
    }
}

fn household(relationships: &[Relationship]) -> Vec<Participant> {
    relationships
        .iter()
        .enumerate()
        .map(|(i, r)| participant(i as u64 + 1, *r))
        .collect()
}

mod base_plus_dependent_tests {
    use super::*;

    /// Scenario from the rate card: Standard at $2.50 base, $1.25 per
    /// dependent; holder + 2 children = $5.00
    #[test]
    fn test_standard_holder_plus_two_children() {
        let participants = household(&[
            Relationship::Policyholder,
            Relationship::Child,
            Relationship::Child,
        ]);
        let breakdown = calculate(FuneralPackage::Standard, &participants);
        assert_eq!(breakdown.policy_premium, Money::usd(dec!(5.00)));
        assert_eq!(breakdown.addon_premium, Money::usd(dec!(0)));
        assert_eq!(breakdown.total_premium, Money::usd(dec!(5.00)));
    }

    #[test]
    fn test_holder_alone_pays_base_only() {
        let participants = household(&[Relationship::Policyholder]);
        let breakdown = calculate(FuneralPackage::Platinum, &participants);
        assert_eq!(breakdown.policy_premium, Money::usd(dec!(10.00)));
    }

    /// Draft state: nobody attached yet prices at zero, not at base
    #[test]
    fn test_empty_household_prices_at_zero() {
        for package in [
            FuneralPackage::Standard,
            FuneralPackage::Premium,
            FuneralPackage::Platinum,
        ] {
            let breakdown = calculate(package, &[]);
            assert!(
                breakdown.total_premium.is_zero(),
                "{} with no participants must be zero",
                package
            );
        }
    }

    #[test]
    fn test_premium_package_family_of_four() {
        let participants = household(&[
            Relationship::Policyholder,
            Relationship::Spouse,
            Relationship::Child,
            Relationship::Child,
        ]);
        let breakdown = calculate(FuneralPackage::Premium, &participants);
        // 5.00 + 3 * 2.50
        assert_eq!(breakdown.policy_premium, Money::usd(dec!(12.50)));
    }
}

mod per_person_tests {
    use super::*;

    /// Scenario from the rate card: Alkaane at $18 per person, 4 covered = $72
    #[test]
    fn test_alkaane_four_participants() {
        let participants = household(&[
            Relationship::Policyholder,
            Relationship::Spouse,
            Relationship::Child,
            Relationship::OtherDependent,
        ]);
        let breakdown = calculate(FuneralPackage::Alkaane, &participants);
        assert_eq!(breakdown.policy_premium, Money::usd(dec!(72.00)));
    }

    #[test]
    fn test_alkaane_empty_household_is_zero() {
        assert!(calculate(FuneralPackage::Alkaane, &[]).total_premium.is_zero());
    }
}

mod family_unit_tests {
    use super::*;

    /// Couple base $5.00 covers holder + first spouse
    #[test]
    fn test_holder_and_spouse_pay_couple_base() {
        let participants = household(&[Relationship::Policyholder, Relationship::Spouse]);
        let breakdown = calculate(FuneralPackage::MuslimStandard, &participants);
        assert_eq!(breakdown.policy_premium, Money::usd(dec!(5.00)));
    }

    /// Each spouse beyond the first adds $2.50
    #[test]
    fn test_second_spouse_adds_increment() {
        let participants = household(&[
            Relationship::Policyholder,
            Relationship::Spouse,
            Relationship::Spouse,
        ]);
        let breakdown = calculate(FuneralPackage::MuslimStandard, &participants);
        assert_eq!(breakdown.policy_premium, Money::usd(dec!(7.50)));
    }

    /// No spouse present: lower holder-only base applies
    #[test]
    fn test_holder_without_spouse_pays_holder_base() {
        let participants = household(&[Relationship::Policyholder]);
        let breakdown = calculate(FuneralPackage::MuslimStandard, &participants);
        assert_eq!(breakdown.policy_premium, Money::usd(dec!(2.50)));
    }

    #[test]
    fn test_holder_with_children_no_spouse() {
        let participants = household(&[
            Relationship::Policyholder,
            Relationship::Child,
            Relationship::OtherDependent,
        ]);
        let breakdown = calculate(FuneralPackage::MuslimStandard, &participants);
        // 2.50 + 2 * 2.50
        assert_eq!(breakdown.policy_premium, Money::usd(dec!(7.50)));
    }

    #[test]
    fn test_full_household_with_spouse_and_dependents() {
        let participants = household(&[
            Relationship::Policyholder,
            Relationship::Spouse,
            Relationship::Spouse,
            Relationship::Child,
            Relationship::Child,
            Relationship::OtherDependent,
        ]);
        let breakdown = calculate(FuneralPackage::MuslimStandard, &participants);
        // 5.00 couple + 2.50 extra spouse + 3 * 2.50 dependents
        assert_eq!(breakdown.policy_premium, Money::usd(dec!(15.00)));
    }

    /// Legacy relationships (Sibling, Grandparent, ...) are covered heads
    /// but neither spouses nor dependents under family-unit rating
    #[test]
    fn test_legacy_relationships_are_not_surcharged() {
        let participants = household(&[Relationship::Policyholder, Relationship::Sibling]);
        let breakdown = calculate(FuneralPackage::MuslimStandard, &participants);
        assert_eq!(breakdown.policy_premium, Money::usd(dec!(2.50)));
    }
}

mod addon_tests {
    use super::*;

    #[test]
    fn test_addons_price_per_participant() {
        let mut participants = household(&[Relationship::Policyholder, Relationship::Spouse]);
        participants[0].medical_aid = MedicalAid::FamilyLife; // 7.00
        participants[0].cash_back = CashBack::Cb2; // 2.00
        participants[1].medical_aid = MedicalAid::ZimHealth; // 1.00

        let breakdown = calculate(FuneralPackage::Standard, &participants);
        assert_eq!(breakdown.policy_premium, Money::usd(dec!(3.75)));
        assert_eq!(breakdown.addon_premium, Money::usd(dec!(10.00)));
        assert_eq!(breakdown.total_premium, Money::usd(dec!(13.75)));
    }

    #[test]
    fn test_cash_back_payout_does_not_enter_premium() {
        let mut participants = household(&[Relationship::Policyholder]);
        participants[0].cash_back = CashBack::Cb4; // 4.00/month, 1000 payout
        let breakdown = calculate(FuneralPackage::Standard, &participants);
        assert_eq!(breakdown.addon_premium, Money::usd(dec!(4.00)));
    }
}

mod flat_family_tests {
    use super::*;
    use domain_policy::{policy_premium, PackagePricing};

    /// Community-rated books: one flat rate whatever the headcount
    #[test]
    fn test_flat_rate_ignores_headcount() {
        let pricing = PackagePricing::FlatFamily {
            rate: Money::usd(dec!(12.00)),
        };
        let small = household(&[Relationship::Policyholder]);
        let large = household(&[
            Relationship::Policyholder,
            Relationship::Spouse,
            Relationship::Child,
            Relationship::Child,
            Relationship::OtherDependent,
        ]);
        assert_eq!(policy_premium(pricing, &small), Money::usd(dec!(12.00)));
        assert_eq!(policy_premium(pricing, &large), Money::usd(dec!(12.00)));
    }
}

fn relationship_strategy() -> impl Strategy<Value = Relationship> {
    prop_oneof![
        Just(Relationship::Policyholder),
        Just(Relationship::Spouse),
        Just(Relationship::Child),
        Just(Relationship::OtherDependent),
        Just(Relationship::Sibling),
        Just(Relationship::Grandparent),
    ]
}

fn package_strategy() -> impl Strategy<Value = FuneralPackage> {
    prop_oneof![
        Just(FuneralPackage::Standard),
        Just(FuneralPackage::Premium),
        Just(FuneralPackage::Platinum),
        Just(FuneralPackage::MuslimStandard),
        Just(FuneralPackage::Alkaane),
    ]
}

proptest! {
    /// total == policy + addon for any package and household
    #[test]
    fn prop_total_is_exact_sum(
        package in package_strategy(),
        relationships in proptest::collection::vec(relationship_strategy(), 0..12),
    ) {
        let participants = household(&relationships);
        let breakdown = calculate(package, &participants);
        prop_assert_eq!(
            breakdown.total_premium,
            breakdown.policy_premium + breakdown.addon_premium
        );
    }

    /// base + per-dependent closed form holds for any non-empty household
    #[test]
    fn prop_base_plus_dependent_closed_form(
        relationships in proptest::collection::vec(relationship_strategy(), 1..12),
    ) {
        let participants = household(&relationships);
        let breakdown = calculate(FuneralPackage::Standard, &participants);
        let n = participants.len() as u32;
        let expected = Money::usd(dec!(2.50)) + Money::usd(dec!(1.25)).times(n - 1);
        prop_assert_eq!(breakdown.policy_premium, expected);
    }

    /// per-person closed form holds for any household size
    #[test]
    fn prop_per_person_closed_form(
        relationships in proptest::collection::vec(relationship_strategy(), 0..12),
    ) {
        let participants = household(&relationships);
        let breakdown = calculate(FuneralPackage::Alkaane, &participants);
        let expected = Money::usd(dec!(18.00)).times(participants.len() as u32);
        prop_assert_eq!(breakdown.policy_premium, expected);
    }
}
