//! Property-based test generators
//!
//! Proptest strategies that produce structurally valid domain data - a
//! household always numbers its participants sequentially with the holder
//! first, the way the store would have assigned them.

use once_cell::sync::Lazy;
use proptest::prelude::*;

use domain_policy::{FuneralPackage, Participant, Relationship};

use crate::builders::ParticipantBuilder;

/// Every package on the rate card
pub static ALL_PACKAGES: Lazy<Vec<FuneralPackage>> = Lazy::new(|| {
    vec![
        FuneralPackage::Standard,
        FuneralPackage::Premium,
        FuneralPackage::Platinum,
        FuneralPackage::MuslimStandard,
        FuneralPackage::Alkaane,
    ]
});

/// Strategy over the package catalog
pub fn package_strategy() -> impl Strategy<Value = FuneralPackage> {
    proptest::sample::select(ALL_PACKAGES.clone())
}

/// Strategy over non-holder relationships
pub fn dependent_relationship_strategy() -> impl Strategy<Value = Relationship> {
    prop_oneof![
        Just(Relationship::Spouse),
        Just(Relationship::Child),
        Just(Relationship::OtherDependent),
        Just(Relationship::Stepchild),
        Just(Relationship::Grandchild),
        Just(Relationship::Sibling),
        Just(Relationship::Grandparent),
    ]
}

/// Strategy for a household: one holder plus 0..`max_dependents` others,
/// ids assigned sequentially from 1
pub fn household_strategy(max_dependents: usize) -> impl Strategy<Value = Vec<Participant>> {
    proptest::collection::vec(dependent_relationship_strategy(), 0..=max_dependents).prop_map(
        |relationships| {
            let mut participants =
                vec![ParticipantBuilder::new(1, Relationship::Policyholder).build()];
            participants.extend(
                relationships
                    .into_iter()
                    .enumerate()
                    .map(|(i, r)| ParticipantBuilder::new(i as u64 + 2, r).build()),
            );
            participants
        },
    )
}
