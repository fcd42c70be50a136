//! Participant Suffix Tests
//!
//! The display suffix is recomputed on every call from the current
//! participant list, so these tests pin down the ordering rules that keep
//! it stable: peers sort by ascending id, class bases never shift, and the
//! policyholder is always 000.

use chrono::NaiveDate;
use core_kernel::ParticipantId;
use domain_policy::{
    participant_suffix, CashBack, MedicalAid, Participant, ParticipantSuffix, Relationship,
};
use uuid::Uuid;

fn participant(id: u64, relationship: Relationship) -> Participant {
    Participant {
        id: ParticipantId::new(id),
        uuid: Uuid::new_v4(),
        first_name: "Test".into(),
        surname: "Person".into(),
        relationship,
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
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

fn suffix_of(p: &Participant, all: &[Participant]) -> String {
    participant_suffix(p, all).to_string()
}

#[test]
fn test_policyholder_is_always_000() {
    let holder = participant(5, Relationship::Policyholder);
    assert_eq!(suffix_of(&holder, &[holder.clone()]), "000");
    // Even outside any list, Self is 000
    assert_eq!(suffix_of(&holder, &[]), "000");
}

#[test]
fn test_class_bases() {
    let all = vec![
        participant(1, Relationship::Policyholder),
        participant(2, Relationship::Spouse),
        participant(3, Relationship::Child),
        participant(4, Relationship::OtherDependent),
    ];
    assert_eq!(suffix_of(&all[1], &all), "101");
    assert_eq!(suffix_of(&all[2], &all), "201");
    assert_eq!(suffix_of(&all[3], &all), "301");
}

/// Peers order by ascending id regardless of list position: with spouses
/// id=10 and id=5, id=5 takes 101 and id=10 takes 102
#[test]
fn test_peers_sort_by_ascending_id() {
    let all = vec![
        participant(1, Relationship::Policyholder),
        participant(10, Relationship::Spouse),
        participant(5, Relationship::Spouse),
    ];
    assert_eq!(suffix_of(&all[2], &all), "101");
    assert_eq!(suffix_of(&all[1], &all), "102");
}

#[test]
fn test_numbering_is_per_class() {
    let all = vec![
        participant(1, Relationship::Policyholder),
        participant(2, Relationship::Child),
        participant(3, Relationship::Spouse),
        participant(4, Relationship::Child),
    ];
    // Children number independently of the spouse between them
    assert_eq!(suffix_of(&all[1], &all), "201");
    assert_eq!(suffix_of(&all[3], &all), "202");
    assert_eq!(suffix_of(&all[2], &all), "101");
}

/// Appending a new participant never renumbers existing ones
#[test]
fn test_adding_participant_preserves_existing_suffixes() {
    let mut all = vec![
        participant(1, Relationship::Policyholder),
        participant(2, Relationship::Child),
        participant(3, Relationship::Child),
    ];
    let before: Vec<String> = all.iter().map(|p| suffix_of(p, &all)).collect();

    all.push(participant(4, Relationship::Child));
    let after: Vec<String> = all[..3].iter().map(|p| suffix_of(p, &all)).collect();

    assert_eq!(before, after);
    assert_eq!(suffix_of(&all[3], &all), "203");
}

#[test]
fn test_legacy_relationship_classes_are_unassignable() {
    let all = vec![
        participant(1, Relationship::Policyholder),
        participant(2, Relationship::Grandparent),
        participant(3, Relationship::Sibling),
    ];
    assert_eq!(participant_suffix(&all[1], &all), ParticipantSuffix::Unassigned);
    assert_eq!(suffix_of(&all[2], &all), "N/A");
}

#[test]
fn test_participant_missing_from_list_is_unassignable() {
    let all = vec![participant(1, Relationship::Policyholder)];
    let stranger = participant(9, Relationship::Spouse);
    assert_eq!(participant_suffix(&stranger, &all), ParticipantSuffix::Unassigned);
}

/// Idempotence: two calls over the same list agree for every participant
#[test]
fn test_suffix_assignment_is_idempotent() {
    let all = vec![
        participant(1, Relationship::Policyholder),
        participant(7, Relationship::Spouse),
        participant(3, Relationship::Spouse),
        participant(4, Relationship::Child),
        participant(8, Relationship::OtherDependent),
    ];
    for p in &all {
        assert_eq!(participant_suffix(p, &all), participant_suffix(p, &all));
    }
}
