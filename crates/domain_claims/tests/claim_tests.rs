//! Claim Lifecycle Tests
//!
//! Filing snapshots the policy details; the status machine is pinned in
//! the unit tests alongside the type. These cover filing against a built
//! policy and the approve-then-pay path end to end.

use chrono::{NaiveDate, TimeZone, Utc};
use core_kernel::{AgentId, ClaimId, Money};
use domain_claims::{Claim, ClaimStatus, FiledBy};
use domain_policy::Relationship;
use rust_decimal_macros::dec;
use test_utils::builders::{CustomerBuilder, ParticipantBuilder};

#[test]
fn test_filing_snapshots_policy_details() {
    let spouse = ParticipantBuilder::new(2, Relationship::Spouse)
        .with_name("Sekai", "Moyo")
        .build();
    let customer = CustomerBuilder::new()
        .with_participants(vec![
            ParticipantBuilder::new(1, Relationship::Policyholder).build(),
            spouse.clone(),
        ])
        .build();

    let claim = Claim::file(
        ClaimId::new(1),
        &customer,
        &spouse,
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
        Money::usd(dec!(2500)),
        FiledBy::Agent(AgentId::new(101)),
        "Tariro Moyo",
        Utc.with_ymd_and_hms(2024, 5, 3, 8, 0, 0).unwrap(),
    );

    assert_eq!(claim.status, ClaimStatus::Pending);
    assert_eq!(claim.customer_id, customer.id);
    assert_eq!(claim.policy_number, customer.policy_number);
    assert_eq!(claim.customer_name, customer.full_name());
    assert_eq!(claim.deceased_name, "Sekai Moyo");
    assert_eq!(claim.deceased_participant_id, spouse.id);
    assert!(claim.approved_date.is_none());
    assert!(claim.paid_date.is_none());
}

#[test]
fn test_approve_then_pay_path() {
    let customer = CustomerBuilder::new().build();
    let holder = customer.policyholder().expect("built with a holder");
    let mut claim = Claim::file(
        ClaimId::new(2),
        &customer,
        holder,
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        Money::usd(dec!(1000)),
        FiledBy::Agent(AgentId::new(101)),
        "Tariro Moyo",
        Utc.with_ymd_and_hms(2024, 6, 2, 9, 0, 0).unwrap(),
    );

    let approved_at = Utc.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap();
    let paid_at = Utc.with_ymd_and_hms(2024, 6, 10, 10, 0, 0).unwrap();

    claim.update_status(ClaimStatus::Approved, approved_at).unwrap();
    claim.update_status(ClaimStatus::Paid, paid_at).unwrap();

    assert_eq!(claim.status, ClaimStatus::Paid);
    assert_eq!(claim.approved_date, Some(approved_at));
    assert_eq!(claim.paid_date, Some(paid_at));
}
