//! Test data builders
//!
//! Builder patterns for the core entities. Names are faked, dates and
//! amounts are fixed via the fixtures so assertions stay deterministic.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rust_decimal_macros::dec;
use uuid::Uuid;

use core_kernel::{
    add_months, AgentId, CustomerId, Money, ParticipantId, PaymentId, PremiumPeriod,
};
use domain_billing::{PaymentKind, PaymentMethod, PaymentRecord};
use domain_policy::{
    CashBack, Customer, FuneralPackage, Gender, MedicalAid, Participant, PolicyStatus,
    Relationship,
};
use domain_requests::{ParticipantDraft, PolicyApplication};

use crate::fixtures::{MoneyFixtures, TemporalFixtures};

/// Builder for covered participants
pub struct ParticipantBuilder {
    id: ParticipantId,
    relationship: Relationship,
    first_name: String,
    surname: String,
    medical_aid: MedicalAid,
    cash_back: CashBack,
}

impl ParticipantBuilder {
    /// Creates a builder with faked names and no add-ons
    pub fn new(id: u64, relationship: Relationship) -> Self {
        Self {
            id: ParticipantId::new(id),
            relationship,
            first_name: FirstName().fake(),
            surname: LastName().fake(),
            medical_aid: MedicalAid::None,
            cash_back: CashBack::None,
        }
    }

    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.surname = last.into();
        self
    }

    pub fn with_medical_aid(mut self, medical_aid: MedicalAid) -> Self {
        self.medical_aid = medical_aid;
        self
    }

    pub fn with_cash_back(mut self, cash_back: CashBack) -> Self {
        self.cash_back = cash_back;
        self
    }

    pub fn build(self) -> Participant {
        Participant {
            id: self.id,
            uuid: Uuid::new_v4(),
            first_name: self.first_name,
            surname: self.surname,
            relationship: self.relationship,
            date_of_birth: NaiveDate::from_ymd_opt(1985, 6, 15).unwrap(),
            id_number: None,
            gender: None,
            is_student: false,
            phone: None,
            email: None,
            street_address: None,
            town: None,
            postal_address: None,
            medical_aid: self.medical_aid,
            cash_back: self.cash_back,
        }
    }
}

/// Builder for customers; defaults to a Standard-plan holder-only policy
/// incepted mid-January 2024
pub struct CustomerBuilder {
    id: CustomerId,
    policy_number: String,
    inception_date: NaiveDate,
    status: PolicyStatus,
    funeral_package: FuneralPackage,
    participants: Vec<Participant>,
    assigned_agent_id: AgentId,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerBuilder {
    pub fn new() -> Self {
        Self {
            id: CustomerId::new(1),
            policy_number: "63123456A78".to_string(),
            inception_date: TemporalFixtures::inception(),
            status: PolicyStatus::Active,
            funeral_package: FuneralPackage::Standard,
            participants: vec![ParticipantBuilder::new(1, Relationship::Policyholder).build()],
            assigned_agent_id: AgentId::new(101),
        }
    }

    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = id;
        self
    }

    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.policy_number = number.into();
        self
    }

    pub fn with_inception_date(mut self, date: NaiveDate) -> Self {
        self.inception_date = date;
        self
    }

    pub fn with_status(mut self, status: PolicyStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_package(mut self, package: FuneralPackage) -> Self {
        self.funeral_package = package;
        self
    }

    /// Replaces the participant list wholesale
    pub fn with_participants(mut self, participants: Vec<Participant>) -> Self {
        self.participants = participants;
        self
    }

    /// Appends `count` children after the existing participants
    pub fn with_children(mut self, count: u64) -> Self {
        let start = self
            .participants
            .iter()
            .map(|p| p.id.value())
            .max()
            .unwrap_or(0)
            + 1;
        for offset in 0..count {
            self.participants
                .push(ParticipantBuilder::new(start + offset, Relationship::Child).build());
        }
        self
    }

    pub fn with_agent(mut self, agent_id: AgentId) -> Self {
        self.assigned_agent_id = agent_id;
        self
    }

    pub fn build(self) -> Customer {
        let created_at = Utc
            .from_utc_datetime(&self.inception_date.and_hms_opt(10, 0, 0).unwrap());
        let mut customer = Customer {
            id: self.id,
            uuid: Uuid::new_v4(),
            policy_number: self.policy_number,
            first_name: FirstName().fake(),
            surname: LastName().fake(),
            id_number: "63-123456A78".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1980, 3, 2).unwrap(),
            gender: Gender::Male,
            phone: "+263 77 000 0000".to_string(),
            email: "customer@example.com".to_string(),
            street_address: "12 River Road".to_string(),
            town: "Harare".to_string(),
            postal_address: "P.O. Box 100".to_string(),
            inception_date: self.inception_date,
            cover_date: add_months(self.inception_date, 3),
            status: self.status,
            assigned_agent_id: self.assigned_agent_id,
            funeral_package: self.funeral_package,
            participants: self.participants,
            policy_premium: Money::usd(dec!(0)),
            addon_premium: Money::usd(dec!(0)),
            total_premium: Money::usd(dec!(0)),
            premium_period: PremiumPeriod::from_date(self.inception_date),
            latest_receipt_date: Some(self.inception_date),
            date_created: created_at,
            last_updated: created_at,
        };
        customer.refresh_premium();
        customer
    }
}

/// Builder for payment ledger rows
pub struct PaymentBuilder {
    id: PaymentId,
    customer_id: CustomerId,
    amount: Money,
    method: PaymentMethod,
    kind: PaymentKind,
    period: PremiumPeriod,
    recorded_at: DateTime<Utc>,
}

impl PaymentBuilder {
    pub fn new(id: u64, customer_id: u64) -> Self {
        Self {
            id: PaymentId::new(id),
            customer_id: CustomerId::new(customer_id),
            amount: MoneyFixtures::monthly_payment(),
            method: PaymentMethod::Cash,
            kind: PaymentKind::Renewal,
            period: PremiumPeriod::new(2024, 1).unwrap(),
            recorded_at: Utc.with_ymd_and_hms(2024, 1, 20, 12, 0, 0).unwrap(),
        }
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_method(mut self, method: PaymentMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_kind(mut self, kind: PaymentKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_period(mut self, year: i32, month: u32) -> Self {
        self.period = PremiumPeriod::new(year, month).expect("valid test period");
        self
    }

    pub fn with_recorded_at(mut self, recorded_at: DateTime<Utc>) -> Self {
        self.recorded_at = recorded_at;
        self
    }

    pub fn build(self) -> PaymentRecord {
        PaymentRecord::new(
            self.id,
            self.customer_id,
            self.amount,
            self.method,
            self.kind,
            self.period,
            None,
            self.recorded_at,
        )
        .expect("test payment amounts are positive")
    }
}

/// Builder for new-policy applications; defaults to a Standard-plan
/// holder-only household
pub struct ApplicationBuilder {
    first_name: String,
    surname: String,
    id_number: String,
    funeral_package: FuneralPackage,
    participants: Vec<ParticipantDraft>,
}

impl Default for ApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self {
            first_name: FirstName().fake(),
            surname: LastName().fake(),
            id_number: "63-123456A78".to_string(),
            funeral_package: FuneralPackage::Standard,
            participants: vec![Self::draft(Relationship::Policyholder)],
        }
    }

    /// A bare participant draft for the given relationship
    pub fn draft(relationship: Relationship) -> ParticipantDraft {
        ParticipantDraft {
            first_name: FirstName().fake(),
            surname: LastName().fake(),
            relationship,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 9, 9).unwrap(),
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

    pub fn with_id_number(mut self, id_number: impl Into<String>) -> Self {
        self.id_number = id_number.into();
        self
    }

    pub fn with_package(mut self, package: FuneralPackage) -> Self {
        self.funeral_package = package;
        self
    }

    /// Appends a dependent draft
    pub fn with_dependent(mut self, relationship: Relationship) -> Self {
        self.participants.push(Self::draft(relationship));
        self
    }

    pub fn build(self) -> PolicyApplication {
        PolicyApplication {
            first_name: self.first_name,
            surname: self.surname,
            id_number: self.id_number,
            date_of_birth: NaiveDate::from_ymd_opt(1980, 3, 2).unwrap(),
            gender: Gender::Female,
            phone: "+263 71 222 3333".to_string(),
            email: "applicant@example.com".to_string(),
            street_address: "4 Kopje Lane".to_string(),
            town: "Bulawayo".to_string(),
            postal_address: "P.O. Box 55".to_string(),
            funeral_package: self.funeral_package,
            participants: self.participants,
        }
    }
}
