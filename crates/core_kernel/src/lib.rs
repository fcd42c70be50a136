//! Core Kernel - Foundational types for the Stone River policy core
//!
//! This crate provides the building blocks shared by every domain module:
//! - Money with precise decimal arithmetic
//! - Premium-period and calendar-month arithmetic
//! - Strongly-typed sequential identifiers

pub mod money;
pub mod temporal;
pub mod identifiers;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{PremiumPeriod, TemporalError, add_months, whole_months_between};
pub use identifiers::{
    CustomerId, ParticipantId, AgentId, AdminId,
    RequestId, PaymentId, ClaimId,
};
