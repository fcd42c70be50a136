//! Shared Test Utilities
//!
//! Builders with sensible defaults, fixed-date fixtures, and proptest
//! strategies used across the domain crate test suites. Tests specify only
//! the fields they care about and take defaults for the rest.

pub mod builders;
pub mod fixtures;
pub mod generators;

pub use builders::{ApplicationBuilder, CustomerBuilder, ParticipantBuilder, PaymentBuilder};
pub use fixtures::{MoneyFixtures, TemporalFixtures};
