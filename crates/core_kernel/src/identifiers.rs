//! Strongly-typed identifiers for domain entities
//!
//! The store assigns sequential integer keys; newtype wrappers keep a
//! customer id from being handed to something expecting a participant id.
//! New ids are allocated as max-existing + 1, starting at 1 on an empty book.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_seq_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw store key
            pub fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Returns the raw store key
            pub fn value(&self) -> u64 {
                self.0
            }

            /// Allocates the next id after the given existing ids
            ///
            /// Returns max + 1, or 1 when no ids exist yet.
            pub fn next_after(existing: impl IntoIterator<Item = $name>) -> Self {
                let max = existing.into_iter().map(|id| id.0).max().unwrap_or(0);
                Self(max + 1)
            }

        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

// Policy book identifiers
define_seq_id!(CustomerId, "CUS");
define_seq_id!(ParticipantId, "PRT");

// Party identifiers
define_seq_id!(AgentId, "AGT");
define_seq_id!(AdminId, "ADM");

// Workflow identifiers
define_seq_id!(RequestId, "REQ");
define_seq_id!(PaymentId, "PAY");
define_seq_id!(ClaimId, "CLM");
