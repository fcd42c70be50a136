//! Funeral package catalog and add-on rate tables
//!
//! Rates are the agency's published monthly price list. They are static
//! lookups; an unrecognized or absent selection prices at zero rather than
//! failing, so a half-filled application form can still be quoted.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Money;

/// The funeral cover products on sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuneralPackage {
    #[serde(rename = "Standard Funeral Plan")]
    Standard,
    #[serde(rename = "Premium Funeral Plan")]
    Premium,
    #[serde(rename = "Platinum Funeral Plan")]
    Platinum,
    #[serde(rename = "Muslim Standard Plan")]
    MuslimStandard,
    #[serde(rename = "Alkaane Plan")]
    Alkaane,
}

/// How a package's policy premium is rated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackagePricing {
    /// Flat monthly rate for every covered person, policyholder included
    PerPerson { rate: Money },

    /// Base rate covers the policyholder; each further member adds a
    /// per-dependent rate
    BasePlusDependent { base: Money, per_dependent: Money },

    /// Couple base covers holder plus one spouse; extra spouses and
    /// children/dependents each add their increment. A holder with no
    /// spouse pays the lower holder base.
    FamilyUnit {
        couple_base: Money,
        holder_base: Money,
        extra_spouse: Money,
        dependent: Money,
    },

    /// Community-rated: one flat family rate regardless of headcount
    FlatFamily { rate: Money },
}

impl FuneralPackage {
    /// The rating family and rates for this package
    pub fn pricing(&self) -> PackagePricing {
        match self {
            FuneralPackage::Standard => PackagePricing::BasePlusDependent {
                base: Money::usd(dec!(2.50)),
                per_dependent: Money::usd(dec!(1.25)),
            },
            FuneralPackage::Premium => PackagePricing::BasePlusDependent {
                base: Money::usd(dec!(5.00)),
                per_dependent: Money::usd(dec!(2.50)),
            },
            FuneralPackage::Platinum => PackagePricing::BasePlusDependent {
                base: Money::usd(dec!(10.00)),
                per_dependent: Money::usd(dec!(5.00)),
            },
            FuneralPackage::MuslimStandard => PackagePricing::FamilyUnit {
                couple_base: Money::usd(dec!(5.00)),
                holder_base: Money::usd(dec!(2.50)),
                extra_spouse: Money::usd(dec!(2.50)),
                dependent: Money::usd(dec!(2.50)),
            },
            FuneralPackage::Alkaane => PackagePricing::PerPerson {
                rate: Money::usd(dec!(18.00)),
            },
        }
    }

    /// The marketing label, as stored
    pub fn label(&self) -> &'static str {
        match self {
            FuneralPackage::Standard => "Standard Funeral Plan",
            FuneralPackage::Premium => "Premium Funeral Plan",
            FuneralPackage::Platinum => "Platinum Funeral Plan",
            FuneralPackage::MuslimStandard => "Muslim Standard Plan",
            FuneralPackage::Alkaane => "Alkaane Plan",
        }
    }
}

impl fmt::Display for FuneralPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Medical-aid tiers a participant can attach to their cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MedicalAid {
    #[default]
    #[serde(rename = "No Medical Aid")]
    None,
    #[serde(rename = "ZimHealth")]
    ZimHealth,
    #[serde(rename = "Family Life")]
    FamilyLife,
    #[serde(rename = "Alkaane")]
    Alkaane,
}

impl MedicalAid {
    /// Monthly rate added to the addon premium
    pub fn monthly_rate(&self) -> Money {
        match self {
            MedicalAid::None => Money::usd(dec!(0)),
            MedicalAid::ZimHealth => Money::usd(dec!(1.00)),
            MedicalAid::FamilyLife => Money::usd(dec!(7.00)),
            MedicalAid::Alkaane => Money::usd(dec!(18.00)),
        }
    }
}

/// Cash-back tiers: a small monthly rate buys a lump-sum payout after a
/// claim-free period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CashBack {
    #[default]
    #[serde(rename = "No Cash Back")]
    None,
    #[serde(rename = "CB1")]
    Cb1,
    #[serde(rename = "CB2")]
    Cb2,
    #[serde(rename = "CB3")]
    Cb3,
    #[serde(rename = "CB4")]
    Cb4,
}

impl CashBack {
    /// Monthly rate added to the addon premium
    pub fn monthly_rate(&self) -> Money {
        match self {
            CashBack::None => Money::usd(dec!(0)),
            CashBack::Cb1 => Money::usd(dec!(1.00)),
            CashBack::Cb2 => Money::usd(dec!(2.00)),
            CashBack::Cb3 => Money::usd(dec!(3.00)),
            CashBack::Cb4 => Money::usd(dec!(4.00)),
        }
    }

    /// Lump-sum payout amount; not part of premium math
    pub fn payout(&self) -> Money {
        match self {
            CashBack::None => Money::usd(dec!(0)),
            CashBack::Cb1 => Money::usd(dec!(250)),
            CashBack::Cb2 => Money::usd(dec!(500)),
            CashBack::Cb3 => Money::usd(dec!(750)),
            CashBack::Cb4 => Money::usd(dec!(1000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_labels_round_trip_through_serde() {
        for package in [
            FuneralPackage::Standard,
            FuneralPackage::Premium,
            FuneralPackage::Platinum,
            FuneralPackage::MuslimStandard,
            FuneralPackage::Alkaane,
        ] {
            let json = serde_json::to_string(&package).unwrap();
            assert_eq!(json, format!("\"{}\"", package.label()));
            let back: FuneralPackage = serde_json::from_str(&json).unwrap();
            assert_eq!(back, package);
        }
    }

    #[test]
    fn test_standard_rates() {
        let PackagePricing::BasePlusDependent { base, per_dependent } =
            FuneralPackage::Standard.pricing()
        else {
            panic!("Standard is base + per-dependent");
        };
        assert_eq!(base, Money::usd(dec!(2.50)));
        assert_eq!(per_dependent, Money::usd(dec!(1.25)));
    }

    #[test]
    fn test_alkaane_is_per_person() {
        assert_eq!(
            FuneralPackage::Alkaane.pricing(),
            PackagePricing::PerPerson {
                rate: Money::usd(dec!(18.00))
            }
        );
    }

    #[test]
    fn test_none_tiers_price_at_zero() {
        assert!(MedicalAid::None.monthly_rate().is_zero());
        assert!(CashBack::None.monthly_rate().is_zero());
        assert!(CashBack::None.payout().is_zero());
    }

    #[test]
    fn test_cash_back_payouts_scale_with_tier() {
        assert_eq!(CashBack::Cb1.payout(), Money::usd(dec!(250)));
        assert_eq!(CashBack::Cb4.payout(), Money::usd(dec!(1000)));
        assert_eq!(CashBack::Cb4.monthly_rate(), Money::usd(dec!(4.00)));
    }

    #[test]
    fn test_default_selections_are_none() {
        assert_eq!(MedicalAid::default(), MedicalAid::None);
        assert_eq!(CashBack::default(), CashBack::None);
    }
}
