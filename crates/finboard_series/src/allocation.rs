//! Portfolio asset allocation shown on the doughnut chart.
//!
//! Allocations are whole percentages over a fixed set of asset classes and
//! always sum to 100. They are static per user tab rather than generated.

use std::fmt;

use crate::error::AllocationError;

/// Asset class of the allocation chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AssetClass {
    /// Listed equities.
    Stocks,
    /// Fixed income.
    Bonds,
    /// Property holdings.
    RealEstate,
    /// Cash and equivalents.
    Cash,
    /// Digital assets.
    Crypto,
}

impl AssetClass {
    /// All asset classes in chart order.
    pub const ALL: [AssetClass; 5] = [
        AssetClass::Stocks,
        AssetClass::Bonds,
        AssetClass::RealEstate,
        AssetClass::Cash,
        AssetClass::Crypto,
    ];

    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            AssetClass::Stocks => "Stocks",
            AssetClass::Bonds => "Bonds",
            AssetClass::RealEstate => "Real Estate",
            AssetClass::Cash => "Cash",
            AssetClass::Crypto => "Crypto",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Percentage held in one asset class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationShare {
    /// Asset class.
    pub asset: AssetClass,
    /// Whole percentage of the portfolio.
    pub percent: u8,
}

/// Split of a portfolio across [`AssetClass::ALL`], summing to 100 percent.
///
/// # Examples
///
/// ```rust
/// use finboard_series::allocation::{AssetAllocation, AssetClass};
///
/// let allocation = AssetAllocation::from_percentages([50, 20, 18, 8, 4]).unwrap();
/// assert_eq!(allocation.percent(AssetClass::RealEstate), 18);
/// assert_eq!(allocation.total(), 100);
///
/// assert!(AssetAllocation::from_percentages([50, 50, 10, 0, 0]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AssetAllocation([AllocationShare; 5]);

impl AssetAllocation {
    /// Builds an allocation from percentages in [`AssetClass::ALL`] order.
    ///
    /// # Errors
    ///
    /// `AllocationError` when the percentages do not sum to 100.
    pub fn from_percentages(percentages: [u8; 5]) -> Result<Self, AllocationError> {
        let total: u32 = percentages.iter().map(|&p| u32::from(p)).sum();
        if total != 100 {
            return Err(AllocationError(total));
        }
        Ok(Self::table(percentages))
    }

    pub(crate) const fn table(percentages: [u8; 5]) -> Self {
        let [stocks, bonds, real_estate, cash, crypto] = percentages;
        Self([
            AllocationShare {
                asset: AssetClass::Stocks,
                percent: stocks,
            },
            AllocationShare {
                asset: AssetClass::Bonds,
                percent: bonds,
            },
            AllocationShare {
                asset: AssetClass::RealEstate,
                percent: real_estate,
            },
            AllocationShare {
                asset: AssetClass::Cash,
                percent: cash,
            },
            AllocationShare {
                asset: AssetClass::Crypto,
                percent: crypto,
            },
        ])
    }

    /// Percentage held in `asset`.
    pub fn percent(&self, asset: AssetClass) -> u8 {
        self.0
            .iter()
            .find(|share| share.asset == asset)
            .map_or(0, |share| share.percent)
    }

    /// Shares in chart order.
    pub fn shares(&self) -> &[AllocationShare] {
        &self.0
    }

    /// Sum of all percentages.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|share| u32::from(share.percent)).sum()
    }
}

impl Default for AssetAllocation {
    /// Stocks 45, bonds 25, real estate 15, cash 10, crypto 5.
    fn default() -> Self {
        Self::table([45, 25, 15, 10, 5])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allocation() {
        let allocation = AssetAllocation::default();
        assert_eq!(allocation.total(), 100);
        assert_eq!(allocation.percent(AssetClass::Stocks), 45);
        assert_eq!(allocation.percent(AssetClass::Crypto), 5);
    }

    #[test]
    fn test_shares_follow_chart_order() {
        let assets: Vec<AssetClass> = AssetAllocation::default()
            .shares()
            .iter()
            .map(|share| share.asset)
            .collect();
        assert_eq!(assets, AssetClass::ALL.to_vec());
    }

    #[test]
    fn test_rejects_bad_total() {
        assert_eq!(
            AssetAllocation::from_percentages([40, 30, 20, 7, 2]),
            Err(AllocationError(99))
        );
        assert!(AssetAllocation::from_percentages([255, 255, 0, 0, 0]).is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(AssetClass::RealEstate.label(), "Real Estate");
        assert_eq!(AssetClass::Cash.to_string(), "Cash");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialises_as_share_list() {
        let json = serde_json::to_value(AssetAllocation::default()).unwrap();
        assert_eq!(json[2]["asset"], "real_estate");
        assert_eq!(json[2]["percent"], 15);
    }
}
