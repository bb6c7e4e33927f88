//! Allocation Strategy
//!
//! Maps a risk tier and a time horizon to a stock/bond/cash split.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::model::{Allocation, Profile, RiskTolerance};

/// Whole-percent split before normalization
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AllocationSplit {
    pub stocks: i32,
    pub bonds: i32,
    pub cash: i32,
}

impl AllocationSplit {
    pub const fn new(stocks: i32, bonds: i32, cash: i32) -> Self {
        Self { stocks, bonds, cash }
    }
    
    pub const fn total(self) -> i32 {
        self.stocks + self.bonds + self.cash
    }
    
    const fn shift(self, stocks: i32, bonds: i32, cash: i32) -> Self {
        Self::new(self.stocks + stocks, self.bonds + bonds, self.cash + cash)
    }
}

/// Base allocation table, before any horizon adjustment
pub const fn base_allocation(risk: RiskTolerance) -> AllocationSplit {
    match risk {
        RiskTolerance::Conservative => AllocationSplit::new(40, 50, 10),
        RiskTolerance::Moderate => AllocationSplit::new(60, 35, 5),
        RiskTolerance::Aggressive => AllocationSplit::new(80, 15, 5),
    }
}

/// Coarse classification of the time horizon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizonBand {
    /// Under 5 years
    Short,
    /// 5 to 15 years inclusive
    Medium,
    /// Over 15 years
    Long,
}

impl HorizonBand {
    pub const fn from_years(years: u32) -> Self {
        if years < 5 {
            Self::Short
        } else if years > 15 {
            Self::Long
        } else {
            Self::Medium
        }
    }
    
    pub const fn label(self) -> &'static str {
        match self {
            Self::Short => "short-term",
            Self::Medium => "medium-term",
            Self::Long => "long-term",
        }
    }
    
    /// Apply this band's shift to a split
    pub const fn adjust(self, split: AllocationSplit) -> AllocationSplit {
        match self {
            Self::Short => split.shift(-20, 10, 10),
            Self::Medium => split,
            Self::Long => split.shift(10, -5, -5),
        }
    }
}

/// Rule-based allocation for one risk tier and horizon
#[derive(Clone, Copy, Debug)]
pub struct AllocationStrategy {
    risk: RiskTolerance,
    time_horizon: u32,
}

impl AllocationStrategy {
    pub const fn new(risk: RiskTolerance, time_horizon: u32) -> Self {
        Self { risk, time_horizon }
    }
    
    pub const fn from_profile(profile: &Profile) -> Self {
        Self::new(profile.risk_tolerance, profile.time_horizon)
    }
    
    pub const fn horizon_band(&self) -> HorizonBand {
        HorizonBand::from_years(self.time_horizon)
    }
    
    /// Table value shifted for the horizon, not yet normalized
    pub const fn unnormalized(&self) -> AllocationSplit {
        self.horizon_band().adjust(base_allocation(self.risk))
    }
    
    /// Compute the normalized allocation with its description.
    ///
    /// Each share is rounded to 2 decimals independently (half-to-even), so
    /// the three percentages are not forced to add up to exactly 100.
    pub fn allocate(&self) -> Allocation {
        let split = self.unnormalized();
        let total = Decimal::from(split.total());
        
        let stocks = share_of(split.stocks, total);
        let bonds = share_of(split.bonds, total);
        let cash = share_of(split.cash, total);
        
        let description = format!(
            "Based on your {} risk tolerance and {} investment horizon, \
             we recommend a portfolio allocation of {}% stocks, {}% bonds, and {}% cash.",
            self.risk,
            self.horizon_band().label(),
            display_percent(stocks),
            display_percent(bonds),
            display_percent(cash),
        );
        
        Allocation {
            stocks,
            bonds,
            cash,
            description,
        }
    }
}

fn share_of(value: i32, total: Decimal) -> Decimal {
    Decimal::from(value)
        .checked_div(total)
        .map_or(Decimal::ZERO, |ratio| (ratio * dec!(100)).round_dp(2))
}

/// Render a percentage with at least one decimal place (`40.0`, `33.33`)
fn display_percent(value: Decimal) -> String {
    let value = value.normalize();
    if value.scale() == 0 {
        format!("{value}.0")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_table_sums_to_100() {
        for risk in RiskTolerance::ALL {
            assert_eq!(base_allocation(risk).total(), 100, "{risk}");
        }
    }

    #[test]
    fn test_short_horizon_conservative() {
        let split = AllocationStrategy::new(RiskTolerance::Conservative, 3).unnormalized();
        assert_eq!(split, AllocationSplit::new(20, 60, 20));
    }

    #[test]
    fn test_long_horizon_aggressive() {
        let split = AllocationStrategy::new(RiskTolerance::Aggressive, 20).unnormalized();
        assert_eq!(split, AllocationSplit::new(90, 10, 0));
    }

    #[test]
    fn test_horizon_band_boundaries() {
        assert_eq!(HorizonBand::from_years(4), HorizonBand::Short);
        assert_eq!(HorizonBand::from_years(5), HorizonBand::Medium);
        assert_eq!(HorizonBand::from_years(15), HorizonBand::Medium);
        assert_eq!(HorizonBand::from_years(16), HorizonBand::Long);
    }

    #[test]
    fn test_medium_horizon_keeps_table() {
        for risk in RiskTolerance::ALL {
            let split = AllocationStrategy::new(risk, 10).unnormalized();
            assert_eq!(split, base_allocation(risk));
        }
    }

    #[test]
    fn test_allocate_moderate_medium() {
        let allocation = AllocationStrategy::new(RiskTolerance::Moderate, 10).allocate();
        assert_eq!(allocation.stocks, dec!(60));
        assert_eq!(allocation.bonds, dec!(35));
        assert_eq!(allocation.cash, dec!(5));
        assert_eq!(
            allocation.description,
            "Based on your moderate risk tolerance and medium-term investment horizon, \
             we recommend a portfolio allocation of 60.0% stocks, 35.0% bonds, and 5.0% cash."
        );
    }

    #[test]
    fn test_allocate_aggressive_long_has_empty_cash() {
        let allocation = AllocationStrategy::new(RiskTolerance::Aggressive, 30).allocate();
        assert_eq!(allocation.cash, Decimal::ZERO);
        assert!(allocation.description.contains("long-term"));
        assert!(allocation.description.ends_with("90.0% stocks, 10.0% bonds, and 0.0% cash."));
    }

    #[test]
    fn test_every_allocation_is_non_negative_and_sums_to_100() {
        for risk in RiskTolerance::ALL {
            for horizon in [1, 4, 5, 15, 16, 50] {
                let allocation = AllocationStrategy::new(risk, horizon).allocate();
                assert!(allocation.stocks >= Decimal::ZERO);
                assert!(allocation.bonds >= Decimal::ZERO);
                assert!(allocation.cash >= Decimal::ZERO);
                assert_eq!(allocation.total(), dec!(100), "{risk} / {horizon}y");
            }
        }
    }

    #[test]
    fn test_shares_round_independently() {
        // An uneven split shows the rounding drift the rules allow.
        let total = Decimal::from(3);
        let shares = [share_of(1, total), share_of(1, total), share_of(1, total)];
        assert_eq!(shares, [dec!(33.33); 3]);
        assert_eq!(shares.iter().sum::<Decimal>(), dec!(99.99));
    }

    #[test]
    fn test_display_percent() {
        assert_eq!(display_percent(dec!(40.00)), "40.0");
        assert_eq!(display_percent(dec!(33.33)), "33.33");
        assert_eq!(display_percent(dec!(12.50)), "12.5");
        assert_eq!(display_percent(Decimal::ZERO), "0.0");
    }
}
