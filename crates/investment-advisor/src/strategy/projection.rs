//! Savings Projection
//!
//! Future value of current savings plus a fixed monthly contribution.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::error::{AdvisorError, Result};

/// Annual return assumed by the statistics panel (7%)
pub const DEFAULT_ANNUAL_RETURN: Decimal = dec!(0.07);

/// Projected portfolio value after `years`, rounded to whole currency units.
///
/// Savings compound yearly; contributions compound monthly at `annual_return / 12`.
/// Fails with [`AdvisorError::ProjectionOutOfRange`] when any intermediate
/// value leaves the `Decimal` range.
pub fn projected_value(
    current_savings: Decimal,
    monthly_investment: Decimal,
    years: u32,
    annual_return: Decimal,
) -> Result<Decimal> {
    let out_of_range = || AdvisorError::ProjectionOutOfRange { years };
    let months = u64::from(years) * 12;
    
    if annual_return.is_zero() {
        return monthly_investment
            .checked_mul(Decimal::from(months))
            .and_then(|contributed| current_savings.checked_add(contributed))
            .map(|total| total.round())
            .ok_or_else(out_of_range);
    }
    
    let monthly_rate = annual_return / dec!(12);
    let savings_growth = (Decimal::ONE + annual_return).checked_powu(u64::from(years));
    let annuity_factor = (Decimal::ONE + monthly_rate)
        .checked_powu(months)
        .and_then(|growth| growth.checked_sub(Decimal::ONE))
        .and_then(|gain| gain.checked_div(monthly_rate));
    
    savings_growth
        .zip(annuity_factor)
        .and_then(|(growth, factor)| {
            let savings = current_savings.checked_mul(growth)?;
            let contributions = monthly_investment.checked_mul(factor)?;
            savings.checked_add(contributions)
        })
        .map(|total| total.round())
        .ok_or_else(out_of_range)
}
