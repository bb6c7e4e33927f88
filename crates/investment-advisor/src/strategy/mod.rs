//! Investment Strategies
//!
//! Allocation rules and savings projections.

mod allocation;
mod projection;

pub use allocation::{base_allocation, AllocationSplit, AllocationStrategy, HorizonBand};
pub use projection::{projected_value, DEFAULT_ANNUAL_RETURN};
