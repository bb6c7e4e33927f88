//! # investment-advisor
//!
//! Rule-based stock/bond/cash allocation for a personal investment profile,
//! augmented with model-generated insights.
//!
//! ## Pipeline
//!
//! ```text
//! ProfileInput ──validate──▶ Profile ──┬──▶ AllocationStrategy ──▶ Allocation
//!                                      │
//!                                      └──▶ InsightAugmenter ────▶ AiInsights
//!                                                (LlmProvider, falls back
//!                                                 to static text on error)
//! ```
//!
//! ## Example: moderate investor, 10-year horizon
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Stocks  ████████████████████████████████████  60.0%        │
//! │  Bonds   █████████████████████                 35.0%        │
//! │  Cash    ███                                    5.0%        │
//! └─────────────────────────────────────────────────────────────┘
//!
//! Horizon < 5 years:  stocks -20, bonds +10, cash +10
//! Horizon > 15 years: stocks +10, bonds -5,  cash -5
//! ```

pub mod error;
pub mod insights;
pub mod model;
pub mod service;
pub mod strategy;

pub use error::{AdvisorError, FieldError, Result};
pub use insights::InsightAugmenter;
pub use model::{
    AiInsights, Allocation, ExistingInvestments, InvestmentGoal, InvestmentRecommendation,
    Profile, ProfileInput, ProfileStatistics, RiskTolerance,
};
pub use service::InvestmentService;
pub use strategy::{AllocationSplit, AllocationStrategy, HorizonBand};
