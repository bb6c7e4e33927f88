//! Investment Service
//!
//! Composes the allocation strategy, the projection and the insight
//! augmenter into the three operations the HTTP layer exposes.

use std::sync::Arc;

use planner_core::LlmProvider;

use crate::error::Result;
use crate::insights::InsightAugmenter;
use crate::model::{AiInsights, InvestmentRecommendation, Profile, ProfileStatistics};
use crate::strategy::{projected_value, AllocationStrategy, DEFAULT_ANNUAL_RETURN};

/// Request-scoped recommendation pipeline around a shared provider handle
#[derive(Clone)]
pub struct InvestmentService {
    augmenter: InsightAugmenter,
}

impl InvestmentService {
    pub const fn new(augmenter: InsightAugmenter) -> Self {
        Self { augmenter }
    }
    
    pub fn with_provider(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self::new(InsightAugmenter::new(provider, model))
    }
    
    /// Allocation plus insights for a validated profile
    pub async fn generate_recommendation(&self, profile: &Profile) -> InvestmentRecommendation {
        let allocation = AllocationStrategy::from_profile(profile).allocate();
        tracing::debug!(
            risk = %profile.risk_tolerance,
            horizon = profile.time_horizon,
            stocks = %allocation.stocks,
            bonds = %allocation.bonds,
            cash = %allocation.cash,
            "Computed allocation"
        );
        
        let ai_insights = self.augmenter.generate(profile).await;
        
        InvestmentRecommendation {
            allocation,
            ai_insights,
        }
    }
    
    /// Insights only, without the allocation
    pub async fn generate_insights(&self, profile: &Profile) -> AiInsights {
        self.augmenter.generate(profile).await
    }
    
    /// Savings figures and the projected value at the default annual return
    pub fn statistics(&self, profile: &Profile) -> Result<ProfileStatistics> {
        Ok(ProfileStatistics {
            current_savings: profile.current_savings,
            monthly_investment: profile.monthly_investment,
            time_horizon: profile.time_horizon,
            projected_value: projected_value(
                profile.current_savings,
                profile.monthly_investment,
                profile.time_horizon,
                DEFAULT_ANNUAL_RETURN,
            )?,
            assumed_annual_return: DEFAULT_ANNUAL_RETURN,
        })
    }
}
