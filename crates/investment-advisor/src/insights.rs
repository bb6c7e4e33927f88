//! Insight Augmenter
//!
//! Asks a text-generation model about the profile and shapes the answer into
//! the five display fields. Any failure yields the static fallback set; the
//! caller never sees an error.

use std::sync::Arc;

use planner_core::{GenerationOptions, LlmProvider};

use crate::error::Result;
use crate::model::{AiInsights, Profile};

/// Fixed output budget for the generation call
pub const MAX_OUTPUT_TOKENS: u32 = 200;

const PROMPT_PREFIX: &str = "Analyze this investment profile and provide recommendations: ";

const MARKET_CONDITIONS: &str = "Based on current market conditions...";

const RECOMMENDATIONS: [&str; 3] = [
    "Diversify across multiple asset classes",
    "Regular portfolio rebalancing",
    "Consider tax-efficient investments",
];

const CONSIDERATIONS: [&str; 3] = [
    "Market volatility",
    "Personal risk tolerance",
    "Investment timeline",
];

const FALLBACK_SUMMARY: &str = "Standard investment analysis based on your profile.";
const FALLBACK_RISK_ANALYSIS: &str = "Please consult with a financial advisor for detailed risk analysis.";
const FALLBACK_MARKET_CONDITIONS: &str = "Market conditions should be evaluated regularly.";
const FALLBACK_RECOMMENDATIONS: [&str; 3] = [
    "Maintain a diversified portfolio",
    "Regular portfolio rebalancing",
    "Consider consulting a financial advisor",
];

impl AiInsights {
    /// Static insight set used whenever generation fails
    pub fn fallback() -> Self {
        Self {
            summary: FALLBACK_SUMMARY.into(),
            risk_analysis: FALLBACK_RISK_ANALYSIS.into(),
            market_conditions: FALLBACK_MARKET_CONDITIONS.into(),
            recommendations: to_owned_list(&FALLBACK_RECOMMENDATIONS),
            considerations: to_owned_list(&CONSIDERATIONS),
        }
    }
}

/// Generates insights through an [`LlmProvider`]
#[derive(Clone)]
pub struct InsightAugmenter {
    provider: Arc<dyn LlmProvider>,
    options: GenerationOptions,
}

impl InsightAugmenter {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            options: GenerationOptions {
                model: model.into(),
                max_tokens: MAX_OUTPUT_TOKENS,
                ..Default::default()
            },
        }
    }
    
    pub const fn options(&self) -> &GenerationOptions {
        &self.options
    }
    
    /// Produce insights for `profile`, falling back to static text on any error
    pub async fn generate(&self, profile: &Profile) -> AiInsights {
        match self.try_generate(profile).await {
            Ok(insights) => insights,
            Err(e) => {
                tracing::warn!(error = %e, "Insight generation failed, serving fallback insights");
                AiInsights::fallback()
            }
        }
    }
    
    async fn try_generate(&self, profile: &Profile) -> Result<AiInsights> {
        let prompt = build_prompt(profile)?;
        let provider = Arc::clone(&self.provider);
        let options = self.options.clone();
        
        // Own task: a panicking provider surfaces as a JoinError, not a dead request.
        let text = tokio::spawn(async move { provider.generate(&prompt, &options).await }).await??;
        
        Ok(AiInsights {
            summary: extract_summary(&text),
            risk_analysis: analyze_risk(profile),
            market_conditions: MARKET_CONDITIONS.into(),
            recommendations: to_owned_list(&RECOMMENDATIONS),
            considerations: to_owned_list(&CONSIDERATIONS),
        })
    }
}

/// Prompt sent to the model: a fixed instruction followed by the profile JSON
pub fn build_prompt(profile: &Profile) -> Result<String> {
    Ok(format!("{PROMPT_PREFIX}{}", serde_json::to_string(profile)?))
}

/// Generated text up to its first period, closed with a period.
///
/// Only `.` ends the summary and the text is not trimmed, so an empty
/// completion yields `"."`.
pub fn extract_summary(text: &str) -> String {
    let head = text.split_once('.').map_or(text, |(head, _)| head);
    format!("{head}.")
}

/// Rule-based risk sentence for the profile
pub fn analyze_risk(profile: &Profile) -> String {
    let mut factors = Vec::new();
    if profile.time_horizon < 5 {
        factors.push("short investment horizon");
    }
    if profile.age > 60 {
        factors.push("retirement consideration");
    }
    
    if factors.is_empty() {
        "Standard risk profile".into()
    } else {
        format!("Risk analysis based on {}", factors.join(", "))
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InvestmentGoal, ProfileInput, RiskTolerance};
    use planner_runtime::MockProvider;
    use rust_decimal_macros::dec;

    fn profile(age: i64, time_horizon: i64) -> Profile {
        ProfileInput {
            risk_tolerance: Some(RiskTolerance::Conservative),
            investment_goal: Some(InvestmentGoal::Retirement),
            monthly_investment: Some(dec!(400)),
            time_horizon: Some(time_horizon),
            age: Some(age),
            current_savings: Some(dec!(25000)),
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn test_failed_generation_returns_exact_fallback() {
        let provider = Arc::new(MockProvider::failing("model not loaded"));
        let augmenter = InsightAugmenter::new(provider.clone(), "llama3.2");
        
        let insights = augmenter.generate(&profile(65, 3)).await;
        
        assert_eq!(insights, AiInsights::fallback());
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_panicking_provider_returns_exact_fallback() {
        let provider = Arc::new(MockProvider::panicking("tokenizer exploded"));
        let augmenter = InsightAugmenter::new(provider.clone(), "llama3.2");
        
        let insights = augmenter.generate(&profile(65, 3)).await;
        
        assert_eq!(insights, AiInsights::fallback());
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_generation_is_a_success() {
        let augmenter = InsightAugmenter::new(Arc::new(MockProvider::replying("")), "llama3.2");
        
        let insights = augmenter.generate(&profile(30, 10)).await;
        
        assert_ne!(insights, AiInsights::fallback());
        assert_eq!(insights.summary, ".");
        assert_eq!(insights.risk_analysis, "Standard risk profile");
        assert_eq!(insights.market_conditions, "Based on current market conditions...");
    }

    #[tokio::test]
    async fn test_successful_generation_shapes_fields() {
        let provider = Arc::new(MockProvider::replying(
            "Keep a cash buffer. Then add bonds gradually.",
        ));
        let augmenter = InsightAugmenter::new(provider, "llama3.2");
        
        let insights = augmenter.generate(&profile(65, 3)).await;
        
        assert_eq!(insights.summary, "Keep a cash buffer.");
        assert_eq!(
            insights.risk_analysis,
            "Risk analysis based on short investment horizon, retirement consideration"
        );
        assert_eq!(insights.market_conditions, "Based on current market conditions...");
        assert_eq!(insights.recommendations, to_owned_list(&RECOMMENDATIONS));
        assert_eq!(insights.considerations, to_owned_list(&CONSIDERATIONS));
    }

    #[test]
    fn test_fallback_content() {
        let fallback = AiInsights::fallback();
        assert_eq!(fallback.summary, "Standard investment analysis based on your profile.");
        assert_eq!(fallback.recommendations[2], "Consider consulting a financial advisor");
        assert_eq!(fallback.considerations.len(), 3);
    }

    #[test]
    fn test_options_use_fixed_output_budget() {
        let augmenter = InsightAugmenter::new(Arc::new(MockProvider::default()), "mistral");
        assert_eq!(augmenter.options().max_tokens, MAX_OUTPUT_TOKENS);
        assert_eq!(augmenter.options().model, "mistral");
    }

    #[test]
    fn test_risk_analysis_variants() {
        assert_eq!(analyze_risk(&profile(30, 10)), "Standard risk profile");
        assert_eq!(
            analyze_risk(&profile(30, 2)),
            "Risk analysis based on short investment horizon"
        );
        assert_eq!(
            analyze_risk(&profile(61, 5)),
            "Risk analysis based on retirement consideration"
        );
        assert_eq!(analyze_risk(&profile(60, 5)), "Standard risk profile");
    }

    #[test]
    fn test_extract_summary() {
        assert_eq!(extract_summary("Buy bonds. Sell later."), "Buy bonds.");
        assert_eq!(extract_summary("Really? Yes. Then no."), "Really? Yes.");
        assert_eq!(extract_summary("  No period here "), "  No period here .");
        assert_eq!(extract_summary(""), ".");
    }

    #[test]
    fn test_prompt_embeds_profile_json() {
        let prompt = build_prompt(&profile(40, 8)).unwrap();
        assert!(prompt.starts_with(PROMPT_PREFIX));
        assert!(prompt.contains(r#""risk_tolerance":"conservative""#));
        assert!(prompt.contains(r#""time_horizon":8"#));
    }
}
