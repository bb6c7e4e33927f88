//! API Client

use serde::{Deserialize, Serialize};

pub const RISK_TOLERANCES: [&str; 3] = ["conservative", "moderate", "aggressive"];
pub const INVESTMENT_GOALS: [&str; 4] = ["retirement", "shortTerm", "wealth", "education"];

/// Raw form state, exactly as typed
#[derive(Clone, Debug, PartialEq)]
pub struct FormInput {
    pub risk_tolerance: String,
    pub investment_goal: String,
    pub current_savings: String,
    pub monthly_investment: String,
    pub age: String,
    pub time_horizon: String,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            risk_tolerance: RISK_TOLERANCES[0].into(),
            investment_goal: INVESTMENT_GOALS[0].into(),
            current_savings: "10000".into(),
            monthly_investment: "500".into(),
            age: "30".into(),
            time_horizon: "10".into(),
        }
    }
}

/// Profile payload sent to the backend
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfilePayload {
    pub risk_tolerance: String,
    pub investment_goal: String,
    pub current_savings: f64,
    pub monthly_investment: f64,
    pub age: u32,
    pub time_horizon: u32,
}

impl FormInput {
    /// Presence and range checks before anything is sent
    pub fn to_payload(&self) -> Result<ProfilePayload, String> {
        let risk_tolerance = choice("Risk Tolerance", &self.risk_tolerance, &RISK_TOLERANCES)?;
        let investment_goal = choice("Investment Goal", &self.investment_goal, &INVESTMENT_GOALS)?;

        let current_savings: f64 = number("Current Savings", &self.current_savings)?;
        if current_savings < 0.0 {
            return Err("Current Savings cannot be negative".into());
        }
        let monthly_investment: f64 = number("Monthly Investment", &self.monthly_investment)?;
        if monthly_investment <= 0.0 {
            return Err("Monthly Investment must be greater than 0".into());
        }
        let age: u32 = number("Age", &self.age)?;
        if !(18..=100).contains(&age) {
            return Err("Age must be between 18 and 100".into());
        }
        let time_horizon: u32 = number("Investment Time Horizon", &self.time_horizon)?;
        if !(1..=50).contains(&time_horizon) {
            return Err("Investment Time Horizon must be between 1 and 50 years".into());
        }

        Ok(ProfilePayload {
            risk_tolerance,
            investment_goal,
            current_savings,
            monthly_investment,
            age,
            time_horizon,
        })
    }
}

fn choice(label: &str, value: &str, allowed: &[&str]) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err(format!("{label} is required"));
    }
    if allowed.contains(&value) {
        Ok(value.to_string())
    } else {
        Err(format!("{label} has an unknown value: {value}"))
    }
}

fn number<T: std::str::FromStr>(label: &str, raw: &str) -> Result<T, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(format!("{label} is required"));
    }
    raw.parse().map_err(|_| format!("{label} must be a number"))
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AiInsights {
    pub summary: String,
    pub risk_analysis: String,
    pub market_conditions: String,
    pub recommendations: Vec<String>,
    pub considerations: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Recommendation {
    pub stocks: f64,
    pub bonds: f64,
    pub cash: f64,
    pub description: String,
    pub ai_insights: AiInsights,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Statistics {
    pub current_savings: f64,
    pub monthly_investment: f64,
    pub time_horizon: u32,
    pub projected_value: f64,
}

/// One-line aim of each risk tier, shown under the description
pub fn strategy_aim(risk_tolerance: &str) -> &'static str {
    match risk_tolerance {
        "conservative" => "preserve capital while generating steady income",
        "moderate" => "balance growth with stability",
        _ => "maximize long-term growth potential",
    }
}

fn api_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8000".into());
    format!("{origin}{path}")
}

async fn post_profile<T: for<'de> Deserialize<'de>>(
    path: &str,
    profile: &ProfilePayload,
) -> Result<T, String> {
    let client = reqwest::Client::new();

    let response = client
        .post(api_url(path))
        .json(profile)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(data["error"].as_str().unwrap_or("Request failed").to_string())
    }
}

/// Ask the backend for allocation + insights
pub async fn get_recommendation(profile: &ProfilePayload) -> Result<Recommendation, String> {
    post_profile("/api/investments/recommend", profile).await
}

/// Ask the backend for the statistics panel figures
pub async fn get_statistics(profile: &ProfilePayload) -> Result<Statistics, String> {
    post_profile("/api/investments/statistics", profile).await
}
