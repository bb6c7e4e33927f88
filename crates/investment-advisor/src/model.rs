//! Domain Models
//!
//! Investor profile, allocation and insight types.
//! Uses `rust_decimal` for all monetary values and percentages - never use
//! f64 for money! Decimals cross the JSON boundary as plain numbers.

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{AdvisorError, FieldError, Result};

/// Investor risk tier, the primary driver of the base allocation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    pub const ALL: [Self; 3] = [Self::Conservative, Self::Moderate, Self::Aggressive];
    
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        }
    }
}

impl std::fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the money is for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvestmentGoal {
    Retirement,
    ShortTerm,
    Wealth,
    Education,
}

/// Amounts already invested, by asset class
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingInvestments {
    #[serde(default, serialize_with = "rust_decimal::serde::float_option::serialize")]
    pub stocks: Option<Decimal>,
    #[serde(default, serialize_with = "rust_decimal::serde::float_option::serialize")]
    pub bonds: Option<Decimal>,
    #[serde(default, serialize_with = "rust_decimal::serde::float_option::serialize")]
    pub cash: Option<Decimal>,
    #[serde(default, serialize_with = "rust_decimal::serde::float_option::serialize")]
    pub other: Option<Decimal>,
}

/// Profile exactly as submitted; every field may be absent.
///
/// Call [`ProfileInput::validate`] to obtain a [`Profile`]. Counts accept
/// integral floats such as `10.0`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProfileInput {
    pub risk_tolerance: Option<RiskTolerance>,
    pub investment_goal: Option<InvestmentGoal>,
    pub monthly_investment: Option<Decimal>,
    #[serde(default, deserialize_with = "whole_number")]
    pub time_horizon: Option<i64>,
    #[serde(default, deserialize_with = "whole_number")]
    pub age: Option<i64>,
    pub current_savings: Option<Decimal>,
    pub income: Option<Decimal>,
    pub expenses: Option<Decimal>,
    #[serde(default, deserialize_with = "whole_number")]
    pub dependents: Option<i64>,
    pub existing_investments: Option<ExistingInvestments>,
}

/// Integer, or a float with no fractional part
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<i64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
    }
    
    match Option::<Number>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Number::Int(n)) => Ok(Some(n)),
        Some(Number::Float(f)) => Decimal::try_from(f)
            .ok()
            .filter(|d| d.fract().is_zero())
            .and_then(|d| i64::try_from(d).ok())
            .map(Some)
            .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Float(f), &"a whole number")),
    }
}

/// A validated investor profile
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub risk_tolerance: RiskTolerance,
    pub investment_goal: InvestmentGoal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub monthly_investment: Decimal,
    /// Years until the money is needed
    pub time_horizon: u32,
    pub age: u32,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub current_savings: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float_option::serialize")]
    pub income: Option<Decimal>,
    #[serde(serialize_with = "rust_decimal::serde::float_option::serialize")]
    pub expenses: Option<Decimal>,
    pub dependents: Option<u32>,
    pub existing_investments: Option<ExistingInvestments>,
}

impl ProfileInput {
    /// Check required-field presence and ranges.
    ///
    /// Every problem is reported, not just the first one.
    pub fn validate(self) -> Result<Profile> {
        let mut errors = Vec::new();
        
        let risk_tolerance = required(&mut errors, "risk_tolerance", self.risk_tolerance);
        let investment_goal = required(&mut errors, "investment_goal", self.investment_goal);
        let monthly_investment = required(&mut errors, "monthly_investment", self.monthly_investment)
            .and_then(|v| positive_amount(&mut errors, "monthly_investment", v));
        let time_horizon = required(&mut errors, "time_horizon", self.time_horizon)
            .and_then(|v| count(&mut errors, "time_horizon", v, 1));
        let age = required(&mut errors, "age", self.age)
            .and_then(|v| count(&mut errors, "age", v, 1));
        let current_savings = required(&mut errors, "current_savings", self.current_savings)
            .and_then(|v| non_negative_amount(&mut errors, "current_savings", v));
        
        let income = self.income.and_then(|v| non_negative_amount(&mut errors, "income", v));
        let expenses = self.expenses.and_then(|v| non_negative_amount(&mut errors, "expenses", v));
        let dependents = self.dependents.and_then(|v| count(&mut errors, "dependents", v, 0));
        
        match (risk_tolerance, investment_goal, monthly_investment, time_horizon, age, current_savings) {
            (Some(risk_tolerance), Some(investment_goal), Some(monthly_investment), Some(time_horizon), Some(age), Some(current_savings))
                if errors.is_empty() =>
            {
                Ok(Profile {
                    risk_tolerance,
                    investment_goal,
                    monthly_investment,
                    time_horizon,
                    age,
                    current_savings,
                    income,
                    expenses,
                    dependents,
                    existing_investments: self.existing_investments,
                })
            }
            _ => Err(AdvisorError::Validation(errors)),
        }
    }
}

fn required<T>(errors: &mut Vec<FieldError>, field: &'static str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        errors.push(FieldError::missing(field));
    }
    value
}

fn positive_amount(errors: &mut Vec<FieldError>, field: &'static str, value: Decimal) -> Option<Decimal> {
    if value > Decimal::ZERO {
        Some(value)
    } else {
        errors.push(FieldError::new(field, "must be greater than 0"));
        None
    }
}

fn non_negative_amount(errors: &mut Vec<FieldError>, field: &'static str, value: Decimal) -> Option<Decimal> {
    if value < Decimal::ZERO {
        errors.push(FieldError::new(field, "must not be negative"));
        None
    } else {
        Some(value)
    }
}

fn count(errors: &mut Vec<FieldError>, field: &'static str, value: i64, min: i64) -> Option<u32> {
    if value < min {
        errors.push(FieldError::new(field, format!("must be at least {min}")));
        return None;
    }
    u32::try_from(value).map_or_else(
        |_| {
            errors.push(FieldError::new(field, "is too large"));
            None
        },
        Some,
    )
}

/// Stock/bond/cash split in percent
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Allocation {
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub stocks: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub bonds: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub cash: Decimal,
    pub description: String,
}

impl Allocation {
    /// Sum of the three rounded percentages (not guaranteed to be exactly 100)
    pub fn total(&self) -> Decimal {
        self.stocks + self.bonds + self.cash
    }
}

/// Free-text insights shown next to the allocation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiInsights {
    pub summary: String,
    pub risk_analysis: String,
    pub market_conditions: String,
    pub recommendations: Vec<String>,
    pub considerations: Vec<String>,
}

/// Response body of the recommendation endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InvestmentRecommendation {
    #[serde(flatten)]
    pub allocation: Allocation,
    pub ai_insights: AiInsights,
}

/// Headline numbers for the statistics panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileStatistics {
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub current_savings: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub monthly_investment: Decimal,
    pub time_horizon: u32,
    /// Expected value at the end of the horizon
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub projected_value: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub assumed_annual_return: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn complete_input() -> ProfileInput {
        ProfileInput {
            risk_tolerance: Some(RiskTolerance::Moderate),
            investment_goal: Some(InvestmentGoal::Wealth),
            monthly_investment: Some(dec!(500)),
            time_horizon: Some(10),
            age: Some(30),
            current_savings: Some(dec!(10000)),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_input_validates() {
        let profile = complete_input().validate().unwrap();
        assert_eq!(profile.risk_tolerance, RiskTolerance::Moderate);
        assert_eq!(profile.time_horizon, 10);
        assert_eq!(profile.current_savings, dec!(10000));
        assert!(profile.income.is_none());
    }

    #[test]
    fn test_each_missing_required_field_is_rejected() {
        let strip: [(&str, fn(&mut ProfileInput)); 6] = [
            ("risk_tolerance", |p| p.risk_tolerance = None),
            ("investment_goal", |p| p.investment_goal = None),
            ("monthly_investment", |p| p.monthly_investment = None),
            ("time_horizon", |p| p.time_horizon = None),
            ("age", |p| p.age = None),
            ("current_savings", |p| p.current_savings = None),
        ];
        
        for (field, clear) in strip {
            let mut input = complete_input();
            clear(&mut input);
            let err = input.validate().unwrap_err();
            assert_eq!(err.field_errors(), &[FieldError::missing(field)], "field {field}");
        }
    }

    #[test]
    fn test_all_problems_reported_together() {
        let input = ProfileInput {
            monthly_investment: Some(dec!(0)),
            age: Some(-3),
            current_savings: Some(dec!(-1)),
            ..Default::default()
        };
        let err = input.validate().unwrap_err();
        let fields: Vec<_> = err.field_errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            ["risk_tolerance", "investment_goal", "monthly_investment", "time_horizon", "age", "current_savings"]
        );
        assert!(err.to_string().starts_with("Invalid profile: risk_tolerance is required;"));
    }

    #[test]
    fn test_optional_fields_are_range_checked() {
        let mut input = complete_input();
        input.expenses = Some(dec!(-50));
        input.dependents = Some(-1);
        let err = input.validate().unwrap_err();
        assert_eq!(
            err.field_errors(),
            &[
                FieldError::new("expenses", "must not be negative"),
                FieldError::new("dependents", "must be at least 0"),
            ]
        );
    }

    #[test]
    fn test_zero_savings_allowed() {
        let mut input = complete_input();
        input.current_savings = Some(Decimal::ZERO);
        input.dependents = Some(0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_input_deserializes_wire_format() {
        let json = r#"{
            "risk_tolerance": "aggressive",
            "investment_goal": "shortTerm",
            "monthly_investment": 250.5,
            "time_horizon": 3,
            "age": 41,
            "current_savings": 0,
            "existing_investments": {"stocks": 1200}
        }"#;
        let input: ProfileInput = serde_json::from_str(json).unwrap();
        let profile = input.validate().unwrap();
        assert_eq!(profile.investment_goal, InvestmentGoal::ShortTerm);
        assert_eq!(profile.monthly_investment, dec!(250.5));
        assert_eq!(
            profile.existing_investments.unwrap().stocks,
            Some(dec!(1200))
        );
    }

    #[test]
    fn test_counts_accept_integral_floats() {
        let json = r#"{"time_horizon": 10.0, "age": 35.0, "dependents": 2}"#;
        let input: ProfileInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.time_horizon, Some(10));
        assert_eq!(input.age, Some(35));
        assert_eq!(input.dependents, Some(2));
        
        let fractional = serde_json::from_str::<ProfileInput>(r#"{"age": 35.5}"#);
        assert!(fractional.is_err());
        
        let absent: ProfileInput = serde_json::from_str("{}").unwrap();
        assert!(absent.age.is_none());
    }

    #[test]
    fn test_profile_serializes_amounts_as_numbers() {
        let profile = complete_input().validate().unwrap();
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["risk_tolerance"], "moderate");
        assert_eq!(value["investment_goal"], "wealth");
        assert_eq!(value["monthly_investment"], 500.0);
        assert!(value["income"].is_null());
    }
}
