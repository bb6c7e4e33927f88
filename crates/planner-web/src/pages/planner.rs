//! Planner Page
//!
//! Profile form in the sidebar, allocation and insights in the main area.

use leptos::prelude::*;

use crate::api::{self, FormInput, Recommendation, Statistics, INVESTMENT_GOALS, RISK_TOLERANCES};
use crate::components::{InsightList, InsightSection, Metric, StatCard};

#[component]
pub fn PlannerPage() -> impl IntoView {
    let (form, set_form) = signal(FormInput::default());
    let (recommendation, set_recommendation) = signal(None::<(String, Recommendation)>);
    let (statistics, set_statistics) = signal(None::<Statistics>);
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let submit = move |_| {
        if loading.get() {
            return;
        }
        let payload = match form.get().to_payload() {
            Ok(payload) => payload,
            Err(message) => {
                set_error.set(Some(message));
                return;
            }
        };

        set_error.set(None);
        set_loading.set(true);

        leptos::task::spawn_local(async move {
            match api::get_recommendation(&payload).await {
                Ok(rec) => {
                    set_recommendation.set(Some((payload.risk_tolerance.clone(), rec)));
                    set_statistics.set(api::get_statistics(&payload).await.ok());
                }
                Err(e) => {
                    set_error.set(Some(format!("Error getting recommendations: {e}")));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="planner">
            <aside class="sidebar">
                <h2>"Your Profile"</h2>

                <div class="field">
                    <label>"Risk Tolerance"</label>
                    <select
                        prop:value=move || form.get().risk_tolerance
                        on:change=move |ev| set_form.update(|f| f.risk_tolerance = event_target_value(&ev))
                    >
                        {RISK_TOLERANCES.into_iter().map(|v| view! { <option value=v>{v}</option> }).collect_view()}
                    </select>
                </div>

                <div class="field">
                    <label>"Investment Goal"</label>
                    <select
                        prop:value=move || form.get().investment_goal
                        on:change=move |ev| set_form.update(|f| f.investment_goal = event_target_value(&ev))
                    >
                        {INVESTMENT_GOALS.into_iter().map(|v| view! { <option value=v>{v}</option> }).collect_view()}
                    </select>
                </div>

                <div class="field">
                    <label>"Current Savings ($)"</label>
                    <input
                        type="number"
                        min="0"
                        prop:value=move || form.get().current_savings
                        on:input=move |ev| set_form.update(|f| f.current_savings = event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label>"Monthly Investment ($)"</label>
                    <input
                        type="number"
                        min="0"
                        prop:value=move || form.get().monthly_investment
                        on:input=move |ev| set_form.update(|f| f.monthly_investment = event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label>"Age"</label>
                    <input
                        type="number"
                        min="18"
                        max="100"
                        prop:value=move || form.get().age
                        on:input=move |ev| set_form.update(|f| f.age = event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label>"Investment Time Horizon (years)"</label>
                    <input
                        type="number"
                        min="1"
                        max="50"
                        prop:value=move || form.get().time_horizon
                        on:input=move |ev| set_form.update(|f| f.time_horizon = event_target_value(&ev))
                    />
                </div>

                <button class="btn btn-primary" on:click=submit disabled=move || loading.get()>
                    {move || if loading.get() { "Analyzing your profile..." } else { "Generate Recommendations" }}
                </button>

                <Show when=move || error.get().is_some()>
                    <p class="error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </aside>

            <section class="results">
                {move || recommendation.get().map(|(risk, rec)| view! {
                    <h2>"Portfolio Allocation"</h2>
                    <div class="metrics">
                        <Metric label="Stocks" percent=rec.stocks />
                        <Metric label="Bonds" percent=rec.bonds />
                        <Metric label="Cash" percent=rec.cash />
                    </div>
                    <p class="description">{rec.description.clone()}</p>
                    <p class="aim">{format!("This strategy aims to {}.", api::strategy_aim(&risk))}</p>

                    <h2>"AI Investment Insights"</h2>
                    <InsightSection title="Summary" text=rec.ai_insights.summary.clone() />
                    <InsightSection title="Risk Analysis" text=rec.ai_insights.risk_analysis.clone() />
                    <InsightSection title="Market Conditions" text=rec.ai_insights.market_conditions.clone() />
                    <InsightList title="Recommendations" items=rec.ai_insights.recommendations.clone() />
                    <InsightList title="Key Considerations" items=rec.ai_insights.considerations.clone() />
                })}

                {move || statistics.get().map(|stats| view! {
                    <div class="stats">
                        <StatCard title="Current Savings" value=format!("${:.0}", stats.current_savings) />
                        <StatCard title="Monthly Investment" value=format!("${:.0}", stats.monthly_investment) />
                        <StatCard title="Time Horizon" value=format!("{} years", stats.time_horizon) />
                        <StatCard title="Projected Value" value=format!("${:.0}", stats.projected_value) />
                    </div>
                })}
            </section>
        </div>
    }
}
