//! UI Components

use leptos::prelude::*;

/// Single allocation figure
#[component]
pub fn Metric(label: &'static str, percent: f64) -> impl IntoView {
    view! {
        <div class="metric">
            <span class="metric-label">{label}</span>
            <span class="metric-value">{format!("{percent}%")}</span>
        </div>
    }
}

/// Labeled text block
#[component]
pub fn InsightSection(title: &'static str, text: String) -> impl IntoView {
    view! {
        <section class="insight">
            <h3>{title}</h3>
            <p>{text}</p>
        </section>
    }
}

/// Labeled bullet list
#[component]
pub fn InsightList(title: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <section class="insight">
            <h3>{title}</h3>
            <ul>
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </section>
    }
}

/// Statistics card
#[component]
pub fn StatCard(title: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-title">{title}</p>
            <p class="stat-value">{value}</p>
        </div>
    }
}
