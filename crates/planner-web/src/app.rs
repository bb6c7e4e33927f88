//! Main App Component

use leptos::prelude::*;

use crate::pages::PlannerPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <header class="hero">
                <h1>"Investment Planning AI 📈"</h1>
            </header>
            <PlannerPage />
        </main>
    }
}
