//! Dashboard Page
//!
//! Sales overview with the period filter and the light/dark toggle.

use leptos::*;

use crate::components::{SalesChart, ThemeToggle};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="dashboard">
            <div class="dashboard-header">
                <div>
                    <h1>"Sales Dashboard"</h1>
                    <p class="subtitle">"Revenue at a glance"</p>
                </div>
                <ThemeToggle />
            </div>

            <SalesChart />
        </div>
    }
}
