//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{CartModal, Nav, Toast};
use crate::pages::{Dashboard, Shop};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <Nav />

            <main>
                <Routes>
                    <Route path="/" view=Shop />
                    <Route path="/dashboard" view=Dashboard />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>

            <footer class="footer">
                <p>"© Brewtopia Coffee Co."</p>
            </footer>

            // Overlays
            <CartModal />
            <Toast />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="not-found-icon">"☕"</div>
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/" class="btn-primary">"Back to the Shop"</A>
        </div>
    }
}
