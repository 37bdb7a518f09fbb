//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{AlarmRecords, Dashboard, Home, Login, Register};
use crate::router::guard::RequireAuth;
use crate::router::{paths, RouteTable};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // One immutable route table for the whole app. Injected through
    // context so tests can build their own instances.
    provide_context(RouteTable::default());

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path=paths::HOME view=Home />
                        <Route path=paths::DASHBOARD view=|| view! {
                            <RequireAuth>
                                <Dashboard />
                            </RequireAuth>
                        } />
                        <Route path=paths::ALARM_RECORDS view=|| view! {
                            <RequireAuth>
                                <AlarmRecords />
                            </RequireAuth>
                        } />
                        <Route path=paths::LOGIN view=Login />
                        <Route path=paths::REGISTER view=Register />
                        <Route path=paths::ROOT view=RootRedirect />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Unconditional redirect from the root path, taken from the route table
#[component]
fn RootRedirect() -> impl IntoView {
    let table = use_context::<RouteTable>().unwrap_or_default();
    let target = table.redirect_target(paths::ROOT).unwrap_or(paths::HOME);

    view! { <Redirect path=target /> }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=paths::HOME
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
