//! Home Page
//!
//! Public landing page.

use leptos::*;
use leptos_router::*;

use crate::router::paths;
use crate::state::global::GlobalState;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"📡"</div>
            <h1 class="text-4xl font-bold mb-2">"Vigil"</h1>
            <p class="text-gray-400 mb-8 max-w-xl">
                "Live monitoring for your detection cameras. Review alarms as they
                 come in, with detection confidence and frame snapshots."
            </p>

            <div class="flex space-x-3">
                {move || {
                    if state.auth.get().is_authenticated() {
                        view! {
                            <A
                                href=paths::DASHBOARD
                                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                            >
                                "Open Dashboard"
                            </A>
                        }.into_view()
                    } else {
                        view! {
                            <A
                                href=paths::LOGIN
                                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                            >
                                "Log in"
                            </A>
                            <A
                                href=paths::REGISTER
                                class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                            >
                                "Create account"
                            </A>
                        }.into_view()
                    }
                }}
            </div>
        </div>
    }
}
