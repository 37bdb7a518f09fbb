//! Navigation Component
//!
//! Header navigation bar with logo, links and session controls.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::router::paths;
use crate::state::auth::{self, AuthContext};
use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href=paths::HOME class="flex items-center space-x-3">
                        <span class="text-2xl">"📡"</span>
                        <span class="text-xl font-bold text-white">"Vigil"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href=paths::HOME label="Home" />
                        <NavLink href=paths::DASHBOARD label="Dashboard" />
                        <NavLink href=paths::ALARM_RECORDS label="Alarms" />

                        {move || {
                            if state.auth.get().is_authenticated() {
                                view! { <LogoutButton /> }.into_view()
                            } else {
                                view! { <NavLink href=paths::LOGIN label="Log in" /> }.into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}

/// Logout button. The local token is cleared even when the server call
/// fails, so the client never gets stuck signed in.
#[component]
fn LogoutButton() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let log_out = move |_| {
        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(e) = api::logout().await {
                web_sys::console::error_1(&format!("logout request failed: {}", e).into());
            }
            auth::clear_token();
            state.auth.set(AuthContext::load());
            state.show_success("Signed out");
            navigate(paths::HOME, Default::default());
        });
    };

    view! {
        <button
            on:click=log_out
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
        >
            "Log out"
        </button>
    }
}
