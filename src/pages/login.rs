//! Login Page
//!
//! Credential form. A successful login stores the session token and moves
//! on to the dashboard.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::router::paths;
use crate::state::auth::{self, AuthContext};
use crate::state::global::GlobalState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let state_for_submit = state.clone();
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let user = username.get();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            state_for_submit.show_error("Username and password are required");
            return;
        }

        set_submitting.set(true);
        let state = state_for_submit.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&user, &pass).await {
                Ok(response) => {
                    // The stored token is what the navigation guard checks.
                    auth::store_token(&response.token);
                    state.auth.set(AuthContext::load());
                    state.show_success(&response.message);
                    navigate(paths::DASHBOARD, Default::default());
                }
                Err(e) => {
                    state.show_error(&format!("Login failed: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-12">
            <div class="bg-gray-800 rounded-xl p-8">
                <h1 class="text-2xl font-bold mb-6">"Log in"</h1>

                <form on:submit=submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-700
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>

                <p class="text-sm text-gray-400 mt-6">
                    "No account yet? "
                    <A href=paths::REGISTER class="text-primary-400 hover:text-primary-300">
                        "Register"
                    </A>
                </p>
            </div>
        </div>
    }
}
