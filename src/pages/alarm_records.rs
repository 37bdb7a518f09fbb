//! Alarm Records Page
//!
//! Protected listing of every alarm record, newest first.

use leptos::*;

use crate::api;
use crate::components::{AlarmCard, ListSkeleton};
use crate::state::global::GlobalState;

/// Alarm records page component
#[component]
pub fn AlarmRecords() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (refreshing, set_refreshing) = create_signal(false);

    // Fetch the full record list on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_alarms().await {
                Ok(alarms) => {
                    state.alarms.set(alarms);
                }
                Err(e) => {
                    state.show_error(&format!("Failed to fetch alarms: {}", e));
                }
            }

            state.loading.set(false);
        });
    });

    let state_for_refresh = state.clone();
    let refresh = move |_| {
        set_refreshing.set(true);
        let state = state_for_refresh.clone();
        spawn_local(async move {
            match api::fetch_alarms().await {
                Ok(alarms) => {
                    state.alarms.set(alarms);
                    state.show_success("Records refreshed");
                }
                Err(e) => {
                    state.show_error(&format!("Failed to fetch alarms: {}", e));
                }
            }
            set_refreshing.set(false);
        });
    };

    let state_for_list = state.clone();

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Alarm Records"</h1>
                    <p class="text-gray-400 mt-1">"Every detection, newest first"</p>
                </div>

                <button
                    on:click=refresh
                    disabled=move || refreshing.get()
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-800
                           rounded-lg font-medium transition-colors"
                >
                    {move || if refreshing.get() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            // Record list
            {move || {
                let state = &state_for_list;
                if state.loading.get() {
                    view! { <ListSkeleton count=6 /> }.into_view()
                } else {
                    let alarms = state.alarms.get();
                    if alarms.is_empty() {
                        view! {
                            <div class="text-center py-12">
                                <p class="text-gray-400">"No alarm records yet."</p>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                {alarms.into_iter().map(|alarm| {
                                    view! { <AlarmCard alarm=alarm /> }
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}
