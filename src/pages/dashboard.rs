//! Dashboard Page
//!
//! Protected overview: alarm counts and the most recent alarms.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{AlarmCard, Loading};
use crate::router::paths;
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch alarms on mount
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

    let state_for_stats = state.clone();
    let state_for_recent = state.clone();

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Camera alarms at a glance"</p>
                </div>

                <A
                    href=paths::ALARM_RECORDS
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "All records"
                </A>
            </div>

            // Summary row
            <section>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {move || {
                        let state = &state_for_stats;
                        let total = state.alarms.get().len();
                        let last_day = state.alarms_last_day();
                        let top = state
                            .top_label()
                            .map(|(label, count)| format!("{} ({})", label, count))
                            .unwrap_or_else(|| "—".to_string());
                        let latest = state
                            .latest_alarm()
                            .map(|alarm| alarm.label)
                            .unwrap_or_else(|| "—".to_string());

                        view! {
                            <StatCard title="Total alarms" value=total.to_string() />
                            <StatCard title="Last 24 hours" value=last_day.to_string() />
                            <StatCard title="Most frequent" value=top />
                            <StatCard title="Latest" value=latest />
                        }
                    }}
                </div>
            </section>

            // Recent alarms
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Recent Alarms"</h2>

                {move || {
                    let state = &state_for_recent;
                    if state.loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        let recent: Vec<_> = state.alarms.get().into_iter().take(6).collect();
                        if recent.is_empty() {
                            view! {
                                <p class="text-gray-400 text-center py-8">
                                    "No alarms recorded. All quiet."
                                </p>
                            }.into_view()
                        } else {
                            view! {
                                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                    {recent.into_iter().map(|alarm| {
                                        view! { <AlarmCard alarm=alarm /> }
                                    }).collect_view()}
                                </div>
                            }.into_view()
                        }
                    }
                }}
            </section>
        </div>
    }
}

/// Single summary figure
#[component]
fn StatCard(
    title: &'static str,
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{title}</span>
            <div class="text-3xl font-bold mt-2 capitalize">{value}</div>
        </div>
    }
}
