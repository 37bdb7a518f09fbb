//! Alarm Card Component
//!
//! Compact card for a single alarm record: label, confidence badge,
//! trigger time and optional frame snapshot.

use leptos::*;

use crate::state::global::{AlarmRecord, Severity};

/// Card showing one alarm record
#[component]
pub fn AlarmCard(alarm: AlarmRecord) -> impl IntoView {
    let badge_class = match alarm.severity() {
        Severity::High => "bg-red-600",
        Severity::Medium => "bg-yellow-600",
        Severity::Low => "bg-gray-600",
    };
    let time = alarm.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <div class="flex items-center justify-between">
                <span class="font-medium capitalize">{alarm.label.clone()}</span>
                <span class=format!("text-xs text-white px-2 py-1 rounded {}", badge_class)>
                    {alarm.confidence_percent()}
                </span>
            </div>

            <div class="text-sm text-gray-400 mt-2">{time}</div>

            // Snapshot of the frame that triggered the alarm
            {alarm.image_url.clone().map(|url| view! {
                <img
                    src=url
                    alt="alarm snapshot"
                    class="mt-3 rounded-lg w-full object-cover max-h-40"
                />
            })}
        </div>
    }
}
