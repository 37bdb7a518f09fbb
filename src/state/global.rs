//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::state::auth::AuthContext;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Alarm records fetched from the API, newest first
    pub alarms: RwSignal<Vec<AlarmRecord>>,
    /// Credential snapshot mirrored for the nav bar. The navigation guard
    /// re-reads storage on every navigation instead of trusting this.
    pub auth: RwSignal<AuthContext>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Alarm record produced by the detection backend
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlarmRecord {
    pub id: i64,
    pub label: String,
    /// Detection confidence in `0.0..=1.0`
    pub confidence: f64,
    /// Snapshot of the triggering frame, as a data URL
    #[serde(default)]
    pub image_url: Option<String>,
    pub timestamp: chrono::NaiveDateTime,
}

/// Confidence bucket used for badge styling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl AlarmRecord {
    pub fn severity(&self) -> Severity {
        if self.confidence >= 0.9 {
            Severity::High
        } else if self.confidence >= 0.6 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    /// Confidence formatted as a display percentage
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

/// Count alarms raised within the trailing `hours` hours of `now`.
pub fn alarms_within(alarms: &[AlarmRecord], now: chrono::NaiveDateTime, hours: i64) -> usize {
    let cutoff = now - chrono::Duration::hours(hours);
    alarms
        .iter()
        .filter(|a| a.timestamp > cutoff && a.timestamp <= now)
        .count()
}

/// Distinct labels with occurrence counts, most frequent first.
pub fn label_counts(alarms: &[AlarmRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for alarm in alarms {
        match counts.iter_mut().find(|(label, _)| label == &alarm.label) {
            Some((_, count)) => *count += 1,
            None => counts.push((alarm.label.clone(), 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        alarms: create_rw_signal(Vec::new()),
        auth: create_rw_signal(AuthContext::load()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Most recent alarm, if any have been fetched
    pub fn latest_alarm(&self) -> Option<AlarmRecord> {
        self.alarms.get().first().cloned()
    }

    /// Alarms raised within the last 24 hours
    pub fn alarms_last_day(&self) -> usize {
        let now = chrono::Utc::now().naive_utc();
        alarms_within(&self.alarms.get(), now, 24)
    }

    /// Most frequent alarm label
    pub fn top_label(&self) -> Option<(String, usize)> {
        label_counts(&self.alarms.get()).into_iter().next()
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn alarm(id: i64, label: &str, confidence: f64, day: u32, hour: u32) -> AlarmRecord {
        AlarmRecord {
            id,
            label: label.to_string(),
            confidence,
            image_url: None,
            timestamp: NaiveDate::from_ymd_opt(2025, 6, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_severity_buckets() {
        assert_eq!(alarm(1, "person", 0.95, 1, 0).severity(), Severity::High);
        assert_eq!(alarm(2, "person", 0.75, 1, 0).severity(), Severity::Medium);
        assert_eq!(alarm(3, "person", 0.40, 1, 0).severity(), Severity::Low);
    }

    #[test]
    fn test_confidence_percent_formatting() {
        assert_eq!(alarm(1, "person", 0.876, 1, 0).confidence_percent(), "87.6%");
    }

    #[test]
    fn test_alarms_within_window() {
        let alarms = vec![
            alarm(1, "person", 0.9, 2, 12),
            alarm(2, "person", 0.9, 2, 1),
            alarm(3, "person", 0.9, 1, 1),
        ];
        let now = NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();

        assert_eq!(alarms_within(&alarms, now, 24), 2);
    }

    #[test]
    fn test_label_counts_orders_by_frequency() {
        let alarms = vec![
            alarm(1, "person", 0.9, 1, 0),
            alarm(2, "vehicle", 0.9, 1, 1),
            alarm(3, "vehicle", 0.9, 1, 2),
        ];

        assert_eq!(
            label_counts(&alarms),
            vec![("vehicle".to_string(), 2), ("person".to_string(), 1)]
        );
    }

    #[test]
    fn test_label_counts_empty() {
        assert!(label_counts(&[]).is_empty());
    }
}
