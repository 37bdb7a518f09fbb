//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod alarm_card;
pub mod loading;
pub mod nav;
pub mod toast;

pub use alarm_card::AlarmCard;
pub use loading::{ListSkeleton, Loading};
pub use nav::Nav;
pub use toast::Toast;
