//! Vigil Dashboard
//!
//! Monitoring dashboard frontend for a camera-based alarm detection
//! backend, built with Leptos (WASM).
//!
//! # Features
//!
//! - Alarm record review with detection confidence and snapshots
//! - Token-gated dashboard routes
//! - User registration and login against the Vigil backend
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Vigil backend via HTTP and keeps
//! the session token in browser localStorage.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod router;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
