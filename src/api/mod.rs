//! API Layer
//!
//! HTTP client for the Vigil backend REST API.
//!
//! # Endpoints
//!
//! ## Users
//! - `POST /api/users/register` - Create an account
//! - `POST /api/users/login` - Start a session, returns a token
//! - `POST /api/users/logout` - End the session
//!
//! ## Alarms
//! - `GET /api/alarms` - All alarm records, newest first

pub mod client;
pub mod error;

pub use client::*;
pub use error::{ApiError, ApiResult};
