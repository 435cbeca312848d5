//! Inkpot - a minimal server-rendered blog.
//!
//! This crate provides a small HTTP server where visitors list and read
//! posts, authors submit new posts, and new users register with a signed
//! `username` cookie standing in for a session.
//!
//! # Architecture
//!
//! - **Store**: blog entries in SQLite, shared behind a mutex
//! - **Render**: server-side HTML via maud (compile-time templates)
//! - **Session**: a tamper-evident `username` cookie, no server-side state
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped by maud
//! - The cookie token scheme is unkeyed and forgeable; see
//!   [`session`] before relying on it for anything real

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod session;
pub mod state;
pub mod store;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
