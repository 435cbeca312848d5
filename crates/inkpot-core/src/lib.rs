//! Core logic for the Inkpot blog: field validation and the signed
//! session-token scheme.
//!
//! This crate is pure (no I/O, no async, no panics on untrusted input),
//! so the web crate can lean on it from any handler without ceremony.

mod token;
mod validate;

pub use token::{check_token, make_token};
pub use validate::{valid_email, valid_password, valid_username};
