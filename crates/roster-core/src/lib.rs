//! Core types and trait definitions for Roster.
//!
//! This crate knows nothing about HTTP, CSV or SQLite. Every other crate in the
//! workspace depends on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod contact;
pub mod error;
pub mod store;
pub mod validate;

pub use contact::{Contact, ContactId, NewContact};
pub use error::{Error, Result};
