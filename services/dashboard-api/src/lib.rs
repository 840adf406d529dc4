//! Dashboard API library.
//!
//! The binary in `main.rs` wires this into an axum server; the library
//! split keeps handlers testable without a running server.

pub mod config;
pub mod handlers;
pub mod state;
