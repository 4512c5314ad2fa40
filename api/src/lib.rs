//! # Estate API
//!
//! HTTP surface of the estate listing backend: login, favorites and the
//! public favorite counter. The binary in `main.rs` wires MySQL-backed
//! repositories into [`app::AppState`]; tests wire the in-memory mocks.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod routes;

pub use app::{configure, AppState};
