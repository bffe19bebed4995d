//! Minimal HTTP service exposing a single health-check endpoint.
//!
//! The binary in `main.rs` wires configuration, logging and the listener;
//! everything the router needs lives here so tests can drive it directly.

pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
