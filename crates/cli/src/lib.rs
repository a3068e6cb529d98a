//! `flightdesk-cli` library crate.
//!
//! Re-exports the configuration, lookup service and menu session for
//! integration testing. The binary entrypoint lives in `main.rs`.

pub mod config;
pub mod menu;
pub mod service;
