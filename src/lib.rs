//! passcheck — password strength analysis and secure password generation.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod managers;
pub mod services;
pub mod rpc_handler;
pub mod types;
