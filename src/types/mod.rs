// passcheck shared type definitions
// Each submodule defines types used across the crate.

pub mod analysis;
pub mod breach;
pub mod errors;
pub mod generation;
pub mod history;
pub mod password;
pub mod settings;
