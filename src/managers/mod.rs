// passcheck state managers
// Managers own mutable state: the debounced analysis pipeline and the analysis history.

pub mod analysis_controller;
pub mod history_store;
