//! App Core for passcheck.
//!
//! Central struct holding every service and manager, plus the most recently
//! generated batch. Binaries and the RPC handler talk only to `App`.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::managers::analysis_controller::AnalysisController;
use crate::managers::history_store::{HistoryStore, HistoryStoreTrait};
use crate::services::breach_checker::{BreachChecker, RangeClient};
use crate::services::password_generator::{self, PasswordGenerator, PasswordGeneratorTrait};
use crate::services::strength_scorer::{StrengthScorer, StrengthScorerTrait};
use crate::services::visual_metrics::radar_metrics;
use crate::types::analysis::{AnalysisResult, AnalysisState, MetricPoint};
use crate::types::breach::BreachOutcome;
use crate::types::errors::GenerationError;
use crate::types::generation::{GeneratedPassword, GenerationConfig};
use crate::types::history::HistoryEntry;
use crate::types::settings::AnalyzerSettings;

/// Everything `analyze_now` knows about one password.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis: AnalysisResult,
    pub breach: BreachOutcome,
    pub metrics: Vec<MetricPoint>,
}

/// Central application struct holding all managers and services.
pub struct App {
    pub settings: AnalyzerSettings,
    pub scorer: StrengthScorer,
    pub breach_checker: Arc<BreachChecker>,
    pub generator: PasswordGenerator,
    pub controller: AnalysisController,
    history: Arc<Mutex<HistoryStore>>,
    batch: Mutex<Vec<GeneratedPassword>>,
}

impl App {
    /// Creates an App that checks breaches over HTTP using `settings.breach`.
    #[cfg(feature = "network")]
    pub fn new(settings: AnalyzerSettings) -> Result<Self, crate::types::errors::BreachError> {
        let client = crate::services::breach_checker::HttpRangeClient::new(&settings.breach)?;
        Ok(Self::with_range_client(settings, Arc::new(client)))
    }

    /// Creates an App over any range client.
    pub fn with_range_client(settings: AnalyzerSettings, client: Arc<dyn RangeClient>) -> Self {
        let scorer = StrengthScorer::new();
        let breach_checker = Arc::new(BreachChecker::new(client));
        let history = Arc::new(Mutex::new(HistoryStore::new(settings.history_capacity)));
        let controller = AnalysisController::new(
            Arc::new(scorer),
            Arc::clone(&breach_checker),
            Arc::clone(&history),
            Duration::from_millis(settings.debounce_ms),
        );
        info!(
            debounce_ms = settings.debounce_ms,
            history_capacity = settings.history_capacity,
            "passcheck initialized"
        );
        Self {
            settings,
            scorer,
            breach_checker,
            generator: PasswordGenerator::new(),
            controller,
            history,
            batch: Mutex::new(Vec::new()),
        }
    }

    /// Scores and breach-checks `password` right away, bypassing the
    /// debounce, and records the result in history.
    ///
    /// An empty password is scored but neither checked nor recorded; its
    /// breach outcome is `Unknown`.
    pub async fn analyze_now(&self, password: &str) -> AnalysisReport {
        let analysis = self.scorer.score(password);
        let breach = if password.is_empty() {
            BreachOutcome::Unknown
        } else {
            let breach = self.breach_checker.check_breach(password).await;
            lock(&self.history).append(password, &analysis);
            breach
        };
        let metrics = radar_metrics(password, &analysis, breach).to_vec();
        AnalysisReport {
            analysis,
            breach,
            metrics,
        }
    }

    /// Feeds the debounced pipeline. Returns the request id.
    pub fn submit_input(&self, input: &str) -> u64 {
        self.controller.on_input(input)
    }

    pub fn state(&self) -> AnalysisState {
        self.controller.state()
    }

    /// Generates a new batch and makes it the current one.
    pub fn generate_batch(&self, config: &GenerationConfig) -> Result<Vec<GeneratedPassword>, GenerationError> {
        let batch = self.generator.generate_batch(config)?;
        *lock(&self.batch) = batch.clone();
        Ok(batch)
    }

    /// Strongest password of the current batch.
    pub fn strongest(&self) -> Option<GeneratedPassword> {
        password_generator::select_strongest(&lock(&self.batch)).cloned()
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        lock(&self.history).entries()
    }

    pub fn clear_history(&self) {
        lock(&self.history).clear();
        info!("history cleared");
    }
}

/// Locks `mutex`, recovering the data if a previous holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
