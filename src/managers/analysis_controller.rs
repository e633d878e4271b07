//! Analysis Controller for passcheck.
//!
//! Debounced, last-input-wins analysis pipeline. Every input takes a fresh
//! request id; after a quiet period the latest input is scored and checked
//! for breaches concurrently. All state changes go through [`reduce`], which
//! drops any action whose request id is no longer the latest.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::managers::history_store::{HistoryStore, HistoryStoreTrait};
use crate::services::breach_checker::BreachChecker;
use crate::services::strength_scorer::StrengthScorerTrait;
use crate::types::analysis::{AnalysisResult, AnalysisState};
use crate::types::breach::BreachOutcome;
use crate::types::errors::AnalysisError;
use crate::types::password::Password;

/// Everything that can change the analysis state.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisAction {
    /// Input became empty.
    Cleared { request_id: u64 },
    /// Non-empty input arrived; analysis is pending.
    Started { request_id: u64 },
    Completed {
        request_id: u64,
        analysis: AnalysisResult,
        breach: BreachOutcome,
    },
    Failed { request_id: u64, message: String },
}

impl AnalysisAction {
    pub fn request_id(&self) -> u64 {
        match self {
            AnalysisAction::Cleared { request_id }
            | AnalysisAction::Started { request_id }
            | AnalysisAction::Completed { request_id, .. }
            | AnalysisAction::Failed { request_id, .. } => *request_id,
        }
    }
}

/// Applies `action` to `state`.
///
/// Returns `None` when the action belongs to a request other than `latest`;
/// the caller must then leave the state untouched.
pub fn reduce(state: &AnalysisState, action: AnalysisAction, latest: u64) -> Option<AnalysisState> {
    if action.request_id() != latest {
        return None;
    }
    let next = match action {
        AnalysisAction::Cleared { .. } => AnalysisState::Idle,
        AnalysisAction::Started { request_id } => AnalysisState::Loading { request_id },
        AnalysisAction::Completed {
            request_id,
            analysis,
            breach,
        } => AnalysisState::Success {
            request_id,
            analysis,
            breach,
        },
        AnalysisAction::Failed { request_id, message } => AnalysisState::Error { request_id, message },
    };
    if &next == state {
        return None;
    }
    Some(next)
}

/// Shared between the controller and its spawned tasks.
struct Pipeline {
    latest: AtomicU64,
    state: watch::Sender<AnalysisState>,
    scorer: Arc<dyn StrengthScorerTrait>,
    breach: Arc<BreachChecker>,
    history: Arc<Mutex<HistoryStore>>,
}

impl Pipeline {
    /// Runs `action` through the reducer under the channel lock. Returns
    /// whether the state changed.
    fn dispatch(&self, action: AnalysisAction) -> bool {
        self.state.send_if_modified(|state| {
            let latest = self.latest.load(Ordering::SeqCst);
            match reduce(state, action, latest) {
                Some(next) => {
                    *state = next;
                    true
                }
                None => false,
            }
        })
    }

    async fn analyze(self: Arc<Self>, request_id: u64, password: Password) {
        debug!(request_id, "analysis started");
        let scorer = Arc::clone(&self.scorer);
        let to_score = password.clone();
        let scoring = tokio::task::spawn_blocking(move || scorer.score(to_score.expose()));
        let (scored, breach) = tokio::join!(scoring, self.breach.check_breach(password.expose()));

        match scored {
            Ok(analysis) => {
                let applied = self.dispatch(AnalysisAction::Completed {
                    request_id,
                    analysis: analysis.clone(),
                    breach,
                });
                if applied {
                    if let Ok(mut history) = self.history.lock() {
                        history.append(password.expose(), &analysis);
                    }
                } else {
                    debug!(request_id, "stale analysis discarded");
                }
            }
            Err(e) => {
                let message = AnalysisError::Scoring(e.to_string()).to_string();
                warn!(request_id, error = %message, "scoring task failed");
                self.dispatch(AnalysisAction::Failed { request_id, message });
            }
        }
    }
}

/// Debounced analysis state machine.
///
/// `on_input` must be called from within a Tokio runtime.
pub struct AnalysisController {
    pipeline: Arc<Pipeline>,
    debounce: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl AnalysisController {
    pub fn new(
        scorer: Arc<dyn StrengthScorerTrait>,
        breach: Arc<BreachChecker>,
        history: Arc<Mutex<HistoryStore>>,
        debounce: Duration,
    ) -> Self {
        let (state, _) = watch::channel(AnalysisState::Idle);
        Self {
            pipeline: Arc::new(Pipeline {
                latest: AtomicU64::new(0),
                state,
                scorer,
                breach,
                history,
            }),
            debounce,
            pending: Mutex::new(None),
        }
    }

    /// Registers a new input value and returns its request id.
    ///
    /// Cancels any pending debounce timer. Empty input moves straight to
    /// `Idle`; anything else moves to `Loading` and is analyzed once no
    /// further input arrives for the debounce period. An analysis that is
    /// already running is not interrupted, its result is simply discarded.
    pub fn on_input(&self, input: &str) -> u64 {
        let request_id = self.pipeline.latest.fetch_add(1, Ordering::SeqCst) + 1;

        let mut pending = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(timer) = pending.take() {
            timer.abort();
        }

        if input.is_empty() {
            self.pipeline.dispatch(AnalysisAction::Cleared { request_id });
            debug!(request_id, "input cleared");
            return request_id;
        }

        self.pipeline.dispatch(AnalysisAction::Started { request_id });
        let pipeline = Arc::clone(&self.pipeline);
        let password = Password::new(input);
        let debounce = self.debounce;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if pipeline.latest.load(Ordering::SeqCst) != request_id {
                return;
            }
            // Detached so aborting the timer never cancels a running analysis.
            tokio::spawn(pipeline.analyze(request_id, password));
        }));
        request_id
    }

    pub fn state(&self) -> AnalysisState {
        self.pipeline.state.borrow().clone()
    }

    /// A receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<AnalysisState> {
        self.pipeline.state.subscribe()
    }

    pub fn latest_request_id(&self) -> u64 {
        self.pipeline.latest.load(Ordering::SeqCst)
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }
}
