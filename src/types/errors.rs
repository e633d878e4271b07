use thiserror::Error;

// === CryptoError ===

/// Errors related to the secure random source and digests.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The operating system CSPRNG could not fill the buffer.
    #[error("Random generation failed: {0}")]
    RandomGeneration(String),
    /// An index was requested from an empty range.
    #[error("Invalid random range: {0}")]
    InvalidRange(usize),
}

// === GenerationError ===

/// Errors related to password generation.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The requested length is outside the supported bounds.
    #[error("Invalid password length: {length} (expected {min}..={max})")]
    InvalidLength { length: usize, min: usize, max: usize },
    /// The requested batch size is outside the supported bounds.
    #[error("Invalid batch count: {count} (expected {min}..={max})")]
    InvalidCount { count: usize, min: usize, max: usize },
    /// The secure random source failed; generation is aborted.
    #[error("Secure random source unavailable: {0}")]
    RandomSource(#[from] CryptoError),
}

// === BreachError ===

/// Errors related to the k-anonymity breach lookup.
///
/// These never escape `BreachChecker::check_breach`, which folds them into
/// `BreachOutcome::Unknown`.
#[derive(Debug, Error)]
pub enum BreachError {
    /// The HTTP client could not be constructed.
    #[error("Breach client setup failed: {0}")]
    Client(String),
    /// The request could not be sent or the body could not be read.
    #[error("Breach lookup transport error: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("Breach lookup returned HTTP {0}")]
    Status(u16),
    /// The response body did not consist of `SUFFIX:COUNT` records.
    #[error("Malformed breach response: {0}")]
    Malformed(String),
}

// === AnalysisError ===

/// Errors related to running an analysis cycle.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Scoring did not complete.
    #[error("Analysis failed: {0}")]
    Scoring(String),
}
