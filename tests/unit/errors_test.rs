use passcheck::types::errors::*;

// === CryptoError Tests ===

#[test]
fn crypto_error_display_variants() {
    assert_eq!(
        CryptoError::RandomGeneration("no entropy".to_string()).to_string(),
        "Random generation failed: no entropy"
    );
    assert_eq!(CryptoError::InvalidRange(0).to_string(), "Invalid random range: 0");
}

#[test]
fn crypto_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(CryptoError::InvalidRange(0));
    assert!(err.source().is_none());
}

// === GenerationError Tests ===

#[test]
fn generation_error_bounds_display() {
    let err = GenerationError::InvalidLength { length: 4, min: 8, max: 64 };
    assert_eq!(err.to_string(), "Invalid password length: 4 (expected 8..=64)");

    let err = GenerationError::InvalidCount { count: 0, min: 1, max: 20 };
    assert_eq!(err.to_string(), "Invalid batch count: 0 (expected 1..=20)");
}

#[test]
fn generation_error_wraps_crypto_error_as_source() {
    let err: GenerationError = CryptoError::RandomGeneration("no entropy".to_string()).into();
    assert_eq!(
        err.to_string(),
        "Secure random source unavailable: Random generation failed: no entropy"
    );
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.source().is_some());
}

// === BreachError Tests ===

#[test]
fn breach_error_display_variants() {
    assert_eq!(
        BreachError::Client("tls backend".to_string()).to_string(),
        "Breach client setup failed: tls backend"
    );
    assert_eq!(
        BreachError::Transport("connection refused".to_string()).to_string(),
        "Breach lookup transport error: connection refused"
    );
    assert_eq!(BreachError::Status(503).to_string(), "Breach lookup returned HTTP 503");
    assert_eq!(
        BreachError::Malformed("line 1: missing ':'".to_string()).to_string(),
        "Malformed breach response: line 1: missing ':'"
    );
}

// === AnalysisError Tests ===

#[test]
fn analysis_error_display() {
    assert_eq!(
        AnalysisError::Scoring("task panicked".to_string()).to_string(),
        "Analysis failed: task panicked"
    );
}
