//! passcheck — password strength analysis and secure generation.
//!
//! Entry point: runs an interactive console demo of every component.
//! Breach lookups stay offline unless `--online` is passed.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing_subscriber::EnvFilter;

use passcheck::app::App;
use passcheck::services::breach_checker::RangeClient;
use passcheck::types::breach::HashPrefix;
use passcheck::types::errors::BreachError;
use passcheck::types::settings::AnalyzerSettings;

/// Range client used when the demo runs without network access.
struct OfflineRangeClient;

#[async_trait]
impl RangeClient for OfflineRangeClient {
    async fn fetch_range(&self, _prefix: &HashPrefix) -> Result<String, BreachError> {
        Err(BreachError::Transport("offline demo mode".to_string()))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let online = std::env::args().any(|a| a == "--online");

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              passcheck v{} — Demo Mode                    ║", env!("CARGO_PKG_VERSION"));
    println!("║     Password strength analysis and secure generation        ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_crypto()?;
    demo_entropy();
    demo_scorer();
    demo_generator()?;

    let settings = AnalyzerSettings {
        debounce_ms: 150,
        ..AnalyzerSettings::default()
    };
    let app = build_app(settings, online)?;
    demo_breach(&app, online).await;
    demo_controller(&app).await;
    demo_history(&app);

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    if !online {
        println!("  Run with --online to query the live breach range endpoint.");
    }
    println!("═══════════════════════════════════════════════════════════════");
    Ok(())
}

#[cfg(feature = "network")]
fn build_app(settings: AnalyzerSettings, online: bool) -> Result<App, BreachError> {
    if online {
        App::new(settings)
    } else {
        Ok(App::with_range_client(settings, Arc::new(OfflineRangeClient)))
    }
}

#[cfg(not(feature = "network"))]
fn build_app(settings: AnalyzerSettings, online: bool) -> Result<App, BreachError> {
    if online {
        println!("  (built without the `network` feature, staying offline)");
    }
    Ok(App::with_range_client(settings, Arc::new(OfflineRangeClient)))
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_crypto() -> Result<(), Box<dyn std::error::Error>> {
    use passcheck::services::crypto_service::{CryptoService, CryptoServiceTrait, RandomSource};
    section("Crypto Service");

    let crypto = CryptoService::new();
    let bytes = crypto.generate_random_bytes(16)?;
    println!("  Drew {} bytes from the system CSPRNG", bytes.len());
    let dice: Vec<usize> = (0..10)
        .map(|_| crypto.random_index(6).map(|n| n + 1))
        .collect::<Result<_, _>>()?;
    println!("  Ten unbiased dice rolls: {:?}", dice);
    println!("  History fingerprint length: {} hex chars", crypto.fingerprint_hex(b"demo").len());
    println!("  ✓ Crypto OK");
    println!();
    Ok(())
}

fn demo_entropy() {
    use passcheck::services::entropy::{entropy, CharacterClasses};
    section("Entropy Calculator");

    for sample in ["abcdefgh", "Abcdefg1", "Xk9#mQ2$vL7@pR4!"] {
        let classes = CharacterClasses::detect(sample);
        println!(
            "  {:<20} pool {:>2}  {:>6.1} bits",
            format!("{} chars", sample.chars().count()),
            classes.pool_size(),
            entropy(sample)
        );
    }
    println!("  ✓ Entropy OK");
    println!();
}

fn demo_scorer() {
    use passcheck::services::strength_scorer::{StrengthScorer, StrengthScorerTrait};
    section("Strength Scorer");

    let scorer = StrengthScorer::new();
    for sample in ["password", "Summer2024", "correct-horse-battery", "Xk9#mQ2$vL7@pR4!wT8&"] {
        let result = scorer.score(sample);
        let level = result.strength();
        println!(
            "  score {} {:<9} offline-fast: {:<20} {}",
            result.score,
            level.label(),
            result.crack_times.offline_fast_hashing_1e10_per_second,
            result.warning.as_deref().unwrap_or("")
        );
    }
    println!("  ✓ Scorer OK");
    println!();
}

fn demo_generator() -> Result<(), Box<dyn std::error::Error>> {
    use passcheck::services::password_generator::{select_strongest, PasswordGenerator, PasswordGeneratorTrait};
    use passcheck::types::generation::{GenerationConfig, GenerationMode};
    section("Password Generator");

    let generator = PasswordGenerator::new();
    for mode in [GenerationMode::Random, GenerationMode::Passphrase, GenerationMode::Memorable] {
        let config = GenerationConfig::default().with_mode(mode);
        let batch = generator.generate_batch(&config)?;
        if let Some(best) = select_strongest(&batch) {
            println!(
                "  {:<10} best of {}: {:<28} score {}",
                format!("{:?}", mode),
                batch.len(),
                best.password.expose(),
                best.analysis.score
            );
        }
    }
    println!("  ✓ Generator OK");
    println!();
    Ok(())
}

async fn demo_breach(app: &App, online: bool) {
    section("Breach Checker (k-anonymity)");

    let report = app.analyze_now("password").await;
    println!("  \"password\": {}", report.breach.status_text());
    if !online {
        println!("  (offline: the outcome is reported as unknown, never as safe)");
    }
    for metric in &report.metrics {
        println!("  {:<9} {:.2}", metric.label, metric.value);
    }
    println!("  ✓ Breach checker OK");
    println!();
}

async fn demo_controller(app: &App) {
    section("Analysis Controller (debounced)");

    let mut rx = app.controller.subscribe();
    for partial in ["T", "Tr", "Tro", "Trou", "Troub4dor&3"] {
        app.submit_input(partial);
        tokio::time::sleep(Duration::from_millis(30)).await;
    }
    let latest = app.controller.latest_request_id();
    let done = tokio::time::timeout(
        Duration::from_secs(15),
        rx.wait_for(|s| s.is_terminal() && s.request_id() == Some(latest)),
    )
    .await;
    match done {
        Ok(Ok(state)) => println!("  Five keystrokes, one analysis: request #{} → {}", latest, state.breach_status()),
        _ => println!("  Analysis did not finish in time"),
    }
    println!("  ✓ Controller OK");
    println!();
}

fn demo_history(app: &App) {
    section("History Store");

    for entry in app.history() {
        println!(
            "  {}  score {}  {:<9} {:.1} bits",
            entry.truncated_hash, entry.score, entry.strength_label, entry.entropy_bits
        );
    }
    app.clear_history();
    println!("  Cleared, {} entries left", app.history().len());
    println!("  ✓ History OK");
    println!();
}
