//! Password Generator for passcheck.
//!
//! Random, passphrase and memorable generation driven by a `RandomSource`.
//! Every character, word, separator and shuffle index comes from that
//! source; if it fails the whole call fails.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::services::crypto_service::{CryptoService, RandomSource};
use crate::services::strength_scorer::{StrengthScorer, StrengthScorerTrait};
use crate::services::wordlist::{MEMORABLE_WORDS, PASSPHRASE_WORDS};
use crate::types::errors::GenerationError;
use crate::types::generation::{GeneratedPassword, GenerationConfig, GenerationMode};
use crate::types::password::Password;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?~`";

/// Separator used by passphrases when symbols are disabled.
pub const DEFAULT_SEPARATOR: char = '-';
/// Words in a passphrase.
pub const PASSPHRASE_WORD_COUNT: usize = 4;
/// Words in a memorable password.
pub const MEMORABLE_WORD_COUNT: usize = 3;
/// Digits in the numeric suffix of passphrase and memorable passwords.
pub const NUMERIC_SUFFIX_DIGITS: usize = 2;

/// Trait defining password generation operations.
pub trait PasswordGeneratorTrait {
    fn generate(&self, config: &GenerationConfig) -> Result<Password, GenerationError>;
    fn generate_batch(&self, config: &GenerationConfig) -> Result<Vec<GeneratedPassword>, GenerationError>;
}

/// Generator backed by a secure random source.
pub struct PasswordGenerator {
    rng: Arc<dyn RandomSource>,
    scorer: StrengthScorer,
}

impl PasswordGenerator {
    /// Creates a generator using the operating system CSPRNG.
    pub fn new() -> Self {
        Self::with_source(Arc::new(CryptoService::new()))
    }

    pub fn with_source(rng: Arc<dyn RandomSource>) -> Self {
        Self {
            rng,
            scorer: StrengthScorer::new(),
        }
    }

    fn pick<'a, T>(&self, items: &'a [T]) -> Result<&'a T, GenerationError> {
        let index = self.rng.random_index(items.len())?;
        Ok(&items[index])
    }

    fn pick_char(&self, alphabet: &[u8]) -> Result<char, GenerationError> {
        Ok(char::from(*self.pick(alphabet)?))
    }

    fn numeric_suffix(&self) -> Result<String, GenerationError> {
        let upper = 10usize.pow(NUMERIC_SUFFIX_DIGITS as u32);
        let n = self.rng.random_index(upper)?;
        Ok(format!("{:0width$}", n, width = NUMERIC_SUFFIX_DIGITS))
    }

    fn generate_random(&self, config: &GenerationConfig) -> Result<Password, GenerationError> {
        let mut alphabet: Vec<u8> = LOWERCASE.to_vec();
        let mut chars: Zeroizing<Vec<char>> = Zeroizing::new(Vec::with_capacity(config.effective_length()));
        chars.push(self.pick_char(LOWERCASE)?);

        let optional = [
            (config.use_uppercase(), UPPERCASE),
            (config.use_numbers(), DIGITS),
            (config.use_symbols(), SYMBOLS),
        ];
        for (enabled, class) in optional {
            if enabled {
                alphabet.extend_from_slice(class);
                chars.push(self.pick_char(class)?);
            }
        }

        while chars.len() < config.effective_length() {
            chars.push(self.pick_char(&alphabet)?);
        }

        // Fisher-Yates
        for i in (1..chars.len()).rev() {
            let j = self.rng.random_index(i + 1)?;
            chars.swap(i, j);
        }

        Ok(Password::new(chars.iter().collect::<String>()))
    }

    fn generate_passphrase(&self, config: &GenerationConfig) -> Result<Password, GenerationError> {
        let separator = if config.use_symbols() {
            self.pick_char(SYMBOLS)?
        } else {
            DEFAULT_SEPARATOR
        };

        let mut parts: Vec<Zeroizing<String>> = Vec::with_capacity(PASSPHRASE_WORD_COUNT + 1);
        for _ in 0..PASSPHRASE_WORD_COUNT {
            let word = self.pick(PASSPHRASE_WORDS)?;
            let word = if config.use_uppercase() { capitalize(word) } else { word.to_string() };
            parts.push(Zeroizing::new(word));
        }
        if config.use_numbers() {
            parts.push(Zeroizing::new(self.numeric_suffix()?));
        }

        let mut out = String::new();
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                out.push(separator);
            }
            out.push_str(part);
        }
        Ok(Password::new(out))
    }

    fn generate_memorable(&self, config: &GenerationConfig) -> Result<Password, GenerationError> {
        let mut out = Zeroizing::new(String::new());
        for _ in 0..MEMORABLE_WORD_COUNT {
            out.push_str(&capitalize(self.pick(MEMORABLE_WORDS)?));
        }
        if config.use_numbers() {
            out.push_str(&self.numeric_suffix()?);
        }
        if config.use_symbols() {
            out.push(self.pick_char(SYMBOLS)?);
        }
        Ok(Password::new(out.as_str()))
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGeneratorTrait for PasswordGenerator {
    fn generate(&self, config: &GenerationConfig) -> Result<Password, GenerationError> {
        match config.mode() {
            GenerationMode::Random => self.generate_random(config),
            GenerationMode::Passphrase => self.generate_passphrase(config),
            GenerationMode::Memorable => self.generate_memorable(config),
        }
    }

    /// Generates `config.count()` independent passwords, scored, in request order.
    fn generate_batch(&self, config: &GenerationConfig) -> Result<Vec<GeneratedPassword>, GenerationError> {
        let created_at = now_millis();
        let batch = (0..config.count())
            .map(|_| {
                let password = self.generate(config)?;
                let analysis = self.scorer.score(password.expose());
                Ok(GeneratedPassword {
                    id: Uuid::new_v4().to_string(),
                    password,
                    analysis,
                    created_at,
                })
            })
            .collect::<Result<Vec<_>, GenerationError>>()?;
        debug!(mode = ?config.mode(), count = batch.len(), "generated password batch");
        Ok(batch)
    }
}

/// The highest-scoring password; ties go to the earliest one.
pub fn select_strongest(batch: &[GeneratedPassword]) -> Option<&GeneratedPassword> {
    batch.iter().fold(None, |best: Option<&GeneratedPassword>, current| match best {
        Some(prev) if current.analysis.score <= prev.analysis.score => Some(prev),
        _ => Some(current),
    })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}
