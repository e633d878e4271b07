use serde::{Deserialize, Serialize};

use super::analysis::AnalysisResult;
use super::errors::GenerationError;
use super::password::Password;

/// Shortest Random-mode password accepted.
pub const MIN_LENGTH: usize = 8;
/// Longest Random-mode password accepted.
pub const MAX_LENGTH: usize = 64;
/// Smallest batch.
pub const MIN_COUNT: usize = 1;
/// Largest batch.
pub const MAX_COUNT: usize = 20;

/// How a password is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Random,
    Passphrase,
    Memorable,
}

/// Options for generating a batch of passwords.
///
/// Bounds are checked on construction and on deserialization, so a value
/// of this type is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGenerationConfig")]
pub struct GenerationConfig {
    mode: GenerationMode,
    length: usize,
    use_uppercase: bool,
    use_numbers: bool,
    use_symbols: bool,
    count: usize,
}

/// Unvalidated wire form of `GenerationConfig`.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawGenerationConfig {
    mode: GenerationMode,
    length: usize,
    use_uppercase: bool,
    use_numbers: bool,
    use_symbols: bool,
    count: usize,
}

impl Default for RawGenerationConfig {
    fn default() -> Self {
        let d = GenerationConfig::default();
        Self {
            mode: d.mode,
            length: d.length,
            use_uppercase: d.use_uppercase,
            use_numbers: d.use_numbers,
            use_symbols: d.use_symbols,
            count: d.count,
        }
    }
}

impl TryFrom<RawGenerationConfig> for GenerationConfig {
    type Error = GenerationError;

    fn try_from(raw: RawGenerationConfig) -> Result<Self, Self::Error> {
        GenerationConfig::new(
            raw.mode,
            raw.length,
            raw.use_uppercase,
            raw.use_numbers,
            raw.use_symbols,
            raw.count,
        )
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            mode: GenerationMode::Random,
            length: 16,
            use_uppercase: true,
            use_numbers: true,
            use_symbols: true,
            count: 6,
        }
    }
}

impl GenerationConfig {
    pub fn new(
        mode: GenerationMode,
        length: usize,
        use_uppercase: bool,
        use_numbers: bool,
        use_symbols: bool,
        count: usize,
    ) -> Result<Self, GenerationError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(GenerationError::InvalidLength {
                length,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            });
        }
        if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
            return Err(GenerationError::InvalidCount {
                count,
                min: MIN_COUNT,
                max: MAX_COUNT,
            });
        }
        Ok(Self {
            mode,
            length,
            use_uppercase,
            use_numbers,
            use_symbols,
            count,
        })
    }

    /// Same options, different mode.
    pub fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// Requested length; only meaningful in Random mode.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn use_uppercase(&self) -> bool {
        self.use_uppercase
    }

    pub fn use_numbers(&self) -> bool {
        self.use_numbers
    }

    pub fn use_symbols(&self) -> bool {
        self.use_symbols
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Character classes that get one guaranteed character in Random mode.
    /// Lowercase is always included.
    pub fn enabled_class_count(&self) -> usize {
        1 + [self.use_uppercase, self.use_numbers, self.use_symbols]
            .iter()
            .filter(|&&on| on)
            .count()
    }

    /// Random-mode output length: the request, but never fewer characters
    /// than there are guaranteed classes.
    pub fn effective_length(&self) -> usize {
        self.length.max(self.enabled_class_count())
    }
}

/// A generated password together with its analysis.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPassword {
    pub id: String,
    pub password: Password,
    pub analysis: AnalysisResult,
    /// Unix time in milliseconds.
    pub created_at: i64,
}
