//! Charset-based entropy estimate.
//!
//! `bits = length * log2(pool)`, where the pool is the sum of the sizes of
//! the character classes present. This is the entropy of a uniformly random
//! string drawn from those classes, so it is an upper bound: "aaaaaaaa"
//! scores the same as eight random lowercase letters. Pattern weaknesses
//! are handled by the strength scorer.

use std::collections::HashSet;

pub const LOWERCASE_POOL: u32 = 26;
pub const UPPERCASE_POOL: u32 = 26;
pub const DIGIT_POOL: u32 = 10;
/// Printable ASCII punctuation.
pub const SYMBOL_POOL: u32 = 32;

/// Which character classes occur in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    /// Anything that is not an ASCII letter or digit.
    pub symbols: bool,
}

impl CharacterClasses {
    pub fn detect(password: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            match c {
                'a'..='z' => classes.lowercase = true,
                'A'..='Z' => classes.uppercase = true,
                '0'..='9' => classes.digits = true,
                _ => classes.symbols = true,
            }
        }
        classes
    }

    pub fn pool_size(&self) -> u32 {
        let mut size = 0;
        if self.lowercase {
            size += LOWERCASE_POOL;
        }
        if self.uppercase {
            size += UPPERCASE_POOL;
        }
        if self.digits {
            size += DIGIT_POOL;
        }
        if self.symbols {
            size += SYMBOL_POOL;
        }
        size
    }

    pub fn count(&self) -> usize {
        [self.lowercase, self.uppercase, self.digits, self.symbols]
            .iter()
            .filter(|&&present| present)
            .count()
    }
}

/// Bits of entropy of `password`. Zero for the empty string.
pub fn entropy(password: &str) -> f64 {
    let length = password.chars().count();
    let pool = CharacterClasses::detect(password).pool_size();
    if length == 0 || pool == 0 {
        return 0.0;
    }
    length as f64 * f64::from(pool).log2()
}

/// Distinct characters divided by length; zero for the empty string.
pub fn unique_ratio(password: &str) -> f64 {
    let length = password.chars().count();
    if length == 0 {
        return 0.0;
    }
    let unique: HashSet<char> = password.chars().collect();
    unique.len() as f64 / length as f64
}
