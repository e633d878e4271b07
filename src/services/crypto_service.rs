use ring::digest;
use ring::rand::{SecureRandom, SystemRandom};
use zeroize::Zeroize;

use crate::types::errors::CryptoError;

/// Hex characters kept from the SHA-256 fingerprint stored in history.
pub const FINGERPRINT_HEX_LENGTH: usize = 12;

/// A source of cryptographically secure random bytes.
///
/// Every security-relevant choice in the generator goes through this
/// trait. Implementations must report failure instead of falling back to a
/// weaker source.
pub trait RandomSource: Send + Sync {
    /// Fills `dest` with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), CryptoError>;

    /// Returns a uniformly distributed index in `0..upper`.
    ///
    /// Uses rejection sampling over `u32` draws so small alphabets carry no
    /// modulo bias.
    fn random_index(&self, upper: usize) -> Result<usize, CryptoError> {
        if upper == 0 || upper > u32::MAX as usize {
            return Err(CryptoError::InvalidRange(upper));
        }
        let range = upper as u32;
        // Largest multiple of `range` that fits; draws at or above it are rejected.
        let zone = u32::MAX - (u32::MAX % range);
        loop {
            let mut buf = [0u8; 4];
            self.fill_bytes(&mut buf)?;
            let value = u32::from_le_bytes(buf);
            if value < zone {
                return Ok((value % range) as usize);
            }
        }
    }
}

/// Trait defining the digest and randomness helpers used across the crate.
pub trait CryptoServiceTrait: RandomSource {
    /// SHA-1 of the UTF-8 bytes, uppercase hex. Only for the breach
    /// range-query protocol.
    fn sha1_hex(&self, data: &[u8]) -> String;

    /// Truncated SHA-256 hex, short enough that it cannot be matched
    /// against a breach corpus.
    fn fingerprint_hex(&self, data: &[u8]) -> String;

    /// Generates cryptographically secure random bytes of the specified length.
    fn generate_random_bytes(&self, length: usize) -> Result<Vec<u8>, CryptoError>;

    /// Securely clears sensitive data from memory by overwriting with zeros.
    fn zeroize_memory(&self, data: &mut [u8]);
}

/// Implementation backed by the `ring` crate.
pub struct CryptoService {
    rng: SystemRandom,
}

impl CryptoService {
    /// Creates a new CryptoService instance.
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for CryptoService {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for CryptoService {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        self.rng
            .fill(dest)
            .map_err(|_| CryptoError::RandomGeneration("system CSPRNG unavailable".to_string()))
    }
}

impl CryptoServiceTrait for CryptoService {
    fn sha1_hex(&self, data: &[u8]) -> String {
        let d = digest::digest(&digest::SHA1_FOR_LEGACY_USE_ONLY, data);
        hex_upper(d.as_ref())
    }

    fn fingerprint_hex(&self, data: &[u8]) -> String {
        let d = digest::digest(&digest::SHA256, data);
        let mut hex = hex_lower(d.as_ref());
        hex.truncate(FINGERPRINT_HEX_LENGTH);
        hex
    }

    fn generate_random_bytes(&self, length: usize) -> Result<Vec<u8>, CryptoError> {
        let mut bytes = vec![0u8; length];
        self.fill_bytes(&mut bytes)?;
        Ok(bytes)
    }

    fn zeroize_memory(&self, data: &mut [u8]) {
        data.zeroize();
    }
}

fn hex_upper(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

fn hex_lower(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
