//! Short code generation and validation utilities.
//!
//! Generated codes are drawn from an explicit [`CodeGenerator`] so tests can
//! seed it and get a reproducible sequence.

use crate::error::AppError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Length of generated short codes.
pub const SHORT_CODE_LENGTH: usize = 6;

/// Symbols a generated code is drawn from: `A-Z`, `a-z`, `0-9`.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Upper bound on the length of a user-supplied code.
pub const MAX_CUSTOM_CODE_LENGTH: u64 = 64;

/// Codes that would be shadowed by a fixed route and can never redirect.
const RESERVED_CODES: &[&str] = &["dashboard-data", "shorten", "health"];

/// Characters that end or escape a URL path segment, so a code holding one
/// can never be matched by `GET /{short_code}`.
const PATH_BREAKING_CHARS: &[char] = &['/', '?', '#', '%'];

/// Random short code source shared by all request tasks.
///
/// Each character is drawn uniformly and independently; uniqueness is not
/// guaranteed and must be checked against the store.
pub struct CodeGenerator {
    rng: Mutex<StdRng>,
}

impl CodeGenerator {
    /// Generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic generator, for tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Draws a new [`SHORT_CODE_LENGTH`]-character code.
    pub fn generate(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        (0..SHORT_CODE_LENGTH)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

/// Rejects user-supplied codes that could never be redirected to.
///
/// Any other non-empty code is accepted as-is.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for codes that collide with a fixed route
/// or contain a path-breaking character.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(format!(
            "Short code '{}' is reserved",
            code
        )));
    }

    if code.contains(PATH_BREAKING_CHARS) {
        return Err(AppError::bad_request(
            "Short code must not contain '/', '?', '#' or '%'",
        ));
    }

    Ok(())
}
