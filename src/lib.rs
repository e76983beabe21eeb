//! # palindrom
//!
//! Decides whether a text is a palindrome once punctuation, whitespace and
//! letter case are ignored.
//!
//! ## Quick Start
//!
//! ```rust
//! use palindrom::{Charset, Checker, CheckerConfig, is_palindrome};
//!
//! assert!(is_palindrome("Leben Sie mit im Eisnebel?"));
//! assert!(!is_palindrome("No Palindrom!"));
//!
//! // ASCII-only classification, with an explicit input limit.
//! let checker = Checker::new(CheckerConfig {
//!     charset: Charset::Ascii,
//!     max_input_len: Some(4096),
//! })
//! .unwrap();
//! assert!(checker.check("An!Na!").unwrap());
//! ```
//!
//! ## How a text is checked
//!
//! 1. **Normalize** — keep only alphanumeric characters, case-folded, in
//!    their original order. See [`Charset`] for the classification rules.
//! 2. **Scan** — compare each mirrored pair of positions of the normalized
//!    sequence. Any mismatch means "not a palindrome".
//!
//! An empty text, or one that normalizes to nothing, is a palindrome.

pub(crate) mod normalize;
pub(crate) mod scan;
pub mod session;

use thiserror::Error;
use tracing::{debug, trace};

pub use normalize::Charset;

// ------------------------------------------------------------------------------------------------
// Configuration
// ------------------------------------------------------------------------------------------------

/// Configuration for a [`Checker`].
///
/// The configuration is validated when passed to [`Checker::new`].
///
/// # Example
///
/// ```rust
/// use palindrom::{Charset, CheckerConfig};
///
/// // Unicode classification, no length limit
/// let config = CheckerConfig::default();
///
/// let config = CheckerConfig {
///     charset: Charset::Ascii,
///     ..CheckerConfig::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Character classification applied during normalization.
    ///
    /// Default: [`Charset::Unicode`].
    pub charset: Charset,

    /// Maximum accepted input length in bytes.
    ///
    /// Longer inputs are rejected with [`CheckerError::InputTooLong`].
    ///
    /// Default: `None` (unbounded). Must be ≥ 1 when set.
    pub max_input_len: Option<usize>,
}

impl CheckerConfig {
    /// Validates all configuration parameters.
    fn validate(&self) -> Result<(), CheckerError> {
        if self.max_input_len == Some(0) {
            return Err(CheckerError::InvalidConfig(
                "max_input_len must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

// ------------------------------------------------------------------------------------------------
// Error type
// ------------------------------------------------------------------------------------------------

/// Errors returned by [`Checker`] operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckerError {
    /// Invalid configuration parameter.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The input exceeds the configured length limit.
    #[error("input is {len} bytes, limit is {max}")]
    InputTooLong {
        /// Length of the rejected input in bytes.
        len: usize,
        /// Configured limit.
        max: usize,
    },
}

// ------------------------------------------------------------------------------------------------
// Checker
// ------------------------------------------------------------------------------------------------

/// A configured palindrome checker.
///
/// Immutable after construction; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Checker {
    config: CheckerConfig,
}

impl Checker {
    /// Creates a checker from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::InvalidConfig`] if any configuration
    /// parameter is out of range.
    pub fn new(config: CheckerConfig) -> Result<Self, CheckerError> {
        config.validate()?;
        debug!(
            charset = ?config.charset,
            max_input_len = ?config.max_input_len,
            "checker created"
        );
        Ok(Self { config })
    }

    /// Returns the configuration this checker was built with.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Returns `true` if `text` is a palindrome after normalization.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::InputTooLong`] if a length limit is
    /// configured and `text` exceeds it. Without a limit this never fails.
    pub fn check(&self, text: &str) -> Result<bool, CheckerError> {
        let normalized = self.normalize_checked(text)?;

        match scan::first_mismatch(&normalized) {
            None => Ok(true),
            Some((left, right)) => {
                debug!(left, right, "mirrored pair differs");
                Ok(false)
            }
        }
    }

    /// Returns the normalized form of `text` that [`Checker::check`]
    /// compares against its reversal.
    ///
    /// # Errors
    ///
    /// Same as [`Checker::check`].
    pub fn normalized(&self, text: &str) -> Result<String, CheckerError> {
        Ok(self.normalize_checked(text)?.into_iter().collect())
    }

    fn normalize_checked(&self, text: &str) -> Result<Vec<char>, CheckerError> {
        if let Some(max) = self.config.max_input_len {
            if text.len() > max {
                return Err(CheckerError::InputTooLong {
                    len: text.len(),
                    max,
                });
            }
        }

        let normalized = normalize::normalize(text, self.config.charset);
        trace!(
            input_len = text.len(),
            normalized_len = normalized.len(),
            "input normalized"
        );
        Ok(normalized)
    }
}

/// Returns `true` if `text` is a palindrome under the default
/// configuration (Unicode classification, no length limit).
///
/// Never fails: every text has a definite answer.
pub fn is_palindrome(text: &str) -> bool {
    let normalized = normalize::normalize(text, Charset::Unicode);
    scan::is_mirrored(&normalized)
}
