//! Configuration errors.
//!
//! Only configuration problems are surfaced as errors: an empty or
//! duplicated identifier manifest, or a non-positive round duration.
//! Every other precondition violation (flipping while locked, starting
//! twice, changing the duration mid-round) is a deliberate silent no-op
//! so the engine tolerates rapid or duplicate UI events without crashing.

use std::error::Error;
use std::fmt;

/// Fatal configuration error, raised synchronously before a round starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The identifier manifest was empty.
    EmptyManifest,
    /// The same identifier appeared twice in the manifest.
    DuplicateIdentifier(String),
    /// The configured round duration was zero seconds.
    NonPositiveDuration(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyManifest => {
                write!(f, "identifier manifest must not be empty")
            }
            ConfigError::DuplicateIdentifier(id) => {
                write!(f, "duplicate identifier in manifest: {:?}", id)
            }
            ConfigError::NonPositiveDuration(secs) => {
                write!(f, "round duration must be positive, got {}s", secs)
            }
        }
    }
}

impl Error for ConfigError {}
