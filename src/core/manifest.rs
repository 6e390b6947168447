//! Identifier manifest.
//!
//! The `Manifest` holds the configured image set for a game: one
//! identifier string per pair, supplied by the embedding shell (asset
//! paths, emoji, whatever the view renders). The engine never loads
//! assets; it only hands identifiers back through the observer so the
//! view can.
//!
//! ## Example
//!
//! ```
//! use pairmatch::core::{Manifest, PairId};
//!
//! let manifest = Manifest::new(["assets/1.jpg", "assets/2.png"]).unwrap();
//!
//! assert_eq!(manifest.pair_count(), 2);
//! assert_eq!(manifest.identifier(PairId::new(0)), Some("assets/1.jpg"));
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::tile::PairId;

/// The configured set of pair identifiers for a game.
///
/// Identifiers must be distinct; `PairId`s are indices into the
/// configured order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    identifiers: Vec<String>,
}

impl Manifest {
    /// Build a manifest from an ordered list of distinct identifiers.
    ///
    /// Fails with `ConfigError::EmptyManifest` on empty input and
    /// `ConfigError::DuplicateIdentifier` if any identifier repeats.
    pub fn new<I, S>(identifiers: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let identifiers: Vec<String> = identifiers.into_iter().map(Into::into).collect();

        if identifiers.is_empty() {
            return Err(ConfigError::EmptyManifest);
        }

        let mut seen = FxHashSet::default();
        for id in &identifiers {
            if !seen.insert(id.as_str()) {
                return Err(ConfigError::DuplicateIdentifier(id.clone()));
            }
        }

        Ok(Self { identifiers })
    }

    /// Number of configured pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.identifiers.len()
    }

    /// Look up the identifier string for a pair.
    #[must_use]
    pub fn identifier(&self, pair: PairId) -> Option<&str> {
        self.identifiers.get(pair.raw() as usize).map(String::as_str)
    }

    /// Iterate over all pairs in configured order.
    pub fn iter(&self) -> impl Iterator<Item = (PairId, &str)> {
        self.identifiers
            .iter()
            .enumerate()
            .map(|(i, s)| (PairId::new(i as u32), s.as_str()))
    }
}
