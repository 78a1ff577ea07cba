//! Error types for card resolution

use thiserror::Error;

/// Unified error type for matcher operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The catalog index has not been built or was built from nothing
    #[error("datastore is empty")]
    DatastoreEmpty,
    /// The name is unknown even after adjusting the query
    #[error("card does not exist")]
    CardDoesNotExist,
    /// The name exists but none of its editions fit the query
    #[error("card not found in edition")]
    CardNotInEdition,
    /// Name and edition resolved but no printing fit the variant
    #[error("card variant not found")]
    CardWrongVariant,
    /// More than one catalog card fits the query
    #[error("{0}")]
    Aliasing(AliasingError),
    /// `get_card` was asked for an identifier the catalog does not know
    #[error("unknown identifier: {0}")]
    UnknownIdentifier(String),
    /// `search_regexp` received an invalid pattern
    #[error("invalid search pattern: {0}")]
    InvalidPattern(String),
}

impl MatchError {
    /// Candidate identifiers for an aliasing error, `None` for every other kind
    pub fn probe(&self) -> Option<&[String]> {
        match self {
            MatchError::Aliasing(alias) => Some(alias.probe()),
            _ => None,
        }
    }
}

/// The set of catalog identifiers still plausible after every filter ran
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "aliasing detected between {} cards: {}",
    .candidates.len(),
    .candidates.join(", ")
)]
pub struct AliasingError {
    candidates: Vec<String>,
}

impl AliasingError {
    pub(crate) fn new(candidates: Vec<String>) -> Self {
        Self { candidates }
    }

    /// Candidate identifiers in the order they were collected
    pub fn probe(&self) -> &[String] {
        &self.candidates
    }
}

/// Result alias for matcher operations
pub type Result<T> = std::result::Result<T, MatchError>;
