//! MTG Matcher - card resolution engine
//!
//! Resolves noisy vendor descriptions of Magic: The Gathering cards (name,
//! edition hint, variant text, foil flag) to the identifier of exactly one
//! printing in a read-only catalog index, or to a typed error saying why
//! that is not possible.

pub mod adjust;
pub mod callbacks;
pub mod card;
pub mod error;
pub mod filter;
pub mod index;
pub mod io;
pub mod matcher;
pub mod normalize;
pub mod numbers;
pub mod printings;
pub mod query;
pub mod tables;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use adjust::adjust;
pub use card::{decode_id, encode_id, CatalogCard, Edition, Finish};
pub use error::{AliasingError, MatchError, Result};
pub use index::{Index, IndexOptions, NameEntry};
pub use io::{read_queries, write_results, QueryRecord, ResultRecord};
pub use matcher::match_card;
pub use normalize::{normalize, split_variants};
pub use numbers::{extract_number, extract_year};
pub use query::CardQuery;
