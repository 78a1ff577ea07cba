//! Shared fixtures for unit tests

use crate::index::Index;
use lazy_static::lazy_static;
use mtg_common::CatalogDump;

lazy_static! {
    /// Index over the small catalog under `tests/fixtures`
    pub(crate) static ref FIXTURE: Index = Index::new(&fixture_dump()).unwrap();
}

pub(crate) fn fixture_dump() -> CatalogDump {
    mtg_common::parse_catalog(include_str!("../tests/fixtures/catalog.json")).unwrap()
}

/// Identifier of the primary finish of the only printing of `name` numbered `number`
pub(crate) fn card_id(name: &str, code: &str, number: &str) -> String {
    FIXTURE
        .match_in_edition(name, code)
        .into_iter()
        .find(|card| card.number == number)
        .map(|card| card.id.clone())
        .unwrap_or_else(|| panic!("no {name} #{number} in {code}"))
}
