//! Card catalog dump schema and loading

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Top level catalog document
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CatalogDump {
    #[serde(default)]
    pub meta: CatalogMeta,
    /// Editions keyed by their set code
    #[serde(default)]
    pub data: BTreeMap<String, SetData>,
}

/// Dump version information
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CatalogMeta {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub date: String,
}

/// A single edition (print run) as found in the dump
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SetData {
    pub code: String,
    pub name: String,
    /// Release date in `YYYY-MM-DD` format
    pub release_date: String,
    #[serde(rename = "type")]
    pub set_type: String,
    #[serde(default)]
    pub is_online_only: bool,
    #[serde(default)]
    pub is_foil_only: bool,
    /// Number of cards in the main booster set, cards past it are extras
    #[serde(default)]
    pub base_set_size: u32,
    #[serde(default)]
    pub parent_code: Option<String>,
    #[serde(default)]
    pub cards: Vec<CardData>,
    #[serde(default)]
    pub tokens: Vec<CardData>,
}

/// A single printed card in an edition
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub name: String,
    pub number: String,
    pub uuid: String,
    /// Name of this face for split and double-faced cards
    #[serde(default)]
    pub face_name: Option<String>,
    /// Face side ("a", "b", ...) for multi-face layouts
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub finishes: Vec<String>,
    #[serde(default)]
    pub frame_version: String,
    #[serde(default)]
    pub border_color: String,
    #[serde(default)]
    pub frame_effects: Vec<String>,
    #[serde(default)]
    pub promo_types: Vec<String>,
    #[serde(default)]
    pub is_full_art: bool,
    #[serde(default)]
    pub is_promo: bool,
    #[serde(default)]
    pub is_oversized: bool,
    #[serde(default = "default_language")]
    pub language: String,
    /// Alternate in-universe name printed on reskinned cards
    #[serde(default)]
    pub flavor_name: Option<String>,
    #[serde(default)]
    pub watermark: Option<String>,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub flavor_text: Option<String>,
    #[serde(default)]
    pub layout: String,
    /// Other printings of the same card in the same edition
    #[serde(default)]
    pub variations: Vec<String>,
    #[serde(default)]
    pub identifiers: CardIdentifiers,
}

fn default_language() -> String {
    "English".to_string()
}

/// Identifiers assigned to a card by external vendors
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CardIdentifiers {
    #[serde(default)]
    pub scryfall_id: Option<String>,
    #[serde(default)]
    pub tcgplayer_product_id: Option<String>,
    #[serde(default)]
    pub mcm_id: Option<String>,
}

impl CatalogDump {
    /// Total number of cards across all editions, tokens excluded
    pub fn card_count(&self) -> usize {
        self.data.values().map(|set| set.cards.len()).sum()
    }

    /// A dump is empty when it has no editions or no cards at all
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() || self.card_count() == 0
    }
}

/// Parse a catalog dump from a JSON string
pub fn parse_catalog(content: &str) -> Result<CatalogDump> {
    let dump: CatalogDump = serde_json::from_str(content)?;
    if dump.is_empty() {
        return Err(CatalogError::Empty);
    }

    log::info!(
        "Parsed catalog version {} ({}): {} editions, {} cards",
        dump.meta.version,
        dump.meta.date,
        dump.data.len(),
        dump.card_count()
    );

    Ok(dump)
}

/// Load a catalog dump from a JSON file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CatalogDump> {
    let path = path.as_ref();
    log::info!("Loading catalog from: {}", path.display());

    let content = std::fs::read_to_string(path)?;
    parse_catalog(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_json() -> &'static str {
        r#"{
            "meta": { "version": "5.2.2", "date": "2024-01-01" },
            "data": {
                "LEA": {
                    "code": "LEA",
                    "name": "Limited Edition Alpha",
                    "releaseDate": "1993-08-05",
                    "type": "core",
                    "baseSetSize": 295,
                    "cards": [
                        {
                            "name": "Lightning Bolt",
                            "number": "161",
                            "uuid": "bolt-lea",
                            "finishes": ["nonfoil"],
                            "artist": "Christopher Rush",
                            "identifiers": { "scryfallId": "sf-bolt-lea", "mcmId": "7" }
                        }
                    ]
                }
            }
        }"#
    }

    #[test]
    fn parses_minimal_dump() {
        let dump = parse_catalog(sample_json()).unwrap();

        assert_eq!(dump.meta.version, "5.2.2");
        assert_eq!(dump.data.len(), 1);
        assert_eq!(dump.card_count(), 1);

        let set = &dump.data["LEA"];
        assert_eq!(set.name, "Limited Edition Alpha");
        assert_eq!(set.set_type, "core");
        assert!(!set.is_online_only);

        let card = &set.cards[0];
        assert_eq!(card.language, "English");
        assert_eq!(card.finishes, vec!["nonfoil"]);
        assert_eq!(card.identifiers.scryfall_id.as_deref(), Some("sf-bolt-lea"));
        assert_eq!(card.identifiers.tcgplayer_product_id, None);
    }

    #[test]
    fn rejects_dump_without_editions() {
        let result = parse_catalog(r#"{ "meta": { "version": "1" }, "data": {} }"#);
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn rejects_dump_without_cards() {
        let json = r#"{
            "data": {
                "EMP": { "code": "EMP", "name": "Empty", "releaseDate": "2000-01-01", "type": "promo" }
            }
        }"#;
        assert!(matches!(parse_catalog(json), Err(CatalogError::Empty)));
    }

    #[test]
    fn reports_parse_errors() {
        assert!(matches!(parse_catalog("not json"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn loads_dump_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(sample_json().as_bytes()).unwrap();

        let dump = load_catalog(file.path()).unwrap();
        assert_eq!(dump.card_count(), 1);
    }

    #[test]
    fn reports_missing_file() {
        let result = load_catalog("/this/path/definitely/does/not/exist/AllPrintings.json");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
