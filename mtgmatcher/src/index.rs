//! Catalog index: the immutable, load-once view of the card catalog.
//!
//! Built once from a [`CatalogDump`] and only read afterwards. Every matcher
//! call borrows it, so one index can be shared across threads freely.

use crate::card::{collector_number_key, encode_id, CatalogCard, Edition, Finish};
use crate::error::{MatchError, Result};
use crate::normalize::normalize;
use chrono::NaiveDate;
use mtg_common::{CardData, CatalogDump, SetData};
use regex::RegexBuilder;
use std::collections::HashMap;

/// Options controlling what goes into the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
    /// Keep editions only released on digital platforms
    pub include_online_only: bool,
    /// Index tokens (looked up only by token queries)
    pub include_tokens: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            include_online_only: false,
            include_tokens: true,
        }
    }
}

/// Summary of every printing of one card name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    /// Canonical name as printed in the catalog
    pub name: String,
    /// Edition codes where the name appears, oldest edition first
    pub printings: Vec<String>,
    pub layout: String,
}

/// Read-only card catalog
#[derive(Debug)]
pub struct Index {
    version: String,
    /// Every finish of every printing, by identifier
    cards: HashMap<String, CatalogCard>,
    editions: HashMap<String, Edition>,
    /// Edition codes sorted by release date, then code
    edition_order: Vec<String>,
    edition_by_name: HashMap<String, String>,
    names: HashMap<String, NameEntry>,
    token_names: HashMap<String, NameEntry>,
    /// Normalized face, slash and flavor names pointing at a normalized canonical name
    alternate_names: HashMap<String, String>,
    /// Vendor identifiers pointing at catalog identifiers
    alternate_ids: HashMap<String, String>,
}

impl Index {
    /// Build an index with the default options
    pub fn new(dump: &CatalogDump) -> Result<Self> {
        Self::build(dump, &IndexOptions::default())
    }

    /// Build an index from a catalog dump.
    ///
    /// Fails only when the dump holds no cards at all.
    pub fn build(dump: &CatalogDump, options: &IndexOptions) -> Result<Self> {
        if dump.is_empty() {
            return Err(MatchError::DatastoreEmpty);
        }

        let mut index = Index {
            version: dump.meta.version.clone(),
            cards: HashMap::new(),
            editions: HashMap::new(),
            edition_order: Vec::new(),
            edition_by_name: HashMap::new(),
            names: HashMap::new(),
            token_names: HashMap::new(),
            alternate_names: HashMap::new(),
            alternate_ids: HashMap::new(),
        };

        let mut skipped = 0;
        for (code, set) in &dump.data {
            if set.is_online_only && !options.include_online_only {
                skipped += 1;
                continue;
            }
            index.add_edition(code, set, options);
        }

        if index.cards.is_empty() {
            return Err(MatchError::DatastoreEmpty);
        }

        index.finish();

        log::info!(
            "Built catalog index {}: {} editions ({} skipped), {} names, {} card entries",
            index.version,
            index.editions.len(),
            skipped,
            index.names.len(),
            index.cards.len()
        );

        Ok(index)
    }

    fn add_edition(&mut self, code: &str, set: &SetData, options: &IndexOptions) {
        let release_date = match NaiveDate::parse_from_str(&set.release_date, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(e) => {
                log::warn!(
                    "Edition {} has an invalid release date '{}': {}",
                    code,
                    set.release_date,
                    e
                );
                None
            }
        };

        let mut edition = Edition {
            code: code.to_string(),
            name: set.name.clone(),
            release_date,
            set_type: set.set_type.clone(),
            online_only: set.is_online_only,
            foil_only: set.is_foil_only,
            base_set_size: set.base_set_size,
            parent_code: set.parent_code.clone(),
            cards: Vec::new(),
        };

        for data in &set.cards {
            if let Some(card) = self.add_card(&edition, data, false) {
                edition.cards.push(card);
            }
        }
        if options.include_tokens {
            for data in &set.tokens {
                if let Some(card) = self.add_card(&edition, data, true) {
                    edition.cards.push(card);
                }
            }
        }

        edition
            .cards
            .sort_by_key(|card| (card.token, collector_number_key(&card.number)));

        self.edition_by_name
            .insert(normalize(&edition.name), code.to_string());
        self.editions.insert(code.to_string(), edition);
    }

    /// Register one printing, returning its primary finish entry
    fn add_card(&mut self, edition: &Edition, data: &CardData, token: bool) -> Option<CatalogCard> {
        let key = normalize(&data.name);

        // Faces after the first only contribute their name
        if let Some(side) = &data.side {
            if let Some(face) = &data.face_name {
                if normalize(face) != key {
                    self.alternate_names.insert(normalize(face), key.clone());
                }
            }
            if side != "a" {
                return None;
            }
        }

        if data.name.trim().is_empty() || data.uuid.trim().is_empty() {
            log::warn!(
                "Skipping malformed card '{}' #{} in {}",
                data.name,
                data.number,
                edition.code
            );
            return None;
        }

        let mut finishes: Vec<Finish> = data
            .finishes
            .iter()
            .filter_map(|f| Finish::parse(f))
            .collect();
        if finishes.is_empty() {
            finishes.push(Finish::Nonfoil);
        }
        finishes.sort();
        finishes.dedup();

        let ids: Vec<String> = finishes
            .iter()
            .map(|finish| encode_id(&data.uuid, &finishes, *finish))
            .collect();

        let mut primary = None;
        for (finish, id) in finishes.iter().zip(&ids) {
            let card = CatalogCard {
                id: id.clone(),
                base_id: data.uuid.clone(),
                name: data.name.clone(),
                edition_code: edition.code.clone(),
                edition_name: edition.name.clone(),
                number: data.number.clone(),
                finishes: finishes.clone(),
                finish: *finish,
                foil: *finish == Finish::Foil,
                etched: *finish == Finish::Etched,
                frame_version: data.frame_version.clone(),
                border_color: data.border_color.clone(),
                frame_effects: data.frame_effects.clone(),
                promo_types: data.promo_types.clone(),
                full_art: data.is_full_art,
                promo: data.is_promo,
                oversized: data.is_oversized,
                token,
                language: data.language.clone(),
                flavor_name: data.flavor_name.clone(),
                watermark: data.watermark.clone(),
                artist: data.artist.clone(),
                flavor_text: data.flavor_text.clone(),
                layout: data.layout.clone(),
                variation_ids: ids.iter().filter(|other| *other != id).cloned().collect(),
                scryfall_id: data.identifiers.scryfall_id.clone(),
                tcgplayer_id: data.identifiers.tcgplayer_product_id.clone(),
                mcm_id: data.identifiers.mcm_id.clone(),
            };
            if primary.is_none() {
                primary = Some(card.clone());
            }
            self.cards.insert(id.clone(), card);
        }

        let base_id = ids.first().cloned().unwrap_or_else(|| data.uuid.clone());
        let vendor_ids = [
            &data.identifiers.scryfall_id,
            &data.identifiers.tcgplayer_product_id,
            &data.identifiers.mcm_id,
        ];
        for vendor_id in vendor_ids.into_iter().flatten() {
            self.alternate_ids
                .entry(vendor_id.clone())
                .or_insert_with(|| base_id.clone());
        }

        let names = if token {
            &mut self.token_names
        } else {
            &mut self.names
        };
        let entry = names.entry(key.clone()).or_insert_with(|| NameEntry {
            name: data.name.clone(),
            printings: Vec::new(),
            layout: data.layout.clone(),
        });
        if !entry.printings.contains(&edition.code) {
            entry.printings.push(edition.code.clone());
        }

        if !token {
            if data.name.contains(" // ") {
                for face in data.name.split(" // ") {
                    self.alternate_names
                        .entry(normalize(face))
                        .or_insert_with(|| key.clone());
                }
                self.alternate_names
                    .entry(normalize(&data.name.replace(" // ", "/")))
                    .or_insert_with(|| key.clone());
            }
            if let Some(flavor) = &data.flavor_name {
                self.alternate_names
                    .entry(normalize(flavor))
                    .or_insert_with(|| key.clone());
            }
        }

        primary
    }

    fn finish(&mut self) {
        let mut order: Vec<(Option<NaiveDate>, String)> = self
            .editions
            .values()
            .map(|e| (e.release_date, e.code.clone()))
            .collect();
        order.sort();
        self.edition_order = order.into_iter().map(|(_, code)| code).collect();

        let position: HashMap<&str, usize> = self
            .edition_order
            .iter()
            .enumerate()
            .map(|(i, code)| (code.as_str(), i))
            .collect();
        for entry in self.names.values_mut().chain(self.token_names.values_mut()) {
            entry
                .printings
                .sort_by_key(|code| position.get(code.as_str()).copied().unwrap_or(usize::MAX));
        }

        // A canonical name always wins over an alias with the same key
        let names = &self.names;
        self.alternate_names.retain(|alias, _| !names.contains_key(alias));
    }

    /// Catalog version the index was built from
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Number of card entries (one per finish)
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card by catalog identifier
    pub fn get_card(&self, id: &str) -> Result<&CatalogCard> {
        self.cards
            .get(id)
            .ok_or_else(|| MatchError::UnknownIdentifier(id.to_string()))
    }

    /// Look up a card by catalog identifier or by a vendor identifier
    pub fn resolve_id(&self, id: &str) -> Option<&CatalogCard> {
        self.cards.get(id).or_else(|| {
            self.alternate_ids
                .get(id)
                .and_then(|card_id| self.cards.get(card_id))
        })
    }

    pub fn edition(&self, code: &str) -> Option<&Edition> {
        self.editions.get(code)
    }

    /// Look up an edition by its name, normalized
    pub fn edition_by_name(&self, name: &str) -> Option<&Edition> {
        self.edition_by_name
            .get(&normalize(name))
            .and_then(|code| self.editions.get(code))
    }

    /// Look up an edition by code (case-insensitive) or by name
    pub fn find_edition(&self, text: &str) -> Option<&Edition> {
        self.editions
            .get(&text.trim().to_uppercase())
            .or_else(|| self.edition_by_name(text))
    }

    /// Editions in release order
    pub fn editions(&self) -> impl Iterator<Item = &Edition> {
        self.edition_order
            .iter()
            .filter_map(|code| self.editions.get(code))
    }

    /// Name summary for a card name, following face, slash and flavor aliases
    pub fn lookup_name(&self, name: &str) -> Option<&NameEntry> {
        let key = normalize(name);
        self.names.get(&key).or_else(|| {
            self.alternate_names
                .get(&key)
                .and_then(|canonical| self.names.get(canonical))
        })
    }

    /// Name summary for a token name
    pub fn lookup_token(&self, name: &str) -> Option<&NameEntry> {
        let key = normalize(name);
        let key = key.strip_suffix("token").unwrap_or(&key);
        self.token_names.get(key)
    }

    /// Cards of one edition with exactly the given name
    pub fn match_in_edition(&self, name: &str, edition_code: &str) -> Vec<&CatalogCard> {
        let Some(edition) = self.editions.get(edition_code) else {
            return Vec::new();
        };
        let key = self
            .lookup_name(name)
            .or_else(|| self.lookup_token(name))
            .map(|entry| normalize(&entry.name))
            .unwrap_or_else(|| normalize(name));

        edition
            .cards
            .iter()
            .filter(|card| normalize(&card.name) == key)
            .collect()
    }

    /// Identifiers of every card whose normalized name equals `name`
    pub fn search_equals(&self, name: &str) -> Vec<String> {
        let key = normalize(name);
        self.search_by(|card_key| card_key == key)
    }

    /// Identifiers of every card whose normalized name contains `name`
    pub fn search_contains(&self, name: &str) -> Vec<String> {
        let key = normalize(name);
        self.search_by(|card_key| card_key.contains(&key))
    }

    /// Identifiers of every card whose normalized name starts with `name`
    pub fn search_prefix(&self, name: &str) -> Vec<String> {
        let key = normalize(name);
        self.search_by(|card_key| card_key.starts_with(&key))
    }

    /// Identifiers of every card whose normalized name ends with `name`
    pub fn search_suffix(&self, name: &str) -> Vec<String> {
        let key = normalize(name);
        self.search_by(|card_key| card_key.ends_with(&key))
    }

    /// Identifiers of every card whose canonical name matches a regular expression
    pub fn search_regexp(&self, pattern: &str) -> Result<Vec<String>> {
        let re = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| MatchError::InvalidPattern(e.to_string()))?;

        Ok(self.collect_ids(|card| re.is_match(&card.name)))
    }

    fn search_by<F: Fn(&str) -> bool>(&self, predicate: F) -> Vec<String> {
        let matching: Vec<&String> = self
            .names
            .keys()
            .filter(|key| predicate(key.as_str()))
            .collect();
        if matching.is_empty() {
            return Vec::new();
        }
        self.collect_ids(|card| {
            let key = normalize(&card.name);
            matching.iter().any(|m| **m == key)
        })
    }

    /// All finish identifiers of non-token cards accepted by `keep`, in release order
    fn collect_ids<F: Fn(&CatalogCard) -> bool>(&self, keep: F) -> Vec<String> {
        let mut ids = Vec::new();
        for edition in self.editions() {
            for card in edition.cards.iter().filter(|card| !card.token && keep(card)) {
                ids.push(card.id.clone());
                ids.extend(card.variation_ids.iter().cloned());
            }
        }
        ids
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
