//! Query rewriting applied before lookup.
//!
//! Vendors put collector numbers in names, sell reskins under their flavor
//! name and spell editions in a dozen ways. The functions here move each piece
//! of information to the field the matcher expects. They never fail: anything
//! left unresolved is rejected later by the matcher.

use crate::index::{Index, NameEntry};
use crate::normalize::{contains, normalize, split_variants};
use crate::numbers::extract_number;
use crate::query::CardQuery;
use crate::tables::{commander_edition, edition_alias, find_reskin};

/// Textual substitutions tried, in order, when a name is not found
const NAME_SUBSTITUTIONS: &[(&str, &str)] = &[
    (" & ", " and "),
    (" and ", " & "),
    (" / ", " // "),
    ("/", " // "),
    ("\u{00B4}", "'"),
    ("`", "'"),
];

/// Edition words that describe the language of the card, not the edition
const LANGUAGE_WORDS: &[&str] = &["japanese", "jpn", "jp"];

const MYSTERY_BOOSTER: &str = "Mystery Booster";
const THE_LIST: &str = "The List";
const PLAYTEST: &str = "Mystery Booster Playtest Cards 2019";

pub(crate) fn push_variation(query: &mut CardQuery, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    if query.variation.trim().is_empty() {
        query.variation = text.to_string();
    } else {
        query.variation = format!("{} {}", query.variation.trim(), text);
    }
}

/// Move text taken out of a name into the variation, picking up a foil hint
fn relocate(query: &mut CardQuery, text: &str) {
    let lowered = text.to_lowercase();
    if lowered.contains("foil") && !lowered.contains("non") {
        query.foil = true;
    }
    push_variation(query, text);
}

/// Name entry for the query name, looking in the token index for token queries
pub(crate) fn lookup<'a>(index: &'a Index, query: &CardQuery) -> Option<&'a NameEntry> {
    if query.is_token() {
        index
            .lookup_token(&query.name)
            .or_else(|| index.lookup_name(&query.name))
    } else {
        index.lookup_name(&query.name)
    }
}

/// Rewrite a query whose name is not in the catalog.
///
/// Each step is tried in turn and the first one that makes the name known
/// wins. Returns true when the name resolves afterwards.
pub fn adjust_name(index: &Index, query: &mut CardQuery) -> bool {
    if lookup(index, query).is_some() {
        return true;
    }

    let parts = split_variants(&query.name);
    if parts.len() > 1 {
        query.name = parts[0].clone();
        for part in &parts[1..] {
            relocate(query, part);
        }
        if lookup(index, query).is_some() {
            return true;
        }
    }

    if let Some((name, rest)) = query.name.split_once(" - ") {
        let (name, rest) = (name.trim().to_string(), rest.to_string());
        query.name = name;
        relocate(query, &rest);
        if lookup(index, query).is_some() {
            return true;
        }
    }

    if strip_trailing_numbers(query) && lookup(index, query).is_some() {
        return true;
    }

    if let Some(reskin) = find_reskin(&query.name) {
        log::debug!(
            "Reskin {} stands for {}",
            reskin.flavor_name,
            reskin.canonical_name
        );
        push_variation(query, reskin.flavor_name);
        query.name = reskin.canonical_name.to_string();
        if query.edition.trim().is_empty() {
            if let Some(edition) = index.edition(reskin.edition_code) {
                query.edition = edition.name.clone();
            }
        }
        return lookup(index, query).is_some();
    }

    for (from, to) in NAME_SUBSTITUTIONS {
        if !query.name.contains(from) {
            continue;
        }
        let candidate = CardQuery {
            name: query.name.replace(from, to),
            ..query.clone()
        };
        if lookup(index, &candidate).is_some() {
            query.name = candidate.name;
            return true;
        }
    }

    false
}

/// Move trailing collector numbers, `#` references and single-letter
/// disambiguators from the name to the variation
fn strip_trailing_numbers(query: &mut CardQuery) -> bool {
    let mut words: Vec<&str> = query.name.split_whitespace().collect();
    let mut moved = Vec::new();

    while words.len() > 1 {
        let Some(last) = words.last().copied() else {
            break;
        };
        let single_letter = last.len() == 1 && last.chars().all(|c| c.is_ascii_alphabetic());
        if last.starts_with('#') || single_letter || extract_number(last).is_some() {
            moved.push(last);
            words.pop();
        } else {
            break;
        }
    }

    if moved.is_empty() {
        return false;
    }
    moved.reverse();
    let moved = moved.join(" ");
    query.name = words.join(" ");
    relocate(query, &moved);
    true
}

/// Rewrite the edition hint into a catalog edition name where possible and
/// set the refinement flags derived from it.
pub fn adjust_edition(index: &Index, query: &mut CardQuery) {
    if query.is_generic_promo() {
        query.promo_wildcard = true;
    }
    if query.is_extended_art()
        || query.is_borderless()
        || query.is_showcase()
        || query.mentions("collector")
    {
        query.beyond_base_set = true;
    }

    if query.edition.trim().is_empty() {
        return;
    }
    if let Some(edition) = index.find_edition(&query.edition) {
        query.edition = edition.name.clone();
        return;
    }

    relocate_language(query);
    if let Some(edition) = index.find_edition(&query.edition) {
        query.edition = edition.name.clone();
        return;
    }

    if let Some(alias) = edition_alias(&query.edition) {
        log::debug!("Edition alias {} -> {}", query.edition, alias);
        query.edition = alias.to_string();
        return;
    }

    if contains(&query.edition, "commander") {
        if let Some(name) = commander_edition(&query.edition, &query.variation) {
            log::debug!("Commander edition {} -> {}", query.edition, name);
            query.edition = name;
            return;
        }
    }

    decouple_mystery_booster(query);
}

/// Move language words from the edition hint to the variation
fn relocate_language(query: &mut CardQuery) {
    let (language, rest): (Vec<&str>, Vec<&str>) =
        query.edition.split_whitespace().partition(|word| {
            let word = word
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            LANGUAGE_WORDS.contains(&word.as_str())
        });
    if language.is_empty() || rest.is_empty() {
        return;
    }
    let rest = rest.join(" ");
    query.edition = rest;
    push_variation(query, "Japanese");
}

/// Vendors list Mystery Booster reprints and The List under one heading.
/// Only a keyword in the variation tells them apart; without one the
/// edition is left as is and the query stays ambiguous.
fn decouple_mystery_booster(query: &mut CardQuery) {
    let edition = normalize(&query.edition);
    if !edition.contains(&normalize(MYSTERY_BOOSTER)) {
        return;
    }

    let variation = query.variation.to_lowercase();
    let target = if variation.contains("the list") || query.mentions_word("plst") {
        THE_LIST
    } else if variation.contains("playtest") {
        PLAYTEST
    } else if edition == normalize(MYSTERY_BOOSTER)
        || variation.contains("mystery booster")
        || query.mentions_word("mb1")
    {
        MYSTERY_BOOSTER
    } else {
        log::debug!("Cannot tell which Mystery Booster printing '{}' is", query.variation);
        return;
    };
    query.edition = target.to_string();
}

/// Apply both name and edition adjustments
pub fn adjust(index: &Index, query: &CardQuery) -> CardQuery {
    let mut adjusted = query.clone();
    adjust_name(index, &mut adjusted);
    adjust_edition(index, &mut adjusted);
    adjusted
}
