//! Narrowing the cards of the candidate editions down to single printings.
//!
//! Rules run per edition in priority order:
//!
//! 1. an explicit entry in the variants table
//! 2. a collector number found in the variation
//! 3. attribute heuristics (language, promo kind, frame, border, full art)
//! 4. special cases for single editions
//! 5. the callbacks registered for the edition code
//! 6. named exceptions for individual cards
//!
//! Rules 1 and 2 are decisive when they apply. An attribute the query asks
//! for is required, so a miss leaves the edition empty. An attribute the
//! query does not mention is only preferred: that heuristic is skipped when
//! it would leave nothing.

use crate::callbacks::callbacks_for;
use crate::card::{CatalogCard, Edition, Finish};
use crate::index::Index;
use crate::normalize::{contains, equals};
use crate::numbers::{extract_number, number_matches};
use crate::printings::{
    promos_for_everybody_date, suffix_convention_date, WORLD_CHAMPIONSHIP_PREFIX,
};
use crate::query::CardQuery;
use crate::tables::{variant_number, world_champion_prefix};

/// Cards known to be printed several times in one edition without a
/// distinguishing attribute: name, edition code, number to keep
const NAMED_EXCEPTIONS: &[(&str, &str, &str)] = &[("Teferi, Master of Time", "M21", "75")];

/// Early expansions whose variants differ only by artist or flavor text
const ARTIST_FLAVOR_EDITIONS: &[&str] = &["Antiquities", "Fallen Empires", "Homelands", "Alliances"];

/// Keep the cards accepted by `keep`, unless that would leave none
fn narrow<F>(cards: &mut Vec<&CatalogCard>, keep: F)
where
    F: Fn(&CatalogCard) -> bool,
{
    if cards.iter().any(|card| keep(*card)) {
        cards.retain(|card| keep(*card));
    }
}

/// Require the attribute when the query asks for it, otherwise prefer cards without it
fn require_or_avoid<F>(cards: &mut Vec<&CatalogCard>, wanted: bool, has: F)
where
    F: Fn(&CatalogCard) -> bool,
{
    if wanted {
        cards.retain(|card| has(*card));
    } else {
        narrow(cards, |card| !has(card));
    }
}

pub(crate) fn is_world_championship(edition: &Edition) -> bool {
    edition.name.starts_with(WORLD_CHAMPIONSHIP_PREFIX)
}

/// Prerelease printing, by promo type, by edition or by the "s" suffix of "<Set> Promos"
fn is_prerelease_card(edition: &Edition, card: &CatalogCard) -> bool {
    card.has_promo_type("prerelease")
        || edition.name.contains("Prerelease")
        || (edition.name.ends_with("Promos")
            && edition.released_after(suffix_convention_date())
            && card.number_suffix() == "s")
}

/// Promo pack printing, by promo type, by edition or by the "p" suffix of "<Set> Promos"
fn is_promo_pack_card(edition: &Edition, card: &CatalogCard) -> bool {
    card.has_promo_type("promopack")
        || edition.name.contains("Promo Pack")
        || (edition.name.ends_with("Promos")
            && edition.released_after(suffix_convention_date())
            && card.number_suffix() == "p")
}

/// Run every rule over the cards of one edition
pub fn filter_edition<'a>(
    query: &CardQuery,
    edition: &Edition,
    cards: Vec<&'a CatalogCard>,
) -> Vec<&'a CatalogCard> {
    let Some(name) = cards.first().map(|card| card.name.clone()) else {
        return cards;
    };

    let mut number_given = false;
    let mut cards: Vec<&CatalogCard> =
        if let Some(number) = variant_number(&edition.name, &name, &query.variation) {
            log::debug!("Variants table maps '{}' to #{}", query.variation, number);
            number_given = true;
            cards.into_iter().filter(|card| card.number == number).collect()
        } else if let Some(number) = extract_number(&query.variation) {
            number_given = true;
            by_number(query, edition, cards, &number)
        } else {
            heuristics(query, edition, cards)
        };

    special_editions(query, edition, &mut cards);

    if let Some(callbacks) = callbacks_for(&edition.code) {
        cards.retain(|card| !callbacks.rejects(query, card));
    }

    if !number_given {
        named_exceptions(edition, &mut cards);
    }

    prefer_finish(query, edition, &mut cards);
    cards
}

/// Match an extracted collector number, trying the suffixes the variation implies
fn by_number<'a>(
    query: &CardQuery,
    edition: &Edition,
    cards: Vec<&'a CatalogCard>,
    number: &str,
) -> Vec<&'a CatalogCard> {
    let mut suffixes: Vec<String> = Vec::new();
    if query.is_jpn() {
        suffixes.push("\u{2605}".to_string());
    }
    if query.is_basic_land() && query.is_non_full_art() {
        suffixes.push("a".to_string());
    }
    suffixes.push(String::new());
    if query.is_prerelease() {
        suffixes.push("s".to_string());
    }
    if query.is_promo_pack() {
        suffixes.push("p".to_string());
    }
    suffixes.extend(
        query
            .variation
            .split_whitespace()
            .map(|token| token.trim_matches(|c: char| c == '(' || c == ')' || c == ','))
            .filter(|token| !token.is_empty() && *token != number)
            .map(str::to_string),
    );

    let world_championship = is_world_championship(edition);
    let card_number = |card: &'a CatalogCard| -> &'a str {
        if world_championship {
            card.number.trim_start_matches(|c: char| c.is_ascii_alphabetic())
        } else {
            &card.number
        }
    };

    for suffix in &suffixes {
        let wanted = format!("{number}{suffix}");
        let found: Vec<&CatalogCard> = cards
            .iter()
            .copied()
            .filter(|card| number_matches(card_number(*card), &wanted))
            .collect();
        if !found.is_empty() {
            log::debug!("Number {} matched {} cards in {}", wanted, found.len(), edition.code);
            return found;
        }
    }

    log::debug!("No card numbered {} in {}", number, edition.code);
    Vec::new()
}

/// Attribute heuristics: requested attributes filter, the rest only narrow
fn heuristics<'a>(
    query: &CardQuery,
    edition: &Edition,
    mut cards: Vec<&'a CatalogCard>,
) -> Vec<&'a CatalogCard> {
    let wants_token = query.is_token();
    narrow(&mut cards, |card| card.token == wants_token);

    require_or_avoid(&mut cards, query.is_jpn(), |card| card.is_japanese());

    require_or_avoid(&mut cards, query.is_prerelease(), |card| {
        is_prerelease_card(edition, card)
    });
    require_or_avoid(&mut cards, query.is_promo_pack(), |card| {
        is_promo_pack_card(edition, card)
    });

    if query.is_buy_a_box() {
        cards.retain(|card| card.has_promo_type("buyabox"));
    }
    if query.is_bundle() {
        cards.retain(|card| card.has_promo_type("bundle"));
    }

    if query.is_basic_land() {
        if query.is_full_art() {
            narrow(&mut cards, |card| card.full_art);
        } else if query.is_non_full_art() {
            narrow(&mut cards, |card| !card.full_art);
        }
    }

    // Frame treatments only exist as separate printings from here on
    if edition.released_after(promos_for_everybody_date()) {
        require_or_avoid(&mut cards, query.is_borderless(), |card| card.is_borderless());
        require_or_avoid(&mut cards, query.is_extended_art(), |card| {
            card.is_extended_art()
        });
        require_or_avoid(&mut cards, query.is_showcase(), |card| card.is_showcase());
        require_or_avoid(&mut cards, query.is_retro_frame(), |card| {
            card.is_retro_frame()
        });

        let mentions_flavor = |card: &CatalogCard| {
            card.flavor_name
                .as_deref()
                .map(|flavor| contains(&query.variation, flavor))
                .unwrap_or(false)
        };
        if cards.iter().any(|card| mentions_flavor(*card)) {
            cards.retain(|card| mentions_flavor(*card));
        } else if !query.is_reskin() {
            narrow(&mut cards, |card| card.flavor_name.is_none());
        }
    }

    if query.beyond_base_set && edition.base_set_size > 0 {
        narrow(&mut cards, |card| {
            card.number_value()
                .map(|n| n > edition.base_set_size)
                .unwrap_or(false)
        });
    }

    let variation = query.variation.trim();
    if variation.len() == 1 && variation.chars().all(|c| c.is_ascii_alphabetic()) {
        narrow(&mut cards, |card| card.number_suffix().eq_ignore_ascii_case(variation));
    }

    cards
}

/// Rules that only make sense for one edition or one family of editions
fn special_editions(query: &CardQuery, edition: &Edition, cards: &mut Vec<&CatalogCard>) {
    let variation = query.variation.trim();

    match edition.name.as_str() {
        "Arabian Nights" => {
            let light = query.is_light_mana();
            narrow(cards, |card| card.number.ends_with('\u{2020}') == light);
        }
        name if ARTIST_FLAVOR_EDITIONS.contains(&name) && !variation.is_empty() => {
            narrow(cards, |card| {
                contains(variation, &card.artist)
                    || card
                        .flavor_text
                        .as_deref()
                        .map(|flavor| contains(flavor, variation))
                        .unwrap_or(false)
            });
        }
        name if name.contains("Guild Kit") => {
            narrow(cards, |card| {
                card.watermark
                    .as_deref()
                    .map(|watermark| contains(variation, watermark))
                    .unwrap_or(false)
            });
        }
        _ if is_world_championship(edition) => {
            let hints = format!("{} {}", query.variation, query.edition);
            if let Some(prefix) = world_champion_prefix(&hints) {
                narrow(cards, |card| {
                    card.number
                        .strip_prefix(prefix)
                        .map(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
                        .unwrap_or(false)
                });
            }
        }
        _ => {}
    }
}

fn named_exceptions(edition: &Edition, cards: &mut Vec<&CatalogCard>) {
    if cards.len() < 2 {
        return;
    }
    for (name, code, number) in NAMED_EXCEPTIONS {
        if edition.code == *code && cards.iter().all(|card| equals(&card.name, name)) {
            narrow(cards, |card| card.number == *number);
        }
    }
}

/// Keep printings that exist in the requested finish.
///
/// Etched and foil requests are required. Without a request the edition's
/// usual finish is only preferred.
fn prefer_finish(query: &CardQuery, edition: &Edition, cards: &mut Vec<&CatalogCard>) {
    if query.is_etched() {
        cards.retain(|card| card.has_finish(Finish::Etched));
    } else if query.foil {
        cards.retain(|card| card.has_finish(Finish::Foil));
    } else if edition.foil_only {
        narrow(cards, |card| card.has_finish(Finish::Foil));
    } else {
        narrow(cards, |card| card.has_finish(Finish::Nonfoil));
    }
}

/// Run the card filter over every candidate edition of `name`.
///
/// Cards are returned edition by edition, in the order the editions were given.
pub fn filter_cards<'a>(
    index: &'a Index,
    query: &CardQuery,
    name: &str,
    editions: &[&'a Edition],
) -> Vec<&'a CatalogCard> {
    let mut result = Vec::new();
    for edition in editions {
        let cards = index.match_in_edition(name, &edition.code);
        if cards.is_empty() {
            continue;
        }
        let kept = filter_edition(query, edition, cards);
        log::debug!(
            "Card filter kept {:?} in {}",
            kept.iter().map(|card| card.number.as_str()).collect::<Vec<_>>(),
            edition.code
        );
        result.extend(kept);
    }
    result
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
