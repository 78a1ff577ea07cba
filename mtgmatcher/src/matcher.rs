//! Resolution of a card query to a single catalog identifier.
//!
//! The pipeline runs identifier lookup, name lookup, edition selection and
//! card filtering in that order. Every stage before the final decision is a
//! total function: only the decision turns an empty or ambiguous result into
//! a [`MatchError`].

use crate::adjust::{adjust_edition, adjust_name, lookup, push_variation};
use crate::card::{collector_number_key, CatalogCard, Edition};
use crate::error::{AliasingError, MatchError, Result};
use crate::filter::{filter_cards, is_world_championship};
use crate::index::{Index, NameEntry};
use crate::normalize::{contains, normalize};
use crate::printings::{filter_printings, is_exact_edition};
use crate::query::CardQuery;

/// Resolve a query to the identifier of exactly one catalog card
pub fn match_card(index: &Index, query: &CardQuery) -> Result<String> {
    if index.is_empty() {
        return Err(MatchError::DatastoreEmpty);
    }

    if let Some(id) = query.id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
        if let Some(card) = index.resolve_id(id) {
            let resolved = sibling_for_finish(index, query, card);
            log::debug!("Identifier {} resolved to {}", id, resolved);
            return Ok(resolved);
        }
        log::debug!("Unknown identifier {}, looking up '{}' by name", id, query.name);
    }

    if query.name.trim().is_empty() {
        return Err(MatchError::CardDoesNotExist);
    }

    let mut query = query.clone();
    let entry = resolve_name(index, &mut query)?;
    adjust_edition(index, &mut query);
    log::debug!(
        "Matching '{}' edition '{}' variation '{}' foil {}",
        query.name,
        query.edition,
        query.variation,
        query.foil
    );

    let editions = select_editions(index, &query, entry)?;
    log::debug!(
        "Candidate editions {:?}",
        editions.iter().map(|e| e.code.as_str()).collect::<Vec<_>>()
    );

    let cards = filter_cards(index, &query, &entry.name, &editions);
    decide(index, &query, cards)
}

/// Pick the finish sibling of `card` that fits the foiling of the query
fn sibling_for_finish(index: &Index, query: &CardQuery, card: &CatalogCard) -> String {
    let etched = query.is_etched();
    if query.foil == card.foil && (!etched || card.etched) {
        return card.id.clone();
    }

    card.variation_ids
        .iter()
        .filter_map(|id| index.get_card(id).ok())
        .find(|sibling| {
            if etched {
                sibling.etched
            } else {
                sibling.foil == query.foil && !sibling.etched
            }
        })
        .map(|sibling| sibling.id.clone())
        .unwrap_or_else(|| card.id.clone())
}

/// Find the name entry for the query, adjusting the name once on a miss.
///
/// The query name is replaced by the canonical name. When the query used an
/// alternate name (a face, a flavor name), that name is kept in the variation
/// for the card filter.
fn resolve_name<'a>(index: &'a Index, query: &mut CardQuery) -> Result<&'a NameEntry> {
    let entry = match lookup(index, query) {
        Some(entry) => entry,
        None => {
            adjust_name(index, query);
            lookup(index, query).ok_or_else(|| {
                log::debug!("No card named '{}'", query.name);
                MatchError::CardDoesNotExist
            })?
        }
    };

    if normalize(&query.name) != normalize(&entry.name) {
        log::debug!("'{}' is an alternate name of '{}'", query.name, entry.name);
        let alternate = query.name.clone();
        push_variation(query, &alternate);
    }
    query.name = entry.name.clone();
    Ok(entry)
}

/// Editions whose cards go through the card filter
fn select_editions<'a>(
    index: &'a Index,
    query: &CardQuery,
    entry: &NameEntry,
) -> Result<Vec<&'a Edition>> {
    if entry.printings.len() == 1 {
        return Ok(entry
            .printings
            .iter()
            .filter_map(|code| index.edition(code))
            .collect());
    }

    let printings = filter_printings(index, query, &entry.name, &entry.printings);
    if printings.not_in_edition() {
        log::debug!(
            "No printing of '{}' fits category {:?}",
            entry.name,
            printings.category
        );
        return Err(MatchError::CardNotInEdition);
    }

    let editions = printings.editions;
    let hint = query.edition.trim();

    let exact: Vec<&Edition> = editions
        .iter()
        .copied()
        .filter(|edition| is_exact_edition(hint, edition))
        .collect();
    if !exact.is_empty() {
        return Ok(exact);
    }

    let loose: Vec<&Edition> = editions
        .iter()
        .copied()
        .filter(|edition| {
            (!hint.is_empty() && contains(&edition.name, hint))
                || (query.promo_wildcard && edition.name.ends_with("Promos"))
        })
        .collect();
    if !loose.is_empty() {
        return Ok(loose);
    }

    if !hint.is_empty() {
        log::debug!("Edition '{}' matched nothing, trying every printing", hint);
    }
    Ok(editions)
}

/// Turn the filtered cards into an identifier or an error
fn decide(index: &Index, query: &CardQuery, mut cards: Vec<&CatalogCard>) -> Result<String> {
    let output = |card: &CatalogCard| {
        let foil_only = index
            .edition(&card.edition_code)
            .map(|edition| edition.foil_only)
            .unwrap_or(false);
        card.output_id(query.foil || foil_only, query.is_etched())
    };

    match cards.len() {
        0 => {
            log::debug!("No printing of '{}' fits '{}'", query.name, query.variation);
            Err(MatchError::CardWrongVariant)
        }
        1 => Ok(output(cards[0])),
        _ => {
            let single_edition = cards
                .iter()
                .all(|card| card.edition_code == cards[0].edition_code);
            let world_championship = index
                .edition(&cards[0].edition_code)
                .map(is_world_championship)
                .unwrap_or(false);

            if single_edition && world_championship {
                cards.sort_by_key(|card| collector_number_key(&card.number));
                log::debug!(
                    "Keeping #{} out of {} world championship printings",
                    cards[0].number,
                    cards.len()
                );
                return Ok(output(cards[0]));
            }

            let candidates: Vec<String> = cards.into_iter().map(output).collect();
            log::debug!("Aliasing between {:?}", candidates);
            Err(MatchError::Aliasing(AliasingError::new(candidates)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{card_id, FIXTURE};

    fn matched(query: &CardQuery) -> Result<String> {
        match_card(&FIXTURE, query)
    }

    mod id_tests {
        use super::*;

        #[test]
        fn known_id_is_returned_unchanged() {
            let id = card_id("Lightning Bolt", "M10", "146");
            assert_eq!(matched(&CardQuery::from_id(&id)), Ok(id));
        }

        #[test]
        fn foil_request_picks_the_foil_sibling() {
            let id = card_id("Lightning Bolt", "M10", "146");
            let query = CardQuery::from_id(&id).with_foil(true);
            assert_eq!(matched(&query), Ok(format!("{id}_f")));
        }

        #[test]
        fn etched_request_picks_the_etched_sibling() {
            let id = card_id("Demonic Tutor", "STA", "28");
            let query = CardQuery::from_id(&id).with_variation("Etched");
            assert_eq!(matched(&query), Ok(format!("{id}_e")));
        }

        #[test]
        fn missing_sibling_keeps_the_stored_id() {
            let id = card_id("Lightning Bolt", "F10", "12");
            let query = CardQuery::from_id(&id).with_foil(false);
            assert_eq!(matched(&query), Ok(id));
        }

        #[test]
        fn vendor_ids_resolve() {
            let id = card_id("Lotus Cobra", "ZEN", "168");
            assert_eq!(matched(&CardQuery::from_id("sf-cobra-zen")), Ok(id.clone()));
            assert_eq!(matched(&CardQuery::from_id("33469")), Ok(id.clone()));
            assert_eq!(matched(&CardQuery::from_id("21311")), Ok(id));
        }

        #[test]
        fn unknown_id_falls_back_to_the_name() {
            let mut query = CardQuery::new("Lotus Cobra");
            query.id = Some("not-an-id".to_string());
            assert_eq!(matched(&query), Ok(card_id("Lotus Cobra", "ZEN", "168")));
        }
    }

    mod name_tests {
        use super::*;

        #[test]
        fn unknown_names_do_not_exist() {
            assert_eq!(
                matched(&CardQuery::new("Black Lotus")),
                Err(MatchError::CardDoesNotExist)
            );
            assert_eq!(matched(&CardQuery::new("  ")), Err(MatchError::CardDoesNotExist));
        }

        #[test]
        fn flavor_names_resolve_to_their_printing() {
            let query = CardQuery::new("Godzilla, King of the Monsters");
            assert_eq!(
                matched(&query),
                Ok(card_id("Zilortha, Strength Incarnate", "IKO", "275"))
            );
        }

        #[test]
        fn face_names_resolve_to_the_card() {
            let query = CardQuery::new("Insectile Aberration");
            assert_eq!(
                matched(&query),
                Ok(card_id("Delver of Secrets // Insectile Aberration", "ISD", "51"))
            );
        }

        #[test]
        fn noisy_names_are_adjusted() {
            let query = CardQuery::new("Forest (246)").with_edition("Zendikar");
            assert_eq!(matched(&query), Ok(card_id("Forest", "ZEN", "246")));
        }
    }

    mod edition_tests {
        use super::*;

        #[test]
        fn edition_codes_and_aliases() {
            let bolt = card_id("Lightning Bolt", "M10", "146");
            assert_eq!(
                matched(&CardQuery::new("Lightning Bolt").with_edition("m10")),
                Ok(bolt.clone())
            );
            assert_eq!(
                matched(&CardQuery::new("Lightning Bolt").with_edition("Magic 2010")),
                Ok(bolt)
            );
            assert_eq!(
                matched(&CardQuery::new("Lightning Bolt").with_edition("Unlimited")),
                Ok(card_id("Lightning Bolt", "2ED", "162"))
            );
        }

        #[test]
        fn commander_products() {
            let query = CardQuery::new("Command Tower")
                .with_edition("Commander")
                .with_variation("2014");
            assert_eq!(matched(&query), Ok(card_id("Command Tower", "C14", "286")));
        }

        #[test]
        fn promo_category_reaches_the_promos_edition() {
            let query = CardQuery::new("Kroxa, Titan of Death's Hunger")
                .with_edition("Theros Beyond Death")
                .with_variation("Prerelease");
            assert_eq!(
                matched(&query),
                Ok(card_id("Kroxa, Titan of Death's Hunger", "PTHB", "221s"))
            );
        }

        #[test]
        fn missing_promo_category_is_not_in_edition() {
            let query = CardQuery::new("Demonic Tutor").with_edition("Promo Pack");
            assert_eq!(matched(&query), Err(MatchError::CardNotInEdition));
        }

        #[test]
        fn unknown_edition_tries_every_printing() {
            let query = CardQuery::new("Lightning Bolt").with_edition("Nowhere");
            let err = matched(&query).unwrap_err();
            assert!(err.probe().map(|ids| ids.len() > 1).unwrap_or(false));
        }
    }

    mod decide_tests {
        use super::*;

        #[test]
        fn empty_result_is_wrong_variant() {
            let query = CardQuery::new("Arcane Denial")
                .with_edition("Alliances")
                .with_variation("10");
            assert_eq!(matched(&query), Err(MatchError::CardWrongVariant));
        }

        #[test]
        fn missing_requested_variant_is_wrong_variant() {
            let kroxa = "Kroxa, Titan of Death's Hunger";
            let queries = [
                CardQuery::new(kroxa)
                    .with_edition("Theros Beyond Death")
                    .with_variation("Showcase"),
                CardQuery::new(kroxa)
                    .with_edition("Theros Beyond Death")
                    .with_variation("Borderless"),
                CardQuery::new("Zilortha, Strength Incarnate")
                    .with_edition("Ikoria")
                    .with_variation("Japanese"),
                CardQuery::new("Lotus Cobra")
                    .with_edition("Zendikar")
                    .with_variation("Japanese"),
                CardQuery::new("Lightning Bolt")
                    .with_edition("Mystery Booster")
                    .with_foil(true),
            ];
            for query in &queries {
                assert_eq!(matched(query), Err(MatchError::CardWrongVariant), "{:?}", query);
            }
        }

        #[test]
        fn ambiguity_is_aliasing() {
            let query = CardQuery::new("Forest")
                .with_edition("Zendikar")
                .with_variation("Full-Art");
            let expected: Vec<String> = ["246", "247", "248", "249"]
                .iter()
                .map(|number| card_id("Forest", "ZEN", number))
                .collect();
            assert_eq!(matched(&query).unwrap_err().probe(), Some(&expected[..]));
        }

        #[test]
        fn world_championship_keeps_the_lowest_number() {
            let query = CardQuery::new("Island").with_variation("Jon Finkel");
            assert_eq!(matched(&query), Ok(card_id("Island", "WC00", "jf347")));

            let query = CardQuery::new("Island").with_variation("Jon Finkel 348");
            assert_eq!(matched(&query), Ok(card_id("Island", "WC00", "jf348")));
        }

        #[test]
        fn output_follows_the_requested_finish() {
            let id = card_id("Lightning Bolt", "M10", "146");
            let query = CardQuery::new("Lightning Bolt")
                .with_edition("Magic 2010")
                .with_foil(true);
            assert_eq!(matched(&query), Ok(format!("{id}_f")));

            let id = card_id("Demonic Tutor", "STA", "28");
            let query = CardQuery::new("Demonic Tutor")
                .with_edition("Mystical Archive")
                .with_variation("Etched");
            assert_eq!(matched(&query), Ok(format!("{id}_e")));
        }
    }
}
