//! Narrowing the editions a card name was printed in by promo category.
//!
//! A query is classified into at most one category, first match wins. Each
//! category then keeps the editions whose name, date or cards fit it.

use crate::card::{CatalogCard, Edition};
use crate::index::Index;
use crate::normalize::{contains, equals, has_prefix};
use crate::numbers::extract_year;
use crate::query::CardQuery;
use crate::tables::{arena_year_in_text, world_champion_years};
use chrono::NaiveDate;

/// Promo category of a query, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// The edition hint names one of the printings exactly
    ExactEdition,
    Prerelease,
    PromoPack,
    Release,
    BuyABox,
    Bundle,
    Fnm,
    Judge,
    Arena,
    WorldChampionship,
    MagicFest,
    Convention,
    PremiereShop,
    Gateway,
    PlayerRewards,
    RegionalLand,
}

/// Editions left after the printing filter ran
#[derive(Debug)]
pub struct Printings<'a> {
    /// Category the query was classified as, if any
    pub category: Option<Category>,
    /// Surviving editions in release order
    pub editions: Vec<&'a Edition>,
}

impl Printings<'_> {
    /// True when a category was recognized but no edition fits it
    pub fn not_in_edition(&self) -> bool {
        self.category.is_some() && self.editions.is_empty()
    }
}

/// Kaladesh: first "<Set> Promos" edition numbering prerelease and promo pack cards with a suffix
pub fn suffix_convention_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2016, 9, 30).unwrap_or(NaiveDate::MIN)
}

/// Throne of Eldraine: from here on every promo printing carries its own attributes
pub fn promos_for_everybody_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 10, 4).unwrap_or(NaiveDate::MIN)
}

/// Edition name prefixes of the yearly promo programs
const FNM_PREFIX: &str = "Friday Night Magic";
const JUDGE_PREFIX: &str = "Judge Gift Cards";
const ARENA_PREFIX: &str = "Arena League";
pub(crate) const WORLD_CHAMPIONSHIP_PREFIX: &str = "World Championship Decks";
const GATEWAY_PREFIXES: &[&str] = &["Gateway", "Wizards Play Network"];
const PLAYER_REWARDS_PREFIX: &str = "Magic Player Rewards";
const REGIONAL_LAND_PROGRAMS: &[&str] = &[
    "Asia Pacific Land Program",
    "European Land Program",
    "Guru",
];

/// True when the edition hint names `edition` by code or by name
pub(crate) fn is_exact_edition(query_edition: &str, edition: &Edition) -> bool {
    let hint = query_edition.trim();
    !hint.is_empty() && (edition.code.eq_ignore_ascii_case(hint) || equals(&edition.name, hint))
}

/// The variation alone asks for a promo printing of some kind
fn variation_names_promo(query: &CardQuery) -> bool {
    let variation = CardQuery {
        edition: String::new(),
        ..query.clone()
    };
    variation.is_prerelease()
        || variation.is_promo_pack()
        || variation.is_release()
        || variation.is_buy_a_box()
        || variation.is_bundle()
}

/// Classify a query against the candidate editions of its card name
pub fn classify(query: &CardQuery, candidates: &[&Edition]) -> Option<Category> {
    if !variation_names_promo(query)
        && candidates
            .iter()
            .any(|edition| is_exact_edition(&query.edition, edition))
    {
        return Some(Category::ExactEdition);
    }

    let category = if query.is_prerelease() {
        Category::Prerelease
    } else if query.is_promo_pack() {
        Category::PromoPack
    } else if query.is_release() {
        Category::Release
    } else if query.is_buy_a_box() {
        Category::BuyABox
    } else if query.is_bundle() {
        Category::Bundle
    } else if query.is_fnm() {
        Category::Fnm
    } else if query.is_judge() {
        Category::Judge
    } else if query.is_arena() {
        Category::Arena
    } else if query.is_world_champ() {
        Category::WorldChampionship
    } else if query.is_magic_fest() {
        Category::MagicFest
    } else if query.is_convention() {
        Category::Convention
    } else if query.is_premiere_shop() {
        Category::PremiereShop
    } else if query.is_gateway() {
        Category::Gateway
    } else if query.is_player_rewards() {
        Category::PlayerRewards
    } else if query.is_regional_land() {
        Category::RegionalLand
    } else {
        return None;
    };
    Some(category)
}

/// Year named in the variation or the edition hint
fn query_year(query: &CardQuery) -> Option<String> {
    extract_year(&query.variation).or_else(|| extract_year(&query.edition))
}

/// Edition name starts with `prefix`, followed by `year` when one is given
fn matches_program(edition: &Edition, prefix: &str, year: Option<&str>) -> bool {
    match year {
        Some(year) => has_prefix(&edition.name, &format!("{prefix} {year}")),
        None => has_prefix(&edition.name, prefix),
    }
}

fn any_promo_type(cards: &[&CatalogCard], promo_type: &str) -> bool {
    cards.iter().any(|card| card.has_promo_type(promo_type))
}

/// "<Set> Promos" edition using number suffixes for promo kinds
fn uses_suffix(edition: &Edition, cards: &[&CatalogCard], suffix: &str) -> bool {
    edition.name.ends_with("Promos")
        && edition.released_after(suffix_convention_date())
        && cards.iter().any(|card| card.number_suffix() == suffix)
}

/// Whether an edition fits a category, given the cards of the queried name in it
fn accepts(category: Category, query: &CardQuery, edition: &Edition, cards: &[&CatalogCard]) -> bool {
    let year = query_year(query);
    let year = year.as_deref();

    match category {
        Category::ExactEdition => is_exact_edition(&query.edition, edition),
        Category::Prerelease => {
            contains(&edition.name, "Prerelease")
                || any_promo_type(cards, "prerelease")
                || uses_suffix(edition, cards, "s")
        }
        Category::PromoPack => {
            any_promo_type(cards, "promopack") || uses_suffix(edition, cards, "p")
        }
        Category::Release => {
            contains(&edition.name, "Release")
                || contains(&edition.name, "Launch")
                || any_promo_type(cards, "release")
        }
        Category::BuyABox => any_promo_type(cards, "buyabox"),
        Category::Bundle => any_promo_type(cards, "bundle"),
        Category::Fnm => {
            matches_program(edition, FNM_PREFIX, year)
                || (year.is_none() && any_promo_type(cards, "fnm"))
        }
        Category::Judge => {
            matches_program(edition, JUDGE_PREFIX, year)
                || (year.is_none() && any_promo_type(cards, "judgegift"))
        }
        Category::Arena => {
            let year = year.or_else(|| arena_year_in_text(&query.variation));
            matches_program(edition, ARENA_PREFIX, year)
        }
        Category::WorldChampionship => {
            let mut years: Vec<String> = year.map(|y| vec![y.to_string()]).unwrap_or_default();
            if years.is_empty() {
                let hints = format!("{} {}", query.variation, query.edition);
                years = world_champion_years(&hints)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
            }
            if years.is_empty() {
                matches_program(edition, WORLD_CHAMPIONSHIP_PREFIX, None)
            } else {
                years
                    .iter()
                    .any(|y| matches_program(edition, WORLD_CHAMPIONSHIP_PREFIX, Some(y.as_str())))
            }
        }
        Category::MagicFest => {
            contains(&edition.name, "MagicFest") || any_promo_type(cards, "magicfest")
        }
        Category::Convention => {
            contains(&edition.name, "Convention")
                || contains(&edition.name, "Comic-Con")
                || any_promo_type(cards, "convention")
        }
        Category::PremiereShop => contains(&edition.name, "Premiere Shop"),
        Category::Gateway => {
            GATEWAY_PREFIXES
                .iter()
                .any(|prefix| matches_program(edition, prefix, year))
                || (year.is_none() && any_promo_type(cards, "wizardsplaynetwork"))
        }
        Category::PlayerRewards => matches_program(edition, PLAYER_REWARDS_PREFIX, year),
        Category::RegionalLand => REGIONAL_LAND_PROGRAMS
            .iter()
            .any(|program| contains(&edition.name, program)),
    }
}

/// Narrow the printings of `name` to the editions compatible with the query.
///
/// Printings missing from the index are dropped. When no category is
/// recognized every printing is kept.
pub fn filter_printings<'a>(
    index: &'a Index,
    query: &CardQuery,
    name: &str,
    printings: &[String],
) -> Printings<'a> {
    let candidates: Vec<&Edition> = printings
        .iter()
        .filter_map(|code| index.edition(code))
        .collect();

    let Some(category) = classify(query, &candidates) else {
        return Printings {
            category: None,
            editions: candidates,
        };
    };

    let editions: Vec<&Edition> = candidates
        .into_iter()
        .filter(|edition| {
            let cards = index.match_in_edition(name, &edition.code);
            accepts(category, query, edition, &cards)
        })
        .collect();

    log::debug!(
        "Printing filter {:?} kept {:?}",
        category,
        editions.iter().map(|e| e.code.as_str()).collect::<Vec<_>>()
    );

    Printings {
        category: Some(category),
        editions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FIXTURE;

    fn kept(query: &CardQuery) -> (Option<Category>, Vec<String>) {
        let entry = FIXTURE.lookup_name(&query.name).unwrap();
        let printings = filter_printings(&FIXTURE, query, &entry.name, &entry.printings);
        (
            printings.category,
            printings.editions.iter().map(|e| e.code.clone()).collect(),
        )
    }

    #[test]
    fn exact_edition_wins() {
        let query = CardQuery::new("Forest").with_edition("Zendikar");
        assert_eq!(kept(&query), (Some(Category::ExactEdition), vec!["ZEN".to_string()]));

        let query = CardQuery::new("Forest").with_edition("pal01");
        assert_eq!(kept(&query), (Some(Category::ExactEdition), vec!["PAL01".to_string()]));
    }

    #[test]
    fn promo_variation_overrides_exact_edition() {
        let query = CardQuery::new("Kroxa, Titan of Death's Hunger")
            .with_edition("Theros Beyond Death")
            .with_variation("Prerelease");
        assert_eq!(kept(&query), (Some(Category::Prerelease), vec!["PTHB".to_string()]));

        let query = query.with_variation("Promo Pack");
        assert_eq!(kept(&query), (Some(Category::PromoPack), vec!["PTHB".to_string()]));
    }

    #[test]
    fn missing_category_means_not_in_edition() {
        let query = CardQuery::new("Demonic Tutor").with_edition("Promo Pack");
        let entry = FIXTURE.lookup_name(&query.name).unwrap();
        let printings = filter_printings(&FIXTURE, &query, &entry.name, &entry.printings);
        assert_eq!(printings.category, Some(Category::PromoPack));
        assert!(printings.not_in_edition());
    }

    #[test]
    fn programs_match_by_year() {
        let query = CardQuery::new("Lightning Bolt").with_variation("FNM 2010");
        assert_eq!(kept(&query), (Some(Category::Fnm), vec!["F10".to_string()]));

        let query = CardQuery::new("Lightning Bolt").with_variation("FNM 2004");
        assert_eq!(kept(&query), (Some(Category::Fnm), Vec::<String>::new()));

        let query = CardQuery::new("Demonic Tutor").with_edition("Judge Promo");
        assert_eq!(kept(&query), (Some(Category::Judge), vec!["G08".to_string()]));
    }

    #[test]
    fn arena_year_comes_from_the_artist() {
        let query = CardQuery::new("Forest").with_edition("Arena").with_variation("Anson Maddocks");
        assert_eq!(kept(&query), (Some(Category::Arena), vec!["PAL01".to_string()]));

        let query = CardQuery::new("Forest").with_edition("Arena").with_variation("Rob Alexander");
        assert_eq!(kept(&query), (Some(Category::Arena), Vec::<String>::new()));
    }

    #[test]
    fn unclassified_queries_keep_every_printing() {
        let query = CardQuery::new("Demonic Tutor");
        let (category, codes) = kept(&query);
        assert_eq!(category, None);
        assert_eq!(codes, vec!["LEA", "2ED", "G08", "UMA", "STA"]);
    }
}
