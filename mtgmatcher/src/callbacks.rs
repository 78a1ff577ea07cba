//! Per-edition rejection rules for sets the generic filters cannot tell apart.
//!
//! Each rule looks at one candidate card and says whether the query rules it
//! out. An edition registers either one rule or an ordered list of them; a
//! card survives only when no rule rejects it.

use crate::card::CatalogCard;
use crate::query::CardQuery;

/// Words that look like edition codes in The List variants but are not
const NOT_EDITION_CODES: &[&str] = &["JPN", "FNM", "WPN", "MPS", "BAB", "APAC", "EURO", "NM", "LP"];

/// A named predicate over a query and a candidate card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCallback {
    /// Kamigawa: Neon Dynasty neon ink foils
    NeonInk,
    /// Strixhaven Mystical Archive: Japanese alternate arts are numbered past 63
    MysticalArchiveJapanese,
    /// The List: the collector number carries the code of the original edition
    TheListSource,
    StepAndCompleat,
    GalaxyFoil,
    Textured,
    SurgeFoil,
}

impl FilterCallback {
    /// True when `card` cannot be what `query` describes
    pub fn rejects(&self, query: &CardQuery, card: &CatalogCard) -> bool {
        match self {
            FilterCallback::NeonInk => {
                query.mentions("neon") != card.has_promo_type("neonink")
            }
            FilterCallback::MysticalArchiveJapanese => {
                let japanese = card.is_japanese() || card.number_value().unwrap_or(0) > 63;
                query.is_jpn() != japanese
            }
            FilterCallback::TheListSource => the_list_rejects(query, card),
            FilterCallback::StepAndCompleat => {
                query.mentions("compleat") != card.has_promo_type("stepandcompleat")
            }
            FilterCallback::GalaxyFoil => {
                query.mentions("galaxy") != card.has_promo_type("galaxyfoil")
            }
            FilterCallback::Textured => {
                query.mentions("textured") != card.has_promo_type("textured")
            }
            FilterCallback::SurgeFoil => {
                query.mentions("surge") != card.has_promo_type("surgefoil")
            }
        }
    }
}

fn looks_like_edition_code(token: &str) -> bool {
    (2..=5).contains(&token.len())
        && token.chars().all(|c| c.is_ascii_alphanumeric())
        && token.chars().any(|c| c.is_ascii_alphabetic())
        && (token.chars().any(|c| c.is_ascii_digit())
            || token.chars().all(|c| c.is_ascii_uppercase()))
        && !NOT_EDITION_CODES.contains(&token)
}

fn the_list_rejects(query: &CardQuery, card: &CatalogCard) -> bool {
    let Some((source, _)) = card.number.split_once('-') else {
        return false;
    };
    let codes: Vec<&str> = query
        .variation
        .split(|c: char| c.is_whitespace() || c == '(' || c == ')' || c == ',')
        .filter(|token| looks_like_edition_code(token))
        .collect();
    !codes.is_empty() && !codes.iter().any(|code| code.eq_ignore_ascii_case(source))
}

/// The rules registered for one edition code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditionCallbacks {
    Simple(FilterCallback),
    /// Every rule must keep the card
    Complex(&'static [FilterCallback]),
}

impl EditionCallbacks {
    pub fn rejects(&self, query: &CardQuery, card: &CatalogCard) -> bool {
        match self {
            EditionCallbacks::Simple(callback) => callback.rejects(query, card),
            EditionCallbacks::Complex(callbacks) => {
                callbacks.iter().any(|callback| callback.rejects(query, card))
            }
        }
    }
}

const SECRET_LAIR: &[FilterCallback] = &[
    FilterCallback::StepAndCompleat,
    FilterCallback::GalaxyFoil,
    FilterCallback::Textured,
];

/// Edition codes and their rules
pub(crate) const EDITION_CALLBACKS: &[(&str, EditionCallbacks)] = &[
    ("NEO", EditionCallbacks::Simple(FilterCallback::NeonInk)),
    ("STA", EditionCallbacks::Simple(FilterCallback::MysticalArchiveJapanese)),
    ("PLST", EditionCallbacks::Simple(FilterCallback::TheListSource)),
    ("SLD", EditionCallbacks::Complex(SECRET_LAIR)),
    ("40K", EditionCallbacks::Simple(FilterCallback::SurgeFoil)),
    ("PIP", EditionCallbacks::Simple(FilterCallback::SurgeFoil)),
    ("2X2", EditionCallbacks::Simple(FilterCallback::Textured)),
];

/// Rules registered for an edition code, if any
pub fn callbacks_for(code: &str) -> Option<EditionCallbacks> {
    EDITION_CALLBACKS
        .iter()
        .find(|(registered, _)| *registered == code)
        .map(|(_, callbacks)| *callbacks)
}
