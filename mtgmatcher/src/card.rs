//! Catalog card and edition records, identifier encoding

use chrono::NaiveDate;

/// Suffix appended to the identifier of the foil sibling of a card
pub const SUFFIX_FOIL: &str = "_f";
/// Suffix appended to the identifier of the etched sibling of a card
pub const SUFFIX_ETCHED: &str = "_e";

/// Physical print treatment of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Finish {
    Nonfoil,
    Foil,
    Etched,
}

impl Finish {
    /// Parse a finish as spelled in the catalog dump
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nonfoil" => Some(Finish::Nonfoil),
            "foil" => Some(Finish::Foil),
            "etched" => Some(Finish::Etched),
            _ => None,
        }
    }

    /// Identifier suffix used when this finish is not the primary one
    pub fn suffix(&self) -> &'static str {
        match self {
            Finish::Nonfoil => "",
            Finish::Foil => SUFFIX_FOIL,
            Finish::Etched => SUFFIX_ETCHED,
        }
    }
}

/// Build the identifier of one finish of a printing.
///
/// The first finish of the printing (in nonfoil, foil, etched order) owns
/// the bare base identifier, every other finish gets its suffix.
pub fn encode_id(base: &str, finishes: &[Finish], finish: Finish) -> String {
    match finishes.iter().min() {
        Some(primary) if *primary != finish => format!("{base}{}", finish.suffix()),
        _ => base.to_string(),
    }
}

/// Split an identifier into its base and the finish named by its suffix.
///
/// Identifiers without a suffix decode to `None` as the finish, meaning
/// "the primary finish of that printing".
pub fn decode_id(id: &str) -> (&str, Option<Finish>) {
    if let Some(base) = id.strip_suffix(SUFFIX_FOIL) {
        (base, Some(Finish::Foil))
    } else if let Some(base) = id.strip_suffix(SUFFIX_ETCHED) {
        (base, Some(Finish::Etched))
    } else {
        (id, None)
    }
}

/// A single catalog entry: one printing in one finish
#[derive(Debug, Clone)]
pub struct CatalogCard {
    /// Identifier of this finish (base identifier plus optional suffix)
    pub id: String,
    /// Identifier shared by all finishes of the printing
    pub base_id: String,
    pub name: String,
    pub edition_code: String,
    pub edition_name: String,
    pub number: String,
    /// All finishes this printing exists in
    pub finishes: Vec<Finish>,
    /// Finish this entry stands for
    pub finish: Finish,
    pub foil: bool,
    pub etched: bool,
    pub frame_version: String,
    pub border_color: String,
    pub frame_effects: Vec<String>,
    pub promo_types: Vec<String>,
    pub full_art: bool,
    pub promo: bool,
    pub oversized: bool,
    pub token: bool,
    pub language: String,
    pub flavor_name: Option<String>,
    pub watermark: Option<String>,
    pub artist: String,
    pub flavor_text: Option<String>,
    pub layout: String,
    /// Identifiers of the other finishes of this printing
    pub variation_ids: Vec<String>,
    pub scryfall_id: Option<String>,
    pub tcgplayer_id: Option<String>,
    pub mcm_id: Option<String>,
}

impl CatalogCard {
    pub fn has_finish(&self, finish: Finish) -> bool {
        self.finishes.contains(&finish)
    }

    pub fn has_promo_type(&self, promo_type: &str) -> bool {
        self.promo_types.iter().any(|p| p == promo_type)
    }

    pub fn has_frame_effect(&self, effect: &str) -> bool {
        self.frame_effects.iter().any(|e| e == effect)
    }

    pub fn is_borderless(&self) -> bool {
        self.border_color == "borderless"
    }

    pub fn is_extended_art(&self) -> bool {
        self.has_frame_effect("extendedart")
    }

    pub fn is_showcase(&self) -> bool {
        self.has_frame_effect("showcase")
    }

    pub fn is_retro_frame(&self) -> bool {
        self.frame_version == "1993" || self.frame_version == "1997"
    }

    pub fn is_japanese(&self) -> bool {
        self.language == "Japanese"
    }

    /// True when only foil (or etched) copies of this printing exist
    pub fn is_foil_only(&self) -> bool {
        !self.finishes.is_empty() && !self.has_finish(Finish::Nonfoil)
    }

    /// Identifier of the finish of this printing that fits the requested foiling
    pub fn output_id(&self, foil: bool, etched: bool) -> String {
        let wanted = if etched && self.has_finish(Finish::Etched) {
            Finish::Etched
        } else if foil && self.has_finish(Finish::Foil) {
            Finish::Foil
        } else if !foil && self.has_finish(Finish::Nonfoil) {
            Finish::Nonfoil
        } else {
            self.finish
        };
        encode_id(&self.base_id, &self.finishes, wanted)
    }

    /// Numeric part of the collector number, if it starts with digits
    pub fn number_value(&self) -> Option<u32> {
        let digits: String = self
            .number
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }

    /// Trailing non-digit suffix of the collector number ("a", "s", "p", "★", ...)
    pub fn number_suffix(&self) -> &str {
        let trimmed = self.number.trim_end_matches(|c: char| !c.is_ascii_digit());
        if trimmed.is_empty() {
            ""
        } else {
            &self.number[trimmed.len()..]
        }
    }
}

/// A print run, with its cards ordered by collector number
#[derive(Debug, Clone)]
pub struct Edition {
    pub code: String,
    pub name: String,
    pub release_date: Option<NaiveDate>,
    pub set_type: String,
    pub online_only: bool,
    /// Boosters of this edition only ever contained foils
    pub foil_only: bool,
    pub base_set_size: u32,
    pub parent_code: Option<String>,
    /// One entry per printing, in its primary finish
    pub cards: Vec<CatalogCard>,
}

impl Edition {
    /// True when this edition was released on or after `date`.
    /// Editions without a known date count as old.
    pub fn released_after(&self, date: NaiveDate) -> bool {
        self.release_date.map(|d| d >= date).unwrap_or(false)
    }
}

/// Ordering key that sorts "2" before "10" and "22a" after "22"
pub fn collector_number_key(number: &str) -> (u32, String) {
    let digits: String = number
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    (digits.parse().unwrap_or(u32::MAX), number.to_string())
}
