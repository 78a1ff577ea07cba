//! Card queries as supplied by vendor-facing collaborators

use serde::{Deserialize, Serialize};

const BASIC_LANDS: &[&str] = &[
    "Plains",
    "Island",
    "Swamp",
    "Mountain",
    "Forest",
    "Wastes",
    "Snow-Covered Plains",
    "Snow-Covered Island",
    "Snow-Covered Swamp",
    "Snow-Covered Mountain",
    "Snow-Covered Forest",
];

/// A noisy description of a card, to be resolved against the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardQuery {
    /// Catalog identifier or vendor-native identifier
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    /// Free-text hint about promo, frame, number or printing
    #[serde(default)]
    pub variation: String,
    /// Free-text hint about the edition, name or code
    #[serde(default)]
    pub edition: String,
    #[serde(default)]
    pub foil: bool,

    /// Only cards numbered past the base set are wanted
    #[serde(skip)]
    pub(crate) beyond_base_set: bool,
    /// The edition hint is a generic "promo" that fits any promo edition
    #[serde(skip)]
    pub(crate) promo_wildcard: bool,
}

impl CardQuery {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Query resolving an identifier directly
    pub fn from_id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    pub fn with_edition(mut self, edition: &str) -> Self {
        self.edition = edition.to_string();
        self
    }

    pub fn with_variation(mut self, variation: &str) -> Self {
        self.variation = variation.to_string();
        self
    }

    pub fn with_foil(mut self, foil: bool) -> Self {
        self.foil = foil;
        self
    }

    fn hints(&self) -> String {
        format!("{} {}", self.variation, self.edition).to_lowercase()
    }

    /// Case-insensitive substring test over variation and edition
    pub fn mentions(&self, needle: &str) -> bool {
        self.hints().contains(&needle.to_lowercase())
    }

    /// Case-insensitive whole-word test over variation and edition
    pub fn mentions_word(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.hints()
            .split(|c: char| !c.is_alphanumeric())
            .any(|token| token == word)
    }

    fn mentions_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.mentions(n))
    }

    pub fn is_etched(&self) -> bool {
        self.mentions("etched")
    }

    pub fn is_basic_land(&self) -> bool {
        BASIC_LANDS.iter().any(|land| land.eq_ignore_ascii_case(&self.name))
    }

    pub fn is_token(&self) -> bool {
        self.mentions_word("token") || self.name.to_lowercase().ends_with(" token")
    }

    pub fn is_prerelease(&self) -> bool {
        self.mentions_any(&["prerelease", "pre-release"])
    }

    pub fn is_promo_pack(&self) -> bool {
        self.mentions_any(&["promo pack", "promo-pack", "promopack", "stamped", "play promo"])
    }

    pub fn is_release(&self) -> bool {
        !self.is_prerelease() && (self.mentions("release") || self.mentions("launch"))
    }

    pub fn is_buy_a_box(&self) -> bool {
        self.mentions_any(&["buy-a-box", "buy a box"]) || self.mentions_word("bab")
    }

    pub fn is_bundle(&self) -> bool {
        self.mentions("bundle")
    }

    pub fn is_fnm(&self) -> bool {
        self.mentions_word("fnm") || self.mentions("friday night")
    }

    pub fn is_judge(&self) -> bool {
        self.mentions("judge")
    }

    pub fn is_arena(&self) -> bool {
        self.mentions_word("arena")
    }

    pub fn is_world_champ(&self) -> bool {
        self.mentions_any(&["world championship", "world champ"]) || self.mentions_word("wcd")
    }

    pub fn is_magic_fest(&self) -> bool {
        self.mentions_any(&["magicfest", "magic fest"])
    }

    pub fn is_convention(&self) -> bool {
        self.mentions_any(&["comic-con", "comic con", "convention"]) || self.mentions_word("sdcc")
    }

    pub fn is_premiere_shop(&self) -> bool {
        self.mentions("premiere shop") || self.mentions_word("mps")
    }

    pub fn is_gateway(&self) -> bool {
        self.mentions("gateway") || self.mentions_word("wpn")
    }

    pub fn is_player_rewards(&self) -> bool {
        self.mentions("player rewards") || self.mentions_word("mpr")
    }

    /// Basic lands from the APAC, European or Guru land programs
    pub fn is_regional_land(&self) -> bool {
        self.is_basic_land()
            && (self.mentions_any(&["asia pacific", "european", "guru"])
                || self.mentions_word("apac")
                || self.mentions_word("euro"))
    }

    pub fn is_non_full_art(&self) -> bool {
        self.mentions_any(&[
            "non-full art",
            "non full art",
            "non-full-art",
            "not full art",
            "nonfull art",
        ])
    }

    pub fn is_full_art(&self) -> bool {
        !self.is_non_full_art() && self.mentions_any(&["full art", "full-art", "fullart"])
    }

    pub fn is_jpn(&self) -> bool {
        self.mentions("japanese") || self.mentions_word("jpn") || self.mentions_word("jp")
    }

    pub fn is_borderless(&self) -> bool {
        self.mentions("borderless")
    }

    pub fn is_extended_art(&self) -> bool {
        self.mentions("extended")
    }

    pub fn is_showcase(&self) -> bool {
        self.mentions("showcase")
    }

    pub fn is_retro_frame(&self) -> bool {
        self.mentions_any(&["retro", "old frame", "old border"])
    }

    pub fn is_reskin(&self) -> bool {
        self.mentions_any(&["godzilla", "dracula", "reskin"])
    }

    /// Arabian Nights light mana symbol variants
    pub fn is_light_mana(&self) -> bool {
        self.mentions_word("light")
    }

    /// Any of the promotional program keywords
    pub fn is_promo(&self) -> bool {
        self.mentions("promo")
            || self.is_prerelease()
            || self.is_release()
            || self.is_buy_a_box()
            || self.is_bundle()
            || self.is_fnm()
            || self.is_judge()
    }

    /// Edition hint that names no edition beyond "some promo"
    pub fn is_generic_promo(&self) -> bool {
        matches!(
            self.edition.trim().to_lowercase().as_str(),
            "promo" | "promos" | "promotional" | "promotional cards" | "promo cards" | "media insert"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_queries() {
        let query = CardQuery::new("Forest")
            .with_edition("Zendikar")
            .with_variation("Full-Art")
            .with_foil(true);

        assert_eq!(query.name, "Forest");
        assert_eq!(query.edition, "Zendikar");
        assert_eq!(query.variation, "Full-Art");
        assert!(query.foil);
        assert_eq!(query.id, None);
    }

    #[test]
    fn detects_full_art_variants() {
        let full = CardQuery::new("Forest").with_variation("Full-Art");
        assert!(full.is_full_art());
        assert!(full.is_basic_land());

        let non_full = CardQuery::new("Forest").with_variation("Non-Full Art");
        assert!(non_full.is_non_full_art());
        assert!(!non_full.is_full_art());
    }

    #[test]
    fn release_is_not_prerelease() {
        let pre = CardQuery::new("Kroxa").with_variation("Prerelease");
        assert!(pre.is_prerelease());
        assert!(!pre.is_release());

        let release = CardQuery::new("Kroxa").with_edition("Release Events");
        assert!(release.is_release());
    }

    #[test]
    fn word_matches_do_not_hit_substrings() {
        let query = CardQuery::new("Bird Maiden").with_variation("Highlight");
        assert!(!query.is_light_mana());

        let query = CardQuery::new("Bird Maiden").with_variation("Light Mana");
        assert!(query.is_light_mana());
    }

    #[test]
    fn detects_regional_lands_only_for_basics() {
        let land = CardQuery::new("Plains").with_variation("APAC Red");
        assert!(land.is_regional_land());

        let spell = CardQuery::new("Lightning Bolt").with_variation("APAC");
        assert!(!spell.is_regional_land());
    }

    #[test]
    fn detects_generic_promo_editions() {
        assert!(CardQuery::new("x").with_edition("Promos").is_generic_promo());
        assert!(!CardQuery::new("x").with_edition("Theros Beyond Death Promos").is_generic_promo());
    }
}
