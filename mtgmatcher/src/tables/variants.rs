//! Explicit variant to collector number overrides.
//!
//! Old editions printed several arts of one card without any machine-readable
//! difference. Vendors describe them with free text, listed here per edition
//! name and card name. Variant keys are lower-case.

use lazy_static::lazy_static;
use std::collections::HashMap;

type CardVariants = &'static [(&'static str, &'static str)];
type EditionVariants = &'static [(&'static str, CardVariants)];

pub(crate) const VARIANTS: &[(&str, EditionVariants)] = &[
    (
        "Limited Edition Alpha",
        &[(
            "Forest",
            &[
                ("version 1", "288"),
                ("version 2", "289"),
                ("ver 1", "288"),
                ("ver 2", "289"),
            ],
        )],
    ),
    (
        "Antiquities",
        &[
            (
                "Mishra's Factory",
                &[
                    ("spring", "80a"),
                    ("summer", "80b"),
                    ("autumn", "80c"),
                    ("fall", "80c"),
                    ("winter", "80d"),
                    ("snow", "80d"),
                    ("version 1", "80a"),
                    ("version 2", "80b"),
                    ("version 3", "80c"),
                    ("version 4", "80d"),
                ],
            ),
            (
                "Strip Mine",
                &[
                    ("uneven horizon", "82a"),
                    ("tower", "82b"),
                    ("even horizon", "82c"),
                    ("no horizon", "82d"),
                    ("version 1", "82a"),
                    ("version 2", "82b"),
                    ("version 3", "82c"),
                    ("version 4", "82d"),
                ],
            ),
            (
                "Urza's Mine",
                &[
                    ("pulley", "83a"),
                    ("mouth", "83b"),
                    ("clawed sphere", "83c"),
                    ("tower", "83d"),
                    ("version 1", "83a"),
                    ("version 2", "83b"),
                    ("version 3", "83c"),
                    ("version 4", "83d"),
                ],
            ),
            (
                "Urza's Power Plant",
                &[
                    ("sphere", "84a"),
                    ("columns", "84b"),
                    ("bug", "84c"),
                    ("rock in pot", "84d"),
                    ("version 1", "84a"),
                    ("version 2", "84b"),
                    ("version 3", "84c"),
                    ("version 4", "84d"),
                ],
            ),
            (
                "Urza's Tower",
                &[
                    ("forest", "85a"),
                    ("mountains", "85b"),
                    ("shore", "85c"),
                    ("plains", "85d"),
                    ("version 1", "85a"),
                    ("version 2", "85b"),
                    ("version 3", "85c"),
                    ("version 4", "85d"),
                ],
            ),
        ],
    ),
    (
        "Fallen Empires",
        &[
            (
                "Armor Thrull",
                &[
                    ("version 1", "33a"),
                    ("version 2", "33b"),
                    ("version 3", "33c"),
                    ("version 4", "33d"),
                ],
            ),
            (
                "Basal Thrull",
                &[
                    ("version 1", "34a"),
                    ("version 2", "34b"),
                    ("version 3", "34c"),
                    ("version 4", "34d"),
                ],
            ),
            (
                "Brassclaw Orcs",
                &[
                    ("version 1", "49a"),
                    ("version 2", "49b"),
                    ("version 3", "49c"),
                    ("version 4", "49d"),
                ],
            ),
            (
                "Combat Medic",
                &[
                    ("version 1", "1a"),
                    ("version 2", "1b"),
                    ("version 3", "1c"),
                    ("version 4", "1d"),
                ],
            ),
            (
                "Goblin Grenade",
                &[
                    ("version 1", "56a"),
                    ("version 2", "56b"),
                    ("version 3", "56c"),
                ],
            ),
            (
                "High Tide",
                &[
                    ("version 1", "18a"),
                    ("version 2", "18b"),
                    ("version 3", "18c"),
                ],
            ),
            (
                "Hymn to Tourach",
                &[
                    ("version 1", "38a"),
                    ("version 2", "38b"),
                    ("version 3", "38c"),
                    ("version 4", "38d"),
                ],
            ),
            (
                "Icatian Javelineers",
                &[
                    ("version 1", "5a"),
                    ("version 2", "5b"),
                    ("version 3", "5c"),
                ],
            ),
        ],
    ),
    (
        "Homelands",
        &[
            (
                "Abbey Matron",
                &[
                    ("version 1", "2a"),
                    ("version 2", "2b"),
                    ("sharp eyes", "2a"),
                    ("serra's abbey", "2b"),
                ],
            ),
            (
                "Aliban's Tower",
                &[("version 1", "61a"), ("version 2", "61b")],
            ),
            (
                "Ambush Party",
                &[("version 1", "63a"), ("version 2", "63b")],
            ),
            (
                "Cemetery Gate",
                &[("version 1", "44a"), ("version 2", "44b")],
            ),
            (
                "Dwarven Trader",
                &[("version 1", "76a"), ("version 2", "76b")],
            ),
            (
                "Feast of the Unicorn",
                &[("version 1", "47a"), ("version 2", "47b")],
            ),
        ],
    ),
    (
        "Alliances",
        &[
            (
                "Arcane Denial",
                &[
                    ("version 1", "22a"),
                    ("version 2", "22b"),
                    ("axe", "22a"),
                    ("sword", "22b"),
                ],
            ),
            (
                "Astrolabe",
                &[("version 1", "159a"), ("version 2", "159b")],
            ),
            (
                "Awesome Presence",
                &[("version 1", "23a"), ("version 2", "23b")],
            ),
            (
                "Balduvian War-Makers",
                &[("version 1", "104a"), ("version 2", "104b")],
            ),
            (
                "Storm Crow",
                &[
                    ("version 1", "36a"),
                    ("version 2", "36b"),
                    ("facing left", "36a"),
                    ("facing right", "36b"),
                ],
            ),
            (
                "Swamp Mosquito",
                &[("version 1", "63a"), ("version 2", "63b")],
            ),
        ],
    ),
    (
        "Champions of Kamigawa",
        &[(
            "Brothers Yamazaki",
            &[("version 1", "160a"), ("version 2", "160b")],
        )],
    ),
];

type VariantMap = HashMap<&'static str, &'static str>;

lazy_static! {
    static ref VARIANTS_TABLE: HashMap<&'static str, HashMap<&'static str, VariantMap>> = VARIANTS
        .iter()
        .map(|(edition, cards)| {
            let cards: HashMap<&'static str, VariantMap> = cards
                .iter()
                .map(|(name, variants)| (*name, variants.iter().copied().collect::<VariantMap>()))
                .collect();
            (*edition, cards)
        })
        .collect();
}

/// Collector number listed for a free-text variant of a card in an edition
pub fn variant_number(edition: &str, name: &str, variant: &str) -> Option<&'static str> {
    let key = variant
        .trim()
        .trim_matches(|c| c == '(' || c == ')')
        .trim()
        .to_lowercase();
    VARIANTS_TABLE
        .get(edition)?
        .get(name)?
        .get(key.as_str())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_variants_case_insensitively() {
        assert_eq!(variant_number("Alliances", "Arcane Denial", "Version 2"), Some("22b"));
        assert_eq!(variant_number("Antiquities", "Mishra's Factory", " (Winter) "), Some("80d"));
        assert_eq!(variant_number("Alliances", "Arcane Denial", "10"), None);
        assert_eq!(variant_number("Zendikar", "Arcane Denial", "version 1"), None);
    }

    #[test]
    fn variant_keys_are_normalized() {
        for (edition, cards) in VARIANTS {
            for (name, variants) in cards.iter() {
                for (variant, number) in variants.iter() {
                    assert_eq!(
                        *variant,
                        variant.trim().to_lowercase(),
                        "{edition}/{name}: key {variant:?} is not normalized"
                    );
                    assert!(!number.is_empty());
                }
            }
        }
    }

    #[test]
    fn no_duplicate_keys() {
        for (edition, cards) in VARIANTS {
            assert_eq!(
                VARIANTS_TABLE[edition].len(),
                cards.len(),
                "duplicate card in {edition}"
            );
            for (name, variants) in cards.iter() {
                assert_eq!(
                    VARIANTS_TABLE[edition][name].len(),
                    variants.len(),
                    "duplicate variant for {edition}/{name}"
                );
            }
        }
    }
}
