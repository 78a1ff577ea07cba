//! Edition name aliases used by vendors, and the Commander keyword table

use crate::normalize::normalize;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Vendor spelling of an edition and the catalog name it stands for
pub(crate) const EDITION_ALIASES: &[(&str, &str)] = &[
    // Early core sets
    ("Alpha", "Limited Edition Alpha"),
    ("Alpha Edition", "Limited Edition Alpha"),
    ("Beta", "Limited Edition Beta"),
    ("Beta Edition", "Limited Edition Beta"),
    ("Unlimited", "Unlimited Edition"),
    ("Revised", "Revised Edition"),
    ("3rd Edition", "Revised Edition"),
    ("Third Edition", "Revised Edition"),
    ("4th Edition", "Fourth Edition"),
    ("5th Edition", "Fifth Edition"),
    ("6th Edition", "Classic Sixth Edition"),
    ("Sixth Edition", "Classic Sixth Edition"),
    ("7th Edition", "Seventh Edition"),
    ("8th Edition", "Eighth Edition"),
    ("9th Edition", "Ninth Edition"),
    ("10th Edition", "Tenth Edition"),
    // Modern core sets
    ("M10", "Magic 2010"),
    ("Magic 2010 Core Set", "Magic 2010"),
    ("M11", "Magic 2011"),
    ("Magic 2011 Core Set", "Magic 2011"),
    ("M12", "Magic 2012"),
    ("M13", "Magic 2013"),
    ("M14", "Magic 2014"),
    ("Magic 2014 Core Set", "Magic 2014"),
    ("M15", "Magic 2015"),
    ("Magic 2015 Core Set", "Magic 2015"),
    ("Magic Origins Core Set", "Magic Origins"),
    ("M19", "Core Set 2019"),
    ("M20", "Core Set 2020"),
    ("M21", "Core Set 2021"),
    ("Core 2019", "Core Set 2019"),
    ("Core 2020", "Core Set 2020"),
    ("Core 2021", "Core Set 2021"),
    // Expansions spelled without their subtitle or punctuation
    ("Ravnica", "Ravnica: City of Guilds"),
    ("Timeshifted", "Time Spiral Timeshifted"),
    ("Ikoria", "Ikoria: Lair of Behemoths"),
    ("Neon Dynasty", "Kamigawa: Neon Dynasty"),
    ("Midnight Hunt", "Innistrad: Midnight Hunt"),
    ("Crimson Vow", "Innistrad: Crimson Vow"),
    ("Forgotten Realms", "Adventures in the Forgotten Realms"),
    ("Strixhaven", "Strixhaven: School of Mages"),
    ("New Capenna", "Streets of New Capenna"),
    ("Brothers War", "The Brothers' War"),
    ("Lord of the Rings", "The Lord of the Rings: Tales of Middle-earth"),
    ("LotR", "The Lord of the Rings: Tales of Middle-earth"),
    ("Warhammer 40K", "Warhammer 40,000 Commander"),
    ("Warhammer 40,000", "Warhammer 40,000 Commander"),
    // Supplemental products
    ("Mystical Archive", "Strixhaven Mystical Archive"),
    ("Japanese Mystical Archive", "Strixhaven Mystical Archive"),
    ("Modern Masters 2013", "Modern Masters"),
    ("Masterpiece Series: Kaladesh Inventions", "Kaladesh Inventions"),
    ("Masterpiece Series: Amonkhet Invocations", "Amonkhet Invocations"),
    ("Expeditions", "Zendikar Expeditions"),
    ("List", "The List"),
    ("The List Reprints", "The List"),
    ("Secret Lair", "Secret Lair Drop"),
    ("Secret Lair Drop Series", "Secret Lair Drop"),
    ("2XM", "Double Masters"),
    ("Mystery Booster Playtest", "Mystery Booster Playtest Cards 2019"),
    ("Playtest Cards", "Mystery Booster Playtest Cards 2019"),
];

/// Keyword of a Commander product and its catalog edition name.
///
/// Checked in order, so more specific keywords come first.
pub(crate) const COMMANDER_KEYWORDS: &[(&str, &str)] = &[
    ("Anthology Volume II", "Commander Anthology Volume II"),
    ("Anthology 2", "Commander Anthology Volume II"),
    ("Anthology", "Commander Anthology"),
    ("Arsenal", "Commander's Arsenal"),
    ("Baldur's Gate", "Commander Legends: Battle for Baldur's Gate"),
    ("Legends", "Commander Legends"),
    ("Masters", "Commander Masters"),
    ("Collection: Green", "Commander Collection: Green"),
    ("Collection: Black", "Commander Collection: Black"),
    ("Ikoria", "Commander 2020"),
    ("Strixhaven", "Commander 2021"),
    ("Zendikar Rising", "Zendikar Rising Commander"),
    ("Kaldheim", "Kaldheim Commander"),
    ("Forgotten Realms", "Forgotten Realms Commander"),
    ("Midnight Hunt", "Midnight Hunt Commander"),
    ("Crimson Vow", "Crimson Vow Commander"),
    ("Neon Dynasty", "Neon Dynasty Commander"),
    ("New Capenna", "New Capenna Commander"),
    ("Dominaria United", "Dominaria United Commander"),
    ("Brothers' War", "The Brothers' War Commander"),
    ("All Will Be One", "Phyrexia: All Will Be One Commander"),
    ("March of the Machine", "March of the Machine Commander"),
    ("Wilds of Eldraine", "Wilds of Eldraine Commander"),
    ("Lost Caverns", "The Lost Caverns of Ixalan Commander"),
    ("Karlov Manor", "Murders at Karlov Manor Commander"),
    ("Thunder Junction", "Outlaws of Thunder Junction Commander"),
    ("Warhammer", "Warhammer 40,000 Commander"),
];

/// Years with a "Commander <year>" product
pub(crate) const COMMANDER_YEARS: std::ops::RangeInclusive<u32> = 2011..=2021;

lazy_static! {
    static ref EDITION_TABLE: HashMap<String, &'static str> = EDITION_ALIASES
        .iter()
        .map(|(alias, canonical)| (normalize(alias), *canonical))
        .collect();
}

/// Catalog edition name for a vendor alias, if the alias is known
pub fn edition_alias(text: &str) -> Option<&'static str> {
    EDITION_TABLE.get(&normalize(text)).copied()
}

/// Catalog edition name for a Commander product described by free text.
///
/// A year in the hint wins over keywords. A "Commander: X" hint without a
/// known keyword becomes "X Commander".
pub fn commander_edition(edition: &str, variation: &str) -> Option<String> {
    let year = crate::numbers::extract_year(variation)
        .or_else(|| crate::numbers::extract_year(edition))
        .and_then(|y| y.parse::<u32>().ok())
        .filter(|y| COMMANDER_YEARS.contains(y));
    if let Some(year) = year {
        return Some(format!("Commander {year}"));
    }

    let hints = format!("{edition} {variation}");
    if let Some((_, name)) = COMMANDER_KEYWORDS
        .iter()
        .find(|(keyword, _)| crate::normalize::contains(&hints, keyword))
    {
        return Some(name.to_string());
    }

    edition
        .split_once(':')
        .filter(|(prefix, _)| prefix.trim().eq_ignore_ascii_case("commander"))
        .map(|(_, rest)| rest.trim())
        .filter(|rest| !rest.is_empty())
        .map(|rest| format!("{rest} Commander"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn resolves_aliases_loosely() {
        assert_eq!(edition_alias("Revised"), Some("Revised Edition"));
        assert_eq!(edition_alias("4TH EDITION"), Some("Fourth Edition"));
        assert_eq!(edition_alias("m10"), Some("Magic 2010"));
        assert_eq!(edition_alias("Zendikar"), None);
    }

    #[test]
    fn aliases_do_not_collide() {
        let mut seen = HashSet::new();
        for (alias, _) in EDITION_ALIASES {
            assert!(seen.insert(normalize(alias)), "duplicate alias {alias}");
        }
    }

    #[test]
    fn aliases_differ_from_their_edition() {
        for (alias, canonical) in EDITION_ALIASES {
            assert_ne!(normalize(alias), normalize(canonical), "{alias} maps to itself");
        }
    }

    #[test]
    fn plural_spellings_share_one_alias() {
        assert_eq!(
            edition_alias("Mystical Archives"),
            Some("Strixhaven Mystical Archive")
        );
        assert_eq!(edition_alias("Expedition"), Some("Zendikar Expeditions"));
    }

    #[test]
    fn commander_year_wins() {
        assert_eq!(
            commander_edition("Commander", "2014"),
            Some("Commander 2014".to_string())
        );
        assert_eq!(
            commander_edition("Commander 2013 Edition", ""),
            Some("Commander 2013".to_string())
        );
    }

    #[test]
    fn commander_keywords() {
        assert_eq!(
            commander_edition("Commander Anthology Volume II", ""),
            Some("Commander Anthology Volume II".to_string())
        );
        assert_eq!(
            commander_edition("Commander", "Kaldheim"),
            Some("Kaldheim Commander".to_string())
        );
    }

    #[test]
    fn commander_prefix_is_moved_to_the_end() {
        assert_eq!(
            commander_edition("Commander: Foundations", ""),
            Some("Foundations Commander".to_string())
        );
        assert_eq!(commander_edition("Commander", ""), None);
    }
}
