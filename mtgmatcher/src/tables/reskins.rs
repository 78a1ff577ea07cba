//! Reskinned cards: alternate in-universe names printed on some copies

use crate::normalize::normalize;

/// Edition code, flavor name as sold by vendors, canonical card name
pub(crate) const RESKINS: &[(&str, &str, &str)] = &[
    ("IKO", "Godzilla, King of the Monsters", "Zilortha, Strength Incarnate"),
    ("IKO", "Mothra, Supersonic Queen", "Luminous Broodmoth"),
    ("IKO", "Gigan, Cyberclaw Terror", "Gyruda, Doom of Depths"),
    ("IKO", "Ghidorah, King of the Cosmos", "Illuna, Apex of Wishes"),
    ("IKO", "Anguirus, Armored Killer", "Gemrazer"),
    ("IKO", "King Caesar, Ancient Guardian", "Huntmaster Liger"),
    ("IKO", "Rodan, Titan of Winged Fury", "Vadrok, Apex of Thunder"),
    ("IKO", "Destoroyah, Perfect Lifeform", "Everquill Phoenix"),
    ("IKO", "Battra, Dark Destroyer", "Dirge Bat"),
    ("IKO", "Godzilla, Doom Inevitable", "Yidaro, Wandering Monster"),
];

/// A reskin entry matched by flavor name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reskin {
    pub edition_code: &'static str,
    pub flavor_name: &'static str,
    pub canonical_name: &'static str,
}

/// Look up a flavor name, ignoring case and punctuation
pub fn find_reskin(name: &str) -> Option<Reskin> {
    let key = normalize(name);
    RESKINS
        .iter()
        .find(|(_, flavor, _)| normalize(flavor) == key)
        .map(|(code, flavor, canonical)| Reskin {
            edition_code: code,
            flavor_name: flavor,
            canonical_name: canonical,
        })
}
