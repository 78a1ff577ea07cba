use super::*;
use crate::test_support::FIXTURE;

/// Collector numbers kept by the filter for `query` in edition `code`
fn kept(query: &CardQuery, code: &str) -> Vec<String> {
    let edition = FIXTURE.edition(code).unwrap();
    let cards = FIXTURE.match_in_edition(&query.name, code);
    assert!(!cards.is_empty(), "{} is not printed in {}", query.name, code);
    filter_edition(query, edition, cards)
        .iter()
        .map(|card| card.number.clone())
        .collect()
}

fn query(name: &str, variation: &str) -> CardQuery {
    CardQuery::new(name).with_variation(variation)
}

mod override_tests {
    use super::*;

    #[test]
    fn variants_table_picks_the_number() {
        assert_eq!(kept(&query("Arcane Denial", "Sword"), "ALL"), vec!["22b"]);
        assert_eq!(kept(&query("Mishra's Factory", "Winter"), "ATQ"), vec!["80d"]);
        assert_eq!(kept(&query("Strip Mine", "version 3"), "ATQ"), vec!["82c"]);
    }
}

mod number_tests {
    use super::*;

    #[test]
    fn missing_number_leaves_nothing() {
        assert!(kept(&query("Arcane Denial", "10"), "ALL").is_empty());
    }

    #[test]
    fn matches_plain_numbers() {
        assert_eq!(kept(&query("Forest", "247"), "ZEN"), vec!["247"]);
        assert_eq!(kept(&query("Teferi, Master of Time", "276"), "M21"), vec!["276"]);
    }

    #[test]
    fn non_full_art_basics_use_the_a_suffix() {
        assert_eq!(kept(&query("Forest", "247 Non-Full Art"), "ZEN"), vec!["247a"]);
    }

    #[test]
    fn prerelease_numbers_use_the_s_suffix() {
        let query = query("Kroxa, Titan of Death's Hunger", "221 Prerelease");
        assert_eq!(kept(&query, "PTHB"), vec!["221s"]);
    }

    #[test]
    fn the_list_matches_the_source_code() {
        assert_eq!(kept(&query("Lightning Bolt", "M10"), "PLST"), vec!["M10-146"]);
        assert_eq!(kept(&query("Lightning Bolt", "162"), "PLST"), vec!["2ED-162"]);
    }

    #[test]
    fn world_championship_numbers_ignore_the_pilot_prefix() {
        assert_eq!(kept(&query("Island", "Jon Finkel 348"), "WC00"), vec!["jf348"]);
        assert_eq!(kept(&query("Island", "347"), "WC00"), vec!["jf347", "nl347"]);
        assert_eq!(kept(&query("Island", "Nicolas Labarre 347"), "WC00"), vec!["nl347"]);
    }
}

mod heuristic_tests {
    use super::*;

    #[test]
    fn full_art_basics() {
        assert_eq!(
            kept(&query("Forest", "Full-Art"), "ZEN"),
            vec!["246", "247", "248", "249"]
        );
        assert_eq!(
            kept(&query("Forest", "Non-Full Art"), "ZEN"),
            vec!["246a", "247a", "248a", "249a"]
        );
    }

    #[test]
    fn frame_treatments_after_promos_for_everybody() {
        let name = "Kroxa, Titan of Death's Hunger";
        assert_eq!(kept(&query(name, ""), "THB"), vec!["221"]);
        assert_eq!(kept(&query(name, "Extended Art"), "THB"), vec!["352"]);
    }

    #[test]
    fn frame_treatments_before_promos_for_everybody_are_ignored() {
        assert_eq!(kept(&query("Lightning Bolt", "Borderless"), "M10"), vec!["146"]);
        assert_eq!(kept(&query("Lotus Cobra", "Showcase"), "ZEN"), vec!["168"]);
    }

    #[test]
    fn requested_attributes_are_required() {
        let name = "Kroxa, Titan of Death's Hunger";
        for variation in ["Showcase", "Borderless", "Retro Frame"] {
            assert!(kept(&query(name, variation), "THB").is_empty(), "{variation}");
        }
        assert!(kept(&query("Zilortha, Strength Incarnate", "Extended Art"), "IKO").is_empty());
        assert!(kept(&query(name, "Bundle"), "THB").is_empty());
        assert!(kept(&query(name, "Buy-a-Box"), "THB").is_empty());
    }

    #[test]
    fn requested_promo_kinds_are_required() {
        let name = "Kroxa, Titan of Death's Hunger";
        assert!(kept(&query(name, "Prerelease"), "THB").is_empty());
        assert!(kept(&query(name, "Promo Pack"), "THB").is_empty());
    }

    #[test]
    fn promo_kinds_in_promos_editions() {
        let name = "Kroxa, Titan of Death's Hunger";
        assert_eq!(kept(&query(name, "Prerelease"), "PTHB"), vec!["221s"]);
        assert_eq!(kept(&query(name, "Promo Pack"), "PTHB"), vec!["221p"]);
    }

    #[test]
    fn language() {
        assert_eq!(kept(&query("Demonic Tutor", ""), "STA"), vec!["28"]);
        assert_eq!(kept(&query("Demonic Tutor", "JPN"), "STA"), vec!["90"]);
        assert!(kept(&query("Lotus Cobra", "Japanese"), "ZEN").is_empty());
        assert!(kept(&query("Zilortha, Strength Incarnate", "Japanese"), "IKO").is_empty());
    }

    #[test]
    fn reskins_need_their_flavor_name() {
        let name = "Zilortha, Strength Incarnate";
        assert_eq!(kept(&query(name, ""), "IKO"), vec!["202"]);
        assert_eq!(
            kept(&query(name, "Godzilla, King of the Monsters"), "IKO"),
            vec!["275"]
        );
    }

    #[test]
    fn single_letter_variants() {
        assert_eq!(kept(&query("Brothers Yamazaki", "b"), "CHK"), vec!["160b"]);
        assert_eq!(kept(&query("Brothers Yamazaki", "A"), "CHK"), vec!["160a"]);
    }
}

mod special_edition_tests {
    use super::*;

    #[test]
    fn arabian_nights_light_mana() {
        assert_eq!(kept(&query("Oubliette", "Light"), "ARN"), vec!["31\u{2020}"]);
        assert_eq!(kept(&query("Oubliette", "Dark"), "ARN"), vec!["31"]);
    }

    #[test]
    fn early_editions_match_artist_and_flavor() {
        assert_eq!(kept(&query("Armor Thrull", "Pete Venters"), "FEM"), vec!["33c"]);
        assert_eq!(kept(&query("Abbey Matron", "sharp"), "HML"), vec!["2a"]);
        assert_eq!(kept(&query("Armor Thrull", "Somebody Else"), "FEM").len(), 4);
    }
}

mod callback_tests {
    use super::*;

    #[test]
    fn registered_callbacks_pick_the_treatment() {
        assert_eq!(kept(&query("Sol Ring", ""), "SLD"), vec!["1011"]);
        assert_eq!(kept(&query("Sol Ring", "Galaxy Foil"), "SLD"), vec!["1512"]);
        assert_eq!(kept(&query("Hidetsugu Consumes All", "Neon Ink"), "NEO"), vec!["430"]);
        assert_eq!(kept(&query("Abaddon the Despoiler", ""), "40K"), vec!["2"]);
        assert_eq!(kept(&query("Damnation", "Textured"), "2X2"), vec!["577"]);
    }
}

mod exception_tests {
    use super::*;

    #[test]
    fn named_exception_applies_without_a_number() {
        assert_eq!(kept(&query("Teferi, Master of Time", ""), "M21"), vec!["75"]);
    }
}

mod finish_tests {
    use super::*;

    /// Lightning Bolt from Mystery Booster (nonfoil only) and FNM (foil only)
    fn bolts() -> Vec<&'static CatalogCard> {
        let mut cards = FIXTURE.match_in_edition("Lightning Bolt", "MB1");
        cards.extend(FIXTURE.match_in_edition("Lightning Bolt", "F10"));
        cards
    }

    fn finishes_kept(
        query: &CardQuery,
        edition: &Edition,
        mut cards: Vec<&CatalogCard>,
    ) -> Vec<String> {
        prefer_finish(query, edition, &mut cards);
        cards.iter().map(|card| card.edition_code.clone()).collect()
    }

    #[test]
    fn default_finish_preference_is_soft() {
        let name = "Kroxa, Titan of Death's Hunger";
        let nonfoil = query(name, "Prerelease");
        assert_eq!(kept(&nonfoil, "PTHB"), vec!["221s"]);
    }

    #[test]
    fn etched_prefers_etched_printings() {
        assert_eq!(kept(&query("Demonic Tutor", "Etched"), "STA"), vec!["28"]);
        assert!(kept(&query("Lightning Bolt", "Etched"), "M10").is_empty());
    }

    #[test]
    fn foil_request_is_required() {
        let foil = query("Lightning Bolt", "").with_foil(true);
        assert!(kept(&foil, "MB1").is_empty());
        assert_eq!(kept(&foil, "M10"), vec!["146"]);

        let edition = FIXTURE.edition("MB1").unwrap();
        assert_eq!(finishes_kept(&foil, edition, bolts()), vec!["F10"]);
    }

    #[test]
    fn foil_only_editions_prefer_foil() {
        let nonfoil = query("Lightning Bolt", "");
        let mut edition = FIXTURE.edition("MB1").unwrap().clone();
        assert_eq!(finishes_kept(&nonfoil, &edition, bolts()), vec!["MB1"]);

        edition.foil_only = true;
        assert_eq!(finishes_kept(&nonfoil, &edition, bolts()), vec!["F10"]);

        let only_nonfoil = FIXTURE.match_in_edition("Lightning Bolt", "MB1");
        assert_eq!(finishes_kept(&nonfoil, &edition, only_nonfoil), vec!["MB1"]);
    }
}

#[test]
fn filter_cards_keeps_edition_order() {
    let editions: Vec<&Edition> = ["M10", "F10"]
        .iter()
        .filter_map(|code| FIXTURE.edition(code))
        .collect();
    let cards = filter_cards(&FIXTURE, &query("Lightning Bolt", ""), "Lightning Bolt", &editions);
    let numbers: Vec<&str> = cards.iter().map(|card| card.number.as_str()).collect();
    assert_eq!(numbers, vec!["146", "12"]);
}
