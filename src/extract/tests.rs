//! Unit tests for record-graph extraction

use super::*;

fn sample_lineup() -> Lineup {
    Lineup::new(
        217,
        "Barcelona",
        vec![
            LineupPlayer::new(
                PlayerId::new(5503),
                "Lionel Messi",
                Some("Leo".to_string()),
                None,
                None,
                None,
                None,
                Some(Country::new(11, "Argentina")),
                10,
            ),
            LineupPlayer::new(
                PlayerId::new(5203),
                "Sergio Busquets",
                None,
                None,
                None,
                None,
                None,
                Some(Country::new(214, "Spain")),
                5,
            ),
        ],
    )
}

#[test]
fn test_extract_players_from_lineup() {
    let lineup = sample_lineup();
    let players = extract::<Player>(&lineup);
    assert_eq!(players.len(), 2);
    assert_eq!(players[0].name, "Lionel Messi");
    assert_eq!(players[1].name, "Sergio Busquets");
}

#[test]
fn test_extract_preserves_duplicates_in_order() {
    // Each lineup entry holds the flattened name plus the derived
    // player's copy of it; both are reachable, in declaration order.
    let lineup = sample_lineup();
    let names = extract::<String>(&lineup);
    let names: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
    assert_eq!(names[0], "Barcelona");
    assert!(names.contains(&"Leo"));
    assert_eq!(
        names.iter().filter(|n| **n == "Lionel Messi").count(),
        2
    );
}

#[test]
fn test_nested_containers_yield_whole_strings() {
    let nested: Vec<Vec<String>> = vec![
        vec!["a".to_string()],
        vec!["b".to_string(), "c".to_string()],
    ];
    let strings = extract::<String>(&nested);
    let strings: Vec<&str> = strings.iter().map(|s| s.as_str()).collect();
    assert_eq!(strings, vec!["a", "b", "c"]);
    assert!(extract::<char>(&nested).is_empty());
}

#[test]
fn test_strings_are_opaque_leaves() {
    // No chars, no bytes: a String yields itself and nothing below it.
    let lineup = sample_lineup();
    let chars = extract::<char>(&lineup);
    assert!(chars.is_empty());
    let bytes = extract::<u8>(&lineup);
    // The only u8s are jersey numbers.
    assert_eq!(bytes, vec![&10, &5]);
}

#[test]
fn test_matched_value_is_not_descended() {
    // A matched Country is yielded whole; its name must not also show up
    // in a separate String extraction of the countries themselves.
    let lineup = sample_lineup();
    let countries = extract::<Country>(&lineup);
    assert_eq!(countries.len(), 4); // 2 flattened + 2 derived copies
    for country in countries {
        let inner = extract::<Country>(country);
        assert_eq!(inner.len(), 1);
    }
    // Unmatched records still expose their u32 ids below the match type.
    let ids = extract::<u32>(&lineup);
    assert_eq!(ids, vec![&217, &11, &11, &214, &214, &217]);
}

#[test]
fn test_derived_records_of_competition_season() {
    let cs = CompetitionSeason::new(
        CompetitionId::new(11),
        "La Liga",
        Gender::Male,
        "Spain",
        SeasonId::new(4),
        "2018/2019",
        None,
        None,
    );
    let competitions = extract::<Competition>(&cs);
    assert_eq!(competitions.len(), 1);
    assert_eq!(competitions[0].name, "La Liga");
    let seasons = extract::<Season>(&cs);
    assert_eq!(seasons.len(), 1);
    assert_eq!(seasons[0].id, SeasonId::new(4));
}

#[test]
fn test_extract_through_options_and_vecs() {
    let pass = Pass {
        recipient: Some(Player::new(PlayerId::new(40724), "Jordan Henderson")),
        end_location: Some(vec![53.3, 38.2]),
        ..Pass::default()
    };
    let players = extract::<Player>(&pass);
    assert_eq!(players.len(), 1);
    let coords = extract::<f64>(&pass);
    assert_eq!(coords, vec![&53.3, &38.2]);
}
