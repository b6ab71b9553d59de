//! Unit tests for event decoding and the metadata variant set

use super::*;
use serde_json::json;

fn base_event() -> Value {
    json!({
        "id": "a5b2d821-a2ef-4b96-b300-965ed6d24dfd",
        "index": 70,
        "period": 1,
        "timestamp": "00:03:21.034",
        "minute": 3,
        "second": 21,
        "type": {"id": 30, "name": "Pass"},
        "possession": 6,
        "possession_team": {"id": 217, "name": "Barcelona"},
        "play_pattern": {"id": 1, "name": "Regular Play"},
        "team": {"id": 217, "name": "Barcelona"}
    })
}

fn with(extra: Value) -> Value {
    let mut event = base_event();
    for (k, v) in extra.as_object().unwrap() {
        event[k] = v.clone();
    }
    event
}

mod decode_tests {
    use super::*;

    #[test]
    fn test_minimal_event_decodes() {
        let event = Event::from_wire(&base_event()).unwrap();
        assert_eq!(event.index, 70);
        assert_eq!(event.event_type.name, "Pass");
        assert_eq!(event.timestamp.to_string(), "00:03:21.034");
        assert!(event.related_events.is_empty());
        assert!(event.populated_metadata().is_empty());
    }

    #[test]
    fn test_pass_key_populates_only_pass() {
        let event = Event::from_wire(&with(json!({
            "pass": {
                "length": 15.45,
                "angle": 1.22,
                "recipient": {"id": 5203, "name": "Sergio Busquets"},
                "height": {"id": 1, "name": "Ground Pass"},
                "end_location": [53.3, 38.2],
                "type": {"id": 64, "name": "Interception"}
            }
        })))
        .unwrap();

        assert_eq!(event.populated_metadata(), vec!["pass"]);
        let pass = event.pass.unwrap();
        assert_eq!(pass.length, Some(15.45));
        assert_eq!(pass.recipient.unwrap().name, "Sergio Busquets");
        // The wire key "type" lands on the `kind` field.
        assert_eq!(pass.kind.unwrap().name, "Interception");
        assert!(pass.outcome.is_none());
    }

    #[test]
    fn test_fifty_fifty_wire_key() {
        let event = Event::from_wire(&with(json!({
            "50_50": {"outcome": {"id": 1, "name": "Lost"}}
        })))
        .unwrap();
        assert_eq!(event.populated_metadata(), vec!["fifty_fifty"]);
        assert_eq!(event.fifty_fifty.unwrap().outcome.unwrap().name, "Lost");
    }

    #[test]
    fn test_conflicting_metadata_still_decodes() {
        // Decode is permissive; the conflict surfaces in validation.
        let event = Event::from_wire(&with(json!({
            "carry": {"end_location": [60.0, 40.0]},
            "shot": {"statsbomb_xg": 0.08}
        })))
        .unwrap();
        assert_eq!(event.populated_metadata(), vec!["carry", "shot"]);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let event = Event::from_wire(&with(json!({
            "brand_new_qualifier": {"id": 1},
            "carry": {"end_location": [1.0, 2.0], "future_field": true}
        })))
        .unwrap();
        assert_eq!(event.populated_metadata(), vec!["carry"]);
    }

    #[test]
    fn test_metadata_missing_fields_default_to_none() {
        let shot = Shot::from_wire(&json!({})).unwrap();
        assert_eq!(shot, Shot::default());
    }

    #[test]
    fn test_tactics_formation_is_a_digit_string() {
        let event = Event::from_wire(&with(json!({
            "tactics": {
                "formation": 442,
                "lineup": [{
                    "player": {"id": 3943, "name": "Adrián"},
                    "position": {"id": 1, "name": "Goalkeeper"},
                    "jersey_number": 13
                }]
            }
        })))
        .unwrap();
        let tactics = event.tactics.unwrap();
        assert_eq!(tactics.formation, "442");
        assert_eq!(tactics.lineup[0].jersey_number, 13);
    }
}

mod encode_tests {
    use super::*;

    #[test]
    fn test_event_roundtrip() {
        let original = with(json!({
            "duration": 0.902,
            "location": [34.5, 20.1],
            "under_pressure": true,
            "related_events": ["d8d73d2a-b2f2-4ba1-a725-d35de6b5c443"],
            "duel": {"type": {"id": 11, "name": "Tackle"}, "counterpress": true}
        }));
        let decoded = Event::from_wire(&original).unwrap();
        let encoded = decoded.to_wire().unwrap();
        assert_eq!(Event::from_wire(&encoded).unwrap(), decoded);

        // The duel "type" key must come back out as "type", not "kind".
        assert_eq!(encoded["duel"]["type"]["name"], json!("Tackle"));
    }

    #[test]
    fn test_tactics_encode_restores_integer_formation() {
        let tactics = Tactics {
            formation: "4231".to_string(),
            lineup: Vec::new(),
        };
        assert_eq!(tactics.to_wire().unwrap()["formation"], json!(4231));
    }

    #[test]
    fn test_tactics_encode_rejects_non_digit_formation() {
        let tactics = Tactics {
            formation: "four-four-two".to_string(),
            lineup: Vec::new(),
        };
        assert!(matches!(
            tactics.to_wire().unwrap_err(),
            DataError::MalformedScalar { .. }
        ));
    }

    #[test]
    fn test_absent_metadata_is_not_emitted() {
        let event = Event::from_wire(&base_event()).unwrap();
        let encoded = event.to_wire().unwrap();
        let obj = encoded.as_object().unwrap();
        assert!(!obj.contains_key("pass"));
        assert!(!obj.contains_key("50_50"));
        assert!(!obj.contains_key("duration"));
    }
}
