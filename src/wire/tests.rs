//! Unit tests for the field-mapping helpers

use super::*;
use serde_json::json;

fn obj(value: Value) -> WireObject {
    value.as_object().unwrap().clone()
}

mod prefix_tests {
    use super::*;

    #[test]
    fn test_add_then_remove_is_identity() {
        let original = obj(json!({"id": 1, "name": "Deportivo", "country": {"id": 214, "name": "Spain"}}));
        let prefixed = add_prefix(&original, "home_team_");
        assert!(prefixed.contains_key("home_team_id"));
        assert!(prefixed.contains_key("home_team_country"));
        assert_eq!(remove_prefix(&prefixed, "home_team_"), original);
    }

    #[test]
    fn test_remove_prefix_passes_unprefixed_keys_through() {
        // The real match payload mixes prefixed and bare keys in one
        // sub-object: home_team_id next to country and managers.
        let mixed = obj(json!({"home_team_id": 24, "home_team_name": "Liverpool", "country": {"id": 68, "name": "England"}}));
        let stripped = remove_prefix(&mixed, "home_team_");
        assert_eq!(stripped.get("id"), Some(&json!(24)));
        assert_eq!(stripped.get("name"), Some(&json!("Liverpool")));
        assert!(stripped.contains_key("country"));
    }

    #[test]
    fn test_split_prefixed_keeps_only_matching_keys() {
        let flat = obj(json!({"season_id": 4, "season_name": "2018/2019", "competition_id": 11}));
        let season = split_prefixed(&flat, "season_");
        assert_eq!(season.len(), 2);
        assert_eq!(season.get("id"), Some(&json!(4)));
        assert_eq!(season.get("name"), Some(&json!("2018/2019")));
    }
}

mod field_tests {
    use super::*;

    #[test]
    fn test_required_present() {
        let o = obj(json!({"id": 42}));
        let id: u32 = required(&o, "id").unwrap();
        assert_eq!(id, 42);
    }

    #[test]
    fn test_required_absent_and_null_fail() {
        let o = obj(json!({"id": null}));
        for key in ["id", "missing"] {
            let err = required::<u32>(&o, key).unwrap_err();
            assert!(matches!(err, DataError::MissingRequiredField { .. }), "{key}");
        }
    }

    #[test]
    fn test_optional_absent_and_null_decode_to_none() {
        let o = obj(json!({"nickname": null}));
        assert_eq!(optional::<String>(&o, "nickname").unwrap(), None);
        assert_eq!(optional::<String>(&o, "missing").unwrap(), None);
    }

    #[test]
    fn test_optional_present_but_malformed_fails() {
        // Optionality forgives absence, never malformation.
        let o = obj(json!({"height": "tall"}));
        assert!(optional::<f64>(&o, "height").is_err());
    }

    #[test]
    fn test_optional_scalar_empty_string_is_none() {
        let o = obj(json!({"birth_date": ""}));
        let decoded = optional_scalar(&o, "birth_date", crate::codec::date::decode).unwrap();
        assert_eq!(decoded, None);
    }

    #[test]
    fn test_required_scalar_goes_through_codec() {
        let o = obj(json!({"match_date": "2019-12-16"}));
        let decoded = required_scalar(&o, "match_date", crate::codec::date::decode).unwrap();
        assert_eq!(decoded.to_string(), "2019-12-16");
    }

    #[test]
    fn test_prefixed_strips_before_recursing() {
        use crate::models::Season;

        let o = obj(json!({"season": {"season_id": 4, "season_name": "2018/2019"}}));
        let season: Season = prefixed(&o, "season", "season_").unwrap();
        assert_eq!(season.id.as_u32(), 4);
        assert_eq!(season.name, "2018/2019");
    }
}

mod scalar_impl_tests {
    use super::*;

    #[test]
    fn test_unsigned_range_enforced() {
        assert_eq!(u8::from_wire(&json!(255)).unwrap(), 255);
        assert!(u8::from_wire(&json!(256)).is_err());
        assert!(u8::from_wire(&json!(-1)).is_err());
    }

    #[test]
    fn test_uuid_parse_and_encode() {
        let raw = "9ed64b33-dba1-4a27-a256-f9a8a91e303a";
        let id = uuid::Uuid::from_wire(&json!(raw)).unwrap();
        assert_eq!(id.to_wire().unwrap(), json!(raw));
        assert!(uuid::Uuid::from_wire(&json!("nope")).is_err());
    }

    #[test]
    fn test_vec_all_or_nothing() {
        let ok: Vec<u32> = Vec::from_wire(&json!([1, 2, 3])).unwrap();
        assert_eq!(ok, vec![1, 2, 3]);
        assert!(Vec::<u32>::from_wire(&json!([1, "two", 3])).is_err());
    }

    #[test]
    fn test_non_finite_f64_refuses_to_encode() {
        let err = f64::NAN.to_wire().unwrap_err();
        assert!(matches!(err, DataError::UnsupportedEncoding { .. }));
    }

    #[test]
    fn test_to_wire_default_is_unsupported() {
        struct ReadOnly;
        impl ToWire for ReadOnly {}

        let err = ReadOnly.to_wire().unwrap_err();
        match err {
            DataError::UnsupportedEncoding { kind } => assert!(kind.contains("ReadOnly")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
