//! Unit tests for the JSON and binary serializers

use super::*;

use chrono::NaiveDate;
use serde_json::json;

use crate::error::DataError;
use crate::models::{CompetitionId, CompetitionSeason, Gender, SeasonId};

fn sample_competitions() -> Vec<CompetitionSeason> {
    vec![CompetitionSeason::new(
        CompetitionId::new(11),
        "La Liga",
        Gender::Male,
        "Spain",
        SeasonId::new(4),
        "2018/2019",
        NaiveDate::from_ymd_opt(2020, 1, 30)
            .unwrap()
            .and_hms_micro_opt(2, 24, 23, 296715),
        None,
    )]
}

mod json_tests {
    use super::*;

    #[test]
    fn test_unserialize_competitions() {
        let bytes = json!([{
            "competition_id": 11,
            "competition_name": "La Liga",
            "competition_gender": "male",
            "country_name": "Spain",
            "season_id": 4,
            "season_name": "2018/2019"
        }])
        .to_string()
        .into_bytes();

        let records = JsonSerializer.unserialize_competitions(&bytes).unwrap();
        assert_eq!(records, sample_competitions_without_timestamps());
    }

    fn sample_competitions_without_timestamps() -> Vec<CompetitionSeason> {
        let mut records = sample_competitions();
        records[0].match_updated = None;
        records
    }

    #[test]
    fn test_serialize_then_unserialize_is_identity() {
        let records = sample_competitions();
        let bytes = JsonSerializer.serialize_competitions(&records).unwrap();
        assert_eq!(JsonSerializer.unserialize_competitions(&bytes).unwrap(), records);
    }

    #[test]
    fn test_decode_failure_names_the_resource() {
        let bytes = json!([{"match_id": 7298}]).to_string().into_bytes();
        match JsonSerializer.unserialize_matches(&bytes).unwrap_err() {
            DataError::Decode { resource, .. } => assert_eq!(resource, "matches"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_json_is_a_json_error() {
        // A payload that is not JSON at all fails before any record
        // decoding starts.
        let err = JsonSerializer.unserialize_events(b"not json").unwrap_err();
        assert!(matches!(err, DataError::Json(_)));
    }
}

mod binary_tests {
    use super::*;

    #[test]
    fn test_exact_roundtrip() {
        let records = sample_competitions();
        let bytes = BinarySerializer.serialize_competitions(&records).unwrap();
        assert_eq!(
            BinarySerializer.unserialize_competitions(&bytes).unwrap(),
            records
        );
    }

    #[test]
    fn test_roundtrip_preserves_derived_records() {
        let records = sample_competitions();
        let bytes = BinarySerializer.serialize_competitions(&records).unwrap();
        let decoded = BinarySerializer.unserialize_competitions(&bytes).unwrap();
        assert_eq!(decoded[0].competition, records[0].competition);
        assert_eq!(decoded[0].season, records[0].season);
    }

    #[test]
    fn test_garbage_bytes_fail() {
        assert!(matches!(
            BinarySerializer.unserialize_matches(b"\xff\xff\xff").unwrap_err(),
            DataError::Binary(_)
        ));
    }

    #[test]
    fn test_extensions_differ() {
        assert_ne!(JsonSerializer.extension(), BinarySerializer.extension());
    }
}
