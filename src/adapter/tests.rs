//! Unit tests for resource keys and the local adapter

use super::*;
use tempfile::TempDir;

use crate::models::{CompetitionId, MatchId, SeasonId};

mod resource_tests {
    use super::*;

    #[test]
    fn test_rel_path_mirrors_key_hierarchy() {
        let matches = Resource::Matches(CompetitionId::new(11), SeasonId::new(4));
        assert_eq!(matches.rel_path("json"), PathBuf::from("matches/11/4.json"));
        assert_eq!(
            Resource::Competitions.rel_path("bin"),
            PathBuf::from("competitions.bin")
        );
        assert_eq!(
            Resource::Events(MatchId::new(7298)).rel_path("json"),
            PathBuf::from("events/7298.json")
        );
    }

    #[test]
    fn test_display_keys_are_unique_per_ids() {
        let a = Resource::Matches(CompetitionId::new(11), SeasonId::new(4));
        let b = Resource::Matches(CompetitionId::new(11), SeasonId::new(42));
        assert_eq!(a.to_string(), "matches-11-4");
        assert_ne!(a.to_string(), b.to_string());
        assert_eq!(Resource::Lineups(MatchId::new(7298)).to_string(), "lineups-7298");
    }
}

mod local_adapter_tests {
    use super::*;

    #[test]
    fn test_read_missing_entry_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = LocalAdapter::new(temp_dir.path(), "json");

        match adapter.read_competitions().unwrap_err() {
            DataError::NotFound { key } => assert_eq!(key, "competitions"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = LocalAdapter::new(temp_dir.path(), "json");
        let payload = br#"[{"team_id": 217}]"#;

        adapter
            .write_lineups(MatchId::new(7298), payload)
            .unwrap();
        assert_eq!(adapter.read_lineups(MatchId::new(7298)).unwrap(), payload);
    }

    #[test]
    fn test_write_creates_intermediate_directories() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = LocalAdapter::new(temp_dir.path(), "json");

        adapter
            .write_matches(CompetitionId::new(11), SeasonId::new(4), b"[]")
            .unwrap();
        assert!(temp_dir.path().join("matches/11/4.json").exists());
    }

    #[test]
    fn test_keys_do_not_collide_across_resources() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = LocalAdapter::new(temp_dir.path(), "json");

        adapter.write_lineups(MatchId::new(1), b"lineups").unwrap();
        adapter.write_events(MatchId::new(1), b"events").unwrap();
        assert_eq!(adapter.read_lineups(MatchId::new(1)).unwrap(), b"lineups");
        assert_eq!(adapter.read_events(MatchId::new(1)).unwrap(), b"events");
    }

    #[test]
    fn test_extension_separates_formats() {
        let temp_dir = TempDir::new().unwrap();
        let json = LocalAdapter::new(temp_dir.path(), "json");
        let bin = LocalAdapter::new(temp_dir.path(), "bin");

        json.write_competitions(b"[]").unwrap();
        assert!(matches!(
            bin.read_competitions().unwrap_err(),
            DataError::NotFound { .. }
        ));
    }
}
