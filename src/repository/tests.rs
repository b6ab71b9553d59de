//! Unit tests for repositories and the read-through cache

use super::*;

use std::cell::Cell;
use std::fs;

use tempfile::TempDir;

use crate::models::{Gender, Lineup};

fn sample_competitions() -> Vec<CompetitionSeason> {
    vec![CompetitionSeason::new(
        CompetitionId::new(11),
        "La Liga",
        Gender::Male,
        "Spain",
        SeasonId::new(4),
        "2018/2019",
        None,
        None,
    )]
}

fn sample_lineups() -> Vec<Lineup> {
    vec![
        Lineup::new(217, "Barcelona", Vec::new()),
        Lineup::new(206, "Deportivo Alavés", Vec::new()),
    ]
}

/// Counts how often each resource is fetched.
struct CountingOrigin {
    competition_calls: Cell<u32>,
    lineup_calls: Cell<u32>,
}

impl CountingOrigin {
    fn new() -> Self {
        Self {
            competition_calls: Cell::new(0),
            lineup_calls: Cell::new(0),
        }
    }
}

impl Repository for CountingOrigin {
    fn get_competitions(&self) -> Result<Vec<CompetitionSeason>> {
        self.competition_calls.set(self.competition_calls.get() + 1);
        Ok(sample_competitions())
    }

    fn get_matches(&self, _: CompetitionId, _: SeasonId) -> Result<Vec<Match>> {
        Ok(Vec::new())
    }

    fn get_lineups(&self, _: MatchId) -> Result<Vec<Lineup>> {
        self.lineup_calls.set(self.lineup_calls.get() + 1);
        Ok(sample_lineups())
    }

    fn get_events(&self, _: MatchId) -> Result<Vec<Event>> {
        Ok(Vec::new())
    }
}

/// An origin that must never be reached.
struct FailingOrigin;

impl Repository for FailingOrigin {
    fn get_competitions(&self) -> Result<Vec<CompetitionSeason>> {
        Err(DataError::Transport {
            url: "https://origin.test/competitions".to_string(),
            status: 503,
        })
    }

    fn get_matches(&self, _: CompetitionId, _: SeasonId) -> Result<Vec<Match>> {
        panic!("origin reached");
    }

    fn get_lineups(&self, _: MatchId) -> Result<Vec<Lineup>> {
        panic!("origin reached");
    }

    fn get_events(&self, _: MatchId) -> Result<Vec<Event>> {
        panic!("origin reached");
    }
}

mod local_repository_tests {
    use super::*;

    #[test]
    fn test_save_then_get_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let repository = local_repository(temp_dir.path());

        repository.save_competitions(&sample_competitions()).unwrap();
        assert_eq!(repository.get_competitions().unwrap(), sample_competitions());
        // The entry is plain wire-format JSON on disk.
        assert!(temp_dir.path().join("competitions.json").exists());
    }

    #[test]
    fn test_get_missing_resource_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let repository = local_repository(temp_dir.path());

        assert!(matches!(
            repository.get_lineups(MatchId::new(7298)).unwrap_err(),
            DataError::NotFound { .. }
        ));
    }
}

mod cached_repository_tests {
    use super::*;

    #[test]
    fn test_repeated_reads_fetch_origin_once() {
        let temp_dir = TempDir::new().unwrap();
        let cached = CachedRepository::new(CountingOrigin::new(), temp_dir.path());

        let first = cached.get_competitions().unwrap();
        let second = cached.get_competitions().unwrap();
        assert_eq!(first, second);
        assert_eq!(cached.origin.competition_calls.get(), 1);
    }

    #[test]
    fn test_memory_tier_survives_disk_loss() {
        let temp_dir = TempDir::new().unwrap();
        let cached = CachedRepository::new(CountingOrigin::new(), temp_dir.path());

        cached.get_lineups(MatchId::new(7298)).unwrap();
        fs::remove_dir_all(temp_dir.path().join("lineups")).unwrap();

        let records = cached.get_lineups(MatchId::new(7298)).unwrap();
        assert_eq!(records, sample_lineups());
        assert_eq!(cached.origin.lineup_calls.get(), 1);
    }

    #[test]
    fn test_disk_tier_survives_the_process() {
        let temp_dir = TempDir::new().unwrap();
        {
            let cached = CachedRepository::new(CountingOrigin::new(), temp_dir.path());
            cached.get_lineups(MatchId::new(7298)).unwrap();
        }

        // A fresh proxy over the same directory never touches its origin.
        let cached = CachedRepository::new(FailingOrigin, temp_dir.path());
        assert_eq!(
            cached.get_lineups(MatchId::new(7298)).unwrap(),
            sample_lineups()
        );
    }

    #[test]
    fn test_distinct_keys_fetch_separately() {
        let temp_dir = TempDir::new().unwrap();
        let cached = CachedRepository::new(CountingOrigin::new(), temp_dir.path());

        cached.get_lineups(MatchId::new(1)).unwrap();
        cached.get_lineups(MatchId::new(2)).unwrap();
        assert_eq!(cached.origin.lineup_calls.get(), 2);
    }

    #[test]
    fn test_origin_failures_propagate() {
        let temp_dir = TempDir::new().unwrap();
        let cached = CachedRepository::new(FailingOrigin, temp_dir.path());

        assert!(matches!(
            cached.get_competitions().unwrap_err(),
            DataError::Transport { status: 503, .. }
        ));
    }
}

#[test]
fn test_default_cache_dir_ends_with_crate_name() {
    assert!(default_cache_dir().ends_with("statsbomb-data"));
}
