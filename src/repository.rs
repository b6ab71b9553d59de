//! Typed read access over an adapter/serializer pair, and the read-through
//! caching proxy.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Mutex;

use lru::LruCache;
use tracing::debug;

use crate::adapter::{LocalAdapter, OpenDataAdapter, RawAdapter, ServicesAdapter, WritableAdapter};
use crate::error::{DataError, Result};
use crate::models::{CompetitionId, CompetitionSeason, Event, Lineup, Match, MatchId, SeasonId};
use crate::serializer::{BinarySerializer, JsonSerializer, Serializer};

/// The typed read capability over the four logical resources.
pub trait Repository {
    fn get_competitions(&self) -> Result<Vec<CompetitionSeason>>;
    fn get_matches(&self, competition_id: CompetitionId, season_id: SeasonId) -> Result<Vec<Match>>;
    fn get_lineups(&self, match_id: MatchId) -> Result<Vec<Lineup>>;
    fn get_events(&self, match_id: MatchId) -> Result<Vec<Event>>;
}

/// A repository that can also persist typed records per resource key.
pub trait WritableRepository: Repository {
    fn save_competitions(&self, records: &[CompetitionSeason]) -> Result<()>;
    fn save_matches(
        &self,
        competition_id: CompetitionId,
        season_id: SeasonId,
        records: &[Match],
    ) -> Result<()>;
    fn save_lineups(&self, match_id: MatchId, records: &[Lineup]) -> Result<()>;
    fn save_events(&self, match_id: MatchId, records: &[Event]) -> Result<()>;
}

/// Composes one adapter with one serializer: every read is
/// `serializer.unserialize(adapter.read(..))`, every write the inverse.
pub struct DataRepository<A, S> {
    adapter: A,
    serializer: S,
}

impl<A, S> DataRepository<A, S> {
    pub fn new(adapter: A, serializer: S) -> Self {
        Self {
            adapter,
            serializer,
        }
    }
}

impl<A: RawAdapter, S: Serializer> Repository for DataRepository<A, S> {
    fn get_competitions(&self) -> Result<Vec<CompetitionSeason>> {
        self.serializer
            .unserialize_competitions(&self.adapter.read_competitions()?)
    }

    fn get_matches(&self, competition_id: CompetitionId, season_id: SeasonId) -> Result<Vec<Match>> {
        self.serializer
            .unserialize_matches(&self.adapter.read_matches(competition_id, season_id)?)
    }

    fn get_lineups(&self, match_id: MatchId) -> Result<Vec<Lineup>> {
        self.serializer
            .unserialize_lineups(&self.adapter.read_lineups(match_id)?)
    }

    fn get_events(&self, match_id: MatchId) -> Result<Vec<Event>> {
        self.serializer
            .unserialize_events(&self.adapter.read_events(match_id)?)
    }
}

impl<A: WritableAdapter, S: Serializer> WritableRepository for DataRepository<A, S> {
    fn save_competitions(&self, records: &[CompetitionSeason]) -> Result<()> {
        self.adapter
            .write_competitions(&self.serializer.serialize_competitions(records)?)
    }

    fn save_matches(
        &self,
        competition_id: CompetitionId,
        season_id: SeasonId,
        records: &[Match],
    ) -> Result<()> {
        self.adapter.write_matches(
            competition_id,
            season_id,
            &self.serializer.serialize_matches(records)?,
        )
    }

    fn save_lineups(&self, match_id: MatchId, records: &[Lineup]) -> Result<()> {
        self.adapter
            .write_lineups(match_id, &self.serializer.serialize_lineups(records)?)
    }

    fn save_events(&self, match_id: MatchId, records: &[Event]) -> Result<()> {
        self.adapter
            .write_events(match_id, &self.serializer.serialize_events(records)?)
    }
}

/// Per-resource LRU memory tier in front of the disk cache.
///
/// Events batches are large, so their slot count is kept small.
struct MemoryTier {
    competitions: Mutex<LruCache<(), Vec<CompetitionSeason>>>,
    matches: Mutex<LruCache<(CompetitionId, SeasonId), Vec<Match>>>,
    lineups: Mutex<LruCache<MatchId, Vec<Lineup>>>,
    events: Mutex<LruCache<MatchId, Vec<Event>>>,
}

impl MemoryTier {
    fn new() -> Self {
        fn cache<K: std::hash::Hash + Eq, V>(capacity: usize) -> Mutex<LruCache<K, V>> {
            Mutex::new(LruCache::new(NonZeroUsize::new(capacity).unwrap()))
        }
        Self {
            competitions: cache(1),
            matches: cache(16),
            lineups: cache(32),
            events: cache(4),
        }
    }
}

/// A read-through cache over any repository.
///
/// Each read first consults the in-process memory tier, then a
/// [`LocalAdapter`]-backed repository under `cache_dir` (binary format).
/// On a disk miss the origin is fetched once, written through, and the
/// result returned: at most one origin fetch per resource key per cache
/// lifetime. Any failure other than the local store's `NotFound`
/// propagates untouched.
///
/// The disk tier assumes a single writer per cache key; concurrent
/// processes populating the same key can duplicate the origin fetch.
pub struct CachedRepository<R> {
    origin: R,
    cache: DataRepository<LocalAdapter, BinarySerializer>,
    memory: MemoryTier,
}

impl<R: Repository> CachedRepository<R> {
    pub fn new(origin: R, cache_dir: impl Into<PathBuf>) -> Self {
        let serializer = BinarySerializer;
        let adapter = LocalAdapter::new(cache_dir, serializer.extension());
        Self {
            origin,
            cache: DataRepository::new(adapter, serializer),
            memory: MemoryTier::new(),
        }
    }

    fn read_through<T: Clone>(
        &self,
        cached: Result<Vec<T>>,
        fetch: impl FnOnce() -> Result<Vec<T>>,
        store: impl FnOnce(&[T]) -> Result<()>,
    ) -> Result<Vec<T>> {
        match cached {
            Ok(records) => Ok(records),
            Err(DataError::NotFound { key }) => {
                debug!(%key, "cache miss, fetching from origin");
                let records = fetch()?;
                store(&records)?;
                Ok(records)
            }
            Err(e) => Err(e),
        }
    }
}

impl<R: Repository> Repository for CachedRepository<R> {
    fn get_competitions(&self) -> Result<Vec<CompetitionSeason>> {
        if let Some(hit) = self.memory.competitions.lock().unwrap().get(&()) {
            return Ok(hit.clone());
        }
        let records = self.read_through(
            self.cache.get_competitions(),
            || self.origin.get_competitions(),
            |records| self.cache.save_competitions(records),
        )?;
        self.memory
            .competitions
            .lock()
            .unwrap()
            .put((), records.clone());
        Ok(records)
    }

    fn get_matches(&self, competition_id: CompetitionId, season_id: SeasonId) -> Result<Vec<Match>> {
        let key = (competition_id, season_id);
        if let Some(hit) = self.memory.matches.lock().unwrap().get(&key) {
            return Ok(hit.clone());
        }
        let records = self.read_through(
            self.cache.get_matches(competition_id, season_id),
            || self.origin.get_matches(competition_id, season_id),
            |records| self.cache.save_matches(competition_id, season_id, records),
        )?;
        self.memory.matches.lock().unwrap().put(key, records.clone());
        Ok(records)
    }

    fn get_lineups(&self, match_id: MatchId) -> Result<Vec<Lineup>> {
        if let Some(hit) = self.memory.lineups.lock().unwrap().get(&match_id) {
            return Ok(hit.clone());
        }
        let records = self.read_through(
            self.cache.get_lineups(match_id),
            || self.origin.get_lineups(match_id),
            |records| self.cache.save_lineups(match_id, records),
        )?;
        self.memory
            .lineups
            .lock()
            .unwrap()
            .put(match_id, records.clone());
        Ok(records)
    }

    fn get_events(&self, match_id: MatchId) -> Result<Vec<Event>> {
        if let Some(hit) = self.memory.events.lock().unwrap().get(&match_id) {
            return Ok(hit.clone());
        }
        let records = self.read_through(
            self.cache.get_events(match_id),
            || self.origin.get_events(match_id),
            |records| self.cache.save_events(match_id, records),
        )?;
        self.memory
            .events
            .lock()
            .unwrap()
            .put(match_id, records.clone());
        Ok(records)
    }
}

/// Repository over the public open-data mirror.
pub fn open_data_repository() -> DataRepository<OpenDataAdapter, JsonSerializer> {
    DataRepository::new(OpenDataAdapter::new(), JsonSerializer)
}

/// Repository over the authenticated services API.
pub fn services_repository(
    username: impl Into<String>,
    password: impl Into<String>,
) -> DataRepository<ServicesAdapter, JsonSerializer> {
    DataRepository::new(ServicesAdapter::new(username, password), JsonSerializer)
}

/// Repository over a local tree of wire-format JSON files.
pub fn local_repository(base_dir: impl Into<PathBuf>) -> DataRepository<LocalAdapter, JsonSerializer> {
    let serializer = JsonSerializer;
    DataRepository::new(LocalAdapter::new(base_dir, serializer.extension()), serializer)
}

/// Default cache directory: the platform cache dir, or `.cache` under the
/// home directory as a fallback.
pub fn default_cache_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("statsbomb-data")
}

#[cfg(test)]
mod tests;
