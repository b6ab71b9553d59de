//! Raw-byte access to the four logical resources.
//!
//! An adapter's whole contract is "given a logical resource key, produce
//! raw bytes, or fail". Three origins implement it: the public open-data
//! mirror, the authenticated services API, and a local filesystem tree.
//! Timeouts, retries and backoff are the HTTP client's business, not ours.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DataError, Result};
use crate::models::{CompetitionId, MatchId, SeasonId};

/// Base URL of the public StatsBomb open-data mirror.
pub const OPEN_DATA_BASE_URL: &str =
    "https://raw.githubusercontent.com/statsbomb/open-data/master/data";

/// Base URL of the authenticated StatsBomb services API.
pub const SERVICES_BASE_URL: &str = "https://data.statsbombservices.com/api";

/// A logical resource key: which payload, for which ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Competitions,
    Matches(CompetitionId, SeasonId),
    Lineups(MatchId),
    Events(MatchId),
}

impl Resource {
    /// Relative filesystem path for this resource under a local store,
    /// mirroring the key hierarchy: `matches/{competition}/{season}.{ext}`.
    pub fn rel_path(&self, extension: &str) -> PathBuf {
        match self {
            Resource::Competitions => PathBuf::from(format!("competitions.{extension}")),
            Resource::Matches(c, s) => PathBuf::from(format!("matches/{c}/{s}.{extension}")),
            Resource::Lineups(m) => PathBuf::from(format!("lineups/{m}.{extension}")),
            Resource::Events(m) => PathBuf::from(format!("events/{m}.{extension}")),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Competitions => write!(f, "competitions"),
            Resource::Matches(c, s) => write!(f, "matches-{c}-{s}"),
            Resource::Lineups(m) => write!(f, "lineups-{m}"),
            Resource::Events(m) => write!(f, "events-{m}"),
        }
    }
}

/// Read raw bytes for each of the four logical resources.
pub trait RawAdapter {
    fn read_competitions(&self) -> Result<Vec<u8>>;
    fn read_matches(&self, competition_id: CompetitionId, season_id: SeasonId) -> Result<Vec<u8>>;
    fn read_lineups(&self, match_id: MatchId) -> Result<Vec<u8>>;
    fn read_events(&self, match_id: MatchId) -> Result<Vec<u8>>;
}

/// An adapter that can also persist raw bytes per resource key.
pub trait WritableAdapter: RawAdapter {
    fn write_competitions(&self, bytes: &[u8]) -> Result<()>;
    fn write_matches(
        &self,
        competition_id: CompetitionId,
        season_id: SeasonId,
        bytes: &[u8],
    ) -> Result<()>;
    fn write_lineups(&self, match_id: MatchId, bytes: &[u8]) -> Result<()>;
    fn write_events(&self, match_id: MatchId, bytes: &[u8]) -> Result<()>;
}

fn fetch(client: &reqwest::blocking::Client, url: String, auth: Option<(&str, &str)>) -> Result<Vec<u8>> {
    debug!(%url, "fetching");
    let mut request = client.get(&url);
    if let Some((username, password)) = auth {
        request = request.basic_auth(username, Some(password));
    }
    let response = request.send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(DataError::Transport {
            url,
            status: status.as_u16(),
        });
    }
    Ok(response.bytes()?.to_vec())
}

/// The public read-only open-data mirror. Unauthenticated; please be
/// responsible with StatsBomb data and accept the user agreement on
/// <https://www.statsbomb.com/resource-centre> before using it.
pub struct OpenDataAdapter {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl OpenDataAdapter {
    pub fn new() -> Self {
        Self::with_base_url(OPEN_DATA_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn get(&self, path: String) -> Result<Vec<u8>> {
        fetch(&self.client, format!("{}/{}", self.base_url, path), None)
    }
}

impl Default for OpenDataAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl RawAdapter for OpenDataAdapter {
    fn read_competitions(&self) -> Result<Vec<u8>> {
        self.get("competitions.json".to_string())
    }

    fn read_matches(&self, competition_id: CompetitionId, season_id: SeasonId) -> Result<Vec<u8>> {
        self.get(format!("matches/{competition_id}/{season_id}.json"))
    }

    fn read_lineups(&self, match_id: MatchId) -> Result<Vec<u8>> {
        self.get(format!("lineups/{match_id}.json"))
    }

    fn read_events(&self, match_id: MatchId) -> Result<Vec<u8>> {
        self.get(format!("events/{match_id}.json"))
    }
}

/// The authenticated services API, versioned per endpoint.
pub struct ServicesAdapter {
    client: reqwest::blocking::Client,
    base_url: String,
    username: String,
    password: String,
}

impl ServicesAdapter {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: SERVICES_BASE_URL.to_string(),
            username: username.into(),
            password: password.into(),
        }
    }

    fn get(&self, path: String) -> Result<Vec<u8>> {
        fetch(
            &self.client,
            format!("{}/{}", self.base_url, path),
            Some((&self.username, &self.password)),
        )
    }
}

impl RawAdapter for ServicesAdapter {
    fn read_competitions(&self) -> Result<Vec<u8>> {
        self.get("v2/competitions".to_string())
    }

    fn read_matches(&self, competition_id: CompetitionId, season_id: SeasonId) -> Result<Vec<u8>> {
        self.get(format!(
            "v3/competitions/{competition_id}/seasons/{season_id}/matches"
        ))
    }

    fn read_lineups(&self, match_id: MatchId) -> Result<Vec<u8>> {
        self.get(format!("v2/lineups/{match_id}"))
    }

    fn read_events(&self, match_id: MatchId) -> Result<Vec<u8>> {
        self.get(format!("v5/events/{match_id}"))
    }
}

/// A local filesystem tree mirroring the resource key hierarchy.
///
/// Reads fail with [`DataError::NotFound`] when the file does not exist;
/// writes create intermediate directories as needed.
pub struct LocalAdapter {
    base_dir: PathBuf,
    extension: String,
}

impl LocalAdapter {
    pub fn new(base_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            extension: extension.into(),
        }
    }

    fn path_for(&self, resource: Resource) -> PathBuf {
        self.base_dir.join(resource.rel_path(&self.extension))
    }

    fn read(&self, resource: Resource) -> Result<Vec<u8>> {
        let path = self.path_for(resource);
        if !path.exists() {
            return Err(DataError::NotFound {
                key: resource.to_string(),
            });
        }
        debug!(path = %path.display(), "reading local entry");
        Ok(fs::read(path)?)
    }

    fn write(&self, resource: Resource, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(resource);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!(path = %path.display(), len = bytes.len(), "writing local entry");
        Ok(fs::write(path, bytes)?)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl RawAdapter for LocalAdapter {
    fn read_competitions(&self) -> Result<Vec<u8>> {
        self.read(Resource::Competitions)
    }

    fn read_matches(&self, competition_id: CompetitionId, season_id: SeasonId) -> Result<Vec<u8>> {
        self.read(Resource::Matches(competition_id, season_id))
    }

    fn read_lineups(&self, match_id: MatchId) -> Result<Vec<u8>> {
        self.read(Resource::Lineups(match_id))
    }

    fn read_events(&self, match_id: MatchId) -> Result<Vec<u8>> {
        self.read(Resource::Events(match_id))
    }
}

impl WritableAdapter for LocalAdapter {
    fn write_competitions(&self, bytes: &[u8]) -> Result<()> {
        self.write(Resource::Competitions, bytes)
    }

    fn write_matches(
        &self,
        competition_id: CompetitionId,
        season_id: SeasonId,
        bytes: &[u8],
    ) -> Result<()> {
        self.write(Resource::Matches(competition_id, season_id), bytes)
    }

    fn write_lineups(&self, match_id: MatchId, bytes: &[u8]) -> Result<()> {
        self.write(Resource::Lineups(match_id), bytes)
    }

    fn write_events(&self, match_id: MatchId, bytes: &[u8]) -> Result<()> {
        self.write(Resource::Events(match_id), bytes)
    }
}

#[cfg(test)]
mod tests;
