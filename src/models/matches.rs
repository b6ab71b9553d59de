//! The match record and its satellites, as returned by the v3 matches
//! route.
//!
//! The wire format nests competition, season and team sub-objects whose
//! inner keys carry the parent's prefix (`competition_id` inside
//! `competition`, `home_team_name` inside `home_team`, ...); decoding
//! strips the prefix before recursing into the nested record's decoder.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec;
use crate::error::{DataError, Result};
use crate::models::common::{CompetitionStage, Country, Team};
use crate::models::competition::{Competition, Season};
use crate::models::ids::MatchId;
use crate::wire::{self, FromWire, ToWire, WireObject};

/// A team manager, as listed in the `managers` arrays of the match wire
/// format. Decode-only: managers are never written back out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manager {
    pub id: u32,
    pub name: String,
    pub nickname: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub country: Option<Country>,
}

impl FromWire for Manager {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = wire::object(value)?;
        Ok(Self {
            id: wire::required(obj, "id")?,
            name: wire::required(obj, "name")?,
            nickname: wire::optional(obj, "nickname")?,
            birth_date: wire::optional_scalar(obj, "dob", codec::date::decode)?,
            country: wire::optional(obj, "country")?,
        })
    }
}

impl ToWire for Manager {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Referee {
    pub id: u32,
    pub name: Option<String>,
    pub country: Option<Country>,
}

impl FromWire for Referee {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = wire::object(value)?;
        Ok(Self {
            id: wire::required(obj, "id")?,
            name: wire::optional(obj, "name")?,
            country: wire::optional(obj, "country")?,
        })
    }
}

impl ToWire for Referee {
    fn to_wire(&self) -> Result<Value> {
        let mut obj = WireObject::new();
        wire::insert(&mut obj, "id", &self.id)?;
        wire::insert_opt(&mut obj, "name", &self.name)?;
        wire::insert_opt(&mut obj, "country", &self.country)?;
        Ok(Value::Object(obj))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Available,
    Processing,
    Collecting,
    Scheduled,
    Deleted,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Available => "available",
            MatchStatus::Processing => "processing",
            MatchStatus::Collecting => "collecting",
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Deleted => "deleted",
        }
    }
}

impl FromWire for MatchStatus {
    fn from_wire(value: &Value) -> Result<Self> {
        match value.as_str() {
            Some("available") => Ok(MatchStatus::Available),
            Some("processing") => Ok(MatchStatus::Processing),
            Some("collecting") => Ok(MatchStatus::Collecting),
            Some("scheduled") => Ok(MatchStatus::Scheduled),
            Some("deleted") => Ok(MatchStatus::Deleted),
            _ => Err(DataError::MalformedScalar {
                value: value.to_string(),
                expected: "match status",
            }),
        }
    }
}

impl ToWire for MatchStatus {
    fn to_wire(&self) -> Result<Value> {
        Ok(Value::String(self.as_str().to_string()))
    }
}

/// Collection-pipeline version stamps attached to a match. All optional;
/// scheduled matches ship an empty `metadata` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchMetadata {
    pub data_version: Option<String>,
    pub xy_fidelity_version: Option<String>,
    pub shot_fidelity_version: Option<String>,
}

impl FromWire for MatchMetadata {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = wire::object(value)?;
        Ok(Self {
            data_version: wire::optional(obj, "data_version")?,
            xy_fidelity_version: wire::optional(obj, "xy_fidelity_version")?,
            shot_fidelity_version: wire::optional(obj, "shot_fidelity_version")?,
        })
    }
}

impl ToWire for MatchMetadata {
    fn to_wire(&self) -> Result<Value> {
        let mut obj = WireObject::new();
        wire::insert_opt(&mut obj, "data_version", &self.data_version)?;
        wire::insert_opt(&mut obj, "xy_fidelity_version", &self.xy_fidelity_version)?;
        wire::insert_opt(&mut obj, "shot_fidelity_version", &self.shot_fidelity_version)?;
        Ok(Value::Object(obj))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub competition: Competition,
    pub season: Season,
    pub date: NaiveDate,
    pub kick_off: NaiveTime,
    pub match_week: u16,
    pub status: MatchStatus,
    pub home_team: Team,
    pub away_team: Team,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
    pub referee: Option<Referee>,
    pub competition_stage: Option<CompetitionStage>,
    pub metadata: MatchMetadata,
    pub last_updated: NaiveDateTime,
}

impl FromWire for Match {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = wire::object(value)?;
        Ok(Self {
            id: wire::required(obj, "match_id")?,
            competition: wire::prefixed(obj, "competition", "competition_")?,
            season: wire::prefixed(obj, "season", "season_")?,
            date: wire::required_scalar(obj, "match_date", codec::date::decode)?,
            kick_off: wire::required_scalar(obj, "kick_off", codec::clock::decode)?,
            match_week: wire::required(obj, "match_week")?,
            status: wire::required(obj, "match_status")?,
            home_team: wire::prefixed(obj, "home_team", "home_team_")?,
            away_team: wire::prefixed(obj, "away_team", "away_team_")?,
            home_score: wire::optional(obj, "home_score")?,
            away_score: wire::optional(obj, "away_score")?,
            referee: wire::optional(obj, "referee")?,
            competition_stage: wire::optional(obj, "competition_stage")?,
            metadata: wire::optional(obj, "metadata")?.unwrap_or_default(),
            last_updated: wire::required_scalar(obj, "last_updated", codec::iso_datetime::decode)?,
        })
    }
}

impl ToWire for Match {
    fn to_wire(&self) -> Result<Value> {
        let mut obj = WireObject::new();
        wire::insert(&mut obj, "match_id", &self.id)?;
        wire::insert_prefixed(&mut obj, "competition", "competition_", &self.competition)?;
        wire::insert_prefixed(&mut obj, "season", "season_", &self.season)?;
        wire::insert_scalar(&mut obj, "match_date", codec::date::encode, &self.date);
        wire::insert_scalar(&mut obj, "kick_off", codec::clock::encode, &self.kick_off);
        wire::insert(&mut obj, "match_week", &self.match_week)?;
        wire::insert(&mut obj, "match_status", &self.status)?;
        wire::insert_prefixed(&mut obj, "home_team", "home_team_", &self.home_team)?;
        wire::insert_prefixed(&mut obj, "away_team", "away_team_", &self.away_team)?;
        wire::insert_opt(&mut obj, "home_score", &self.home_score)?;
        wire::insert_opt(&mut obj, "away_score", &self.away_score)?;
        wire::insert_opt(&mut obj, "referee", &self.referee)?;
        wire::insert_opt(&mut obj, "competition_stage", &self.competition_stage)?;
        wire::insert(&mut obj, "metadata", &self.metadata)?;
        wire::insert_scalar(&mut obj, "last_updated", codec::iso_datetime::encode, &self.last_updated);
        Ok(Value::Object(obj))
    }
}
