//! Competitions and seasons, plus the flattened competition-season record
//! returned by the competitions route.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec;
use crate::error::Result;
use crate::models::common::Gender;
use crate::models::ids::{CompetitionId, SeasonId};
use crate::wire::{self, FromWire, ToWire, WireObject};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub id: CompetitionId,
    pub name: String,
    pub gender: Option<Gender>,
    pub country_name: Option<String>,
}

impl FromWire for Competition {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = wire::object(value)?;
        Ok(Self {
            id: wire::required(obj, "id")?,
            name: wire::required(obj, "name")?,
            gender: wire::optional(obj, "gender")?,
            country_name: wire::optional(obj, "country_name")?,
        })
    }
}

impl ToWire for Competition {
    fn to_wire(&self) -> Result<Value> {
        let mut obj = WireObject::new();
        wire::insert(&mut obj, "id", &self.id)?;
        wire::insert(&mut obj, "name", &self.name)?;
        wire::insert_opt(&mut obj, "gender", &self.gender)?;
        wire::insert_opt(&mut obj, "country_name", &self.country_name)?;
        Ok(Value::Object(obj))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season {
    pub id: SeasonId,
    pub name: String,
}

impl Season {
    pub fn new(id: SeasonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl FromWire for Season {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = wire::object(value)?;
        Ok(Self {
            id: wire::required(obj, "id")?,
            name: wire::required(obj, "name")?,
        })
    }
}

impl ToWire for Season {
    fn to_wire(&self) -> Result<Value> {
        let mut obj = WireObject::new();
        wire::insert(&mut obj, "id", &self.id)?;
        wire::insert(&mut obj, "name", &self.name)?;
        Ok(Value::Object(obj))
    }
}

/// One entry of the competitions route: a competition/season pairing with
/// every field flattened to the top level of the wire object.
///
/// The nested [`Competition`] and [`Season`] are derived from the flattened
/// fields once, at construction, and are pure functions of them; they are
/// always populated and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionSeason {
    pub competition_id: CompetitionId,
    pub competition_name: String,
    pub competition_gender: Gender,
    pub country_name: String,
    pub season_id: SeasonId,
    pub season_name: String,
    pub match_updated: Option<NaiveDateTime>,
    pub match_available: Option<NaiveDateTime>,

    pub competition: Competition,
    pub season: Season,
}

impl CompetitionSeason {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        competition_id: CompetitionId,
        competition_name: impl Into<String>,
        competition_gender: Gender,
        country_name: impl Into<String>,
        season_id: SeasonId,
        season_name: impl Into<String>,
        match_updated: Option<NaiveDateTime>,
        match_available: Option<NaiveDateTime>,
    ) -> Self {
        let competition_name = competition_name.into();
        let country_name = country_name.into();
        let season_name = season_name.into();
        Self {
            competition: Competition {
                id: competition_id,
                name: competition_name.clone(),
                gender: Some(competition_gender),
                country_name: Some(country_name.clone()),
            },
            season: Season::new(season_id, season_name.clone()),
            competition_id,
            competition_name,
            competition_gender,
            country_name,
            season_id,
            season_name,
            match_updated,
            match_available,
        }
    }
}

impl FromWire for CompetitionSeason {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = wire::object(value)?;
        Ok(Self::new(
            wire::required(obj, "competition_id")?,
            wire::required::<String>(obj, "competition_name")?,
            wire::required(obj, "competition_gender")?,
            wire::required::<String>(obj, "country_name")?,
            wire::required(obj, "season_id")?,
            wire::required::<String>(obj, "season_name")?,
            wire::optional_scalar(obj, "match_updated", codec::iso_datetime::decode)?,
            wire::optional_scalar(obj, "match_available", codec::iso_datetime::decode)?,
        ))
    }
}

impl ToWire for CompetitionSeason {
    fn to_wire(&self) -> Result<Value> {
        // The derived records are not re-emitted: the wire format is flat.
        let mut obj = WireObject::new();
        wire::insert(&mut obj, "competition_id", &self.competition_id)?;
        wire::insert(&mut obj, "competition_name", &self.competition_name)?;
        wire::insert(&mut obj, "competition_gender", &self.competition_gender)?;
        wire::insert(&mut obj, "country_name", &self.country_name)?;
        wire::insert(&mut obj, "season_id", &self.season_id)?;
        wire::insert(&mut obj, "season_name", &self.season_name)?;
        wire::insert_scalar_opt(&mut obj, "match_updated", codec::iso_datetime::encode, &self.match_updated);
        wire::insert_scalar_opt(&mut obj, "match_available", codec::iso_datetime::encode, &self.match_available);
        Ok(Value::Object(obj))
    }
}
