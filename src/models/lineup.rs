//! Players and the v2 lineups route records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec;
use crate::error::Result;
use crate::models::common::{Country, Gender, Team};
use crate::models::ids::PlayerId;
use crate::wire::{self, FromWire, ToWire, WireObject};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub country: Option<Country>,
    pub nickname: Option<String>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            birth_date: None,
            gender: None,
            height: None,
            weight: None,
            country: None,
            nickname: None,
        }
    }
}

impl FromWire for Player {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = wire::object(value)?;
        Ok(Self {
            id: wire::required(obj, "id")?,
            name: wire::required(obj, "name")?,
            birth_date: wire::optional_scalar(obj, "birth_date", codec::date::decode)?,
            gender: wire::optional(obj, "gender")?,
            height: wire::optional(obj, "height")?,
            weight: wire::optional(obj, "weight")?,
            country: wire::optional(obj, "country")?,
            nickname: wire::optional(obj, "nickname")?,
        })
    }
}

impl ToWire for Player {
    fn to_wire(&self) -> Result<Value> {
        let mut obj = WireObject::new();
        wire::insert(&mut obj, "id", &self.id)?;
        wire::insert(&mut obj, "name", &self.name)?;
        wire::insert_scalar_opt(&mut obj, "birth_date", codec::date::encode, &self.birth_date);
        wire::insert_opt(&mut obj, "gender", &self.gender)?;
        wire::insert_opt(&mut obj, "height", &self.height)?;
        wire::insert_opt(&mut obj, "weight", &self.weight)?;
        wire::insert_opt(&mut obj, "country", &self.country)?;
        wire::insert_opt(&mut obj, "nickname", &self.nickname)?;
        Ok(Value::Object(obj))
    }
}

/// One entry of a lineup: the `player_*`-flattened player fields plus the
/// jersey number. The nested [`Player`] is derived once at construction
/// from the flattened fields and never reassigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupPlayer {
    pub player_id: PlayerId,
    pub player_name: String,
    pub player_nickname: Option<String>,
    pub player_gender: Option<Gender>,
    pub player_height: Option<f64>,
    pub player_weight: Option<f64>,
    pub birth_date: Option<NaiveDate>,
    pub country: Option<Country>,
    pub jersey_number: u8,

    pub player: Player,
}

impl LineupPlayer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        player_id: PlayerId,
        player_name: impl Into<String>,
        player_nickname: Option<String>,
        player_gender: Option<Gender>,
        player_height: Option<f64>,
        player_weight: Option<f64>,
        birth_date: Option<NaiveDate>,
        country: Option<Country>,
        jersey_number: u8,
    ) -> Self {
        let player_name = player_name.into();
        Self {
            player: Player {
                id: player_id,
                name: player_name.clone(),
                birth_date,
                gender: player_gender,
                height: player_height,
                weight: player_weight,
                country: country.clone(),
                nickname: player_nickname.clone(),
            },
            player_id,
            player_name,
            player_nickname,
            player_gender,
            player_height,
            player_weight,
            birth_date,
            country,
            jersey_number,
        }
    }
}

impl FromWire for LineupPlayer {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = wire::object(value)?;
        Ok(Self::new(
            wire::required(obj, "player_id")?,
            wire::required::<String>(obj, "player_name")?,
            wire::optional(obj, "player_nickname")?,
            wire::optional(obj, "player_gender")?,
            wire::optional(obj, "player_height")?,
            wire::optional(obj, "player_weight")?,
            wire::optional_scalar(obj, "birth_date", codec::date::decode)?,
            wire::optional(obj, "country")?,
            wire::required(obj, "jersey_number")?,
        ))
    }
}

impl ToWire for LineupPlayer {
    fn to_wire(&self) -> Result<Value> {
        let mut obj = WireObject::new();
        wire::insert(&mut obj, "player_id", &self.player_id)?;
        wire::insert(&mut obj, "player_name", &self.player_name)?;
        wire::insert_opt(&mut obj, "player_nickname", &self.player_nickname)?;
        wire::insert_opt(&mut obj, "player_gender", &self.player_gender)?;
        wire::insert_opt(&mut obj, "player_height", &self.player_height)?;
        wire::insert_opt(&mut obj, "player_weight", &self.player_weight)?;
        wire::insert_scalar_opt(&mut obj, "birth_date", codec::date::encode, &self.birth_date);
        wire::insert_opt(&mut obj, "country", &self.country)?;
        wire::insert(&mut obj, "jersey_number", &self.jersey_number)?;
        Ok(Value::Object(obj))
    }
}

/// One side of a match: the team (derived from the flattened
/// `team_id`/`team_name` pair) and its ordered players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub team_id: u32,
    pub team_name: String,
    pub lineup: Vec<LineupPlayer>,

    pub team: Team,
}

impl Lineup {
    pub fn new(team_id: u32, team_name: impl Into<String>, lineup: Vec<LineupPlayer>) -> Self {
        let team_name = team_name.into();
        Self {
            team: Team::new(team_id, team_name.clone()),
            team_id,
            team_name,
            lineup,
        }
    }
}

impl FromWire for Lineup {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = wire::object(value)?;
        Ok(Self::new(
            wire::required(obj, "team_id")?,
            wire::required::<String>(obj, "team_name")?,
            wire::required(obj, "lineup")?,
        ))
    }
}

impl ToWire for Lineup {
    fn to_wire(&self) -> Result<Value> {
        let mut obj = WireObject::new();
        wire::insert(&mut obj, "team_id", &self.team_id)?;
        wire::insert(&mut obj, "team_name", &self.team_name)?;
        wire::insert(&mut obj, "lineup", &self.lineup)?;
        Ok(Value::Object(obj))
    }
}
