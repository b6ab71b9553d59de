//! Shared value records: genders, countries, teams, and the small closed
//! lookup tables that upstream represents as `{id, name}` pairs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DataError, Result};
use crate::models::matches::Manager;
use crate::wire::{self, FromWire, ToWire, WireObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromWire for Gender {
    fn from_wire(value: &Value) -> Result<Self> {
        match value.as_str() {
            Some("male") => Ok(Gender::Male),
            Some("female") => Ok(Gender::Female),
            _ => Err(DataError::MalformedScalar {
                value: value.to_string(),
                expected: r#""male" or "female""#,
            }),
        }
    }
}

impl ToWire for Gender {
    fn to_wire(&self) -> Result<Value> {
        Ok(Value::String(self.as_str().to_string()))
    }
}

/// Generate one `{id, name}` lookup record.
///
/// These are structurally identical but kept distinct by type: a
/// `PlayPattern` is never interchangeable with a `Position`.
macro_rules! lookup_record {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub struct $name {
                pub id: u32,
                pub name: String,
            }

            impl $name {
                pub fn new(id: u32, name: impl Into<String>) -> Self {
                    Self { id, name: name.into() }
                }
            }

            impl FromWire for $name {
                fn from_wire(value: &Value) -> Result<Self> {
                    let obj = wire::object(value)?;
                    Ok(Self {
                        id: wire::required(obj, "id")?,
                        name: wire::required(obj, "name")?,
                    })
                }
            }

            impl ToWire for $name {
                fn to_wire(&self) -> Result<Value> {
                    let mut obj = WireObject::new();
                    wire::insert(&mut obj, "id", &self.id)?;
                    wire::insert(&mut obj, "name", &self.name)?;
                    Ok(Value::Object(obj))
                }
            }
        )+
    };
}

lookup_record! {
    Country,
    /// A stage within a competition, e.g. "Regular Season".
    CompetitionStage,
    /// The kind of an event, e.g. "Pass" or "Shot".
    EventType,
    /// How the current phase of play started, e.g. "From Corner".
    PlayPattern,
    /// A position on the pitch, e.g. "Right Back".
    Position,
    /// A generic upstream lookup-table reference used throughout event
    /// metadata (outcomes, body parts, techniques, card types, ...).
    StatsBombObject,
}

/// A team. The matches route additionally lists the team's managers;
/// elsewhere (events, lineups) only id and name travel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub gender: Option<Gender>,
    pub country: Option<Country>,
    pub managers: Option<Vec<Manager>>,
}

impl Team {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gender: None,
            country: None,
            managers: None,
        }
    }
}

impl FromWire for Team {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = wire::object(value)?;
        Ok(Self {
            id: wire::required(obj, "id")?,
            name: wire::required(obj, "name")?,
            gender: wire::optional(obj, "gender")?,
            country: wire::optional(obj, "country")?,
            managers: wire::optional(obj, "managers")?,
        })
    }
}

impl ToWire for Team {
    fn to_wire(&self) -> Result<Value> {
        let mut obj = WireObject::new();
        wire::insert(&mut obj, "id", &self.id)?;
        wire::insert(&mut obj, "name", &self.name)?;
        wire::insert_opt(&mut obj, "gender", &self.gender)?;
        wire::insert_opt(&mut obj, "country", &self.country)?;
        // Managers are decode-only and are not written back out.
        Ok(Value::Object(obj))
    }
}
