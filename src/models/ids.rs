//! Newtype ids for the resources addressed through the repository API.
//!
//! Keeping these distinct prevents a season id from being passed where a
//! competition id is expected, which the raw wire format (all bare
//! integers) does nothing to stop.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::wire::{FromWire, ToWire};

macro_rules! id_type {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub struct $name(pub u32);

            impl $name {
                pub fn new(id: u32) -> Self {
                    Self(id)
                }

                pub fn as_u32(&self) -> u32 {
                    self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl FromStr for $name {
                type Err = std::num::ParseIntError;

                fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                    s.parse::<u32>().map(Self)
                }
            }

            impl FromWire for $name {
                fn from_wire(value: &Value) -> Result<Self> {
                    u32::from_wire(value).map(Self)
                }
            }

            impl ToWire for $name {
                fn to_wire(&self) -> Result<Value> {
                    self.0.to_wire()
                }
            }
        )+
    };
}

id_type! {
    /// Identifies a competition (e.g. 11 = La Liga).
    CompetitionId,
    /// Identifies a season within a competition.
    SeasonId,
    /// Identifies a single match.
    MatchId,
    /// Identifies a player.
    PlayerId,
}
