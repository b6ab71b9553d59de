//! Conversion between raw bytes and typed record batches.
//!
//! Two implementations: [`JsonSerializer`] speaks the upstream wire
//! format through the field-mapping engine (and may drop wire keys the
//! schema does not describe), while [`BinarySerializer`] persists the
//! decoded object graph verbatim for the local cache, with an exact
//! `unserialize(serialize(x)) == x` round-trip.

use serde_json::Value;

use crate::error::Result;
use crate::models::{CompetitionSeason, Event, Lineup, Match};
use crate::parse;
use crate::wire::ToWire;

pub trait Serializer {
    /// File extension for entries persisted in this format.
    fn extension(&self) -> &'static str;

    fn unserialize_competitions(&self, bytes: &[u8]) -> Result<Vec<CompetitionSeason>>;
    fn unserialize_matches(&self, bytes: &[u8]) -> Result<Vec<Match>>;
    fn unserialize_lineups(&self, bytes: &[u8]) -> Result<Vec<Lineup>>;
    fn unserialize_events(&self, bytes: &[u8]) -> Result<Vec<Event>>;

    fn serialize_competitions(&self, records: &[CompetitionSeason]) -> Result<Vec<u8>>;
    fn serialize_matches(&self, records: &[Match]) -> Result<Vec<u8>>;
    fn serialize_lineups(&self, records: &[Lineup]) -> Result<Vec<u8>>;
    fn serialize_events(&self, records: &[Event]) -> Result<Vec<u8>>;
}

/// The upstream wire format.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl JsonSerializer {
    fn root(bytes: &[u8]) -> Result<Value> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn encode<T: ToWire>(records: &[T]) -> Result<Vec<u8>> {
        let encoded = records
            .iter()
            .map(T::to_wire)
            .collect::<Result<Vec<_>>>()?;
        Ok(serde_json::to_vec(&Value::Array(encoded))?)
    }
}

impl Serializer for JsonSerializer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn unserialize_competitions(&self, bytes: &[u8]) -> Result<Vec<CompetitionSeason>> {
        parse::parse_competitions(&Self::root(bytes)?).map_err(|e| e.for_resource("competitions"))
    }

    fn unserialize_matches(&self, bytes: &[u8]) -> Result<Vec<Match>> {
        parse::parse_matches(&Self::root(bytes)?).map_err(|e| e.for_resource("matches"))
    }

    fn unserialize_lineups(&self, bytes: &[u8]) -> Result<Vec<Lineup>> {
        parse::parse_lineups(&Self::root(bytes)?).map_err(|e| e.for_resource("lineups"))
    }

    fn unserialize_events(&self, bytes: &[u8]) -> Result<Vec<Event>> {
        parse::parse_events(&Self::root(bytes)?).map_err(|e| e.for_resource("events"))
    }

    fn serialize_competitions(&self, records: &[CompetitionSeason]) -> Result<Vec<u8>> {
        Self::encode(records)
    }

    fn serialize_matches(&self, records: &[Match]) -> Result<Vec<u8>> {
        Self::encode(records)
    }

    fn serialize_lineups(&self, records: &[Lineup]) -> Result<Vec<u8>> {
        Self::encode(records)
    }

    fn serialize_events(&self, records: &[Event]) -> Result<Vec<u8>> {
        Self::encode(records)
    }
}

/// The binary object-graph format used by the local persisted cache.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySerializer;

impl Serializer for BinarySerializer {
    fn extension(&self) -> &'static str {
        "bin"
    }

    fn unserialize_competitions(&self, bytes: &[u8]) -> Result<Vec<CompetitionSeason>> {
        Ok(bincode::deserialize(bytes)?)
    }

    fn unserialize_matches(&self, bytes: &[u8]) -> Result<Vec<Match>> {
        Ok(bincode::deserialize(bytes)?)
    }

    fn unserialize_lineups(&self, bytes: &[u8]) -> Result<Vec<Lineup>> {
        Ok(bincode::deserialize(bytes)?)
    }

    fn unserialize_events(&self, bytes: &[u8]) -> Result<Vec<Event>> {
        Ok(bincode::deserialize(bytes)?)
    }

    fn serialize_competitions(&self, records: &[CompetitionSeason]) -> Result<Vec<u8>> {
        Ok(bincode::serialize(records)?)
    }

    fn serialize_matches(&self, records: &[Match]) -> Result<Vec<u8>> {
        Ok(bincode::serialize(records)?)
    }

    fn serialize_lineups(&self, records: &[Lineup]) -> Result<Vec<u8>> {
        Ok(bincode::serialize(records)?)
    }

    fn serialize_events(&self, records: &[Event]) -> Result<Vec<u8>> {
        Ok(bincode::serialize(records)?)
    }
}

#[cfg(test)]
mod tests;
