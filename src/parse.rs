//! Parse routes: from a wire JSON parse tree to typed record batches.
//!
//! Batches are all-or-nothing: if any element fails to decode, the whole
//! call fails. There are no partial batches and no partially-populated
//! records.

use rayon::prelude::*;
use serde_json::Value;

use crate::error::{DataError, Result};
use crate::models::{CompetitionSeason, Event, Lineup, Match};
use crate::wire::FromWire;

fn elements(value: &Value) -> Result<&Vec<Value>> {
    value.as_array().ok_or_else(|| DataError::MalformedScalar {
        value: value.to_string(),
        expected: "JSON array of records",
    })
}

pub fn parse_competitions(value: &Value) -> Result<Vec<CompetitionSeason>> {
    elements(value)?.iter().map(CompetitionSeason::from_wire).collect()
}

pub fn parse_matches(value: &Value) -> Result<Vec<Match>> {
    elements(value)?.iter().map(Match::from_wire).collect()
}

/// The lineups payload is a two-element array (home, away); the decoder
/// itself is length-agnostic.
pub fn parse_lineups(value: &Value) -> Result<Vec<Lineup>> {
    elements(value)?.iter().map(Lineup::from_wire).collect()
}

/// Events payloads run to thousands of elements per match and each element
/// decodes independently, so this route decodes element-parallel.
pub fn parse_events(value: &Value) -> Result<Vec<Event>> {
    elements(value)?.par_iter().map(Event::from_wire).collect()
}

/// Check the at-most-one-metadata invariant over a decoded batch.
///
/// The decoder deliberately accepts events that populate several metadata
/// variants (upstream data, not the decoder, owns that invariant); this
/// pass makes such malformed data visible instead of silently carrying it.
pub fn validate_events(events: &[Event]) -> Result<()> {
    for event in events {
        let populated = event.populated_metadata();
        if populated.len() > 1 {
            return Err(DataError::MetadataConflict {
                event_id: event.id,
                populated,
            });
        }
    }
    Ok(())
}
