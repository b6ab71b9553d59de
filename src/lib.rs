//! Typed access to StatsBomb football data.
//!
//! The crate splits into three layers:
//!
//! - **Decode/encode**: [`wire`], [`codec`] and the record types in
//!   [`models`] map the upstream JSON wire format to typed Rust records
//!   (flattening prefixed sub-objects, parsing dates and clocks, and
//!   deriving the embedded convenience records).
//! - **Access**: [`adapter`] fetches raw bytes per logical resource from
//!   the open-data mirror, the authenticated services API or a local
//!   tree; [`serializer`] turns bytes into record batches and back; and
//!   [`repository`] composes the two behind a typed `get_*` interface,
//!   with a read-through caching proxy.
//! - **Traversal**: [`extract`] pulls every value of a chosen type out of
//!   a decoded object graph.

pub mod adapter;
pub mod cli;
pub mod codec;
pub mod error;
pub mod extract;
pub mod models;
pub mod parse;
pub mod repository;
pub mod serializer;
pub mod wire;

pub use error::{DataError, Result};
pub use models::{
    CompetitionId, CompetitionSeason, Event, Lineup, Match, MatchId, PlayerId, SeasonId,
};
pub use repository::{
    default_cache_dir, local_repository, open_data_repository, services_repository,
    CachedRepository, DataRepository, Repository, WritableRepository,
};
