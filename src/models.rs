//! The immutable domain records.
//!
//! Every record is constructed once during decode and never mutated;
//! equality is structural. Wire-format mapping lives in the records'
//! [`crate::wire::FromWire`]/[`crate::wire::ToWire`] impls; the serde
//! derives on the structs themselves carry the binary object-graph
//! representation used by the local cache.

pub mod common;
pub mod competition;
pub mod event;
pub mod ids;
pub mod lineup;
pub mod matches;

pub use common::{CompetitionStage, Country, EventType, Gender, PlayPattern, Position, StatsBombObject, Team};
pub use competition::{Competition, CompetitionSeason, Season};
pub use event::{
    BadBehaviour, BallReceipt, BallRecovery, Block, Carry, Clearance, Dribble, DribbledPast, Duel,
    Event, FiftyFifty, FoulCommitted, FoulWon, FreezeFrame, Goalkeeper, HalfEnd, HalfStart,
    InjuryStoppage, Interception, Miscontrol, Pass, PlayerOff, Pressure, Shot, Substitution,
    Tactics, TacticsPlayer,
};
pub use ids::{CompetitionId, MatchId, PlayerId, SeasonId};
pub use lineup::{Lineup, LineupPlayer, Player};
pub use matches::{Manager, Match, MatchMetadata, MatchStatus, Referee};
