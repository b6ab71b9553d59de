//! Play-by-play events (v5 events route) and the event-metadata variant
//! set.
//!
//! Each event carries at most one populated metadata sub-record, keyed by
//! the event's `type` ("Pass" events carry `pass`, and so on). The wire
//! format expresses this as a set of optional sibling keys rather than a
//! tagged union, and upstream extends the metadata schemas additively, so
//! every metadata field decodes defensively: optional, null-defaulted,
//! unknown keys ignored. The at-most-one invariant is checked by
//! [`crate::parse::validate_events`], not enforced during decode.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::codec;
use crate::error::{DataError, Result};
use crate::models::common::{EventType, PlayPattern, Position, StatsBombObject, Team};
use crate::models::lineup::Player;
use crate::wire::{self, FromWire, ToWire, WireObject};

/// One entry of a tactical lineup. Unlike the lineups route, the player
/// here arrives as a plain nested object with no key prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TacticsPlayer {
    pub player: Player,
    pub position: Position,
    pub jersey_number: u8,
}

impl FromWire for TacticsPlayer {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = wire::object(value)?;
        Ok(Self {
            player: wire::required(obj, "player")?,
            position: wire::required(obj, "position")?,
            jersey_number: wire::required(obj, "jersey_number")?,
        })
    }
}

impl ToWire for TacticsPlayer {
    fn to_wire(&self) -> Result<Value> {
        let mut obj = WireObject::new();
        wire::insert(&mut obj, "player", &self.player)?;
        wire::insert(&mut obj, "position", &self.position)?;
        wire::insert(&mut obj, "jersey_number", &self.jersey_number)?;
        Ok(Value::Object(obj))
    }
}

/// A team shape at a point in the match. The formation travels as a bare
/// integer (`4231`) but is kept as a digit string: leading digits are
/// positional, not numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tactics {
    pub formation: String,
    pub lineup: Vec<TacticsPlayer>,
}

impl FromWire for Tactics {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = wire::object(value)?;
        let formation: u64 = wire::required(obj, "formation")?;
        Ok(Self {
            formation: formation.to_string(),
            lineup: wire::required(obj, "lineup")?,
        })
    }
}

impl ToWire for Tactics {
    fn to_wire(&self) -> Result<Value> {
        let formation: u64 =
            self.formation
                .parse()
                .map_err(|_| DataError::MalformedScalar {
                    value: self.formation.clone(),
                    expected: "formation digit string",
                })?;
        let mut obj = WireObject::new();
        obj.insert("formation".to_string(), Value::from(formation));
        wire::insert(&mut obj, "lineup", &self.lineup)?;
        Ok(Value::Object(obj))
    }
}

/// One player in a shot's freeze frame: where everyone stood when the
/// shot was taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreezeFrame {
    pub location: Vec<f64>,
    pub player: Player,
    pub position: Position,
    pub teammate: bool,
}

impl FromWire for FreezeFrame {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = wire::object(value)?;
        Ok(Self {
            location: wire::required(obj, "location")?,
            player: wire::required(obj, "player")?,
            position: wire::required(obj, "position")?,
            teammate: wire::required(obj, "teammate")?,
        })
    }
}

impl ToWire for FreezeFrame {
    fn to_wire(&self) -> Result<Value> {
        let mut obj = WireObject::new();
        wire::insert(&mut obj, "location", &self.location)?;
        wire::insert(&mut obj, "player", &self.player)?;
        wire::insert(&mut obj, "position", &self.position)?;
        wire::insert(&mut obj, "teammate", &self.teammate)?;
        Ok(Value::Object(obj))
    }
}

/// Generate one event-metadata record together with its wire descriptor.
///
/// Every field is optional with a null default; a field whose name is not
/// its wire key states the key with `as "..."`.
macro_rules! event_metadata {
    ($($(#[$meta:meta])* pub struct $name:ident { $($field:ident $(as $key:literal)?: $ty:ty),+ $(,)? })+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
            pub struct $name {
                $(pub $field: Option<$ty>,)+
            }

            impl FromWire for $name {
                fn from_wire(value: &Value) -> Result<Self> {
                    let obj = wire::object(value)?;
                    Ok(Self {
                        $($field: wire::optional(obj, event_metadata!(@key $field $($key)?))?,)+
                    })
                }
            }

            impl ToWire for $name {
                fn to_wire(&self) -> Result<Value> {
                    let mut obj = WireObject::new();
                    $(wire::insert_opt(&mut obj, event_metadata!(@key $field $($key)?), &self.$field)?;)+
                    Ok(Value::Object(obj))
                }
            }
        )+
    };
    (@key $field:ident) => { stringify!($field) };
    (@key $field:ident $key:literal) => { $key };
}

event_metadata! {
    /// A 50/50 challenge for a loose ball.
    pub struct FiftyFifty {
        outcome: StatsBombObject,
        counterpress: bool,
    }

    /// A card shown outside the run of play.
    pub struct BadBehaviour {
        card: StatsBombObject,
    }

    pub struct BallReceipt {
        outcome: StatsBombObject,
    }

    pub struct BallRecovery {
        recovery_failure: bool,
        offensive: bool,
    }

    pub struct Block {
        deflection: bool,
        offensive: bool,
        save_block: bool,
        counterpress: bool,
    }

    /// The ball being moved under control by a player.
    pub struct Carry {
        end_location: Vec<f64>,
    }

    pub struct Clearance {
        body_part: StatsBombObject,
        aerial_won: bool,
    }

    pub struct Dribble {
        outcome: StatsBombObject,
        overrun: bool,
        nutmeg: bool,
        no_touch: bool,
    }

    pub struct DribbledPast {
        counterpress: bool,
    }

    pub struct Duel {
        kind as "type": StatsBombObject,
        outcome: StatsBombObject,
        counterpress: bool,
    }

    pub struct FoulCommitted {
        kind as "type": StatsBombObject,
        card: StatsBombObject,
        penalty: bool,
        advantage: bool,
        offensive: bool,
        counterpress: bool,
    }

    pub struct FoulWon {
        defensive: bool,
        advantage: bool,
        penalty: bool,
    }

    pub struct Goalkeeper {
        outcome: StatsBombObject,
        body_part: StatsBombObject,
        position: StatsBombObject,
        technique: StatsBombObject,
        kind as "type": StatsBombObject,
        end_location: Vec<f64>,
    }

    pub struct HalfEnd {
        early_video_end: bool,
        match_suspended: bool,
    }

    pub struct HalfStart {
        late_video_start: bool,
    }

    pub struct InjuryStoppage {
        in_chain: bool,
    }

    pub struct Interception {
        outcome: StatsBombObject,
    }

    pub struct Miscontrol {
        aerial_won: bool,
    }

    /// The richest metadata record: every qualifier a pass can carry.
    pub struct Pass {
        length: f64,
        angle: f64,
        height: StatsBombObject,
        end_location: Vec<f64>,
        recipient: Player,
        body_part: StatsBombObject,
        kind as "type": StatsBombObject,
        outcome: StatsBombObject,
        technique: StatsBombObject,
        aerial_won: bool,
        assisted_shot_id: Uuid,
        backheel: bool,
        deflected: bool,
        miscommunication: bool,
        cross: bool,
        cut_back: bool,
        switch: bool,
        shot_assist: bool,
        goal_assist: bool,
        xclaim: f64,
    }

    pub struct PlayerOff {
        permanent: bool,
    }

    pub struct Pressure {
        counterpress: bool,
    }

    pub struct Shot {
        end_location: Vec<f64>,
        statsbomb_xg: f64,
        technique: StatsBombObject,
        body_part: StatsBombObject,
        kind as "type": StatsBombObject,
        outcome: StatsBombObject,
        freeze_frame: Vec<FreezeFrame>,
        key_pass_id: Uuid,
        aerial_won: bool,
        follows_dribble: bool,
        first_time: bool,
        open_goal: bool,
        deflected: bool,
        one_on_one: bool,
        statsbomb_xg2: f64,
    }

    pub struct Substitution {
        replacement: Player,
        outcome: StatsBombObject,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub index: u32,
    pub period: u8,
    pub timestamp: NaiveTime,
    pub minute: u16,
    pub second: u8,
    pub event_type: EventType,
    pub possession: u32,
    pub possession_team: Team,
    pub play_pattern: PlayPattern,
    pub team: Team,
    pub duration: Option<f64>,
    pub related_events: Vec<Uuid>,
    pub location: Option<Vec<f64>>,
    pub under_pressure: Option<bool>,
    pub off_camera: Option<bool>,
    pub out: Option<bool>,
    pub counterpress: Option<bool>,
    pub player: Option<Player>,
    pub position: Option<Position>,
    pub tactics: Option<Tactics>,

    // The metadata variant set. At most one is populated in well-formed
    // data; see `populated_metadata`.
    pub fifty_fifty: Option<FiftyFifty>,
    pub bad_behaviour: Option<BadBehaviour>,
    pub ball_receipt: Option<BallReceipt>,
    pub ball_recovery: Option<BallRecovery>,
    pub block: Option<Block>,
    pub carry: Option<Carry>,
    pub clearance: Option<Clearance>,
    pub dribble: Option<Dribble>,
    pub dribbled_past: Option<DribbledPast>,
    pub duel: Option<Duel>,
    pub foul_committed: Option<FoulCommitted>,
    pub foul_won: Option<FoulWon>,
    pub goalkeeper: Option<Goalkeeper>,
    pub half_end: Option<HalfEnd>,
    pub half_start: Option<HalfStart>,
    pub injury_stoppage: Option<InjuryStoppage>,
    pub interception: Option<Interception>,
    pub miscontrol: Option<Miscontrol>,
    pub pass: Option<Pass>,
    pub player_off: Option<PlayerOff>,
    pub pressure: Option<Pressure>,
    pub shot: Option<Shot>,
    pub substitution: Option<Substitution>,
}

impl Event {
    /// Names of the metadata variants this event populates.
    ///
    /// Well-formed data yields zero or one entries; anything more is an
    /// upstream consistency violation that
    /// [`crate::parse::validate_events`] reports as an error.
    pub fn populated_metadata(&self) -> Vec<&'static str> {
        let mut kinds = Vec::new();
        macro_rules! check {
            ($($field:ident),+ $(,)?) => {
                $(if self.$field.is_some() {
                    kinds.push(stringify!($field));
                })+
            };
        }
        check!(
            fifty_fifty,
            bad_behaviour,
            ball_receipt,
            ball_recovery,
            block,
            carry,
            clearance,
            dribble,
            dribbled_past,
            duel,
            foul_committed,
            foul_won,
            goalkeeper,
            half_end,
            half_start,
            injury_stoppage,
            interception,
            miscontrol,
            pass,
            player_off,
            pressure,
            shot,
            substitution,
        );
        kinds
    }
}

impl FromWire for Event {
    fn from_wire(value: &Value) -> Result<Self> {
        let obj = wire::object(value)?;
        Ok(Self {
            id: wire::required(obj, "id")?,
            index: wire::required(obj, "index")?,
            period: wire::required(obj, "period")?,
            timestamp: wire::required_scalar(obj, "timestamp", codec::clock::decode)?,
            minute: wire::required(obj, "minute")?,
            second: wire::required(obj, "second")?,
            event_type: wire::required(obj, "type")?,
            possession: wire::required(obj, "possession")?,
            possession_team: wire::required(obj, "possession_team")?,
            play_pattern: wire::required(obj, "play_pattern")?,
            team: wire::required(obj, "team")?,
            duration: wire::optional(obj, "duration")?,
            related_events: wire::optional(obj, "related_events")?.unwrap_or_default(),
            location: wire::optional(obj, "location")?,
            under_pressure: wire::optional(obj, "under_pressure")?,
            off_camera: wire::optional(obj, "off_camera")?,
            out: wire::optional(obj, "out")?,
            counterpress: wire::optional(obj, "counterpress")?,
            player: wire::optional(obj, "player")?,
            position: wire::optional(obj, "position")?,
            tactics: wire::optional(obj, "tactics")?,
            fifty_fifty: wire::optional(obj, "50_50")?,
            bad_behaviour: wire::optional(obj, "bad_behaviour")?,
            ball_receipt: wire::optional(obj, "ball_receipt")?,
            ball_recovery: wire::optional(obj, "ball_recovery")?,
            block: wire::optional(obj, "block")?,
            carry: wire::optional(obj, "carry")?,
            clearance: wire::optional(obj, "clearance")?,
            dribble: wire::optional(obj, "dribble")?,
            dribbled_past: wire::optional(obj, "dribbled_past")?,
            duel: wire::optional(obj, "duel")?,
            foul_committed: wire::optional(obj, "foul_committed")?,
            foul_won: wire::optional(obj, "foul_won")?,
            goalkeeper: wire::optional(obj, "goalkeeper")?,
            half_end: wire::optional(obj, "half_end")?,
            half_start: wire::optional(obj, "half_start")?,
            injury_stoppage: wire::optional(obj, "injury_stoppage")?,
            interception: wire::optional(obj, "interception")?,
            miscontrol: wire::optional(obj, "miscontrol")?,
            pass: wire::optional(obj, "pass")?,
            player_off: wire::optional(obj, "player_off")?,
            pressure: wire::optional(obj, "pressure")?,
            shot: wire::optional(obj, "shot")?,
            substitution: wire::optional(obj, "substitution")?,
        })
    }
}

impl ToWire for Event {
    fn to_wire(&self) -> Result<Value> {
        let mut obj = WireObject::new();
        wire::insert(&mut obj, "id", &self.id)?;
        wire::insert(&mut obj, "index", &self.index)?;
        wire::insert(&mut obj, "period", &self.period)?;
        wire::insert_scalar(&mut obj, "timestamp", codec::clock::encode, &self.timestamp);
        wire::insert(&mut obj, "minute", &self.minute)?;
        wire::insert(&mut obj, "second", &self.second)?;
        wire::insert(&mut obj, "type", &self.event_type)?;
        wire::insert(&mut obj, "possession", &self.possession)?;
        wire::insert(&mut obj, "possession_team", &self.possession_team)?;
        wire::insert(&mut obj, "play_pattern", &self.play_pattern)?;
        wire::insert(&mut obj, "team", &self.team)?;
        wire::insert_opt(&mut obj, "duration", &self.duration)?;
        wire::insert(&mut obj, "related_events", &self.related_events)?;
        wire::insert_opt(&mut obj, "location", &self.location)?;
        wire::insert_opt(&mut obj, "under_pressure", &self.under_pressure)?;
        wire::insert_opt(&mut obj, "off_camera", &self.off_camera)?;
        wire::insert_opt(&mut obj, "out", &self.out)?;
        wire::insert_opt(&mut obj, "counterpress", &self.counterpress)?;
        wire::insert_opt(&mut obj, "player", &self.player)?;
        wire::insert_opt(&mut obj, "position", &self.position)?;
        wire::insert_opt(&mut obj, "tactics", &self.tactics)?;
        wire::insert_opt(&mut obj, "50_50", &self.fifty_fifty)?;
        wire::insert_opt(&mut obj, "bad_behaviour", &self.bad_behaviour)?;
        wire::insert_opt(&mut obj, "ball_receipt", &self.ball_receipt)?;
        wire::insert_opt(&mut obj, "ball_recovery", &self.ball_recovery)?;
        wire::insert_opt(&mut obj, "block", &self.block)?;
        wire::insert_opt(&mut obj, "carry", &self.carry)?;
        wire::insert_opt(&mut obj, "clearance", &self.clearance)?;
        wire::insert_opt(&mut obj, "dribble", &self.dribble)?;
        wire::insert_opt(&mut obj, "dribbled_past", &self.dribbled_past)?;
        wire::insert_opt(&mut obj, "duel", &self.duel)?;
        wire::insert_opt(&mut obj, "foul_committed", &self.foul_committed)?;
        wire::insert_opt(&mut obj, "foul_won", &self.foul_won)?;
        wire::insert_opt(&mut obj, "goalkeeper", &self.goalkeeper)?;
        wire::insert_opt(&mut obj, "half_end", &self.half_end)?;
        wire::insert_opt(&mut obj, "half_start", &self.half_start)?;
        wire::insert_opt(&mut obj, "injury_stoppage", &self.injury_stoppage)?;
        wire::insert_opt(&mut obj, "interception", &self.interception)?;
        wire::insert_opt(&mut obj, "miscontrol", &self.miscontrol)?;
        wire::insert_opt(&mut obj, "pass", &self.pass)?;
        wire::insert_opt(&mut obj, "player_off", &self.player_off)?;
        wire::insert_opt(&mut obj, "pressure", &self.pressure)?;
        wire::insert_opt(&mut obj, "shot", &self.shot)?;
        wire::insert_opt(&mut obj, "substitution", &self.substitution)?;
        Ok(Value::Object(obj))
    }
}

#[cfg(test)]
mod tests;
