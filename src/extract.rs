//! Generic extraction of every value of one type from a record graph.
//!
//! `extract::<Team>(&match_)` walks the graph depth-first in field
//! declaration order and returns a reference to every [`Team`] it can
//! reach, duplicates preserved. A matched value is yielded without
//! descending into it; containers yield their elements; scalars are
//! opaque leaves, so strings in particular are never decomposed into
//! their characters.

use std::any::Any;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use crate::models::*;

/// A node in the record graph: any value the walk can visit.
pub trait Extractable: Any {
    /// The node's direct children, in field declaration order.
    fn children(&self) -> Vec<&dyn Extractable> {
        Vec::new()
    }
}

/// Collect every reachable value of type `T` under `root`.
pub fn extract<T: Any>(root: &dyn Extractable) -> Vec<&T> {
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

fn walk<'a, T: Any>(node: &'a dyn Extractable, out: &mut Vec<&'a T>) {
    if let Some(hit) = (node as &dyn Any).downcast_ref::<T>() {
        out.push(hit);
        return;
    }
    for child in node.children() {
        walk(child, out);
    }
}

macro_rules! extract_leaf {
    ($($ty:ty),+ $(,)?) => {
        $(impl Extractable for $ty {})+
    };
}

extract_leaf!(
    u8, u16, u32, u64, f64, bool, String, NaiveDate, NaiveTime, NaiveDateTime, Uuid,
    CompetitionId, SeasonId, MatchId, PlayerId, Gender, MatchStatus,
);

impl<T: Extractable> Extractable for Option<T> {
    fn children(&self) -> Vec<&dyn Extractable> {
        self.iter().map(|v| v as &dyn Extractable).collect()
    }
}

impl<T: Extractable> Extractable for Vec<T> {
    fn children(&self) -> Vec<&dyn Extractable> {
        self.iter().map(|v| v as &dyn Extractable).collect()
    }
}

macro_rules! extract_record {
    ($($ty:ident { $($field:ident),+ $(,)? })+) => {
        $(
            impl Extractable for $ty {
                fn children(&self) -> Vec<&dyn Extractable> {
                    vec![$(&self.$field as &dyn Extractable),+]
                }
            }
        )+
    };
}

extract_record! {
    Country { id, name }
    CompetitionStage { id, name }
    EventType { id, name }
    PlayPattern { id, name }
    Position { id, name }
    StatsBombObject { id, name }
    Team { id, name, gender, country, managers }
    Competition { id, name, gender, country_name }
    Season { id, name }
    CompetitionSeason {
        competition_id, competition_name, competition_gender, country_name,
        season_id, season_name, match_updated, match_available,
        competition, season,
    }
    Manager { id, name, nickname, birth_date, country }
    Referee { id, name, country }
    MatchMetadata { data_version, xy_fidelity_version, shot_fidelity_version }
    Match {
        id, competition, season, date, kick_off, match_week, status,
        home_team, away_team, home_score, away_score, referee,
        competition_stage, metadata, last_updated,
    }
    Player { id, name, birth_date, gender, height, weight, country, nickname }
    LineupPlayer {
        player_id, player_name, player_nickname, player_gender,
        player_height, player_weight, birth_date, country, jersey_number,
        player,
    }
    Lineup { team_id, team_name, lineup, team }
    TacticsPlayer { player, position, jersey_number }
    Tactics { formation, lineup }
    FreezeFrame { location, player, position, teammate }
    FiftyFifty { outcome, counterpress }
    BadBehaviour { card }
    BallReceipt { outcome }
    BallRecovery { recovery_failure, offensive }
    Block { deflection, offensive, save_block, counterpress }
    Carry { end_location }
    Clearance { body_part, aerial_won }
    Dribble { outcome, overrun, nutmeg, no_touch }
    DribbledPast { counterpress }
    Duel { kind, outcome, counterpress }
    FoulCommitted { kind, card, penalty, advantage, offensive, counterpress }
    FoulWon { defensive, advantage, penalty }
    Goalkeeper { outcome, body_part, position, technique, kind, end_location }
    HalfEnd { early_video_end, match_suspended }
    HalfStart { late_video_start }
    InjuryStoppage { in_chain }
    Interception { outcome }
    Miscontrol { aerial_won }
    Pass {
        length, angle, height, end_location, recipient, body_part, kind,
        outcome, technique, aerial_won, assisted_shot_id, backheel,
        deflected, miscommunication, cross, cut_back, switch, shot_assist,
        goal_assist, xclaim,
    }
    PlayerOff { permanent }
    Pressure { counterpress }
    Shot {
        end_location, statsbomb_xg, technique, body_part, kind, outcome,
        freeze_frame, key_pass_id, aerial_won, follows_dribble, first_time,
        open_goal, deflected, one_on_one, statsbomb_xg2,
    }
    Substitution { replacement, outcome }
    Event {
        id, index, period, timestamp, minute, second, event_type,
        possession, possession_team, play_pattern, team, duration,
        related_events, location, under_pressure, off_camera, out,
        counterpress, player, position, tactics,
        fifty_fifty, bad_behaviour, ball_receipt, ball_recovery, block,
        carry, clearance, dribble, dribbled_past, duel, foul_committed,
        foul_won, goalkeeper, half_end, half_start, injury_stoppage,
        interception, miscontrol, pass, player_off, pressure, shot,
        substitution,
    }
}

#[cfg(test)]
mod tests;
