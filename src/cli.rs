//! Command-line interface definitions for the `sbdata` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::{CompetitionId, MatchId, SeasonId};

/// Fetch and inspect StatsBomb football data.
#[derive(Debug, Parser)]
#[command(name = "sbdata", version, about)]
pub struct SbData {
    /// Read from a local tree of wire-format JSON files instead of the network
    #[arg(long, global = true)]
    pub local: Option<PathBuf>,

    /// Services API username (falls back to SB_USERNAME)
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// Services API password (falls back to SB_PASSWORD)
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Directory for the persisted cache (defaults to the platform cache dir)
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Print full records as wire-format JSON instead of one-line summaries
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every competition/season pair
    Competitions,
    /// List the matches of one competition season
    Matches {
        competition_id: CompetitionId,
        season_id: SeasonId,
    },
    /// Show both team lineups for a match
    Lineups { match_id: MatchId },
    /// Fetch the event stream of a match
    Events {
        match_id: MatchId,
        /// Fail if any event populates more than one metadata variant
        #[arg(long)]
        validate: bool,
    },
}
