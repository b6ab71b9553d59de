//! Entry point: parse CLI, pick a data source and dispatch.

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use statsbomb_data::{
    cli::{Command, SbData},
    default_cache_dir, local_repository, open_data_repository, parse,
    repository::CachedRepository,
    serializer::{JsonSerializer, Serializer},
    services_repository, Repository,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let app = SbData::parse();
    let cache_dir = app.cache_dir.clone().unwrap_or_else(default_cache_dir);

    if let Some(base_dir) = app.local.clone() {
        run(&local_repository(base_dir), &app)
    } else if let Some((username, password)) = credentials(&app) {
        run(
            &CachedRepository::new(services_repository(username, password), cache_dir),
            &app,
        )
    } else {
        run(
            &CachedRepository::new(open_data_repository(), cache_dir),
            &app,
        )
    }
}

/// Services credentials from flags, falling back to the environment.
/// Both halves are required; anything less means the open-data mirror.
fn credentials(app: &SbData) -> Option<(String, String)> {
    let username = app
        .username
        .clone()
        .or_else(|| std::env::var("SB_USERNAME").ok())?;
    let password = app
        .password
        .clone()
        .or_else(|| std::env::var("SB_PASSWORD").ok())?;
    Some((username, password))
}

fn run<R: Repository>(repository: &R, app: &SbData) -> anyhow::Result<()> {
    match &app.command {
        Command::Competitions => {
            let records = repository.get_competitions()?;
            if app.json {
                print_json(JsonSerializer.serialize_competitions(&records)?)?;
            } else {
                for cs in &records {
                    println!(
                        "{}/{}  {} ({})",
                        cs.competition_id, cs.season_id, cs.competition_name, cs.season_name
                    );
                }
            }
        }

        Command::Matches {
            competition_id,
            season_id,
        } => {
            let records = repository.get_matches(*competition_id, *season_id)?;
            if app.json {
                print_json(JsonSerializer.serialize_matches(&records)?)?;
            } else {
                for m in &records {
                    println!(
                        "{}  {}  {} {} - {} {}",
                        m.id,
                        m.date,
                        m.home_team.name,
                        score(m.home_score),
                        score(m.away_score),
                        m.away_team.name
                    );
                }
            }
        }

        Command::Lineups { match_id } => {
            let records = repository.get_lineups(*match_id)?;
            if app.json {
                print_json(JsonSerializer.serialize_lineups(&records)?)?;
            } else {
                for lineup in &records {
                    println!("{} ({})", lineup.team_name, lineup.team_id);
                    for entry in &lineup.lineup {
                        println!("  #{:>2} {}", entry.jersey_number, entry.player_name);
                    }
                }
            }
        }

        Command::Events { match_id, validate } => {
            let records = repository.get_events(*match_id)?;
            if *validate {
                parse::validate_events(&records)?;
            }
            if app.json {
                print_json(JsonSerializer.serialize_events(&records)?)?;
            } else {
                for event in &records {
                    let actor = event
                        .player
                        .as_ref()
                        .map(|p| p.name.as_str())
                        .unwrap_or("-");
                    println!(
                        "{:>5}  {:>3}:{:02}  {:<20}  {}",
                        event.index, event.minute, event.second, event.event_type.name, actor
                    );
                }
                println!("{} events", records.len());
            }
        }
    }

    Ok(())
}

fn score(value: Option<u8>) -> String {
    match value {
        Some(goals) => goals.to_string(),
        None => "?".to_string(),
    }
}

fn print_json(bytes: Vec<u8>) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&bytes)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
