use super::types::Player;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// On-disk roster layout: either a bare list or `{ "players": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RosterFile {
    List(Vec<Player>),
    Wrapped { players: Vec<Player> },
}

/// Load a roster from a JSON file
///
/// Unlike config, a missing roster is always an error: there is nothing
/// sensible to balance without one.
pub fn load_roster(path: &Path) -> Result<Vec<Player>> {
    if !path.exists() {
        anyhow::bail!("Roster file not found at {}", path.display());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open roster file at {}", path.display()))?;

    let roster: RosterFile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse roster: invalid JSON in {}", path.display()))?;

    let players = match roster {
        RosterFile::List(players) => players,
        RosterFile::Wrapped { players } => players,
    };

    tracing::debug!(count = players.len(), path = %path.display(), "loaded roster");
    Ok(players)
}
