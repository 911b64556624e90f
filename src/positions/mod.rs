//! Role & position assigner: give every player of one team a zone and a
//! normalized pitch coordinate.
//!
//! Coordinates run from `y = 1.0` (own goal line) to `y = 0.0` (opponent's
//! goal line), with `x = 0.5` the centre of the pitch.

pub mod layout;
pub mod roles;
pub mod zones;

pub use layout::{line_offset, zone_depth, GOALKEEPER_SPOT};
pub use roles::{fill_zones, pick_goalkeeper};
pub use zones::{outfield_zones, zone_capacities, Zone};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::BalanceError;
use crate::roster::{Player, PlayerId};
use crate::scoring::BalanceConfig;

/// A player with a spot on the pitch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPlayer {
    pub id: PlayerId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub zone: Zone,
}

impl PlacedPlayer {
    pub fn new(player: &Player, x: f64, y: f64, zone: Zone) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            x,
            y,
            zone,
        }
    }
}

/// Place a team with default tuning.
pub fn assign_positions(team: &[Player]) -> Vec<PlacedPlayer> {
    assign_positions_with(team, &BalanceConfig::default())
}

/// Place a team. The keeper comes first, then each outfield line from
/// defense to attack. An empty team yields no placements.
pub fn assign_positions_with(team: &[Player], config: &BalanceConfig) -> Vec<PlacedPlayer> {
    let Some(keeper_index) = pick_goalkeeper(team) else {
        return Vec::new();
    };

    let keeper = &team[keeper_index];
    let (x, y) = GOALKEEPER_SPOT;
    let mut placed = vec![PlacedPlayer::new(keeper, x, y, Zone::Goalkeeper)];

    let outfield: Vec<Player> = team
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != keeper_index)
        .map(|(_, p)| p.clone())
        .collect();

    let zones = fill_zones(outfield, config);
    placed.extend(layout::lay_out(&zones));

    tracing::debug!(
        players = team.len(),
        keeper = keeper.id,
        lines = zones.len(),
        "assigned positions"
    );
    placed
}

/// Check that every team member was placed exactly once.
pub fn check_placements(team: &[Player], placements: &[PlacedPlayer]) -> Result<(), BalanceError> {
    let mut counts: HashMap<PlayerId, usize> = team.iter().map(|p| (p.id, 0)).collect();
    for placement in placements {
        if let Some(count) = counts.get_mut(&placement.id) {
            *count += 1;
        }
    }

    let placed = counts.values().filter(|&&c| c == 1).count();
    if placed == team.len() && placements.len() == team.len() {
        Ok(())
    } else {
        Err(BalanceError::AssignmentInvariantViolation {
            expected: team.len(),
            placed,
        })
    }
}
