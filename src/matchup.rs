use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::balance::{fresh_seed, partition, Clusterer, Team};
use crate::error::BalanceError;
use crate::positions::{assign_positions_with, check_placements, PlacedPlayer};
use crate::roster::Player;
use crate::scoring::{AttributeWeights, BalanceConfig, ScoredPlayer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamLabel {
    A,
    B,
}

impl fmt::Display for TeamLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamLabel::A => f.write_str("A"),
            TeamLabel::B => f.write_str("B"),
        }
    }
}

/// One side of a matchup, ready to be stored as "game" rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSheet {
    pub label: TeamLabel,
    pub strength: f64,
    pub players: Vec<PlacedPlayer>,
    #[serde(skip)]
    pub scored: Vec<ScoredPlayer>,
}

impl TeamSheet {
    /// Weighted score of a team member, if present
    pub fn score_of(&self, id: u64) -> Option<&ScoredPlayer> {
        self.scored.iter().find(|s| s.player.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub seed: u64,
    pub generated_at: DateTime<Utc>,
    pub teams: [TeamSheet; 2],
}

impl Matchup {
    pub fn team(&self, label: TeamLabel) -> &TeamSheet {
        match label {
            TeamLabel::A => &self.teams[0],
            TeamLabel::B => &self.teams[1],
        }
    }

    pub fn imbalance(&self) -> f64 {
        (self.teams[0].strength - self.teams[1].strength).abs()
    }

    pub fn player_count(&self) -> usize {
        self.teams.iter().map(|t| t.players.len()).sum()
    }
}

/// Split the roster, place both teams and verify nobody was lost.
///
/// The same seed, roster and settings always produce the same matchup.
pub fn create_matchup(
    players: &[Player],
    weights: &AttributeWeights,
    config: &BalanceConfig,
    clusterer: &dyn Clusterer,
    seed: Option<u64>,
) -> Result<Matchup, BalanceError> {
    let seed = seed.unwrap_or_else(fresh_seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let split = partition(players, weights, config, clusterer, &mut rng)?;

    let team_a = build_sheet(TeamLabel::A, split.team_a, config)?;
    let team_b = build_sheet(TeamLabel::B, split.team_b, config)?;

    let matchup = Matchup {
        seed,
        generated_at: Utc::now(),
        teams: [team_a, team_b],
    };

    tracing::info!(
        seed,
        players = matchup.player_count(),
        imbalance = matchup.imbalance(),
        "matchup created"
    );
    Ok(matchup)
}

fn build_sheet(label: TeamLabel, team: Team, config: &BalanceConfig) -> Result<TeamSheet, BalanceError> {
    let roster = team.roster();
    let players = assign_positions_with(&roster, config);
    check_placements(&roster, &players)?;

    Ok(TeamSheet {
        label,
        strength: team.strength,
        players,
        scored: team.players,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::{KMeans, NoClustering};
    use crate::positions::Zone;

    fn scenario_roster() -> Vec<Player> {
        vec![
            Player::new(1, "Striker", 8, 2, 5),
            Player::new(2, "Stopper", 2, 8, 5),
            Player::new(3, "Mid One", 5, 5, 5),
            Player::new(4, "Mid Two", 5, 5, 5),
            Player::new(5, "Poacher", 9, 1, 4),
            Player::new(6, "Sweeper", 1, 9, 4),
        ]
    }

    fn build(seed: u64) -> Matchup {
        create_matchup(
            &scenario_roster(),
            &AttributeWeights::uniform(),
            &BalanceConfig::default(),
            &KMeans::default(),
            Some(seed),
        )
        .unwrap()
    }

    #[test]
    fn test_scenario_matchup() {
        for seed in 0..30 {
            let matchup = build(seed);
            assert_eq!(matchup.seed, seed);
            assert_eq!(matchup.teams[0].players.len(), 3);
            assert_eq!(matchup.teams[1].players.len(), 3);
            assert!(matchup.imbalance() <= 14.0);

            for sheet in &matchup.teams {
                let keeper = &sheet.players[0];
                assert_eq!(keeper.zone, Zone::Goalkeeper);
                assert_eq!((keeper.x, keeper.y), (0.5, 1.0));
                let min_total = sheet
                    .scored
                    .iter()
                    .map(|s| s.player.total())
                    .min()
                    .unwrap();
                let keeper_total = sheet.score_of(keeper.id).unwrap().player.total();
                assert_eq!(keeper_total, min_total);
            }
        }
    }

    #[test]
    fn test_matchup_replays_from_seed() {
        let first = build(77);
        let second = build(77);
        assert_eq!(first.teams, second.teams);
    }

    #[test]
    fn test_matchup_propagates_errors() {
        let result = create_matchup(
            &scenario_roster()[..1],
            &AttributeWeights::uniform(),
            &BalanceConfig::default(),
            &NoClustering,
            Some(1),
        );
        assert_eq!(result, Err(BalanceError::InsufficientPlayers { count: 1 }));
    }

    #[test]
    fn test_repeated_ids_are_a_caller_error() {
        let players: Vec<Player> = scenario_roster()
            .into_iter()
            .map(|p| Player { id: 7, ..p })
            .collect();
        let err = create_matchup(
            &players,
            &AttributeWeights::uniform(),
            &BalanceConfig::default(),
            &NoClustering,
            Some(1),
        )
        .unwrap_err();
        assert_eq!(err, BalanceError::DuplicatePlayerIds { ids: vec![7] });
        assert!(err.is_caller_error());
    }

    #[test]
    fn test_json_shape() {
        let matchup = build(5);
        let json = serde_json::to_value(&matchup).unwrap();
        assert_eq!(json["seed"], 5);
        assert_eq!(json["teams"][0]["label"], "A");
        assert_eq!(json["teams"][1]["label"], "B");
        assert!(json["teams"][0]["players"][0]["zone"].is_string());
        assert!(json["teams"][0].get("scored").is_none());
    }

    #[test]
    fn test_team_lookup() {
        let matchup = build(9);
        assert_eq!(matchup.team(TeamLabel::B).label, TeamLabel::B);
    }
}
