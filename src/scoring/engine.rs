use super::config::{AttributeWeights, ATHLETICISM, ATTACK, DEFENSE};
use crate::error::BalanceError;
use crate::roster::Player;

/// Weights after validation: one finite, non-negative multiplier per attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedWeights {
    pub attack: f64,
    pub defense: f64,
    pub athleticism: f64,
}

impl ResolvedWeights {
    /// Weighted attribute vector, in (attack, defense, athleticism) order.
    pub fn vector(&self, player: &Player) -> [f64; 3] {
        [
            player.attack as f64 * self.attack,
            player.defense as f64 * self.defense,
            player.athleticism as f64 * self.athleticism,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeContribution {
    pub attribute: &'static str,
    pub value: i32,
    pub weight: f64,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub contributions: Vec<AttributeContribution>,
}

/// A player paired with its weighted strength for one balancing run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPlayer {
    pub player: Player,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

pub fn score_player(player: &Player, weights: &ResolvedWeights) -> ScoredPlayer {
    let contributions = vec![
        contribution(ATTACK, player.attack, weights.attack),
        contribution(DEFENSE, player.defense, weights.defense),
        contribution(ATHLETICISM, player.athleticism, weights.athleticism),
    ];
    let score = contributions.iter().map(|c| c.points).sum();

    ScoredPlayer {
        player: player.clone(),
        score,
        breakdown: ScoreBreakdown { contributions },
    }
}

/// Score every player, failing up front if the weights are unusable.
pub fn score_roster(
    players: &[Player],
    weights: &AttributeWeights,
) -> Result<Vec<ScoredPlayer>, BalanceError> {
    let resolved = weights.resolve()?;
    let scored: Vec<ScoredPlayer> = players.iter().map(|p| score_player(p, &resolved)).collect();
    check_finite(&scored)?;
    Ok(scored)
}

/// Weights that are finite on their own can still overflow once multiplied
/// out; such scores would poison every team sum.
pub(crate) fn check_finite<'a>(
    scored: impl IntoIterator<Item = &'a ScoredPlayer>,
) -> Result<(), BalanceError> {
    let problems: Vec<String> = scored
        .into_iter()
        .filter(|s| !s.score.is_finite())
        .map(|s| {
            format!(
                "weighted score of player {} is not a finite number ({})",
                s.player.id, s.score
            )
        })
        .collect();
    if problems.is_empty() {
        Ok(())
    } else {
        Err(BalanceError::InvalidWeights(problems))
    }
}

fn contribution(attribute: &'static str, value: i32, weight: f64) -> AttributeContribution {
    AttributeContribution {
        attribute,
        value,
        weight,
        points: value as f64 * weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(attack: f64, defense: f64, athleticism: f64) -> ResolvedWeights {
        ResolvedWeights {
            attack,
            defense,
            athleticism,
        }
    }

    #[test]
    fn test_uniform_score_is_attribute_sum() {
        let p = Player::new(1, "Ana", 8, 2, 5);
        let scored = score_player(&p, &weights(1.0, 1.0, 1.0));
        assert_eq!(scored.score, 15.0);
    }

    #[test]
    fn test_weighted_score() {
        let p = Player::new(1, "Ana", 8, 2, 5);
        let scored = score_player(&p, &weights(2.0, 0.5, 0.0));
        // 8*2 + 2*0.5 + 5*0
        assert_eq!(scored.score, 17.0);
    }

    #[test]
    fn test_breakdown_sums_to_score() {
        let p = Player::new(1, "Ana", 3, 7, 4);
        let scored = score_player(&p, &weights(1.5, 0.25, 2.0));
        let total: f64 = scored.breakdown.contributions.iter().map(|c| c.points).sum();
        assert_eq!(total, scored.score);
        assert_eq!(scored.breakdown.contributions[1].attribute, DEFENSE);
        assert_eq!(scored.breakdown.contributions[1].points, 1.75);
    }

    #[test]
    fn test_negative_attributes_allowed() {
        let p = Player::new(1, "Odd", -2, 4, 0);
        let scored = score_player(&p, &weights(1.0, 1.0, 1.0));
        assert_eq!(scored.score, 2.0);
    }

    #[test]
    fn test_vector() {
        let p = Player::new(1, "Ana", 8, 2, 5);
        assert_eq!(weights(1.0, 2.0, 0.5).vector(&p), [8.0, 4.0, 2.5]);
    }

    #[test]
    fn test_score_roster_rejects_overflowing_scores() {
        let players = vec![Player::new(1, "Ana", 8, 2, 5), Player::new(2, "Zero", 0, 2, 5)];
        let weights = AttributeWeights::uniform().with(ATTACK, f64::MAX);
        match score_roster(&players, &weights) {
            Err(BalanceError::InvalidWeights(problems)) => {
                assert_eq!(problems.len(), 1);
                assert!(problems[0].contains("player 1"));
            }
            other => panic!("expected InvalidWeights, got {:?}", other),
        }
    }

    #[test]
    fn test_score_roster_rejects_bad_weights() {
        let players = vec![Player::new(1, "Ana", 8, 2, 5)];
        let result = score_roster(&players, &AttributeWeights::empty());
        assert!(matches!(result, Err(BalanceError::InvalidWeights(_))));
    }
}
