//! Team partitioner: split a roster into two size-balanced sides whose
//! weighted strength is as even as a greedy pass can make it.

pub mod cluster;
pub mod greedy;
pub mod tiebreak;

pub use cluster::{ClusterError, Clusterer, KMeans, NoClustering, Vector3};
pub use greedy::split_greedy;
pub use tiebreak::jitter_ties;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::error::BalanceError;
use crate::roster::{Player, PlayerId};
use crate::scoring::{check_finite, score_player, AttributeWeights, BalanceConfig, ScoredPlayer};

/// A scored player waiting to be placed, with its similarity cluster if one
/// was computed.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub scored: ScoredPlayer,
    pub cluster: Option<usize>,
}

/// One side of a split, with its accumulated strength.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Team {
    pub players: Vec<ScoredPlayer>,
    pub strength: f64,
}

impl Team {
    pub fn push(&mut self, scored: ScoredPlayer) {
        self.strength += scored.score;
        self.players.push(scored);
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|s| s.player.id).collect()
    }

    /// The bare roster entries, in assignment order.
    pub fn roster(&self) -> Vec<Player> {
        self.players.iter().map(|s| s.player.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub team_a: Team,
    pub team_b: Team,
    /// Tie-break swaps applied to the ranking
    pub swaps: usize,
}

impl Partition {
    /// Absolute strength difference between the two sides.
    pub fn imbalance(&self) -> f64 {
        (self.team_a.strength - self.team_b.strength).abs()
    }
}

/// Split `players` into two teams.
///
/// Scores every player, optionally clusters them, ranks by score with
/// randomized tie-breaks, then assigns greedily to the weaker side under a
/// `ceil(n/2)` size cap. Clustering failures are logged and ignored.
pub fn partition<R: Rng + ?Sized>(
    players: &[Player],
    weights: &AttributeWeights,
    config: &BalanceConfig,
    clusterer: &dyn Clusterer,
    rng: &mut R,
) -> Result<Partition, BalanceError> {
    if players.len() < 2 {
        return Err(BalanceError::InsufficientPlayers {
            count: players.len(),
        });
    }
    let repeated = repeated_ids(players);
    if !repeated.is_empty() {
        return Err(BalanceError::DuplicatePlayerIds { ids: repeated });
    }
    let resolved = weights.resolve()?;

    let labels = if config.cluster_count > 0 {
        let vectors: Vec<Vector3> = players.iter().map(|p| resolved.vector(p)).collect();
        let k = config.cluster_count.min(players.len());
        match clusterer.cluster(&vectors, k) {
            Ok(labels) if labels.len() == players.len() => Some(labels),
            Ok(labels) => {
                tracing::warn!(
                    expected = players.len(),
                    got = labels.len(),
                    "clusterer returned wrong label count, balancing without clusters"
                );
                None
            }
            Err(ClusterError::Unavailable) => None,
            Err(e) => {
                tracing::warn!(error = %e, "clustering failed, balancing without clusters");
                None
            }
        }
    } else {
        None
    };

    let mut ranked: Vec<Candidate> = players
        .iter()
        .enumerate()
        .map(|(i, p)| Candidate {
            scored: score_player(p, &resolved),
            cluster: labels.as_ref().map(|l| l[i]),
        })
        .collect();
    check_finite(ranked.iter().map(|c| &c.scored))?;

    // Stable sort keeps roster order among exact ties
    ranked.sort_by(|a, b| {
        b.scored
            .score
            .partial_cmp(&a.scored.score)
            .unwrap_or(Ordering::Equal)
    });

    let swaps = jitter_ties(
        &mut ranked,
        config.closeness_window,
        config.tie_break_probability,
        rng,
    );

    let (team_a, team_b) = split_greedy(ranked);

    tracing::debug!(
        size_a = team_a.len(),
        size_b = team_b.len(),
        strength_a = team_a.strength,
        strength_b = team_b.strength,
        swaps,
        clustered = labels.is_some(),
        "partitioned roster"
    );

    Ok(Partition {
        team_a,
        team_b,
        swaps,
    })
}

/// Ids that occur more than once, each reported once in ascending order.
fn repeated_ids(players: &[Player]) -> Vec<PlayerId> {
    let mut seen = HashSet::new();
    let mut repeated: Vec<PlayerId> = players
        .iter()
        .filter(|p| !seen.insert(p.id))
        .map(|p| p.id)
        .collect();
    repeated.sort_unstable();
    repeated.dedup();
    repeated
}

/// Split with default tuning and k-means hints, using a reproducible
/// generator. Draws a fresh seed when none is given; the seed actually used
/// is returned so the split can be replayed.
pub fn partition_seeded(
    players: &[Player],
    weights: &AttributeWeights,
    seed: Option<u64>,
) -> Result<(Partition, u64), BalanceError> {
    let seed = seed.unwrap_or_else(fresh_seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let split = partition(
        players,
        weights,
        &BalanceConfig::default(),
        &KMeans::default(),
        &mut rng,
    )?;
    Ok((split, seed))
}

/// A new random seed for callers that do not supply one.
pub fn fresh_seed() -> u64 {
    rand::thread_rng().gen()
}
