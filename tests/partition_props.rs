use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

use team_shuffle::balance::{partition, KMeans, NoClustering, Partition};
use team_shuffle::roster::Player;
use team_shuffle::scoring::{AttributeWeights, BalanceConfig};

fn roster_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec((0i32..=10, 0i32..=10, 0i32..=10), min..max).prop_map(|attrs| {
        attrs
            .into_iter()
            .enumerate()
            .map(|(i, (a, d, ath))| Player::new(i as u64 + 1, format!("P{}", i + 1), a, d, ath))
            .collect()
    })
}

fn split(players: &[Player], seed: u64, clustered: bool) -> Partition {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let kmeans = KMeans::default();
    let clusterer: &dyn team_shuffle::balance::Clusterer = if clustered { &kmeans } else { &NoClustering };
    partition(
        players,
        &AttributeWeights::uniform(),
        &BalanceConfig::default(),
        clusterer,
        &mut rng,
    )
    .unwrap()
}

proptest! {
    /// Property: every player lands on exactly one side
    #[test]
    fn prop_split_is_disjoint_and_complete(
        players in roster_strategy(2, 30),
        seed in any::<u64>(),
        clustered in any::<bool>()
    ) {
        let result = split(&players, seed, clustered);
        let a: HashSet<u64> = result.team_a.ids().into_iter().collect();
        let b: HashSet<u64> = result.team_b.ids().into_iter().collect();
        prop_assert!(a.is_disjoint(&b));
        let all: HashSet<u64> = a.union(&b).copied().collect();
        let expected: HashSet<u64> = players.iter().map(|p| p.id).collect();
        prop_assert_eq!(all, expected);
    }

    /// Property: team sizes differ by at most one
    #[test]
    fn prop_sizes_balanced(
        players in roster_strategy(2, 30),
        seed in any::<u64>(),
        clustered in any::<bool>()
    ) {
        let result = split(&players, seed, clustered);
        prop_assert!(result.team_a.len().abs_diff(result.team_b.len()) <= 1);
    }

    /// Property: the same seed reproduces the same split
    #[test]
    fn prop_seed_is_deterministic(
        players in roster_strategy(2, 20),
        seed in any::<u64>()
    ) {
        prop_assert_eq!(split(&players, seed, true), split(&players, seed, true));
    }

    /// Property: the strength gap never exceeds the strongest single score
    #[test]
    fn prop_gap_bounded_by_top_score(
        players in roster_strategy(2, 30),
        seed in any::<u64>()
    ) {
        let result = split(&players, seed, false);
        let top = players.iter().map(|p| p.total() as f64).fold(0.0, f64::max);
        prop_assert!(result.imbalance() <= top);
    }
}
