use rand::Rng;

use super::Candidate;

/// Randomly swap adjacent near-equal players in a ranking sorted by score
/// descending. Two neighbours are near-equal when their score gap is below
/// `window` times the higher score. Returns the number of swaps made.
pub fn jitter_ties<R: Rng + ?Sized>(
    ranked: &mut [Candidate],
    window: f64,
    probability: f64,
    rng: &mut R,
) -> usize {
    // Also rejects NaN
    if !(probability > 0.0) || ranked.len() < 2 {
        return 0;
    }
    let probability = probability.min(1.0);

    let mut swaps = 0;
    for i in 0..ranked.len() - 1 {
        let a = ranked[i].scored.score;
        let b = ranked[i + 1].scored.score;
        let higher = a.max(b);
        if (a - b).abs() < window * higher.abs() && rng.gen_bool(probability) {
            tracing::trace!(
                first = ranked[i].scored.player.id,
                second = ranked[i + 1].scored.player.id,
                "tie-break swap"
            );
            ranked.swap(i, i + 1);
            swaps += 1;
        }
    }
    swaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Player;
    use crate::scoring::{score_player, ResolvedWeights};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn candidates(scores: &[i32]) -> Vec<Candidate> {
        let w = ResolvedWeights {
            attack: 1.0,
            defense: 0.0,
            athleticism: 0.0,
        };
        scores
            .iter()
            .enumerate()
            .map(|(i, &s)| Candidate {
                scored: score_player(&Player::new(i as u64, format!("P{}", i), s, 0, 0), &w),
                cluster: None,
            })
            .collect()
    }

    fn ids(ranked: &[Candidate]) -> Vec<u64> {
        ranked.iter().map(|c| c.scored.player.id).collect()
    }

    #[test]
    fn test_probability_zero_never_swaps() {
        let mut ranked = candidates(&[10, 10, 10, 10]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(jitter_ties(&mut ranked, 0.1, 0.0, &mut rng), 0);
        assert_eq!(ids(&ranked), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_probability_one_swaps_every_close_pair() {
        // 100 and 95 are within 10%; after that swap 100 meets 50, which is not
        let mut ranked = candidates(&[100, 95, 50]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let swaps = jitter_ties(&mut ranked, 0.1, 1.0, &mut rng);
        assert_eq!(swaps, 1);
        assert_eq!(ids(&ranked), vec![1, 0, 2]);
    }

    #[test]
    fn test_distant_scores_never_swap() {
        let mut ranked = candidates(&[100, 80, 60, 40]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(jitter_ties(&mut ranked, 0.1, 1.0, &mut rng), 0);
    }

    #[test]
    fn test_zero_scores_never_swap() {
        let mut ranked = candidates(&[0, 0, 0]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(jitter_ties(&mut ranked, 0.1, 1.0, &mut rng), 0);
    }

    #[test]
    fn test_same_seed_same_swaps() {
        let mut first = candidates(&[10, 10, 10, 10, 10, 10, 10, 10]);
        let mut second = first.clone();
        jitter_ties(&mut first, 0.1, 0.3, &mut ChaCha8Rng::seed_from_u64(99));
        jitter_ties(&mut second, 0.1, 0.3, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(ids(&first), ids(&second));
    }
}
