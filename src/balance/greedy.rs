use super::{Candidate, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    A,
    B,
}

/// Walk the ranking and hand each player to the weaker side.
///
/// Neither side may grow past `ceil(n/2)`; once one is full the rest go to
/// the other. When both sums are exactly equal the player's cluster breaks
/// the tie: it joins the side holding fewer of its look-alikes.
pub fn split_greedy(ranked: Vec<Candidate>) -> (Team, Team) {
    let cap = ranked.len().div_ceil(2);
    let mut a = Team::default();
    let mut b = Team::default();
    let mut clusters_a: Vec<Option<usize>> = Vec::new();
    let mut clusters_b: Vec<Option<usize>> = Vec::new();

    for candidate in ranked {
        let side = if a.len() >= cap {
            Side::B
        } else if b.len() >= cap {
            Side::A
        } else if a.strength < b.strength {
            Side::A
        } else if b.strength < a.strength {
            Side::B
        } else {
            let same_a = count_cluster(&clusters_a, candidate.cluster);
            let same_b = count_cluster(&clusters_b, candidate.cluster);
            if same_b < same_a {
                Side::B
            } else {
                Side::A
            }
        };

        match side {
            Side::A => {
                clusters_a.push(candidate.cluster);
                a.push(candidate.scored);
            }
            Side::B => {
                clusters_b.push(candidate.cluster);
                b.push(candidate.scored);
            }
        }
    }

    (a, b)
}

fn count_cluster(members: &[Option<usize>], cluster: Option<usize>) -> usize {
    match cluster {
        Some(c) => members.iter().filter(|m| **m == Some(c)).count(),
        None => 0,
    }
}
