use thiserror::Error;

/// A point in weighted-attribute space: (attack, defense, athleticism).
pub type Vector3 = [f64; 3];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClusterError {
    #[error("clustering is not available")]
    Unavailable,

    #[error("cannot form {k} clusters from {points} points")]
    NotEnoughPoints { k: usize, points: usize },
}

/// Groups similar players together. Used only as a hint when spreading
/// players across teams, so an implementation may always decline.
pub trait Clusterer {
    /// Returns one label in `0..k` per input vector.
    fn cluster(&self, vectors: &[Vector3], k: usize) -> Result<Vec<usize>, ClusterError>;
}

/// Declines every request; balancing then runs on scores alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClustering;

impl Clusterer for NoClustering {
    fn cluster(&self, _vectors: &[Vector3], _k: usize) -> Result<Vec<usize>, ClusterError> {
        Err(ClusterError::Unavailable)
    }
}

/// Lloyd's k-means with deterministic farthest-point seeding.
#[derive(Debug, Clone, Copy)]
pub struct KMeans {
    pub max_iterations: usize,
}

impl Default for KMeans {
    fn default() -> Self {
        Self { max_iterations: 50 }
    }
}

impl Clusterer for KMeans {
    fn cluster(&self, vectors: &[Vector3], k: usize) -> Result<Vec<usize>, ClusterError> {
        if k == 0 || vectors.len() < k {
            return Err(ClusterError::NotEnoughPoints {
                k,
                points: vectors.len(),
            });
        }

        let mut centroids = seed_centroids(vectors, k);
        let mut labels = vec![0usize; vectors.len()];

        for iteration in 0..self.max_iterations {
            let mut changed = false;
            for (i, v) in vectors.iter().enumerate() {
                let label = nearest(&centroids, v);
                if label != labels[i] {
                    labels[i] = label;
                    changed = true;
                }
            }

            if iteration > 0 && !changed {
                break;
            }

            // Empty clusters keep their previous centroid
            let mut sums = vec![[0.0f64; 3]; k];
            let mut counts = vec![0usize; k];
            for (v, &label) in vectors.iter().zip(&labels) {
                for d in 0..3 {
                    sums[label][d] += v[d];
                }
                counts[label] += 1;
            }
            for c in 0..k {
                if counts[c] > 0 {
                    for d in 0..3 {
                        centroids[c][d] = sums[c][d] / counts[c] as f64;
                    }
                }
            }
        }

        Ok(labels)
    }
}

/// First centroid is the first point; each next one is the point farthest
/// from every centroid chosen so far (lowest index wins ties).
fn seed_centroids(vectors: &[Vector3], k: usize) -> Vec<Vector3> {
    let mut centroids = vec![vectors[0]];
    while centroids.len() < k {
        let mut best = 0;
        let mut best_dist = f64::NEG_INFINITY;
        for (i, v) in vectors.iter().enumerate() {
            let d = centroids
                .iter()
                .map(|c| distance_sq(c, v))
                .fold(f64::INFINITY, f64::min);
            if d > best_dist {
                best = i;
                best_dist = d;
            }
        }
        centroids.push(vectors[best]);
    }
    centroids
}

fn nearest(centroids: &[Vector3], v: &Vector3) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, c) in centroids.iter().enumerate() {
        let d = distance_sq(c, v);
        if d < best_dist {
            best = i;
            best_dist = d;
        }
    }
    best
}

fn distance_sq(a: &Vector3, b: &Vector3) -> f64 {
    (0..3).map(|d| (a[d] - b[d]).powi(2)).sum()
}
