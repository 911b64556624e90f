use serde::{Deserialize, Serialize};

pub type PlayerId = u64;

/// A roster entry. Attributes are plain integers; the engine makes no
/// assumption about their range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    #[serde(alias = "uid")]
    pub id: PlayerId,
    pub name: String,
    pub attack: i32,
    pub defense: i32,
    pub athleticism: i32,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, attack: i32, defense: i32, athleticism: i32) -> Self {
        Self {
            id,
            name: name.into(),
            attack,
            defense,
            athleticism,
        }
    }

    /// Unweighted sum of all three attributes.
    pub fn total(&self) -> i64 {
        self.attack as i64 + self.defense as i64 + self.athleticism as i64
    }

    /// Size of the attack/defense imbalance.
    pub fn specialization(&self) -> i64 {
        (self.attack as i64 - self.defense as i64).abs()
    }

    /// Preference score for midfield: athletic all-rounders rank highest.
    pub fn versatility(&self) -> f64 {
        self.athleticism as f64 + (self.attack as f64 + self.defense as f64) / 2.0
    }
}
