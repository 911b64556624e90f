use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::engine::ResolvedWeights;
use crate::error::BalanceError;

pub const ATTACK: &str = "attack";
pub const DEFENSE: &str = "defense";
pub const ATHLETICISM: &str = "athleticism";

/// Attribute names every weight table must cover.
pub const REQUIRED_ATTRIBUTES: [&str; 3] = [ATTACK, DEFENSE, ATHLETICISM];

/// Importance multipliers keyed by attribute name.
///
/// Example YAML:
/// ```yaml
/// weights:
///   attack: 1.0
///   defense: 1.2
///   athleticism: 0.8
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct AttributeWeights(BTreeMap<String, f64>);

impl AttributeWeights {
    /// An empty table. Resolving it fails until all attributes are set.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Every required attribute weighted 1.0
    pub fn uniform() -> Self {
        Self::empty()
            .with(ATTACK, 1.0)
            .with(DEFENSE, 1.0)
            .with(ATHLETICISM, 1.0)
    }

    pub fn with(mut self, attribute: &str, weight: f64) -> Self {
        self.0.insert(attribute.to_string(), weight);
        self
    }

    pub fn get(&self, attribute: &str) -> Option<f64> {
        self.0.get(attribute).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Problems with the required entries. Unknown keys are not reported here.
    pub(crate) fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        for name in REQUIRED_ATTRIBUTES {
            match self.get(name) {
                None => problems.push(format!("missing weight '{}'", name)),
                Some(w) if !w.is_finite() => {
                    problems.push(format!("weight '{}' must be a finite number", name))
                }
                Some(w) if w < 0.0 => problems.push(format!(
                    "weight '{}' must be non-negative (got {})",
                    name, w
                )),
                Some(_) => {}
            }
        }
        problems
    }

    /// Resolve into the three concrete multipliers used by the engine.
    /// Missing entries are a caller error, never defaulted.
    pub fn resolve(&self) -> Result<ResolvedWeights, BalanceError> {
        let problems = self.problems();
        if !problems.is_empty() {
            return Err(BalanceError::InvalidWeights(problems));
        }
        Ok(ResolvedWeights {
            attack: self.get(ATTACK).unwrap_or_default(),
            defense: self.get(DEFENSE).unwrap_or_default(),
            athleticism: self.get(ATHLETICISM).unwrap_or_default(),
        })
    }
}

impl Default for AttributeWeights {
    fn default() -> Self {
        Self::uniform()
    }
}

/// Tuning knobs for the partitioner and the position assigner.
///
/// All fields are optional in YAML; anything left out keeps its default.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BalanceConfig {
    /// Chance that two near-equal neighbours in the ranking swap places
    pub tie_break_probability: f64,

    /// Two players count as near-equal when their score gap is below this
    /// fraction of the higher score
    pub closeness_window: f64,

    /// Number of similarity clusters used to spread similar players (0 disables)
    pub cluster_count: usize,

    /// Attack/defense gap above which a player is routed straight to attack or defense
    pub outlier_threshold: i32,

    /// Outfield players needed before a midfield line is formed
    pub midfield_min_outfield: usize,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            tie_break_probability: 0.3,
            closeness_window: 0.10,
            cluster_count: 3,
            outlier_threshold: 3,
            midfield_min_outfield: 6,
        }
    }
}
