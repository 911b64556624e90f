use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::{AttributeWeights, BalanceConfig};
use crate::tui::Theme;

/// Contents of `config.yaml`.
///
/// Example YAML:
/// ```yaml
/// roster: ~/football/players.json
/// weights:
///   attack: 1.0
///   defense: 1.0
///   athleticism: 0.5
/// balance:
///   tie_break_probability: 0.3
///   outlier_threshold: 3
/// theme: auto
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default roster file when `--roster` is not given
    #[serde(default)]
    pub roster: Option<PathBuf>,

    /// Attribute weights (default: all 1.0)
    #[serde(default)]
    pub weights: Option<AttributeWeights>,

    /// Balancing knobs
    #[serde(default)]
    pub balance: Option<BalanceConfig>,

    #[serde(default)]
    pub theme: Theme,
}

impl Config {
    pub fn effective_weights(&self) -> AttributeWeights {
        self.weights.clone().unwrap_or_default()
    }

    pub fn effective_balance(&self) -> BalanceConfig {
        self.balance.clone().unwrap_or_default()
    }
}
