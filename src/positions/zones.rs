use serde::{Deserialize, Serialize};
use std::fmt;

/// Pitch role. Outfield zones are listed from own goal outwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Goalkeeper,
    Defense,
    Midfield,
    Attack,
}

impl Zone {
    pub fn label(&self) -> &'static str {
        match self {
            Zone::Goalkeeper => "goalkeeper",
            Zone::Defense => "defense",
            Zone::Midfield => "midfield",
            Zone::Attack => "attack",
        }
    }

    /// Short form for tables and the pitch view
    pub fn abbrev(&self) -> &'static str {
        match self {
            Zone::Goalkeeper => "GK",
            Zone::Defense => "DEF",
            Zone::Midfield => "MID",
            Zone::Attack => "ATT",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outfield zones for a given number of outfield players. Small sides play
/// without a midfield line.
pub fn outfield_zones(outfield: usize, midfield_min_outfield: usize) -> Vec<Zone> {
    if outfield < midfield_min_outfield {
        vec![Zone::Defense, Zone::Attack]
    } else {
        vec![Zone::Defense, Zone::Midfield, Zone::Attack]
    }
}

/// Split `outfield` slots evenly; the remainder goes one each to the
/// earliest zones.
pub fn zone_capacities(outfield: usize, zones: usize) -> Vec<usize> {
    if zones == 0 {
        return Vec::new();
    }
    let base = outfield / zones;
    let extra = outfield % zones;
    (0..zones).map(|i| base + usize::from(i < extra)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_side_has_no_midfield() {
        assert_eq!(outfield_zones(5, 6), vec![Zone::Defense, Zone::Attack]);
        assert_eq!(outfield_zones(0, 6), vec![Zone::Defense, Zone::Attack]);
    }

    #[test]
    fn test_midfield_from_six() {
        assert_eq!(
            outfield_zones(6, 6),
            vec![Zone::Defense, Zone::Midfield, Zone::Attack]
        );
    }

    #[test]
    fn test_capacities_even() {
        assert_eq!(zone_capacities(6, 3), vec![2, 2, 2]);
    }

    #[test]
    fn test_capacities_remainder_goes_to_defense_first() {
        assert_eq!(zone_capacities(7, 3), vec![3, 2, 2]);
        assert_eq!(zone_capacities(8, 3), vec![3, 3, 2]);
        assert_eq!(zone_capacities(5, 2), vec![3, 2]);
    }

    #[test]
    fn test_capacities_sum() {
        for n in 0..30 {
            for z in 1..4 {
                assert_eq!(zone_capacities(n, z).iter().sum::<usize>(), n);
            }
        }
    }

    #[test]
    fn test_zone_serde() {
        assert_eq!(serde_json::to_string(&Zone::Midfield).unwrap(), "\"midfield\"");
        assert_eq!(Zone::Attack.to_string(), "attack");
    }
}
