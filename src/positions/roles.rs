use std::cmp::Ordering;

use super::zones::{outfield_zones, zone_capacities, Zone};
use crate::roster::Player;
use crate::scoring::BalanceConfig;

/// Index of the keeper: lowest attribute total, then highest defense, then
/// lowest id.
pub fn pick_goalkeeper(team: &[Player]) -> Option<usize> {
    team.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            a.total()
                .cmp(&b.total())
                .then_with(|| b.defense.cmp(&a.defense))
                .then_with(|| a.id.cmp(&b.id))
        })
        .map(|(i, _)| i)
}

/// Zones being filled, each with a fixed capacity.
struct ZoneSlots {
    zones: Vec<Zone>,
    capacity: Vec<usize>,
    members: Vec<Vec<Player>>,
}

impl ZoneSlots {
    fn new(zones: Vec<Zone>, capacity: Vec<usize>) -> Self {
        let members = vec![Vec::new(); zones.len()];
        Self {
            zones,
            capacity,
            members,
        }
    }

    fn index_of(&self, zone: Zone) -> Option<usize> {
        self.zones.iter().position(|z| *z == zone)
    }

    fn has_room(&self, index: usize) -> bool {
        self.members[index].len() < self.capacity[index]
    }

    fn first_with_room(&self) -> Option<usize> {
        (0..self.zones.len()).find(|&i| self.has_room(i))
    }

    fn least_filled(&self) -> Option<usize> {
        (0..self.zones.len()).min_by_key(|&i| self.members[i].len())
    }

    fn place(&mut self, index: usize, player: Player) {
        self.members[index].push(player);
    }

    fn into_zones(self) -> Vec<(Zone, Vec<Player>)> {
        self.zones.into_iter().zip(self.members).collect()
    }
}

/// Distribute outfield players into zones. Every input player ends up in
/// exactly one zone.
pub fn fill_zones(outfield: Vec<Player>, config: &BalanceConfig) -> Vec<(Zone, Vec<Player>)> {
    let zones = outfield_zones(outfield.len(), config.midfield_min_outfield);
    let capacity = zone_capacities(outfield.len(), zones.len());
    let mut slots = ZoneSlots::new(zones, capacity);

    let pool = place_specialists(&mut slots, outfield, config.outlier_threshold);
    let pool = place_midfield(&mut slots, pool);
    let pool = place_remainder(&mut slots, pool);
    place_failsafe(&mut slots, pool);

    slots.into_zones()
}

/// Clear attackers and defenders go straight to their line while it has room.
fn place_specialists(slots: &mut ZoneSlots, mut pool: Vec<Player>, threshold: i32) -> Vec<Player> {
    pool.sort_by_key(|p| std::cmp::Reverse(p.specialization()));

    let mut rest = Vec::new();
    for player in pool {
        let target = if player.specialization() > threshold as i64 {
            match player.attack.cmp(&player.defense) {
                Ordering::Greater => slots.index_of(Zone::Attack),
                Ordering::Less => slots.index_of(Zone::Defense),
                Ordering::Equal => None,
            }
        } else {
            None
        };

        match target.filter(|&i| slots.has_room(i)) {
            Some(i) => slots.place(i, player),
            None => rest.push(player),
        }
    }
    rest
}

/// Athletic all-rounders take the midfield first.
fn place_midfield(slots: &mut ZoneSlots, mut pool: Vec<Player>) -> Vec<Player> {
    let Some(mid) = slots.index_of(Zone::Midfield) else {
        return pool;
    };

    pool.sort_by(|a, b| {
        b.versatility()
            .partial_cmp(&a.versatility())
            .unwrap_or(Ordering::Equal)
    });

    let mut rest = Vec::new();
    for player in pool {
        if slots.has_room(mid) {
            slots.place(mid, player);
        } else {
            rest.push(player);
        }
    }
    rest
}

/// Fill lines in order, most defensive leftovers first.
fn place_remainder(slots: &mut ZoneSlots, mut pool: Vec<Player>) -> Vec<Player> {
    pool.sort_by_key(|p| std::cmp::Reverse(p.defense as i64 - p.attack as i64));

    let mut rest = Vec::new();
    for player in pool {
        match slots.first_with_room() {
            Some(i) => slots.place(i, player),
            None => rest.push(player),
        }
    }
    rest
}

/// Nobody is left off the pitch, even if capacities ran out.
fn place_failsafe(slots: &mut ZoneSlots, pool: Vec<Player>) {
    debug_assert!(!slots.zones.is_empty(), "failsafe needs at least one zone");
    for player in pool {
        let index = slots.first_with_room().or_else(|| slots.least_filled());
        match index {
            Some(i) => {
                tracing::warn!(player = player.id, zone = %slots.zones[i], "failsafe placement");
                slots.place(i, player);
            }
            None => {
                // Only reachable with zero zones, which outfield_zones never yields
                tracing::error!(player = player.id, "no zone available for player");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone_ids(zones: &[(Zone, Vec<Player>)], zone: Zone) -> Vec<u64> {
        zones
            .iter()
            .find(|(z, _)| *z == zone)
            .map(|(_, m)| m.iter().map(|p| p.id).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_goalkeeper_lowest_total() {
        let team = vec![
            Player::new(1, "A", 5, 5, 5),
            Player::new(2, "B", 1, 2, 3),
            Player::new(3, "C", 9, 9, 9),
        ];
        assert_eq!(pick_goalkeeper(&team), Some(1));
    }

    #[test]
    fn test_goalkeeper_tie_prefers_defense() {
        let team = vec![
            Player::new(1, "A", 4, 2, 3),
            Player::new(2, "B", 2, 4, 3),
            Player::new(3, "C", 3, 3, 3),
        ];
        assert_eq!(pick_goalkeeper(&team), Some(1));
    }

    #[test]
    fn test_goalkeeper_empty() {
        assert_eq!(pick_goalkeeper(&[]), None);
    }

    #[test]
    fn test_specialists_routed() {
        let outfield = vec![
            Player::new(1, "Att", 9, 1, 5),
            Player::new(2, "Def", 1, 9, 5),
            Player::new(3, "Mix", 5, 5, 5),
            Player::new(4, "Mix2", 5, 4, 5),
        ];
        let zones = fill_zones(outfield, &BalanceConfig::default());
        assert!(zone_ids(&zones, Zone::Attack).contains(&1));
        assert!(zone_ids(&zones, Zone::Defense).contains(&2));
    }

    #[test]
    fn test_gap_at_threshold_is_not_specialist() {
        // gap of exactly 3 is not above the threshold; lands via remainder
        // fill, which offers the most defensive player first
        let outfield = vec![Player::new(1, "Edge", 6, 3, 5), Player::new(2, "Back", 3, 5, 5)];
        let zones = fill_zones(outfield, &BalanceConfig::default());
        assert_eq!(zone_ids(&zones, Zone::Defense), vec![2]);
        assert_eq!(zone_ids(&zones, Zone::Attack), vec![1]);
    }

    #[test]
    fn test_specialist_overflow_falls_through() {
        // three attackers, attack line holds 1 of 3 outfield slots (2 zones: 2 + 1)
        let outfield = vec![
            Player::new(1, "A1", 9, 1, 5),
            Player::new(2, "A2", 8, 1, 5),
            Player::new(3, "A3", 7, 1, 5),
        ];
        let zones = fill_zones(outfield, &BalanceConfig::default());
        assert_eq!(zone_ids(&zones, Zone::Attack), vec![1]);
        assert_eq!(zone_ids(&zones, Zone::Defense).len(), 2);
    }

    #[test]
    fn test_midfield_prefers_all_rounders() {
        let outfield = vec![
            Player::new(1, "Slow", 5, 5, 1),
            Player::new(2, "Engine", 6, 6, 9),
            Player::new(3, "Box", 7, 6, 8),
            Player::new(4, "Plain", 4, 4, 4),
            Player::new(5, "Plain2", 4, 5, 3),
            Player::new(6, "Plain3", 5, 4, 2),
        ];
        let zones = fill_zones(outfield, &BalanceConfig::default());
        let mut mid = zone_ids(&zones, Zone::Midfield);
        mid.sort();
        assert_eq!(mid, vec![2, 3]);
    }

    #[test]
    fn test_capacities_respected() {
        let outfield: Vec<Player> = (0..10)
            .map(|i| Player::new(i, format!("P{}", i), 9, 1, i as i32))
            .collect();
        let zones = fill_zones(outfield, &BalanceConfig::default());
        let sizes: Vec<usize> = zones.iter().map(|(_, m)| m.len()).collect();
        assert_eq!(sizes, vec![4, 3, 3]);
    }

    #[test]
    fn test_no_outfield() {
        let zones = fill_zones(Vec::new(), &BalanceConfig::default());
        assert!(zones.iter().all(|(_, m)| m.is_empty()));
    }

    #[test]
    fn test_failsafe_uses_first_zone_with_room() {
        let mut slots = ZoneSlots::new(vec![Zone::Defense, Zone::Attack], vec![1, 2]);
        slots.place(0, Player::new(1, "Full", 5, 5, 5));

        place_failsafe(&mut slots, vec![Player::new(2, "Late", 5, 5, 5)]);

        let zones = slots.into_zones();
        assert_eq!(zone_ids(&zones, Zone::Defense), vec![1]);
        assert_eq!(zone_ids(&zones, Zone::Attack), vec![2]);
    }

    #[test]
    fn test_failsafe_overflows_into_least_filled_zone() {
        let mut slots = ZoneSlots::new(
            vec![Zone::Defense, Zone::Midfield, Zone::Attack],
            vec![2, 1, 1],
        );
        slots.place(0, Player::new(1, "D1", 5, 5, 5));
        slots.place(0, Player::new(2, "D2", 5, 5, 5));
        slots.place(1, Player::new(3, "M1", 5, 5, 5));
        slots.place(2, Player::new(4, "A1", 5, 5, 5));

        place_failsafe(&mut slots, vec![Player::new(5, "Extra", 5, 5, 5)]);

        // every zone full: the first of the smallest lines takes the player
        let zones = slots.into_zones();
        assert_eq!(zone_ids(&zones, Zone::Midfield), vec![3, 5]);
    }

    #[test]
    fn test_failsafe_drops_nobody() {
        let mut slots = ZoneSlots::new(vec![Zone::Defense, Zone::Attack], vec![1, 1]);
        let pool: Vec<Player> = (1..=5)
            .map(|i| Player::new(i, format!("P{}", i), 5, 5, 5))
            .collect();

        place_failsafe(&mut slots, pool);

        let zones = slots.into_zones();
        let mut ids: Vec<u64> = zones
            .iter()
            .flat_map(|(_, m)| m.iter().map(|p| p.id))
            .collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        let sizes: Vec<usize> = zones.iter().map(|(_, m)| m.len()).collect();
        assert_eq!(sizes, vec![3, 2]);
    }
}
