use super::zones::Zone;
use super::PlacedPlayer;
use crate::roster::Player;

/// Keeper spot on the own goal line.
pub const GOALKEEPER_SPOT: (f64, f64) = (0.5, 1.0);

/// Total horizontal spread of a zone line.
const LINE_WIDTH: f64 = 0.4;

/// Depth of outfield zone `index` out of `count`: lines are spaced evenly
/// between the own goal line (1.0) and the opposite end (0.0).
pub fn zone_depth(index: usize, count: usize) -> f64 {
    1.0 - (index as f64 + 1.0) / (count as f64 + 1.0)
}

/// Horizontal position of slot `i` in a line of `k`, centred on 0.5.
pub fn line_offset(i: usize, k: usize) -> f64 {
    let spacing = LINE_WIDTH / (k.saturating_sub(1).max(1)) as f64;
    0.5 + (i as f64 - (k as f64 - 1.0) / 2.0) * spacing
}

/// Turn filled zones into coordinates.
pub fn lay_out(zones: &[(Zone, Vec<Player>)]) -> Vec<PlacedPlayer> {
    let count = zones.len();
    let mut placed = Vec::new();
    for (index, (zone, members)) in zones.iter().enumerate() {
        let y = zone_depth(index, count);
        let k = members.len();
        for (i, player) in members.iter().enumerate() {
            placed.push(PlacedPlayer::new(player, line_offset(i, k), y, *zone));
        }
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_two_zone_depths() {
        assert!(close(zone_depth(0, 2), 2.0 / 3.0));
        assert!(close(zone_depth(1, 2), 1.0 / 3.0));
    }

    #[test]
    fn test_three_zone_depths() {
        assert!(close(zone_depth(0, 3), 0.75));
        assert!(close(zone_depth(1, 3), 0.5));
        assert!(close(zone_depth(2, 3), 0.25));
    }

    #[test]
    fn test_single_player_centred() {
        assert!(close(line_offset(0, 1), 0.5));
    }

    #[test]
    fn test_line_of_two() {
        assert!(close(line_offset(0, 2), 0.3));
        assert!(close(line_offset(1, 2), 0.7));
    }

    #[test]
    fn test_line_of_five_symmetric() {
        let xs: Vec<f64> = (0..5).map(|i| line_offset(i, 5)).collect();
        assert!(close(xs[0], 0.3));
        assert!(close(xs[2], 0.5));
        assert!(close(xs[4], 0.7));
        assert!(close(xs[1] + xs[3], 1.0));
    }

    #[test]
    fn test_lay_out_skips_nothing() {
        let zones = vec![
            (Zone::Defense, vec![Player::new(1, "A", 1, 5, 1), Player::new(2, "B", 1, 5, 1)]),
            (Zone::Attack, vec![Player::new(3, "C", 5, 1, 1)]),
        ];
        let placed = lay_out(&zones);
        assert_eq!(placed.len(), 3);
        assert_eq!(placed[2].zone, Zone::Attack);
        assert!(close(placed[2].x, 0.5));
        assert!(close(placed[2].y, 1.0 / 3.0));
    }
}
