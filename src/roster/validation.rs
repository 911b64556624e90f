use super::types::Player;
use std::collections::HashSet;

/// Fewest players that can be split into two teams.
pub const MIN_PLAYERS: usize = 2;

/// Validate a roster before balancing.
/// Returns all validation errors at once (not just the first).
pub fn validate_roster(players: &[Player]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    if players.len() < MIN_PLAYERS {
        errors.push(format!(
            "roster: need at least {} players to build two teams, got {}",
            MIN_PLAYERS,
            players.len()
        ));
    }

    for (i, player) in players.iter().enumerate() {
        if !seen.insert(player.id) {
            errors.push(format!("roster[{}]: duplicate id {}", i, player.id));
        }
        if player.name.trim().is_empty() {
            errors.push(format!("roster[{}]: name must not be empty", i));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_roster() {
        let players = vec![Player::new(1, "Ana", 1, 2, 3), Player::new(2, "Bo", 3, 2, 1)];
        assert!(validate_roster(&players).is_ok());
    }

    #[test]
    fn test_too_few_players() {
        for players in [vec![], vec![Player::new(1, "Solo", 1, 1, 1)]] {
            let errors = validate_roster(&players).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert!(errors[0].starts_with("roster: need at least 2 players"));
        }
    }

    #[test]
    fn test_duplicate_id() {
        let players = vec![Player::new(1, "Ana", 1, 2, 3), Player::new(1, "Bo", 3, 2, 1)];
        let errors = validate_roster(&players).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("roster[1]: duplicate id 1"));
    }

    #[test]
    fn test_collects_all_errors() {
        let players = vec![
            Player::new(1, " ", 1, 2, 3),
            Player::new(1, "", 3, 2, 1),
        ];
        let errors = validate_roster(&players).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
