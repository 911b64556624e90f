use thiserror::Error;

use crate::roster::PlayerId;

/// Errors raised by the balancing core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BalanceError {
    #[error("need at least 2 players to build two teams, got {count}")]
    InsufficientPlayers { count: usize },

    #[error("invalid attribute weights: {}", .0.join("; "))]
    InvalidWeights(Vec<String>),

    #[error("player ids must be unique, repeated: {ids:?}")]
    DuplicatePlayerIds { ids: Vec<PlayerId> },

    /// A player went missing during position assignment. This is a bug in the
    /// assigner, never a problem with the caller's input.
    #[error("position assignment placed {placed} of {expected} players")]
    AssignmentInvariantViolation { expected: usize, placed: usize },
}

impl BalanceError {
    /// Caller errors can be fixed by changing the input.
    pub fn is_caller_error(&self) -> bool {
        match self {
            BalanceError::InsufficientPlayers { .. } => true,
            BalanceError::InvalidWeights(_) => true,
            BalanceError::DuplicatePlayerIds { .. } => true,
            BalanceError::AssignmentInvariantViolation { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_weights_message_lists_all() {
        let err = BalanceError::InvalidWeights(vec![
            "missing weight 'attack'".to_string(),
            "weight 'defense' must be non-negative".to_string(),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("'attack'"));
        assert!(msg.contains("'defense'"));
    }

    #[test]
    fn test_duplicate_ids_message() {
        let err = BalanceError::DuplicatePlayerIds { ids: vec![3, 7] };
        assert_eq!(err.to_string(), "player ids must be unique, repeated: [3, 7]");
    }

    #[test]
    fn test_caller_errors() {
        assert!(BalanceError::InsufficientPlayers { count: 1 }.is_caller_error());
        assert!(BalanceError::InvalidWeights(vec![]).is_caller_error());
        assert!(BalanceError::DuplicatePlayerIds { ids: vec![7] }.is_caller_error());
        assert!(!BalanceError::AssignmentInvariantViolation {
            expected: 3,
            placed: 2
        }
        .is_caller_error());
    }
}
