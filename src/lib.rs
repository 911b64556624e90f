pub mod balance;
pub mod config;
pub mod error;
pub mod matchup;
pub mod output;
pub mod positions;
pub mod roster;
pub mod scoring;
pub mod stderr_buffer;
pub mod tui;

pub use balance::{partition, partition_seeded, Partition, Team};
pub use error::BalanceError;
pub use matchup::{create_matchup, Matchup, TeamLabel, TeamSheet};
pub use positions::{assign_positions, PlacedPlayer, Zone};
pub use roster::Player;
