pub mod storage;
pub mod types;
pub mod validation;

pub use storage::load_roster;
pub use types::{Player, PlayerId};
pub use validation::validate_roster;
