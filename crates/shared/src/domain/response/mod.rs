pub mod repair;
pub mod report;

pub use self::repair::{RepairOutcome, RepairResponse, RepairStats};
