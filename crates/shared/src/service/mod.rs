pub mod repair;

pub use self::repair::RepairService;
