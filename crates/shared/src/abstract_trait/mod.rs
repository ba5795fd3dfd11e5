pub mod console;
pub mod repair;
pub mod user;

pub use self::console::{ConsoleTrait, DynConsole};
pub use self::repair::{DynRepairService, RepairServiceTrait};
pub use self::user::{DynUserRepository, UserRepositoryTrait};

#[cfg(test)]
pub use self::user::MockUserRepositoryTrait;
