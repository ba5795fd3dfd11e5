pub mod memory;
pub mod user;

pub use self::memory::InMemoryUserRepository;
pub use self::user::UserRepository;
