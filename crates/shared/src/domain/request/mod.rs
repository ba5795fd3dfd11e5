pub mod repair;

pub use self::repair::{
    CONFIRM_PROMPT, PLACEHOLDER_ADDRESS, PLACEHOLDER_DATE_OF_BIRTH, RepairRequest, is_confirmed,
};
