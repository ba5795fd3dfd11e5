use chrono::NaiveDate;

pub const PLACEHOLDER_DATE_OF_BIRTH: NaiveDate = match NaiveDate::from_ymd_opt(1990, 1, 1) {
    Some(date) => date,
    None => panic!("placeholder date of birth is not a valid calendar date"),
};

pub const PLACEHOLDER_ADDRESS: &str = "Not provided";

pub const CONFIRM_PROMPT: &str = "Do you want to fix these users? (yes/no): ";

/// Values written into missing fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairRequest {
    pub date_of_birth: NaiveDate,
    pub address: String,
}

impl Default for RepairRequest {
    fn default() -> Self {
        Self {
            date_of_birth: PLACEHOLDER_DATE_OF_BIRTH,
            address: PLACEHOLDER_ADDRESS.to_string(),
        }
    }
}

/// Only a literal "yes" (any case, surrounding whitespace ignored) proceeds.
pub fn is_confirmed(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
