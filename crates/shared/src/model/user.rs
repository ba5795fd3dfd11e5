use chrono::NaiveDate;
use sqlx::FromRow;

#[derive(Debug, FromRow, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[sqlx(rename = "dob")]
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
}

impl User {
    pub fn is_missing_date_of_birth(&self) -> bool {
        self.date_of_birth.is_none()
    }

    /// An empty address counts as missing; whitespace does not. MySQL
    /// PAD SPACE collations also match `'   ' = ''`, so on those servers the
    /// SQL scan and update reach whitespace-only rows that this check skips.
    pub fn is_missing_address(&self) -> bool {
        matches!(self.address.as_deref(), None | Some(""))
    }

    pub fn has_missing_fields(&self) -> bool {
        self.is_missing_date_of_birth() || self.is_missing_address()
    }

    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(date_of_birth: Option<NaiveDate>, address: Option<&str>) -> User {
        User {
            user_id: 1,
            email: "guest@example.com".into(),
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            date_of_birth,
            address: address.map(String::from),
        }
    }

    #[test]
    fn complete_user_has_no_missing_fields() {
        let dob = NaiveDate::from_ymd_opt(1985, 5, 5);
        assert!(!user(dob, Some("123 St")).has_missing_fields());
    }

    #[test]
    fn null_date_of_birth_is_missing() {
        let u = user(None, Some("123 St"));
        assert!(u.is_missing_date_of_birth());
        assert!(!u.is_missing_address());
        assert!(u.has_missing_fields());
    }

    #[test]
    fn null_and_empty_address_are_both_missing() {
        let dob = NaiveDate::from_ymd_opt(1985, 5, 5);
        assert!(user(dob, None).is_missing_address());
        assert!(user(dob, Some("")).is_missing_address());
    }

    #[test]
    fn whitespace_address_is_not_missing() {
        let dob = NaiveDate::from_ymd_opt(1985, 5, 5);
        assert!(!user(dob, Some("  ")).has_missing_fields());
    }

    #[test]
    fn full_name_tolerates_null_parts() {
        let mut u = user(None, None);
        u.last_name = None;
        assert_eq!(u.full_name(), "Ada ");
    }
}
