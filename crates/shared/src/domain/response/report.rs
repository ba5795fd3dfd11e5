use core::fmt;

use crate::{domain::response::repair::RepairResponse, model::user::User};

pub const RULE: &str = "============================================================";

pub struct ScanHeader;

impl fmt::Display for ScanHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "Checking for users with NULL DOB or address...")?;
        write!(f, "{RULE}")
    }
}

pub struct CleanReport;

impl fmt::Display for CleanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✅ No users found with NULL DOB or address!")?;
        write!(f, "All users have valid data.")
    }
}

/// Lists every defective row, flagging the missing fields.
pub struct MissingFieldsReport<'a>(pub &'a [User]);

impl fmt::Display for MissingFieldsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "⚠️  Found {} user(s) with NULL values:", self.0.len())?;

        for user in self.0 {
            writeln!(f)?;
            writeln!(f, "User ID: {}", user.user_id)?;
            writeln!(f, "  Email: {}", user.email)?;
            writeln!(f, "  Name: {}", user.full_name())?;

            match user.date_of_birth {
                Some(dob) => writeln!(f, "  DOB: {dob}")?,
                None => writeln!(f, "  DOB: ❌ NULL")?,
            }

            match user.address.as_deref() {
                Some(address) if !user.is_missing_address() => {
                    writeln!(f, "  Address: {address}")?
                }
                _ => writeln!(f, "  Address: ❌ NULL/EMPTY")?,
            }
        }

        Ok(())
    }
}

pub struct RepairSummary(pub RepairResponse);

impl fmt::Display for RepairSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "✅ Fix completed!")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Updated {} user(s) with NULL DOB", self.0.dob_updated)?;
        write!(
            f,
            "Updated {} user(s) with NULL/empty address",
            self.0.address_updated
        )
    }
}

pub struct VerificationReport(pub i64);

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            write!(f, "\n✅ All users now have valid DOB and address!")
        } else {
            write!(f, "\n⚠️  Warning: {} user(s) still have NULL values", self.0)
        }
    }
}
