/// Rows touched by each bulk update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairResponse {
    pub dob_updated: u64,
    pub address_updated: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepairStats {
    pub found: usize,
    pub dob_updated: u64,
    pub address_updated: u64,
    pub remaining: i64,
}

/// How a run ended when no error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairOutcome {
    Clean,
    Cancelled { found: usize },
    Repaired(RepairStats),
}

impl RepairOutcome {
    pub fn rows_updated(&self) -> u64 {
        match self {
            RepairOutcome::Repaired(stats) => stats.dob_updated + stats.address_updated,
            _ => 0,
        }
    }
}
