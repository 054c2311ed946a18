use chrono::{DateTime, SubsecRound, Utc};

/// Current time truncated to microseconds, the resolution Postgres stores,
/// so in-memory and persisted timestamps compare equal.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
