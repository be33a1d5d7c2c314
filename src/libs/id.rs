use chrono::Utc;
use std::collections::HashSet;

/// Generates a record id that is not yet used in `existing`.
///
/// Ids are millisecond timestamps rendered as strings. When two records are
/// created within the same millisecond the candidate is bumped until it is
/// free, so only uniqueness is guaranteed, not wall-clock accuracy.
pub fn next_id<'a, I>(existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: HashSet<&str> = existing.into_iter().collect();
    let mut candidate = Utc::now().timestamp_millis();
    while taken.contains(candidate.to_string().as_str()) {
        candidate += 1;
    }
    candidate.to_string()
}
