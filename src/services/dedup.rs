use crate::domain::MatchRecord;
use rustc_hash::FxHashSet;

/// Keeps the first record for each link, in input order. Records without a
/// link are dropped.
pub fn dedup_by_url(matches: Vec<MatchRecord>) -> Vec<MatchRecord> {
    let mut seen = FxHashSet::default();
    matches
        .into_iter()
        .filter(|m| !m.url.is_empty() && seen.insert(m.url.clone()))
        .collect()
}
