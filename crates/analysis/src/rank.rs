use crate::classify::AffirmationClassifier;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Deduplicates and ranks candidate answers by occurrence count.
///
/// Affirmation noise is dropped before counting. Every distinct candidate
/// achieving the maximum count is returned, in first-seen order; the
/// caller truncates to its answer limit.
pub fn rank_candidates(candidates: &[String], classifier: &AffirmationClassifier) -> Vec<String> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for candidate in candidates {
        if classifier.is_affirmation(candidate) {
            continue;
        }
        match counts.entry(candidate.as_str()) {
            Entry::Occupied(mut occupied) => *occupied.get_mut() += 1,
            Entry::Vacant(vacant) => {
                vacant.insert(1);
                order.push(candidate.as_str());
            }
        }
    }

    let max_count = counts.values().copied().max().unwrap_or(0);
    order
        .into_iter()
        .filter(|candidate| counts[candidate] == max_count)
        .map(String::from)
        .collect()
}
