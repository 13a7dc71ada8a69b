//! Pure filter → group → sort transformation from raw candidates to display groups.

use crate::domain::model::{Candidate, Group};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Turns raw candidates into groups ordered by ascending `list_id`.
///
/// Invalid candidates (absent or blank name) are dropped. Inside a group candidates are
/// ordered by [`compare_names`]. `None` input is treated as empty.
pub fn transform(candidates: Option<&[Candidate]>) -> Vec<Group> {
    let candidates = candidates.unwrap_or_default();

    group_by_list_id(filter_valid(candidates))
        .into_iter()
        .map(|(list_id, mut members)| {
            // stable, equal keys keep input order
            members.sort_by(compare_names);
            Group {
                list_id,
                candidates: members,
            }
        })
        .collect()
}

pub fn filter_valid(candidates: &[Candidate]) -> impl Iterator<Item = &Candidate> {
    candidates.iter().filter(|c| c.is_valid())
}

/// Buckets candidates by `list_id`, keeping insertion order inside each bucket.
/// Keys iterate in ascending order.
pub fn group_by_list_id<'a>(
    candidates: impl IntoIterator<Item = &'a Candidate>,
) -> BTreeMap<i64, Vec<Candidate>> {
    let mut groups: BTreeMap<i64, Vec<Candidate>> = BTreeMap::new();
    for candidate in candidates {
        groups
            .entry(candidate.list_id)
            .or_default()
            .push(candidate.clone());
    }
    groups
}

/// Shorter names first, then plain lexicographic order.
///
/// Assumes names look like `"Item <number>"` so that `"Item 9"` lands before `"Item 10"`.
/// Names that don't follow that shape are still ordered by length first.
pub fn compare_names(a: &Candidate, b: &Candidate) -> Ordering {
    let a = a.name.as_deref().unwrap_or_default();
    let b = b.name.as_deref().unwrap_or_default();
    a.chars()
        .count()
        .cmp(&b.chars().count())
        .then_with(|| a.cmp(b))
}
