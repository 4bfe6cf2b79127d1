//! Pure relationship-graph helpers.
//!
//! Nothing in here touches the database. The store feeds these functions the
//! id sets it read inside a transaction and applies the result in that same
//! transaction.

use std::collections::{BTreeSet, HashMap};

/// How a bulk replace changes one side of a relationship.
///
/// All id lists are sorted and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacePlan {
    /// Ids that gain the link.
    pub attach: Vec<i32>,
    /// Ids that held the link and lose it.
    pub detach: Vec<i32>,
    /// Ids that held the link and keep it.
    pub retained: Vec<i32>,
    /// Requested ids that do not resolve to an existing entity.
    pub ignored: Vec<i32>,
}

impl ReplacePlan {
    /// The full link set once the plan is applied.
    #[must_use]
    pub fn linked(&self) -> Vec<i32> {
        let mut linked: Vec<i32> = self
            .retained
            .iter()
            .chain(self.attach.iter())
            .copied()
            .collect();
        linked.sort_unstable();
        linked
    }

    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.attach.is_empty() && self.detach.is_empty()
    }
}

/// Plans a full replace of a link set.
///
/// * `current` - ids linked before the call
/// * `requested` - ids the caller wants linked, possibly with duplicates or unknown ids
/// * `existing` - the subset of `requested` that resolves to stored entities
///
/// Unknown ids end up in [`ReplacePlan::ignored`] instead of failing the call.
///
/// ```
/// # use cinedex::domain::relations::plan_replace;
/// let plan = plan_replace(&[1, 2], &[2, 3, 99], &[2, 3]);
/// assert_eq!(plan.attach, vec![3]);
/// assert_eq!(plan.detach, vec![1]);
/// assert_eq!(plan.retained, vec![2]);
/// assert_eq!(plan.ignored, vec![99]);
/// ```
#[must_use]
pub fn plan_replace(current: &[i32], requested: &[i32], existing: &[i32]) -> ReplacePlan {
    let current: BTreeSet<i32> = current.iter().copied().collect();
    let requested: BTreeSet<i32> = requested.iter().copied().collect();
    let existing: BTreeSet<i32> = existing
        .iter()
        .copied()
        .filter(|id| requested.contains(id))
        .collect();

    ReplacePlan {
        attach: existing.difference(&current).copied().collect(),
        detach: current.difference(&existing).copied().collect(),
        retained: current.intersection(&existing).copied().collect(),
        ignored: requested.difference(&existing).copied().collect(),
    }
}

/// Deduplicated union of several id sets, sorted ascending.
///
/// ```
/// # use cinedex::domain::relations::dedup_union;
/// let union = dedup_union(vec![vec![3, 1], vec![1, 2], vec![]]);
/// assert_eq!(union, vec![1, 2, 3]);
/// ```
pub fn dedup_union<I, S>(sets: I) -> Vec<i32>
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = i32>,
{
    sets.into_iter()
        .flatten()
        .collect::<BTreeSet<i32>>()
        .into_iter()
        .collect()
}

/// Groups `(owner, linked)` pairs into sorted id lists per owner.
pub fn group_links<I>(pairs: I) -> HashMap<i32, Vec<i32>>
where
    I: IntoIterator<Item = (i32, i32)>,
{
    let mut grouped: HashMap<i32, Vec<i32>> = HashMap::new();
    for (owner, linked) in pairs {
        grouped.entry(owner).or_default().push(linked);
    }
    for ids in grouped.values_mut() {
        ids.sort_unstable();
        ids.dedup();
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_with_empty_detaches_everything() {
        let plan = plan_replace(&[4, 5], &[], &[]);
        assert!(plan.attach.is_empty());
        assert_eq!(plan.detach, vec![4, 5]);
        assert!(plan.linked().is_empty());
    }

    #[test]
    fn test_replace_ignores_unknown_and_duplicate_ids() {
        let plan = plan_replace(&[], &[7, 7, 8, 1000], &[7, 8]);
        assert_eq!(plan.attach, vec![7, 8]);
        assert_eq!(plan.ignored, vec![1000]);
        assert_eq!(plan.linked(), vec![7, 8]);
    }

    #[test]
    fn test_same_request_twice_is_noop() {
        let first = plan_replace(&[1], &[2, 3], &[2, 3]);
        let second = plan_replace(&first.linked(), &[2, 3], &[2, 3]);
        assert!(second.is_noop());
        assert_eq!(second.linked(), first.linked());
    }

    #[test]
    fn test_existing_outside_request_is_not_attached() {
        // The store only ever passes a subset, but the plan must not trust that.
        let plan = plan_replace(&[], &[1], &[1, 2]);
        assert_eq!(plan.attach, vec![1]);
    }

    #[test]
    fn test_dedup_union_shared_member_once() {
        let union = dedup_union([vec![10, 11], vec![11, 12]]);
        assert_eq!(union, vec![10, 11, 12]);
    }

    #[test]
    fn test_group_links() {
        let grouped = group_links([(1, 5), (1, 3), (2, 3), (1, 3)]);
        assert_eq!(grouped[&1], vec![3, 5]);
        assert_eq!(grouped[&2], vec![3]);
        assert!(!grouped.contains_key(&3));
    }
}
