//! Count reports: zipping aggregated child counts back onto their parent rows.
//!
//! Every report runs in two steps. The service loads the parent rows into an id-ordered
//! [`BTreeMap`] and runs a `LEFT JOIN ... GROUP BY` aggregation over the same (optionally
//! single-id) set. [`zip_counts`] then joins the two in memory.

use std::collections::BTreeMap;

/// One parent row together with its number of children.
#[derive(Debug, Clone, PartialEq)]
pub struct CountReport<P> {
    pub parent: P,
    pub count: i64,
}

/// Builds the parent index used by [`zip_counts`].
pub fn index_by<P>(parents: Vec<P>, id_of: impl Fn(&P) -> i32) -> BTreeMap<i32, P> {
    parents.into_iter().map(|p| (id_of(&p), p)).collect()
}

/// Zips aggregated `(parent_id, count)` rows onto the parent index.
///
/// With `id == None` every parent is reported, in id order, with zero counts included.
/// With `id == Some(x)` only that parent is reported. `None` is returned when `x` is not in
/// the index, which callers turn into a not-found error.
pub fn zip_counts<P>(
    mut parents: BTreeMap<i32, P>,
    counts: Vec<(i32, i64)>,
    id: Option<i32>,
) -> Option<Vec<CountReport<P>>> {
    let counts: BTreeMap<i32, i64> = counts.into_iter().collect();

    if let Some(id) = id {
        let parent = parents.remove(&id)?;
        let count = counts.get(&id).copied().unwrap_or(0);
        return Some(vec![CountReport { parent, count }]);
    }

    Some(
        parents
            .into_iter()
            .map(|(parent_id, parent)| CountReport {
                parent,
                count: counts.get(&parent_id).copied().unwrap_or(0),
            })
            .collect(),
    )
}
