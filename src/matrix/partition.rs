//! Order-preserving grouping by key

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Group `items` by `key`, keeping groups in order of first appearance
///
/// Items inside a group keep their input order. Deterministic output matters
/// for the solver: ties between guesses are broken by evaluation order.
///
/// # Examples
/// ```
/// use quordle_solver::matrix::partition_by_key;
///
/// let groups = partition_by_key([3, 1, 4, 1, 5, 9, 2, 6], |n| n % 3);
/// assert_eq!(groups, vec![(0, vec![3, 9, 6]), (1, vec![1, 4, 1]), (2, vec![5, 2])]);
/// ```
pub fn partition_by_key<T, K, I, F>(items: I, mut key: F) -> Vec<(K, Vec<T>)>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash + Copy,
    F: FnMut(&T) -> K,
{
    let mut slots: FxHashMap<K, usize> = FxHashMap::default();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();

    for item in items {
        let k = key(&item);
        let slot = *slots.entry(k).or_insert_with(|| {
            groups.push((k, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(item);
    }

    groups
}
