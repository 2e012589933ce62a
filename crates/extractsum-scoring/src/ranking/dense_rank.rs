//! Dense ranking: 1 for the largest value, ties share a rank, no gaps.

/// Dense rank of each value, descending.
///
/// Values are compared with `total_cmp` after folding `-0.0` into `0.0`,
/// so equal scores always tie.
pub fn dense_rank(values: &[f64]) -> Vec<usize> {
    let normalized: Vec<f64> = values.iter().map(|v| v + 0.0).collect();
    let mut distinct = normalized.clone();
    distinct.sort_by(|a, b| b.total_cmp(a));
    distinct.dedup_by(|a, b| a.total_cmp(b).is_eq());

    normalized
        .iter()
        .map(|v| distinct.partition_point(|d| d.total_cmp(v).is_gt()) + 1)
        .collect()
}
