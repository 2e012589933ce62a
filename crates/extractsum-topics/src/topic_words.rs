//! Highest-weighted feature labels per topic.

use ndarray::Array2;

/// For each row of H, the labels of the `n` largest weights, descending.
/// Equal weights keep the lower column index first.
pub fn top_words(h: &Array2<f64>, labels: &[String], n: usize) -> Vec<Vec<String>> {
    h.rows()
        .into_iter()
        .map(|row| {
            let mut order: Vec<usize> = (0..row.len()).collect();
            order.sort_by(|&a, &b| row[b].total_cmp(&row[a]).then(a.cmp(&b)));
            order
                .into_iter()
                .take(n)
                .filter_map(|i| labels.get(i).cloned())
                .collect()
        })
        .collect()
}
