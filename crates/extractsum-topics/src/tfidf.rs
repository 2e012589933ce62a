//! Smoothed TF-IDF with L2-normalized rows.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use ndarray::Array2;
use regex::Regex;
use rustc_hash::FxHashMap;

/// Runs of two or more word characters.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Document-term matrix over a sorted vocabulary.
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    /// Column labels, sorted lexicographically.
    pub terms: Vec<String>,
    /// One row per document.
    pub values: Array2<f64>,
}

impl TfidfMatrix {
    /// Fit the vocabulary on `documents` and transform them.
    ///
    /// tf is the raw count, idf = ln((1 + n) / (1 + df)) + 1, and each
    /// non-zero row is scaled to unit length. An empty vocabulary yields a
    /// matrix with zero columns.
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let mut seen: Vec<&str> = tokens.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let terms: Vec<String> = df.keys().map(|t| (*t).to_string()).collect();
        let column: FxHashMap<&str, usize> =
            df.keys().enumerate().map(|(i, t)| (*t, i)).collect();
        let idf: Vec<f64> = df
            .values()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let mut values = Array2::<f64>::zeros((documents.len(), terms.len()));
        for (row, tokens) in tokenized.iter().enumerate() {
            for token in tokens {
                if let Some(&col) = column.get(token.as_str()) {
                    values[[row, col]] += 1.0;
                }
            }
            let mut row_view = values.row_mut(row);
            for (col, v) in row_view.iter_mut().enumerate() {
                *v *= idf[col];
            }
            let norm = row_view.iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                row_view.mapv_inplace(|v| v / norm);
            }
        }

        Self { terms, values }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }
}

fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}
