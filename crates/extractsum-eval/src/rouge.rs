//! ROUGE-1, ROUGE-2 and ROUGE-L over stemmed lowercase alphanumeric tokens.
//!
//! Tokens longer than three characters go through the English (Porter)
//! stemmer. Each measure is the F1 of n-gram (or LCS) precision and recall;
//! an empty side scores 0.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashMap;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z0-9]+").unwrap());
static STEMMER: LazyLock<Stemmer> = LazyLock::new(|| Stemmer::create(Algorithm::English));

/// Shorter tokens are kept as-is.
const MIN_STEM_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RougeScores {
    pub rouge1: f64,
    pub rouge2: f64,
    pub rouge_l: f64,
}

impl RougeScores {
    /// Component-wise mean; `None` for an empty slice.
    pub fn mean(scores: &[RougeScores]) -> Option<RougeScores> {
        if scores.is_empty() {
            return None;
        }
        let n = scores.len() as f64;
        let sum = scores.iter().fold(RougeScores::default(), |acc, s| RougeScores {
            rouge1: acc.rouge1 + s.rouge1,
            rouge2: acc.rouge2 + s.rouge2,
            rouge_l: acc.rouge_l + s.rouge_l,
        });
        Some(RougeScores {
            rouge1: sum.rouge1 / n,
            rouge2: sum.rouge2 / n,
            rouge_l: sum.rouge_l / n,
        })
    }
}

pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN
        .find_iter(&lower)
        .map(|m| {
            let token = m.as_str();
            if token.len() >= MIN_STEM_LEN {
                STEMMER.stem(token).into_owned()
            } else {
                token.to_string()
            }
        })
        .collect()
}

pub fn rouge(reference: &str, generated: &str) -> RougeScores {
    let reference = tokenize(reference);
    let generated = tokenize(generated);
    RougeScores {
        rouge1: ngram_f1(&reference, &generated, 1),
        rouge2: ngram_f1(&reference, &generated, 2),
        rouge_l: lcs_f1(&reference, &generated),
    }
}

fn f1(overlap: usize, reference_len: usize, generated_len: usize) -> f64 {
    if overlap == 0 || reference_len == 0 || generated_len == 0 {
        return 0.0;
    }
    let precision = overlap as f64 / generated_len as f64;
    let recall = overlap as f64 / reference_len as f64;
    2.0 * precision * recall / (precision + recall)
}

fn ngram_counts(tokens: &[String], n: usize) -> FxHashMap<&[String], usize> {
    let mut counts = FxHashMap::default();
    for gram in tokens.windows(n) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}

fn ngram_f1(reference: &[String], generated: &[String], n: usize) -> f64 {
    let reference_counts = ngram_counts(reference, n);
    let generated_counts = ngram_counts(generated, n);
    let overlap = generated_counts
        .iter()
        .map(|(gram, &count)| count.min(reference_counts.get(gram).copied().unwrap_or(0)))
        .sum();
    f1(
        overlap,
        reference_counts.values().sum(),
        generated_counts.values().sum(),
    )
}

/// Longest common subsequence length, two-row table.
fn lcs_len(a: &[String], b: &[String]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for x in a {
        for (j, y) in b.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn lcs_f1(reference: &[String], generated: &[String]) -> f64 {
    f1(lcs_len(reference, generated), reference.len(), generated.len())
}
