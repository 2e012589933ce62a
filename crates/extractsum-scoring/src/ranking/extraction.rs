//! Select the top third of a ranked table.

use extractsum_core::constants::SUMMARY_DIVISOR;
use extractsum_core::models::{RankedTable, SelectedSentence, Summary};

/// floor(N / 3).
pub fn summary_cutoff(sentence_count: usize) -> usize {
    sentence_count / SUMMARY_DIVISOR
}

/// Every sentence whose dense rank is within the cutoff, in document order.
///
/// Ties at the boundary are all kept, so the summary can hold more than
/// N / 3 sentences. A document with fewer than three sentences yields an
/// empty summary.
pub fn extract_summary(table: &RankedTable) -> Summary {
    let cutoff = summary_cutoff(table.rows.len());
    let selected = table
        .rows
        .iter()
        .filter(|row| row.rank <= cutoff)
        .map(|row| SelectedSentence {
            index: row.index,
            rank: row.rank,
            original: row.original.clone(),
        })
        .collect();

    Summary {
        variant: table.variant.clone(),
        name: table.name.clone(),
        sentence_count: table.rows.len(),
        cutoff,
        selected,
    }
}
