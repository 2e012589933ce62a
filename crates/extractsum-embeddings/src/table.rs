//! In-memory word-vector table and its text-file parser.

use std::io::{BufRead, BufReader};
use std::path::Path;

use extractsum_core::errors::EmbeddingError;
use rustc_hash::FxHashMap;
use tracing::info;

use crate::traits::WordEmbeddings;

/// Lowercase token to f32 vector, all of dimensionality D.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingTable {
    dims: usize,
    vectors: FxHashMap<String, Vec<f32>>,
}

impl EmbeddingTable {
    /// Load a whitespace-delimited vector file: a token followed by D floats per line.
    pub fn load(path: &Path) -> Result<Self, EmbeddingError> {
        let label = path.display().to_string();
        let file = std::fs::File::open(path).map_err(|e| EmbeddingError::Unreadable {
            path: label.clone(),
            reason: e.to_string(),
        })?;
        let table = Self::parse(BufReader::new(file), &label)?;
        info!(
            path = %label,
            tokens = table.len(),
            dims = table.dims,
            "loaded embedding table"
        );
        Ok(table)
    }

    /// Parse vector lines from any reader. `label` names the source in errors.
    ///
    /// D is taken from the first non-blank line. Blank lines are skipped; a
    /// later duplicate token replaces the earlier one.
    pub fn parse<R: BufRead>(reader: R, label: &str) -> Result<Self, EmbeddingError> {
        let mut dims: Option<usize> = None;
        let mut vectors = FxHashMap::default();

        for (i, line) in reader.lines().enumerate() {
            let line_no = i + 1;
            let line = line.map_err(|e| EmbeddingError::Unreadable {
                path: label.to_string(),
                reason: format!("line {line_no}: {e}"),
            })?;
            let mut fields = line.split_whitespace();
            let Some(token) = fields.next() else {
                continue;
            };

            let values = fields
                .map(|f| {
                    f.parse::<f32>().map_err(|_| EmbeddingError::MalformedLine {
                        path: label.to_string(),
                        line: line_no,
                        reason: format!("'{f}' is not a number"),
                    })
                })
                .collect::<Result<Vec<f32>, _>>()?;

            if values.is_empty() {
                return Err(EmbeddingError::MalformedLine {
                    path: label.to_string(),
                    line: line_no,
                    reason: format!("token '{token}' has no values"),
                });
            }
            let expected = *dims.get_or_insert(values.len());
            if values.len() != expected {
                return Err(EmbeddingError::MalformedLine {
                    path: label.to_string(),
                    line: line_no,
                    reason: format!("expected {expected} values, found {}", values.len()),
                });
            }

            vectors.insert(token.to_lowercase(), values);
        }

        match dims {
            Some(dims) => Ok(Self { dims, vectors }),
            None => Err(EmbeddingError::Empty {
                path: label.to_string(),
            }),
        }
    }

    /// Build a table from in-memory entries; all vectors must share one length.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, EmbeddingError>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let mut dims = None;
        let mut vectors = FxHashMap::default();
        for (line, (token, values)) in entries.into_iter().enumerate() {
            let token: String = token.into();
            let expected = *dims.get_or_insert(values.len());
            if values.is_empty() || values.len() != expected {
                return Err(EmbeddingError::MalformedLine {
                    path: "<memory>".to_string(),
                    line: line + 1,
                    reason: format!("token '{token}' has {} values", values.len()),
                });
            }
            vectors.insert(token.to_lowercase(), values);
        }
        match dims {
            Some(dims) => Ok(Self { dims, vectors }),
            None => Err(EmbeddingError::Empty {
                path: "<memory>".to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl WordEmbeddings for EmbeddingTable {
    fn dimensions(&self) -> usize {
        self.dims
    }

    fn vector(&self, token: &str) -> Option<&[f32]> {
        self.vectors.get(token).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<EmbeddingTable, EmbeddingError> {
        EmbeddingTable::parse(text.as_bytes(), "mem.txt")
    }

    #[test]
    fn infers_dimensions_from_first_line() {
        let table = parse("the 0.1 0.2 0.3\nagree 1 0 -1\n").unwrap();
        assert_eq!(table.dimensions(), 3);
        assert_eq!(table.len(), 2);
        assert_eq!(table.vector("agree"), Some(&[1.0f32, 0.0, -1.0][..]));
    }

    #[test]
    fn tokens_are_lowercased() {
        let table = parse("Terms 1 2\n").unwrap();
        assert!(table.contains("terms"));
        assert!(!table.contains("Terms"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let table = parse("\n\na 1 2\n\nb 3 4\n").unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn wrong_width_names_the_line() {
        let err = parse("a 1 2\nb 3\n").unwrap_err();
        assert!(matches!(err, EmbeddingError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn unparsable_value_is_malformed() {
        let err = parse("a 1 x\n").unwrap_err();
        assert!(matches!(err, EmbeddingError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn token_without_values_is_malformed() {
        let err = parse("a 1 2\nlonely\n").unwrap_err();
        assert!(matches!(err, EmbeddingError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(parse("").unwrap_err(), EmbeddingError::Empty { .. }));
    }

    #[test]
    fn average_ignores_oov_and_zero_fills() {
        let table = parse("a 1 3\nb 3 5\n").unwrap();
        let (avg, found) = table.average(["a", "zzz", "b"]);
        assert_eq!(found, 2);
        assert_eq!(avg, vec![2.0, 4.0]);

        let (zero, found) = table.average(["zzz", "yyy"]);
        assert_eq!(found, 0);
        assert_eq!(zero, vec![0.0, 0.0]);
    }
}
