//! Weighted Levenshtein distance for spelling suggestions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellrankError};

/// Weighted edit distance between two strings.
///
/// The grid carries one boundary row and column filled with infinity, plus a
/// boundary symbol prepended to both strings. The cell where the two boundary
/// symbols meet is the origin and holds zero; every real alignment must pass
/// through it, so empty strings need no special case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EditWeights")]
pub struct EditDistance {
    insert: f64,
    delete: f64,
    replace: f64,
}

/// Weights as written in a serialized metric; `replace` may be omitted.
#[derive(Debug, Deserialize)]
struct EditWeights {
    insert: f64,
    delete: f64,
    replace: Option<f64>,
}

impl TryFrom<EditWeights> for EditDistance {
    type Error = SpellrankError;

    fn try_from(weights: EditWeights) -> Result<Self> {
        EditDistance::validated(weights.insert, weights.delete, weights.replace)
    }
}

impl EditDistance {
    /// Create a metric whose replace cost is `insert + delete`.
    pub fn new(insert: f64, delete: f64) -> Result<Self> {
        Self::with_replace(insert, delete, insert + delete)
    }

    /// Create a metric with an independent replace cost.
    ///
    /// Every weight must be finite and non-negative.
    pub fn with_replace(insert: f64, delete: f64, replace: f64) -> Result<Self> {
        for (name, weight) in [
            ("insert_weight", insert),
            ("delete_weight", delete),
            ("replace_weight", replace),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(SpellrankError::configuration(format!(
                    "{name} must be a finite non-negative number, got {weight}"
                )));
            }
        }

        Ok(EditDistance {
            insert,
            delete,
            replace,
        })
    }

    /// Create a metric from optional replace weight, as read from configuration.
    pub fn validated(insert: f64, delete: f64, replace: Option<f64>) -> Result<Self> {
        match replace {
            Some(replace) => Self::with_replace(insert, delete, replace),
            None => Self::new(insert, delete),
        }
    }

    pub fn insert_weight(&self) -> f64 {
        self.insert
    }

    pub fn delete_weight(&self) -> f64 {
        self.delete
    }

    pub fn replace_weight(&self) -> f64 {
        self.replace
    }

    /// Compute the weighted edit distance from `source` to `target`.
    pub fn distance(&self, source: &str, target: &str) -> f64 {
        self.grid(source, target).distance()
    }

    /// Fill and return the whole dynamic-programming grid.
    ///
    /// Useful for debugging a ranking; the value at the bottom-right cell is
    /// exactly what [`EditDistance::distance`] returns.
    pub fn grid(&self, source: &str, target: &str) -> DistanceGrid {
        let source: Vec<char> = source.chars().collect();
        let target: Vec<char> = target.chars().collect();

        // Boundary symbol at index 0 of both sequences, then the real chars.
        let rows = source.len() + 2;
        let cols = target.len() + 2;
        let mut cells = vec![f64::INFINITY; rows * cols];
        cells[cols + 1] = 0.0;

        for i in 1..rows {
            for j in 1..cols {
                if i == 1 && j == 1 {
                    continue;
                }

                let up = cells[(i - 1) * cols + j] + self.delete;
                let left = cells[i * cols + j - 1] + self.insert;
                let same = i >= 2 && j >= 2 && source[i - 2] == target[j - 2];
                let diag = cells[(i - 1) * cols + j - 1] + if same { 0.0 } else { self.replace };

                cells[i * cols + j] = up.min(left).min(diag);
            }
        }

        DistanceGrid {
            source,
            target,
            cols,
            cells,
        }
    }
}

impl Default for EditDistance {
    fn default() -> Self {
        EditDistance {
            insert: 1.0,
            delete: 1.0,
            replace: 2.0,
        }
    }
}

/// A filled edit-distance grid, rendered by its `Display` impl.
#[derive(Debug, Clone)]
pub struct DistanceGrid {
    source: Vec<char>,
    target: Vec<char>,
    cols: usize,
    cells: Vec<f64>,
}

impl DistanceGrid {
    /// The value at the bottom-right cell.
    pub fn distance(&self) -> f64 {
        self.cells[self.cells.len() - 1]
    }

    /// Cell value at `(row, col)`, both including the boundary row/column.
    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        if col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }

    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

impl fmt::Display for DistanceGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = |chars: &[char], idx: usize| match idx {
            0 => ' ',
            1 => '#',
            n => chars[n - 2],
        };

        write!(f, "   ")?;
        for j in 0..self.cols {
            write!(f, "{:>5}", label(&self.target, j))?;
        }
        writeln!(f)?;

        for i in 0..self.rows() {
            write!(f, "{:>3}", label(&self.source, i))?;
            for j in 0..self.cols {
                let value = self.cells[i * self.cols + j];
                if value.is_infinite() {
                    write!(f, "{:>5}", "inf")?;
                } else {
                    write!(f, "{value:>5.1}")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        let metric = EditDistance::default();
        for word in ["", "a", "cat", "kitten", "ação"] {
            assert_eq!(metric.distance(word, word), 0.0);
        }
    }

    #[test]
    fn test_default_weights() {
        let metric = EditDistance::default();
        assert_eq!(metric.replace_weight(), 2.0);
        assert_eq!(metric.distance("cat", "cats"), 1.0);
        assert_eq!(metric.distance("cats", "cat"), 1.0);
        assert_eq!(metric.distance("cat", "cot"), 2.0);
        assert_eq!(metric.distance("play", "stay"), 4.0);
        assert_eq!(metric.distance("intention", "execution"), 8.0);
    }

    #[test]
    fn test_empty_strings() {
        let metric = EditDistance::new(1.5, 2.0).unwrap();
        assert_eq!(metric.distance("", ""), 0.0);
        assert_eq!(metric.distance("", "abcd"), 6.0);
        assert_eq!(metric.distance("abc", ""), 6.0);
    }

    #[test]
    fn test_single_edits_use_their_weight() {
        let metric = EditDistance::with_replace(1.0, 3.0, 0.5).unwrap();
        assert_eq!(metric.distance("cat", "cart"), 1.0);
        assert_eq!(metric.distance("cart", "cat"), 3.0);
        assert_eq!(metric.distance("cat", "cut"), 0.5);
    }

    #[test]
    fn test_replace_never_exceeds_delete_plus_insert() {
        let metric = EditDistance::with_replace(1.0, 1.0, 5.0).unwrap();
        assert_eq!(metric.distance("cat", "cot"), 2.0);
    }

    #[test]
    fn test_validated_rejects_bad_weights() {
        assert!(EditDistance::validated(1.0, 1.0, None).is_ok());
        assert!(EditDistance::validated(-1.0, 1.0, None).is_err());
        assert!(EditDistance::validated(1.0, f64::NAN, None).is_err());
        assert!(EditDistance::validated(1.0, 1.0, Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_constructors_reject_bad_weights() {
        assert!(matches!(
            EditDistance::new(-1.0, 1.0),
            Err(SpellrankError::Configuration(_))
        ));
        assert!(EditDistance::new(1.0, f64::INFINITY).is_err());
        assert!(EditDistance::with_replace(1.0, 1.0, -0.5).is_err());
        assert!(EditDistance::with_replace(0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_deserialize_validates_weights() {
        let metric: EditDistance =
            serde_json::from_str(r#"{"insert": 1.0, "delete": 2.0}"#).unwrap();
        assert_eq!(metric.replace_weight(), 3.0);

        let roundtrip: EditDistance =
            serde_json::from_str(&serde_json::to_string(&metric).unwrap()).unwrap();
        assert_eq!(roundtrip, metric);

        let err = serde_json::from_str::<EditDistance>(r#"{"insert": -1.0, "delete": 1.0}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_grid_matches_distance() {
        let metric = EditDistance::default();
        let grid = metric.grid("sit", "sat");

        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.cell(0, 3), Some(f64::INFINITY));
        assert_eq!(grid.cell(1, 1), Some(0.0));
        assert_eq!(grid.cell(1, 4), Some(3.0));
        assert_eq!(grid.distance(), metric.distance("sit", "sat"));

        let rendered = grid.to_string();
        assert!(rendered.contains("inf"));
        assert_eq!(rendered.lines().count(), 6);
    }
}
