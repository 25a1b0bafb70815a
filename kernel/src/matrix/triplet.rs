//! Growable triplet accumulator
//!
//! The workhorse [`MatrixData`] store: `assign` appends to a triplet
//! vector, `compact` sorts and merges. Assembly loops append without
//! branching; the canonical form is established once per Jacobian build.

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::matrix::{Index, MatrixData, MatrixElement, MatrixValue, INVALID_INDEX};

/// Triplet-vector matrix accumulator
///
/// Entries live in insertion order until [`MatrixData::compact`] sorts them
/// by (row, col) and merges duplicates by summing.
///
/// # Example
/// ```
/// use grid_simulator_core_rs::matrix::{MatrixData, TripletMatrix};
///
/// let mut jac = TripletMatrix::new();
/// jac.assign(1, 2, 0.5);
/// jac.assign(0, 0, 1.0);
/// jac.assign(1, 2, 0.25);
/// jac.compact();
///
/// let entries: Vec<_> = jac.iter().map(|el| (el.row, el.col, el.data)).collect();
/// assert_eq!(entries, vec![(0, 0, 1.0), (1, 2, 0.75)]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripletMatrix<X: MatrixValue = f64> {
    elements: Vec<MatrixElement<X>>,
    row_lim: Index,
    col_lim: Index,
    #[serde(skip)]
    cur: usize,
}

impl<X: MatrixValue> TripletMatrix<X> {
    /// Create an empty accumulator with no row/column limits
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            row_lim: INVALID_INDEX,
            col_lim: INVALID_INDEX,
            cur: 0,
        }
    }

    /// Create an empty accumulator with row/column limits for the guarded
    /// assign variants
    pub fn with_limits(rows: Index, cols: Index) -> Self {
        Self {
            elements: Vec::new(),
            row_lim: rows,
            col_lim: cols,
            cur: 0,
        }
    }
}

impl<X: MatrixValue> Default for TripletMatrix<X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X: MatrixValue> MatrixData<X> for TripletMatrix<X> {
    fn clear(&mut self) {
        self.elements.clear();
        self.cur = 0;
    }

    fn assign(&mut self, row: Index, col: Index, value: X) {
        self.elements.push(MatrixElement {
            row,
            col,
            data: value,
        });
    }

    fn size(&self) -> usize {
        self.elements.len()
    }

    fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    fn reserve(&mut self, max_non_zeros: usize) {
        self.elements
            .reserve(max_non_zeros.saturating_sub(self.elements.len()));
    }

    fn at(&self, row: Index, col: Index) -> X {
        self.elements
            .iter()
            .filter(|el| el.row == row && el.col == col)
            .fold(X::zero(), |acc, el| acc + el.data)
    }

    fn row_index(&self, n: usize) -> Index {
        self.elements.get(n).map_or(INVALID_INDEX, |el| el.row)
    }

    fn col_index(&self, n: usize) -> Index {
        self.elements.get(n).map_or(INVALID_INDEX, |el| el.col)
    }

    fn value(&self, n: usize) -> X {
        self.elements.get(n).map_or_else(X::zero, |el| el.data)
    }

    fn compact(&mut self) {
        self.elements
            .sort_by(|a, b| (a.row, a.col).cmp(&(b.row, b.col)));
        self.elements.dedup_by(|later, kept| {
            if later.row == kept.row && later.col == kept.col {
                kept.data = kept.data + later.data;
                true
            } else {
                false
            }
        });
        self.cur = 0;
    }

    fn row_limit(&self) -> Index {
        self.row_lim
    }

    fn col_limit(&self) -> Index {
        self.col_lim
    }

    fn set_row_limit(&mut self, limit: Index) {
        self.row_lim = limit;
    }

    fn set_col_limit(&mut self, limit: Index) {
        self.col_lim = limit;
    }

    fn start(&mut self) {
        self.cur = 0;
    }

    fn next_element(&mut self) -> MatrixElement<X> {
        match self.elements.get(self.cur) {
            Some(&el) => {
                self.cur += 1;
                el
            }
            None => MatrixElement {
                row: INVALID_INDEX,
                col: INVALID_INDEX,
                data: X::zero(),
            },
        }
    }

    fn more_data(&self) -> bool {
        self.cur < self.elements.len()
    }
}
