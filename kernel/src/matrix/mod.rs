//! Sparse Jacobian entry accumulation
//!
//! The solver assembles sparse Jacobian matrices by pushing (row, col,
//! value) entries through a polymorphic accumulation interface. Model code
//! writes entries without knowing the backing store; the solver normalizes
//! with [`MatrixData::compact`] before handing the structure to the linear
//! algebra layer.
//!
//! This component is time-independent: nothing here touches the simulation
//! time representation.
//!
//! # Contract
//!
//! - `assign` accumulates: duplicate (row, col) entries are allowed and sum
//! - `at` returns the stored value or an implicit zero; it is a total
//!   function
//! - iteration exposes every stored entry once per pass, in
//!   implementation-defined order until `compact` establishes the
//!   canonical sorted, deduplicated form
//! - all positional accessors are total: out-of-range positions yield
//!   [`INVALID_INDEX`] / zero rather than panicking

pub mod triplet;

pub use triplet::TripletMatrix;

use std::ops::Mul;

use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Row/column index type
#[cfg(feature = "large-index")]
pub type Index = u64;

/// Row/column index type
#[cfg(not(feature = "large-index"))]
pub type Index = u32;

/// Marker for "no limit" and for out-of-range positional access
pub const INVALID_INDEX: Index = Index::MAX;

/// Values storable in a matrix accumulator
///
/// Requires an implicit zero (for `at` misses), addition (duplicate
/// accumulation), and multiplication (scaled merges). Blanket-implemented;
/// `f64` is the default everywhere.
pub trait MatrixValue: Copy + PartialEq + Zero + Mul<Output = Self> {}

impl<T: Copy + PartialEq + Zero + Mul<Output = T>> MatrixValue for T {}

/// One (row, col, value) entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatrixElement<X = f64> {
    pub row: Index,
    pub col: Index,
    pub data: X,
}

/// Polymorphic Jacobian entry accumulator
///
/// Implementors store (row, col, value) triples and decide the backing
/// layout; the bulk operations (`merge`, `merge_scaled`,
/// `copy_translate_row`) and the guarded assigns are provided over the
/// minimal required surface.
///
/// # Example
/// ```
/// use grid_simulator_core_rs::matrix::{MatrixData, TripletMatrix};
///
/// let mut jac = TripletMatrix::<f64>::new();
/// jac.assign(0, 0, 1.0);
/// jac.assign(0, 0, 0.5); // accumulates
/// jac.assign(3, 1, -2.0);
/// assert_eq!(jac.at(0, 0), 1.5);
/// assert_eq!(jac.at(7, 7), 0.0); // implicit zero
/// ```
pub trait MatrixData<X: MatrixValue = f64> {
    /// Remove all stored entries
    fn clear(&mut self);

    /// Accumulate/insert an entry
    fn assign(&mut self, row: Index, col: Index, value: X);

    /// Number of stored entries (duplicates counted until `compact`)
    fn size(&self) -> usize;

    /// Current storage capacity in entries
    fn capacity(&self) -> usize;

    /// Pre-size the store for an expected number of nonzeros
    fn reserve(&mut self, _max_non_zeros: usize) {}

    /// The stored value at (row, col), or an implicit zero
    ///
    /// Duplicate entries that have not been compacted sum.
    fn at(&self, row: Index, col: Index) -> X;

    /// Row of the n-th stored entry, or [`INVALID_INDEX`] past the end
    fn row_index(&self, n: usize) -> Index;

    /// Column of the n-th stored entry, or [`INVALID_INDEX`] past the end
    fn col_index(&self, n: usize) -> Index;

    /// Value of the n-th stored entry, or zero past the end
    fn value(&self, n: usize) -> X;

    /// The n-th stored entry as a triple
    fn element(&self, n: usize) -> MatrixElement<X> {
        MatrixElement {
            row: self.row_index(n),
            col: self.col_index(n),
            data: self.value(n),
        }
    }

    /// Normalize to the canonical form: sorted by (row, col), duplicates
    /// merged by summing
    ///
    /// Stores that are always canonical need not override this.
    fn compact(&mut self) {}

    /// Maximum assignable row index (exclusive); [`INVALID_INDEX`] = none
    fn row_limit(&self) -> Index;

    /// Maximum assignable column index (exclusive); [`INVALID_INDEX`] = none
    fn col_limit(&self) -> Index;

    fn set_row_limit(&mut self, limit: Index);

    fn set_col_limit(&mut self, limit: Index);

    /// Assign only when the row is below the configured row limit
    fn assign_check_row(&mut self, row: Index, col: Index, value: X) {
        if row < self.row_limit() {
            self.assign(row, col, value);
        }
    }

    /// Assign only when the column is below the configured column limit
    fn assign_check_col(&mut self, row: Index, col: Index, value: X) {
        if col < self.col_limit() {
            self.assign(row, col, value);
        }
    }

    /// Assign only when both indices are below their configured limits
    fn assign_check(&mut self, row: Index, col: Index, value: X) {
        if row < self.row_limit() && col < self.col_limit() {
            self.assign(row, col, value);
        }
    }

    /// Reset the single-pass retrieval cursor
    fn start(&mut self);

    /// The entry under the cursor, advancing it
    ///
    /// Once the pass is exhausted, returns the invalid element
    /// (`INVALID_INDEX` row and column, zero value).
    fn next_element(&mut self) -> MatrixElement<X>;

    /// Whether the current pass has entries left
    fn more_data(&self) -> bool;

    /// Copy every entry of `other` into this store
    ///
    /// Uses `other`'s retrieval cursor, so the pass consumes it.
    fn merge(&mut self, other: &mut dyn MatrixData<X>) {
        let count = other.size();
        other.start();
        for _ in 0..count {
            let el = other.next_element();
            self.assign(el.row, el.col, el.data);
        }
    }

    /// Copy every entry of `other`, scaling each value
    fn merge_scaled(&mut self, other: &mut dyn MatrixData<X>, scale: X) {
        let count = other.size();
        other.start();
        for _ in 0..count {
            let el = other.next_element();
            self.assign(el.row, el.col, el.data * scale);
        }
    }

    /// Copy the entries of one row of `other`, re-homing them at `new_row`
    fn copy_translate_row(&mut self, other: &dyn MatrixData<X>, orig_row: Index, new_row: Index) {
        for n in 0..other.size() {
            if other.row_index(n) == orig_row {
                self.assign(new_row, other.col_index(n), other.value(n));
            }
        }
    }

    /// Lazy iterator over the stored entries
    ///
    /// The cursor copies structurally: a cloned iterator restarts nothing
    /// and shares nothing, unlike the stateful `start`/`next_element`
    /// protocol.
    fn iter(&self) -> MatrixElements<'_, X>
    where
        Self: Sized,
    {
        MatrixElements { data: self, cur: 0 }
    }
}

/// Iterator over the entries of a [`MatrixData`]
#[derive(Clone, Copy)]
pub struct MatrixElements<'a, X: MatrixValue> {
    data: &'a dyn MatrixData<X>,
    cur: usize,
}

impl<'a, X: MatrixValue> Iterator for MatrixElements<'a, X> {
    type Item = MatrixElement<X>;

    fn next(&mut self) -> Option<MatrixElement<X>> {
        if self.cur < self.data.size() {
            let el = self.data.element(self.cur);
            self.cur += 1;
            Some(el)
        } else {
            None
        }
    }
}
