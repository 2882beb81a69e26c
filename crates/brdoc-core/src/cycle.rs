//! # Cyclic Weight Iterator
//!
//! [`WeightCycle`] is a cursor over a fixed, non-empty table that wraps
//! around indefinitely in both directions. The CNPJ check-digit scheme uses
//! it to assign the `[9, 8, 7, 6, 5, 4, 3, 2]` weights to digit sequences
//! whose length is not a multiple of the table length.
//!
//! ## Cursor model
//!
//! The cursor is a signed index that always lies in `[0, len)`. A freshly
//! built (or [`reset`](WeightCycle::reset)) cycle points at the last
//! element, so the next read yields element 0. Moving the cursor by `n`
//! computes `(len + cursor + (n % len)) % len`. Because `%` on `i64`
//! truncates toward zero, `n % len` lies in `(-len, len)` and the outer
//! sum stays positive for any `n`, including `i64::MIN`.
//!
//! ## Ownership
//!
//! The cycle borrows its table and owns only the cursor. It is not meant to
//! be shared: build one per computation.

/// Circular cursor over a borrowed, non-empty table.
#[derive(Debug, Clone)]
pub struct WeightCycle<'a, T> {
    values: &'a [T],
    len: i64,
    cursor: i64,
}

impl<'a, T: Copy> WeightCycle<'a, T> {
    /// Build a cycle over `values`, positioned before the first element.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty. An empty table is a caller bug, not a
    /// data error.
    pub fn new(values: &'a [T]) -> Self {
        assert!(!values.is_empty(), "must be a non-empty sequence");
        // slice lengths never exceed isize::MAX
        let len = values.len() as i64;
        Self {
            values,
            len,
            cursor: len - 1,
        }
    }

    /// Number of elements in the backing table.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the element most recently yielded (or the last index after
    /// a reset).
    pub fn position(&self) -> usize {
        // cursor is kept in [0, len)
        self.cursor as usize
    }

    /// Move the cursor back to just before element 0.
    pub fn reset(&mut self) {
        self.cursor = self.len - 1;
    }

    /// Move the cursor `n` steps (negative moves backward), wrapping.
    ///
    /// Returns `self` so a read can be chained:
    /// `cycle.advance_by(3).next_value()`.
    pub fn advance_by(&mut self, n: i64) -> &mut Self {
        self.cursor = (self.len + self.cursor + (n % self.len)) % self.len;
        self
    }

    /// Advance by one and return the element under the cursor.
    pub fn next_value(&mut self) -> T {
        self.advance_by(1);
        self.values[self.position()]
    }

    /// Read the next `n` elements, wrapping as many times as needed.
    pub fn take_values(&mut self, n: usize) -> Vec<T> {
        (0..n).map(|_| self.next_value()).collect()
    }

    /// Pair every element of `other`, in order, with the next cycled value.
    ///
    /// The result is exactly as long as `other`; the table repeats when
    /// `other` is longer than it.
    pub fn pair_with<I>(&mut self, other: I) -> Vec<(T, I::Item)>
    where
        I: IntoIterator,
    {
        other
            .into_iter()
            .map(|item| (self.next_value(), item))
            .collect()
    }
}
