//! Forward-only iteration over scrollable result cursors.

use std::fmt;

use tracing::trace;

/// A scrollable result cursor, created positioned before its first row.
///
/// [`row`](ScrollCursor::row) may only be called after a successful
/// [`advance`](ScrollCursor::advance); implementations are free to panic
/// otherwise.
pub trait ScrollCursor {
    /// Row value the cursor yields.
    type Item;

    /// Advances to the next row, returning false when no row remains.
    fn advance(&mut self) -> bool;

    /// Returns true when positioned on the last row, or when the cursor
    /// holds no rows at all.
    fn is_last(&self) -> bool;

    /// Returns the current row's value.
    fn row(&self) -> Self::Item;
}

/// Forward-only [`Iterator`] over a [`ScrollCursor`].
///
/// Another element exists exactly while the cursor is not on its last row,
/// so an empty cursor is exhausted immediately and `next` past the end
/// keeps returning `None`.
#[derive(Debug)]
pub struct CursorIter<C> {
    cursor: C,
}

impl<C: ScrollCursor> CursorIter<C> {
    /// Wraps a cursor positioned before its first row.
    #[must_use]
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Returns true while another row remains.
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.cursor.is_last()
    }

    /// Returns the underlying cursor.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C> Iterator for CursorIter<C>
where
    C: ScrollCursor,
    C::Item: fmt::Debug,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.cursor.is_last() || !self.cursor.advance() {
            return None;
        }
        let row = self.cursor.row();
        trace!(row = ?row, "cursor yields next element");
        Some(row)
    }
}

/// In-memory [`ScrollCursor`] over a vector of rows.
#[derive(Debug)]
pub struct VecCursor<T> {
    rows: Vec<T>,
    position: Option<usize>,
}

impl<T> VecCursor<T> {
    /// Creates a cursor positioned before the first row.
    #[must_use]
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            position: None,
        }
    }
}

impl<T> From<Vec<T>> for VecCursor<T> {
    fn from(rows: Vec<T>) -> Self {
        Self::new(rows)
    }
}

impl<T: Clone> ScrollCursor for VecCursor<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        let next = match self.position {
            None => 0,
            Some(current) => current + 1,
        };
        if next < self.rows.len() {
            self.position = Some(next);
            true
        } else {
            false
        }
    }

    fn is_last(&self) -> bool {
        match self.position {
            None => self.rows.is_empty(),
            Some(current) => current + 1 == self.rows.len(),
        }
    }

    fn row(&self) -> T {
        let position = self.position.expect("cursor is not positioned on a row");
        self.rows[position].clone()
    }
}

impl<T: Clone + fmt::Debug> IntoIterator for VecCursor<T> {
    type Item = T;
    type IntoIter = CursorIter<VecCursor<T>>;

    fn into_iter(self) -> Self::IntoIter {
        CursorIter::new(self)
    }
}
