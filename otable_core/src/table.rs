// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Table projections: equal-length columns read row by row.

extern crate alloc;

use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::column::ColumnProjection;
use crate::error::{Operation, ProjectionError, View};
use crate::field::Field;
use crate::format::TableFormatter;
use crate::row::{RowProjection, name_index};
use crate::slice::Slice;
use crate::value::Value;

/// A grid of column projections, indexable by row.
///
/// All columns are expected to have the same length. This is not checked when the table
/// is built; reading a row fails with [`ProjectionError::LengthMismatch`] if a column has
/// diverged from the first one.
///
/// Rows take their field descriptors from the columns as they are when the row is read,
/// so reordering or replacing columns through [`columns_mut`](Self::columns_mut) is
/// reflected in every later row, name lookup, and rendering.
pub struct TableProjection<R> {
    columns: Vec<ColumnProjection<R>>,
}

impl<R> Clone for TableProjection<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<R> fmt::Debug for TableProjection<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableProjection")
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

impl<R> TableProjection<R> {
    /// Builds a table from `columns`, in order.
    ///
    /// Fails with [`ProjectionError::EmptyColumns`] if there are none.
    pub fn new(
        columns: impl IntoIterator<Item = ColumnProjection<R>>,
    ) -> Result<Self, ProjectionError> {
        let columns: Vec<ColumnProjection<R>> = columns.into_iter().collect();
        if columns.is_empty() {
            return Err(ProjectionError::EmptyColumns);
        }
        Ok(Self { columns })
    }

    /// Returns the number of rows: the length of the first column.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, ColumnProjection::len)
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// The exposed column names, in column order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(ColumnProjection::name).collect()
    }

    /// The columns, in order.
    pub fn columns(&self) -> &[ColumnProjection<R>] {
        &self.columns
    }

    /// Mutable access to the columns.
    ///
    /// Columns may be reordered or replaced. Deleting from a column through this breaks
    /// the equal-length contract; rows read afterwards fail with
    /// [`ProjectionError::LengthMismatch`].
    pub fn columns_mut(&mut self) -> &mut [ColumnProjection<R>] {
        &mut self.columns
    }

    /// The first column exposed as `name`.
    pub fn column(&self, name: &str) -> Option<&ColumnProjection<R>> {
        self.columns.iter().find(|column| column.name() == name)
    }

    /// Unwraps the table into its columns.
    pub fn into_columns(self) -> Vec<ColumnProjection<R>> {
        self.columns
    }

    /// The row at `index`: each column's record at `index`, paired with its field.
    pub fn get(&self, index: usize) -> Result<RowProjection<R>, ProjectionError> {
        let expected = self.len();
        let mut records = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            if column.len() != expected {
                return Err(ProjectionError::LengthMismatch {
                    column: Arc::clone(column.field().shared_name()),
                    expected,
                    actual: column.len(),
                });
            }
            records.push(Rc::clone(column.record(index)?));
        }
        let fields: Rc<[Field<R>]> = self
            .columns
            .iter()
            .map(|column| column.field().clone())
            .collect();
        let lookup = Rc::new(name_index(&fields));
        Ok(RowProjection::from_parts(fields, lookup, records))
    }

    /// Always fails: slice each column and build a new table instead.
    pub fn slice(&self, _slice: impl Into<Slice>) -> Result<Self, ProjectionError> {
        Err(ProjectionError::unsupported(Operation::Slice, View::Table))
    }

    /// Iterates over the rows, in order.
    pub fn rows(&self) -> impl Iterator<Item = Result<RowProjection<R>, ProjectionError>> + '_ {
        (0..self.len()).map(|i| self.get(i))
    }

    /// The display values of every row, in order.
    pub fn body(&self) -> Result<Vec<Vec<Value>>, ProjectionError> {
        self.rows().map(|row| row?.display()).collect()
    }

    /// Renders the table with `formatter`, using [`column_names`](Self::column_names) as
    /// the header.
    pub fn render<F>(&self, formatter: &F) -> Result<String, ProjectionError>
    where
        F: TableFormatter + ?Sized,
    {
        let body = self.body()?;
        Ok(formatter.format(&self.column_names(), &body))
    }
}
