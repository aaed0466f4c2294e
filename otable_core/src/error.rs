// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types returned by projections and field accessors.

extern crate alloc;

use alloc::sync::Arc;
use core::fmt;

use crate::value::ValueKind;

/// Errors returned when reading or writing a single field on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The record has no field with the requested name.
    #[error("record has no such field")]
    Missing,
    /// The value has the wrong type for the field.
    #[error("expected a {expected} value, found {found}")]
    TypeMismatch {
        /// The kind the field stores.
        expected: ValueKind,
        /// The kind that was supplied.
        found: ValueKind,
    },
    /// The value has the right type but does not fit the field.
    #[error("value does not fit in a {expected} field")]
    OutOfRange {
        /// The kind the field stores.
        expected: ValueKind,
    },
    /// The field has a getter but no setter.
    #[error("field is read-only")]
    ReadOnly,
}

/// A structural operation on a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Inserting a new position.
    Insert,
    /// Deleting a single position.
    Delete,
    /// Reading a range of positions.
    Slice,
    /// Assigning to a range of positions.
    SliceAssign,
    /// Deleting a range of positions.
    SliceDelete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Insert => "inserting",
            Self::Delete => "deleting",
            Self::Slice => "slicing",
            Self::SliceAssign => "assigning to a slice",
            Self::SliceDelete => "deleting a slice",
        })
    }
}

/// The kind of projection an operation was attempted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// A [`ColumnProjection`](crate::ColumnProjection).
    Column,
    /// A [`RowProjection`](crate::RowProjection).
    Row,
    /// A [`TableProjection`](crate::TableProjection).
    Table,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Column => "columns",
            Self::Row => "rows",
            Self::Table => "tables",
        })
    }
}

/// Errors returned by column, row, and table projections.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    /// A position outside `[0, len)`.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds {
        /// The requested position.
        index: usize,
        /// The length of the projection.
        len: usize,
    },
    /// A slice assignment supplied a different number of values than the slice selects.
    #[error("cardinality mismatch: slice selects {expected} positions, got {actual} values")]
    CardinalityMismatch {
        /// Number of positions selected by the slice.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
    /// The operation is never supported on this kind of projection.
    #[error("{op} is not supported on {view}")]
    Unsupported {
        /// The attempted operation.
        op: Operation,
        /// The projection it was attempted on.
        view: View,
    },
    /// A row was accessed by a name that is not one of its fields.
    #[error("row has no field named `{0}`")]
    FieldNotFound(Arc<str>),
    /// A table was built from zero columns.
    #[error("at least one column required")]
    EmptyColumns,
    /// A table column no longer has the same length as the first column.
    #[error("column `{column}` has length {actual}, expected {expected}")]
    LengthMismatch {
        /// Exposed name of the diverging column.
        column: Arc<str>,
        /// Length of the first column.
        expected: usize,
        /// Length of the diverging column.
        actual: usize,
    },
    /// A row was built from unequal numbers of fields and records.
    #[error("row has {fields} fields but {records} records")]
    WidthMismatch {
        /// Number of field descriptors.
        fields: usize,
        /// Number of records.
        records: usize,
    },
    /// A slice step of zero.
    #[error("slice step cannot be zero")]
    ZeroStep,
    /// A record is already mutably borrowed elsewhere.
    #[error("record is already borrowed")]
    RecordBorrowed,
    /// The accessor of a field failed.
    #[error("field `{field}`: {source}")]
    Field {
        /// Exposed name of the field.
        field: Arc<str>,
        /// The accessor failure.
        source: FieldError,
    },
}

impl ProjectionError {
    pub(crate) fn unsupported(op: Operation, view: View) -> Self {
        Self::Unsupported { op, view }
    }
}
