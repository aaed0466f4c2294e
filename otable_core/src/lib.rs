// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List-like projections over shared records.
//!
//! This crate lets callers treat selected fields of their own records as table columns
//! and rows, without copying any field data:
//! - a [`ColumnProjection`] exposes one field across an ordered list of records,
//! - a [`RowProjection`] exposes several fields, each from its own record,
//! - a [`TableProjection`] composes equal-length columns and hands out rows.
//!
//! Records are held as [`RecordRef`]s (`Rc<RefCell<R>>`), so a write through any view
//! is visible through every other view over the same record. Fields are read through
//! the [`Record`] trait by default, or through a caller-supplied [`FieldAccess`].
//!
//! Views never create or destroy records: columns can shrink but not grow, and rows
//! have a fixed width. Operations that would need otherwise always fail with
//! [`ProjectionError::Unsupported`].
//!
//! ```
//! use otable_core::{
//!     ColumnProjection, PlainFormatter, TableProjection, Value, impl_record, records,
//! };
//!
//! struct Animal {
//!     name: String,
//!     legs: i64,
//! }
//!
//! impl_record!(Animal { name, legs });
//!
//! let zoo = records([
//!     Animal { name: "Ralf".into(), legs: 4 },
//!     Animal { name: "Simon".into(), legs: 0 },
//! ]);
//! let table = TableProjection::new([
//!     ColumnProjection::named("name", zoo.iter().cloned()),
//!     ColumnProjection::named("legs", zoo.iter().cloned()),
//! ])?;
//!
//! table.get(1)?.set_by_name("legs", 1_i64)?;
//! assert_eq!(zoo[1].borrow().legs, 1);
//! assert_eq!(table.columns()[1].get(1)?, Value::Int(1));
//!
//! println!("{}", table.render(&PlainFormatter)?);
//! # Ok::<(), otable_core::ProjectionError>(())
//! ```
//!
//! Rendering is pluggable through [`TableFormatter`]; see the `otable_comfy` crate for a
//! `comfy-table` backend.

#![no_std]

extern crate alloc;

mod column;
mod error;
mod field;
#[cfg(test)]
mod fixtures;
mod format;
mod record;
mod row;
mod slice;
mod table;
mod value;

pub use column::ColumnProjection;
pub use error::{FieldError, Operation, ProjectionError, View};
pub use field::{ByName, Field, FieldAccess};
pub use format::{PlainFormatter, TableFormatter};
pub use record::{Record, RecordRef, record, records};
pub use row::RowProjection;
pub use slice::{Positions, Slice};
pub use table::TableProjection;
pub use value::{Value, ValueKind};
