// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column projections: one field across an ordered list of records.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{Operation, ProjectionError, View};
use crate::field::Field;
use crate::record::{Record, RecordRef};
use crate::slice::Slice;
use crate::value::Value;

/// A mutable sequence view of one field across many records.
///
/// The column owns its list of record handles, not the records. Reads and writes go
/// straight to the records, so every view sharing a record observes the same value.
///
/// Columns can shrink (by deleting positions) but never grow: growing would require
/// creating a record, which a view cannot do.
pub struct ColumnProjection<R> {
    field: Field<R>,
    records: Vec<RecordRef<R>>,
}

impl<R> Clone for ColumnProjection<R> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            records: self.records.clone(),
        }
    }
}

impl<R> fmt::Debug for ColumnProjection<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnProjection")
            .field("field", &self.field)
            .field("len", &self.records.len())
            .finish_non_exhaustive()
    }
}

impl<R: Record + 'static> ColumnProjection<R> {
    /// Projects the record field `name` under the same name.
    pub fn named(
        name: impl Into<alloc::sync::Arc<str>>,
        records: impl IntoIterator<Item = RecordRef<R>>,
    ) -> Self {
        Self::new(Field::new(name), records)
    }
}

impl<R> ColumnProjection<R> {
    /// Projects `field` over `records`, in order.
    pub fn new(field: Field<R>, records: impl IntoIterator<Item = RecordRef<R>>) -> Self {
        Self {
            field,
            records: records.into_iter().collect(),
        }
    }

    /// The field descriptor.
    pub fn field(&self) -> &Field<R> {
        &self.field
    }

    /// The exposed field name.
    pub fn name(&self) -> &str {
        self.field.name()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the column has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record handles, in column order.
    pub fn records(&self) -> &[RecordRef<R>] {
        &self.records
    }

    /// The record handle at `index`.
    pub fn record(&self, index: usize) -> Result<&RecordRef<R>, ProjectionError> {
        self.records.get(index).ok_or(ProjectionError::OutOfBounds {
            index,
            len: self.records.len(),
        })
    }

    /// Reads the field of the record at `index`.
    pub fn get(&self, index: usize) -> Result<Value, ProjectionError> {
        self.field.read(self.record(index)?)
    }

    /// A new column over the selected records, sharing this column's field and records.
    pub fn slice(&self, slice: impl Into<Slice>) -> Result<Self, ProjectionError> {
        let positions = slice.into().positions(self.records.len())?;
        Ok(Self {
            field: self.field.clone(),
            records: positions.map(|i| self.records[i].clone()).collect(),
        })
    }

    /// Writes `value` into the field of the record at `index`.
    pub fn set(&self, index: usize, value: impl Into<Value>) -> Result<(), ProjectionError> {
        self.field.write(self.record(index)?, value.into())
    }

    /// Writes `values` into the selected positions, in slice order.
    ///
    /// The number of values must equal the number of selected positions; this is checked
    /// before anything is written, so a [`ProjectionError::CardinalityMismatch`] leaves
    /// the records untouched. An accessor failure part-way through leaves the earlier
    /// positions written.
    pub fn set_slice<I>(&self, slice: impl Into<Slice>, values: I) -> Result<(), ProjectionError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let positions = slice.into().positions(self.records.len())?;
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.len() != positions.len() {
            return Err(ProjectionError::CardinalityMismatch {
                expected: positions.len(),
                actual: values.len(),
            });
        }
        for (i, value) in positions.zip(values) {
            self.field.write(&self.records[i], value)?;
        }
        Ok(())
    }

    /// Removes the record at `index` from the column. The record itself is untouched.
    pub fn delete(&mut self, index: usize) -> Result<(), ProjectionError> {
        self.record(index)?;
        self.records.remove(index);
        Ok(())
    }

    /// Removes the selected records from the column.
    pub fn delete_slice(&mut self, slice: impl Into<Slice>) -> Result<(), ProjectionError> {
        let positions = slice.into().positions(self.records.len())?;
        let mut doomed = vec![false; self.records.len()];
        for i in positions {
            doomed[i] = true;
        }
        let mut flags = doomed.into_iter();
        self.records.retain(|_| !flags.next().unwrap_or(false));
        Ok(())
    }

    /// Always fails: a column cannot create the record a new position would need.
    pub fn insert(
        &mut self,
        _index: usize,
        _value: impl Into<Value>,
    ) -> Result<(), ProjectionError> {
        Err(ProjectionError::unsupported(Operation::Insert, View::Column))
    }

    /// Reads every value, in column order.
    pub fn values(&self) -> Result<Vec<Value>, ProjectionError> {
        self.iter().collect()
    }

    /// Iterates over the current values.
    pub fn iter(&self) -> impl Iterator<Item = Result<Value, ProjectionError>> + '_ {
        self.records.iter().map(|r| self.field.read(r))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::rc::Rc;

    use super::*;
    use crate::error::FieldError;
    use crate::fixtures::{Animal, animals, names};
    use crate::value::ValueKind;

    #[test]
    fn length_follows_records() {
        let zoo = animals();
        let col = ColumnProjection::named("name", zoo.iter().cloned());
        assert_eq!(col.len(), zoo.len());
        assert!(!col.is_empty(), "three animals");

        let empty = ColumnProjection::<Animal>::named("name", Vec::new());
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty(), "no animals");
    }

    #[test]
    fn get_reads_the_current_value() {
        let col = ColumnProjection::named("legs", animals());
        assert_eq!(col.get(0), Ok(Value::Int(4)));
        assert_eq!(col.get(2), Ok(Value::Int(3)));
        assert_eq!(
            col.get(3),
            Err(ProjectionError::OutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn slices_are_new_columns_over_the_same_records() {
        let col = ColumnProjection::named("name", animals());
        let sliced = col.slice(..2).unwrap();
        assert_eq!(names(&sliced), ["Ralf", "Simon"]);
        assert_eq!(sliced.name(), "name");
        assert!(
            Rc::ptr_eq(&sliced.records()[1], &col.records()[1]),
            "slice shares record handles"
        );

        assert_eq!(names(&col.slice(1..).unwrap()), ["Simon", "Tripod"]);
        assert_eq!(names(&col.slice(..1).unwrap()), ["Ralf"]);
        assert_eq!(
            names(&col.slice(Slice::FULL.step_by(2)).unwrap()),
            ["Ralf", "Tripod"]
        );
        assert_eq!(
            names(&col.slice(Slice::FULL.step_by(-1)).unwrap()),
            ["Tripod", "Simon", "Ralf"]
        );
    }

    #[test]
    fn extreme_steps_do_not_overflow() {
        let col = ColumnProjection::named("name", animals());
        assert_eq!(
            names(&col.slice(Slice::FULL.step_by(isize::MIN)).unwrap()),
            ["Tripod"]
        );
        assert_eq!(
            names(&col.slice(Slice::FULL.step_by(isize::MAX)).unwrap()),
            ["Ralf"]
        );
    }

    #[test]
    fn set_then_get_round_trips() {
        let col = ColumnProjection::named("name", animals());
        col.set(1, "Sid").unwrap();
        assert_eq!(col.get(1), Ok(Value::from("Sid")));
        assert_eq!(
            col.set(5, "Nobody"),
            Err(ProjectionError::OutOfBounds { index: 5, len: 3 })
        );
    }

    #[test]
    fn slice_assignment_writes_in_order() {
        let col = ColumnProjection::named("name", animals());
        col.set_slice(..2, ["Fred", "Sam"]).unwrap();
        assert_eq!(names(&col), ["Fred", "Sam", "Tripod"]);

        col.set_slice(Slice::FULL.step_by(2), ["Joe", "Trip"]).unwrap();
        assert_eq!(names(&col), ["Joe", "Sam", "Trip"]);
    }

    #[test]
    fn empty_slice_assignment_is_a_no_op() {
        let col = ColumnProjection::named("name", animals());
        col.set_slice(1..1, Vec::<Value>::new()).unwrap();
        assert_eq!(names(&col), ["Ralf", "Simon", "Tripod"]);
    }

    #[test]
    fn cardinality_mismatch_leaves_column_untouched() {
        let col = ColumnProjection::named("name", animals());
        assert_eq!(
            col.set_slice(1..2, ["Joe", "Trip"]),
            Err(ProjectionError::CardinalityMismatch {
                expected: 1,
                actual: 2,
            })
        );
        assert_eq!(
            col.set_slice(.., ["Joe"]),
            Err(ProjectionError::CardinalityMismatch {
                expected: 3,
                actual: 1,
            })
        );
        assert_eq!(names(&col), ["Ralf", "Simon", "Tripod"]);
    }

    #[test]
    fn rejected_values_surface_the_field_error() {
        let col = ColumnProjection::named("legs", animals());
        assert_eq!(
            col.set(0, "four"),
            Err(ProjectionError::Field {
                field: "legs".into(),
                source: FieldError::TypeMismatch {
                    expected: ValueKind::Int,
                    found: ValueKind::Str,
                },
            })
        );
        assert_eq!(col.get(0), Ok(Value::Int(4)));
    }

    #[test]
    fn deleting_removes_positions_not_records() {
        let zoo = animals();
        let mut col = ColumnProjection::named("name", zoo.iter().cloned());
        col.delete_slice(..2).unwrap();
        assert_eq!(names(&col), ["Tripod"]);
        assert_eq!(zoo[0].borrow().name, "Ralf");

        let mut col = ColumnProjection::named("name", zoo.iter().cloned());
        col.delete(1).unwrap();
        assert_eq!(names(&col), ["Ralf", "Tripod"]);
        assert_eq!(
            col.delete(2),
            Err(ProjectionError::OutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn deleting_a_slice_shrinks_by_its_span() {
        let mut col = ColumnProjection::named("name", animals());
        col.delete_slice(Slice::FULL.step_by(2)).unwrap();
        assert_eq!(names(&col), ["Simon"]);

        let mut col = ColumnProjection::named("name", animals());
        col.delete_slice(5..).unwrap();
        assert_eq!(col.len(), 3);
    }

    #[test]
    fn insert_is_never_supported() {
        let mut col = ColumnProjection::named("name", animals());
        for index in [0, 1, 100] {
            assert_eq!(
                col.insert(index, "Jennifer"),
                Err(ProjectionError::Unsupported {
                    op: Operation::Insert,
                    view: View::Column,
                })
            );
        }
        assert_eq!(col.len(), 3);
    }

    #[test]
    fn values_materialize_in_order() {
        let col = ColumnProjection::named("legs", animals());
        assert_eq!(
            col.values(),
            Ok(vec![Value::Int(4), Value::Int(0), Value::Int(3)])
        );
    }
}
