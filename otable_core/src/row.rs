// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row projections: several fields, each read from its own record.

extern crate alloc;

use alloc::rc::Rc;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::error::{Operation, ProjectionError, View};
use crate::field::Field;
use crate::record::RecordRef;
use crate::slice::Slice;
use crate::value::Value;

/// Exposed name to position. The first field with a given name wins.
pub(crate) type NameIndex = HashMap<Arc<str>, usize>;

pub(crate) fn name_index<R>(fields: &[Field<R>]) -> NameIndex {
    let mut index = NameIndex::with_capacity(fields.len());
    for (i, field) in fields.iter().enumerate() {
        index.entry(Arc::clone(field.shared_name())).or_insert(i);
    }
    index
}

/// A fixed-width, mutable view pairing each field descriptor with one record.
///
/// Position `i` reads `fields[i]` from `records[i]`. Values are also reachable by the
/// field's exposed name. The width is fixed: rows can be read and written but never
/// sliced, shrunk, or grown, since their positions are heterogeneous.
pub struct RowProjection<R> {
    fields: Rc<[Field<R>]>,
    records: Vec<RecordRef<R>>,
    lookup: Rc<NameIndex>,
}

impl<R> fmt::Debug for RowProjection<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.names().collect();
        let mut s = f.debug_struct("RowProjection");
        s.field("names", &names);
        match self.display() {
            Ok(values) => s.field("values", &values),
            Err(err) => s.field("values", &format_args!("<{err}>")),
        };
        s.finish_non_exhaustive()
    }
}

impl<R> RowProjection<R> {
    /// Pairs `fields` with `records`, position by position.
    pub fn new(
        fields: impl IntoIterator<Item = Field<R>>,
        records: impl IntoIterator<Item = RecordRef<R>>,
    ) -> Result<Self, ProjectionError> {
        let fields: Rc<[Field<R>]> = fields.into_iter().collect();
        let records: Vec<RecordRef<R>> = records.into_iter().collect();
        if fields.len() != records.len() {
            return Err(ProjectionError::WidthMismatch {
                fields: fields.len(),
                records: records.len(),
            });
        }
        let lookup = Rc::new(name_index(&fields));
        Ok(Self {
            fields,
            records,
            lookup,
        })
    }

    /// Builds a row from a precomputed field list and name index.
    pub(crate) fn from_parts(
        fields: Rc<[Field<R>]>,
        lookup: Rc<NameIndex>,
        records: Vec<RecordRef<R>>,
    ) -> Self {
        debug_assert_eq!(
            fields.len(),
            records.len(),
            "one record per field descriptor"
        );
        Self {
            fields,
            records,
            lookup,
        }
    }

    /// Returns the number of positions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the row has no positions.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The exposed field names, in row order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(Field::name)
    }

    /// The field descriptors, in row order.
    pub fn fields(&self) -> &[Field<R>] {
        &self.fields
    }

    /// The record handles, in row order.
    pub fn records(&self) -> &[RecordRef<R>] {
        &self.records
    }

    /// The position of the field exposed as `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.lookup.get(name).copied()
    }

    fn at(&self, index: usize) -> Result<(&Field<R>, &RecordRef<R>), ProjectionError> {
        match (self.fields.get(index), self.records.get(index)) {
            (Some(field), Some(record)) => Ok((field, record)),
            _ => Err(ProjectionError::OutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    fn resolve(&self, name: &str) -> Result<usize, ProjectionError> {
        self.position(name)
            .ok_or_else(|| ProjectionError::FieldNotFound(Arc::from(name)))
    }

    /// Reads the value at `index`.
    pub fn get(&self, index: usize) -> Result<Value, ProjectionError> {
        let (field, record) = self.at(index)?;
        field.read(record)
    }

    /// Reads the value of the field exposed as `name`.
    ///
    /// Fails with [`ProjectionError::FieldNotFound`] if no field has that name.
    pub fn get_by_name(&self, name: &str) -> Result<Value, ProjectionError> {
        self.get(self.resolve(name)?)
    }

    /// Writes `value` at `index`.
    pub fn set(&self, index: usize, value: impl Into<Value>) -> Result<(), ProjectionError> {
        let (field, record) = self.at(index)?;
        field.write(record, value.into())
    }

    /// Writes `value` into the field exposed as `name`.
    pub fn set_by_name(&self, name: &str, value: impl Into<Value>) -> Result<(), ProjectionError> {
        self.set(self.resolve(name)?, value)
    }

    /// Always fails: row positions are heterogeneous, so a range of them has no meaning.
    pub fn slice(&self, _slice: impl Into<Slice>) -> Result<Self, ProjectionError> {
        Err(ProjectionError::unsupported(Operation::Slice, View::Row))
    }

    /// Always fails; see [`slice`](Self::slice).
    pub fn set_slice<I>(&self, _slice: impl Into<Slice>, _values: I) -> Result<(), ProjectionError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Err(ProjectionError::unsupported(Operation::SliceAssign, View::Row))
    }

    /// Always fails: the row's width is fixed by its field descriptors.
    pub fn delete(&mut self, _index: usize) -> Result<(), ProjectionError> {
        Err(ProjectionError::unsupported(Operation::Delete, View::Row))
    }

    /// Always fails; see [`delete`](Self::delete).
    pub fn delete_slice(&mut self, _slice: impl Into<Slice>) -> Result<(), ProjectionError> {
        Err(ProjectionError::unsupported(Operation::SliceDelete, View::Row))
    }

    /// Always fails: the row's width is fixed by its field descriptors.
    pub fn insert(
        &mut self,
        _index: usize,
        _value: impl Into<Value>,
    ) -> Result<(), ProjectionError> {
        Err(ProjectionError::unsupported(Operation::Insert, View::Row))
    }

    /// The current values, in row order. Read fresh on every call.
    pub fn display(&self) -> Result<Vec<Value>, ProjectionError> {
        self.fields
            .iter()
            .zip(&self.records)
            .map(|(field, record)| field.read(record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::rc::Rc;
    use alloc::vec;

    use super::*;
    use crate::fixtures::{Animal, animals};
    use crate::record::record;

    fn dog_row() -> (RecordRef<Animal>, RowProjection<Animal>) {
        let dog = record(Animal::new("Ralf", 4));
        let row = RowProjection::new(
            [Field::new("name"), Field::new("legs")],
            [Rc::clone(&dog), Rc::clone(&dog)],
        )
        .unwrap();
        (dog, row)
    }

    #[test]
    fn reads_by_position_and_by_name() {
        let (_, row) = dog_row();
        assert_eq!(row.len(), 2);
        assert_eq!(row.get(0), Ok(Value::from("Ralf")));
        assert_eq!(row.get_by_name("legs"), Ok(Value::Int(4)));
        assert_eq!(
            row.get_by_name("missing"),
            Err(ProjectionError::FieldNotFound("missing".into()))
        );
        assert_eq!(
            row.get(2),
            Err(ProjectionError::OutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(row.names().collect::<Vec<_>>(), ["name", "legs"]);
    }

    #[test]
    fn writes_go_to_the_record() {
        let (dog, row) = dog_row();
        row.set(0, "Rex").unwrap();
        row.set_by_name("legs", 3_i64).unwrap();
        assert_eq!(*dog.borrow(), Animal::new("Rex", 3));
        assert_eq!(
            row.set_by_name("tail", 1_i64),
            Err(ProjectionError::FieldNotFound("tail".into()))
        );
    }

    #[test]
    fn each_position_reads_its_own_record() {
        let zoo = animals();
        let row = RowProjection::new(
            [Field::new("name"), Field::new("legs")],
            [Rc::clone(&zoo[0]), Rc::clone(&zoo[1])],
        )
        .unwrap();
        assert_eq!(
            row.display(),
            Ok(vec![Value::from("Ralf"), Value::Int(0)])
        );
    }

    #[test]
    fn display_is_recomputed() {
        let (dog, row) = dog_row();
        assert_eq!(row.display(), Ok(vec![Value::from("Ralf"), Value::Int(4)]));
        dog.borrow_mut().legs = 5;
        assert_eq!(row.display(), Ok(vec![Value::from("Ralf"), Value::Int(5)]));
    }

    #[test]
    fn debug_shows_current_values() {
        let (dog, row) = dog_row();
        let text = std::format!("{row:?}");
        assert!(text.contains("\"legs\""), "{text}");
        assert!(text.contains("Str(\"Ralf\")"), "{text}");
        assert!(text.contains("Int(4)"), "{text}");

        let _held = dog.borrow_mut();
        let text = std::format!("{row:?}");
        assert!(text.contains("values: <"), "{text}");
        assert!(!text.contains("Ralf"), "{text}");
    }

    #[test]
    fn duplicate_names_resolve_to_the_first_field() {
        let dog = record(Animal::new("Ralf", 4));
        let row = RowProjection::new(
            [
                Field::with_attribute("x", "legs"),
                Field::with_attribute("x", "name"),
            ],
            [Rc::clone(&dog), Rc::clone(&dog)],
        )
        .unwrap();
        assert_eq!(row.get_by_name("x"), Ok(Value::Int(4)));
    }

    #[test]
    fn width_must_match() {
        let zoo = animals();
        let err = RowProjection::new([Field::<Animal>::new("name")], zoo).unwrap_err();
        assert_eq!(
            err,
            ProjectionError::WidthMismatch {
                fields: 1,
                records: 3,
            }
        );
    }

    #[test]
    fn structural_operations_always_fail() {
        let (_, mut row) = dog_row();
        for _ in 0..2 {
            assert_eq!(
                row.slice(..1).unwrap_err(),
                ProjectionError::Unsupported {
                    op: Operation::Slice,
                    view: View::Row,
                }
            );
            assert_eq!(
                row.set_slice(.., ["a", "b"]),
                Err(ProjectionError::Unsupported {
                    op: Operation::SliceAssign,
                    view: View::Row,
                })
            );
            assert_eq!(
                row.delete_slice(..),
                Err(ProjectionError::Unsupported {
                    op: Operation::SliceDelete,
                    view: View::Row,
                })
            );
            for index in [0, 1, 7] {
                assert_eq!(
                    row.delete(index),
                    Err(ProjectionError::Unsupported {
                        op: Operation::Delete,
                        view: View::Row,
                    })
                );
                assert_eq!(
                    row.insert(index, 1_i64),
                    Err(ProjectionError::Unsupported {
                        op: Operation::Insert,
                        view: View::Row,
                    })
                );
            }
        }
        assert_eq!(row.len(), 2);
    }
}
