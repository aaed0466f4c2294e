// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field descriptors: what a column or row position exposes, and how to reach it.

extern crate alloc;

use alloc::rc::Rc;
use alloc::sync::Arc;
use core::fmt;

use crate::error::{FieldError, ProjectionError};
use crate::record::{Record, RecordRef};
use crate::value::Value;

/// Reads and writes one field on a record.
///
/// [`ByName`] is the default, going through [`Record`]. Implement this trait directly
/// for records that do not implement [`Record`], or for derived fields.
pub trait FieldAccess<R: ?Sized> {
    /// Reads the field.
    fn get(&self, record: &R) -> Result<Value, FieldError>;

    /// Writes the field.
    fn set(&self, record: &mut R, value: Value) -> Result<(), FieldError>;
}

/// Name-based access through [`Record`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByName {
    attribute: Arc<str>,
}

impl ByName {
    /// Accesses the record field called `attribute`.
    pub fn new(attribute: impl Into<Arc<str>>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }
}

impl<R: Record + ?Sized> FieldAccess<R> for ByName {
    fn get(&self, record: &R) -> Result<Value, FieldError> {
        record.field(&self.attribute).ok_or(FieldError::Missing)
    }

    fn set(&self, record: &mut R, value: Value) -> Result<(), FieldError> {
        record.set_field(&self.attribute, value)
    }
}

struct Computed<G>(G);

impl<R, G> FieldAccess<R> for Computed<G>
where
    G: Fn(&R) -> Value,
{
    fn get(&self, record: &R) -> Result<Value, FieldError> {
        Ok((self.0)(record))
    }

    fn set(&self, _record: &mut R, _value: Value) -> Result<(), FieldError> {
        Err(FieldError::ReadOnly)
    }
}

struct WithGetter<R, G> {
    base: Rc<dyn FieldAccess<R>>,
    getter: G,
}

impl<R, G> FieldAccess<R> for WithGetter<R, G>
where
    G: Fn(&R) -> Value,
{
    fn get(&self, record: &R) -> Result<Value, FieldError> {
        Ok((self.getter)(record))
    }

    fn set(&self, record: &mut R, value: Value) -> Result<(), FieldError> {
        self.base.set(record, value)
    }
}

struct WithSetter<R, S> {
    base: Rc<dyn FieldAccess<R>>,
    setter: S,
}

impl<R, S> FieldAccess<R> for WithSetter<R, S>
where
    S: Fn(&mut R, Value) -> Result<(), FieldError>,
{
    fn get(&self, record: &R) -> Result<Value, FieldError> {
        self.base.get(record)
    }

    fn set(&self, record: &mut R, value: Value) -> Result<(), FieldError> {
        (self.setter)(record, value)
    }
}

/// A field descriptor: an exposed name, the underlying attribute, and an accessor.
///
/// Cloning is cheap; clones share the accessor.
pub struct Field<R> {
    name: Arc<str>,
    attribute: Arc<str>,
    access: Rc<dyn FieldAccess<R>>,
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            attribute: Arc::clone(&self.attribute),
            access: Rc::clone(&self.access),
        }
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("attribute", &self.attribute)
            .finish_non_exhaustive()
    }
}

impl<R: Record + 'static> Field<R> {
    /// Exposes the record field `name` under the same name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        Self::with_attribute(Arc::clone(&name), name)
    }

    /// Exposes the record field `attribute` under `name`.
    pub fn with_attribute(name: impl Into<Arc<str>>, attribute: impl Into<Arc<str>>) -> Self {
        let attribute = attribute.into();
        Self {
            name: name.into(),
            access: Rc::new(ByName::new(Arc::clone(&attribute))),
            attribute,
        }
    }
}

impl<R: 'static> Field<R> {
    /// A read-only field computed from the record.
    ///
    /// Writes fail with [`FieldError::ReadOnly`] unless a setter is added with
    /// [`with_setter`](Self::with_setter).
    pub fn computed<G>(name: impl Into<Arc<str>>, getter: G) -> Self
    where
        G: Fn(&R) -> Value + 'static,
    {
        Self::with_access(name, Computed(getter))
    }

    /// A field with a caller-supplied accessor.
    pub fn with_access<A>(name: impl Into<Arc<str>>, access: A) -> Self
    where
        A: FieldAccess<R> + 'static,
    {
        let name = name.into();
        Self {
            attribute: Arc::clone(&name),
            name,
            access: Rc::new(access),
        }
    }

    /// Replaces how the field is read, keeping how it is written.
    #[must_use]
    pub fn with_getter<G>(self, getter: G) -> Self
    where
        G: Fn(&R) -> Value + 'static,
    {
        Self {
            access: Rc::new(WithGetter {
                base: self.access,
                getter,
            }),
            ..self
        }
    }

    /// Replaces how the field is written, keeping how it is read.
    #[must_use]
    pub fn with_setter<S>(self, setter: S) -> Self
    where
        S: Fn(&mut R, Value) -> Result<(), FieldError> + 'static,
    {
        Self {
            access: Rc::new(WithSetter {
                base: self.access,
                setter,
            }),
            ..self
        }
    }
}

impl<R> Field<R> {
    /// The exposed name, used for headers and row lookup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying attribute name.
    ///
    /// Defaults to the exposed name; informational for custom accessors.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub(crate) fn shared_name(&self) -> &Arc<str> {
        &self.name
    }

    /// Reads this field from `record`.
    pub fn get(&self, record: &R) -> Result<Value, ProjectionError> {
        self.access.get(record).map_err(|source| self.error(source))
    }

    /// Writes `value` into this field on `record`.
    pub fn set(&self, record: &mut R, value: Value) -> Result<(), ProjectionError> {
        self.access
            .set(record, value)
            .map_err(|source| self.error(source))
    }

    pub(crate) fn read(&self, record: &RecordRef<R>) -> Result<Value, ProjectionError> {
        let record = record
            .try_borrow()
            .map_err(|_| ProjectionError::RecordBorrowed)?;
        self.get(&record)
    }

    pub(crate) fn write(&self, record: &RecordRef<R>, value: Value) -> Result<(), ProjectionError> {
        let mut record = record
            .try_borrow_mut()
            .map_err(|_| ProjectionError::RecordBorrowed)?;
        self.set(&mut record, value)
    }

    fn error(&self, source: FieldError) -> ProjectionError {
        ProjectionError::Field {
            field: Arc::clone(&self.name),
            source,
        }
    }
}
