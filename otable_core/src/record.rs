// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Records: caller-owned objects with named fields.

extern crate alloc;

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::error::FieldError;
use crate::value::Value;

/// A shared, mutable handle to a record.
///
/// Projections only ever clone these handles, so a write through one view is visible
/// through every other view over the same record.
pub type RecordRef<R> = Rc<RefCell<R>>;

/// Wraps a record in a [`RecordRef`].
pub fn record<R>(record: R) -> RecordRef<R> {
    Rc::new(RefCell::new(record))
}

/// Wraps each record in a [`RecordRef`].
pub fn records<R>(records: impl IntoIterator<Item = R>) -> alloc::vec::Vec<RecordRef<R>> {
    records.into_iter().map(record).collect()
}

/// Name-based field access on a record.
///
/// This is what default [`Field`](crate::Field)s use. Implement it by hand, or with
/// [`impl_record!`](crate::impl_record) for plain structs.
pub trait Record {
    /// Reads the field `name`, or `None` if the record has no such field.
    fn field(&self, name: &str) -> Option<Value>;

    /// Writes `value` into the field `name`.
    fn set_field(&mut self, name: &str, value: Value) -> Result<(), FieldError>;
}

/// Implements [`Record`] for a struct by listing the fields to expose.
///
/// Each listed field must be `Clone`, convert into a [`Value`] with `From`, and convert
/// back with `TryFrom<Value, Error = FieldError>`.
///
/// ```
/// use otable_core::{Record, Value, impl_record};
///
/// struct Animal {
///     name: String,
///     legs: i64,
/// }
///
/// impl_record!(Animal { name, legs });
///
/// let mut dog = Animal { name: "Ralf".into(), legs: 4 };
/// assert_eq!(dog.field("legs"), Some(Value::Int(4)));
/// dog.set_field("legs", Value::Int(3)).unwrap();
/// assert_eq!(dog.legs, 3);
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn field(&self, name: &str) -> ::core::option::Option<$crate::Value> {
                match name {
                    $(
                        ::core::stringify!($field) => ::core::option::Option::Some(
                            $crate::Value::from(::core::clone::Clone::clone(&self.$field)),
                        ),
                    )*
                    _ => ::core::option::Option::None,
                }
            }

            fn set_field(
                &mut self,
                name: &str,
                value: $crate::Value,
            ) -> ::core::result::Result<(), $crate::FieldError> {
                match name {
                    $(
                        ::core::stringify!($field) => {
                            self.$field = ::core::convert::TryFrom::try_from(value)?;
                            ::core::result::Result::Ok(())
                        }
                    )*
                    _ => ::core::result::Result::Err($crate::FieldError::Missing),
                }
            }
        }
    };
}
