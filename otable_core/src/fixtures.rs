// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared test records.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::column::ColumnProjection;
use crate::record::{RecordRef, records};

/// An animal with some number of legs.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Animal {
    pub(crate) name: String,
    pub(crate) legs: i64,
}

impl Animal {
    pub(crate) fn new(name: &str, legs: i64) -> Self {
        Self {
            name: name.into(),
            legs,
        }
    }
}

crate::impl_record!(Animal { name, legs });

/// Ralf the dog, Simon the snake, and Tripod the cat.
pub(crate) fn animals() -> Vec<RecordRef<Animal>> {
    records([
        Animal::new("Ralf", 4),
        Animal::new("Simon", 0),
        Animal::new("Tripod", 3),
    ])
}

/// Reads a string column into owned strings.
pub(crate) fn names(column: &ColumnProjection<Animal>) -> Vec<String> {
    column
        .values()
        .unwrap()
        .into_iter()
        .map(|v| String::try_from(v).unwrap())
        .collect()
}
