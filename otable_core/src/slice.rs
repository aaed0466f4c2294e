// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `(start, stop, step)` selections over a projection.

use core::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::error::ProjectionError;

/// A `(start, stop, step)` selection.
///
/// Bounds follow the usual sequence-slice rules:
/// - negative bounds count from the end,
/// - omitted bounds default to the whole sequence in the direction of `step`,
/// - bounds past either end are clamped, so a slice never selects an invalid position.
///
/// A step of zero is rejected when the slice is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slice {
    start: Option<isize>,
    stop: Option<isize>,
    step: isize,
}

impl Default for Slice {
    fn default() -> Self {
        Self::FULL
    }
}

impl Slice {
    /// Selects every position.
    pub const FULL: Self = Self {
        start: None,
        stop: None,
        step: 1,
    };

    /// Creates a slice with explicit bounds and a step of 1.
    #[must_use]
    pub fn new(start: Option<isize>, stop: Option<isize>) -> Self {
        Self {
            start,
            stop,
            step: 1,
        }
    }

    /// Sets the step.
    #[must_use]
    pub fn step_by(mut self, step: isize) -> Self {
        self.step = step;
        self
    }

    /// Resolves this slice against a sequence of length `len`.
    pub fn positions(&self, len: usize) -> Result<Positions, ProjectionError> {
        if self.step == 0 {
            return Err(ProjectionError::ZeroStep);
        }
        let len = isize::try_from(len).unwrap_or(isize::MAX);
        let step = self.step;
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: Option<isize>, default: isize| match bound {
            None => default,
            Some(b) if b < 0 => (b + len).max(lower),
            Some(b) => b.min(upper),
        };
        let (start, stop) = if step < 0 {
            (clamp(self.start, upper), clamp(self.stop, lower))
        } else {
            (clamp(self.start, lower), clamp(self.stop, upper))
        };
        // `unsigned_abs` keeps `isize::MIN` steps from overflowing.
        let span = if step > 0 { stop - start } else { start - stop };
        let remaining = if span > 0 {
            (span - 1).unsigned_abs() / step.unsigned_abs() + 1
        } else {
            0
        };
        Ok(Positions {
            next: start,
            step,
            remaining,
        })
    }
}

impl From<Range<usize>> for Slice {
    fn from(r: Range<usize>) -> Self {
        Self::new(Some(to_isize(r.start)), Some(to_isize(r.end)))
    }
}

impl From<RangeFrom<usize>> for Slice {
    fn from(r: RangeFrom<usize>) -> Self {
        Self::new(Some(to_isize(r.start)), None)
    }
}

impl From<RangeTo<usize>> for Slice {
    fn from(r: RangeTo<usize>) -> Self {
        Self::new(None, Some(to_isize(r.end)))
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::FULL
    }
}

fn to_isize(v: usize) -> isize {
    isize::try_from(v).unwrap_or(isize::MAX)
}

/// The positions selected by a [`Slice`], in iteration order.
#[derive(Clone, Debug)]
pub struct Positions {
    next: isize,
    step: isize,
    remaining: usize,
}

impl Iterator for Positions {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;
        self.next = self.next.wrapping_add(self.step);
        Some(current.unsigned_abs())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Positions {}
