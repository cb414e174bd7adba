use core::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Integer};

/// An inclusive `[begin, end]` range over a fixed-width integer type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span<T> {
    pub(crate) begin: T,
    pub(crate) end: T,
}

impl<T: Integer> Span<T> {
    /// Construct a span, rejecting inverted bounds.
    pub fn new(begin: T, end: T) -> Result<Self, Error> {
        if begin > end {
            return Err(Error::InvalidRange);
        }

        Ok(Self { begin, end })
    }

    /// A degenerate single-value span, used as a search probe.
    pub fn point(value: T) -> Self {
        Self {
            begin: value,
            end: value,
        }
    }

    pub fn begin(&self) -> T {
        self.begin
    }

    pub fn end(&self) -> T {
        self.end
    }

    pub fn contains(&self, value: T) -> bool {
        self.begin <= value && value <= self.end
    }

    /// Three-way comparison for binary searching ordered span sequences.
    ///
    /// Spans compare equal when they intersect, so probing a sorted,
    /// non-intersecting sequence with a point span finds the containing
    /// span or reports the gap it fell into.
    pub fn overlap_cmp(&self, other: &Self) -> Ordering {
        if self.end < other.begin {
            return Ordering::Less;
        }

        if self.begin > other.end {
            return Ordering::Greater;
        }

        Ordering::Equal
    }
}
