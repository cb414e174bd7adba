use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use span::Span;

/// Kind (purpose) of a statistics item.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    /// Counts values belonging to one of the explicit spans.
    Regular,
    /// Counts values below the first span, down to the type minimum.
    BelowRange,
    /// Counts values above the last span, up to the type maximum.
    AboveRange,
    /// Counts values inside the covered range that no span claims.
    Missed,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Regular => write!(f, "regular"),
            Kind::BelowRange => write!(f, "-Inf"),
            Kind::AboveRange => write!(f, "+Inf"),
            Kind::Missed => write!(f, "missed"),
        }
    }
}

/// One counted bucket: a span, its kind and the quantity of occurrences of
/// values belonging to it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item<T> {
    pub(crate) span: Span<T>,
    pub(crate) quantity: u64,
    pub(crate) kind: Kind,
}

impl<T: Copy> Item<T> {
    pub fn span(&self) -> Span<T> {
        self.span
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }
}
