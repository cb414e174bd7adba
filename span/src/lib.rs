//! Inclusive integer spans and overflow-safe linear partitioning.
//!
//! A [`Span`] is an inclusive `[begin, end]` range over a fixed-width integer
//! type. [`linear`] slices a `[lower, upper]` interval into an ordered,
//! non-intersecting sequence of spans of a given width, and
//! [`width_for_quantity`] derives that width from a target number of spans.
//!
//! All arithmetic is exact even when the interval endpoints sit at the
//! representable minimum and maximum of the value type, where naive
//! subtraction would overflow. The [`Integer`] trait supplies the checked
//! operations and the widening distance used throughout.

mod errors;
mod int;
mod linear;
mod span;

pub use errors::Error;
pub use int::Integer;
pub use linear::{linear, width_for_quantity};
pub use span::Span;
