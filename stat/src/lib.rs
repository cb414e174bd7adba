//! This crate collects statistics about the occurrences of integer values
//! across an ordered sequence of spans and reports them as counted items or
//! as a textual bar chart.
//!
//! A [`Stat`] owns one counter per span plus three special buckets: values
//! below the first span and above the last span are counted against the
//! representable extremes of the value type (conceptually `-Inf` / `+Inf`),
//! and values that fall into a gap between non-adjacent spans are counted as
//! missed.
//!
//! Bucket membership is resolved either through a caller-supplied predictor
//! function in constant time, or by binary search over the span sequence.
//! The linear constructors derive spans of even width together with the
//! matching predictor, using arithmetic that stays exact at the type
//! extremes.

mod chart;
mod errors;
mod item;
mod linear;
mod standard;

pub use errors::{ChartError, Error};
pub use item::{Item, Kind};
pub use standard::{Predictor, Stat};

pub use span::{Integer, Span};
