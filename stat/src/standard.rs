use span::{Integer, Span};

use crate::{Error, Item, Kind};

/// Determines (at least approximately) the index of the span a value
/// belongs to, instead of searching the span sequence.
///
/// The caller guarantees a valid index for any value inside the covered
/// range; an out-of-range index is a contract violation and aborts via an
/// out-of-bounds panic rather than being silently tolerated.
pub type Predictor<T> = Box<dyn Fn(T) -> usize>;

pub(crate) const SPECIAL_ITEMS: usize = 3;

/// Statistics about the occurrences of values across an ordered sequence of
/// spans.
///
/// Values below the first span or above the last one are counted against
/// the representable extremes of the value type. Values inside the covered
/// range that no span claims are counted as missed; that is only reachable
/// when the spans are discontinuous and no predictor is supplied.
///
/// Single-writer by design: share across threads behind external
/// synchronization, or merge per-worker instances.
pub struct Stat<T: Integer> {
    pub(crate) items: Vec<Item<T>>,
    pub(crate) missed: Item<T>,
    pub(crate) below: Item<T>,
    pub(crate) above: Item<T>,
    predictor: Option<Predictor<T>>,
}

impl<T: Integer> Stat<T> {
    /// Creates statistics for the specified spans of values.
    ///
    /// The spans must be sorted from smallest to largest and must not
    /// intersect.
    ///
    /// The predictor may be omitted, in which case the span a value belongs
    /// to is determined by binary search, which is slower.
    pub fn new(spans: Vec<Span<T>>, predictor: Option<Predictor<T>>) -> Result<Self, Error> {
        if spans.is_empty() {
            return Err(Error::EmptySpans);
        }

        for pair in spans.windows(2) {
            if pair[1].begin() <= pair[0].end() {
                return Err(Error::UnsortedSpans);
            }
        }

        let items = spans
            .into_iter()
            .map(|span| Item {
                span,
                quantity: 0,
                kind: Kind::Regular,
            })
            .collect();

        let mut stat = Self {
            items,
            missed: Item {
                span: Span::point(T::ZERO),
                quantity: 0,
                kind: Kind::Missed,
            },
            below: Item {
                span: Span::point(T::ZERO),
                quantity: 0,
                kind: Kind::BelowRange,
            },
            above: Item {
                span: Span::point(T::ZERO),
                quantity: 0,
                kind: Kind::AboveRange,
            },
            predictor,
        };

        stat.init_bounds()?;

        Ok(stat)
    }

    // Synthesizes the below- and above-range spans from the type extremes.
    // The checked step past the first/last span fails exactly when that
    // span already touches the corresponding extreme, in which case the
    // special bucket stays unreachable.
    fn init_bounds(&mut self) -> Result<(), Error> {
        let first = self.items[0].span;
        let last = self.items[self.items.len() - 1].span;

        if let Some(end) = first.begin().checked_sub(T::ONE) {
            self.below.span = Span::new(T::MIN, end)?;
        }

        if let Some(begin) = last.end().checked_add(T::ONE) {
            self.above.span = Span::new(begin, T::MAX)?;
        }

        Ok(())
    }

    /// Increases the quantity of occurrences of the specified value.
    pub fn increment(&mut self, value: T) {
        if value < self.items[0].span.begin() {
            self.below.quantity = self.below.quantity.saturating_add(1);
            return;
        }

        if value > self.items[self.items.len() - 1].span.end() {
            self.above.quantity = self.above.quantity.saturating_add(1);
            return;
        }

        if let Some(predictor) = &self.predictor {
            let index = predictor(value);

            self.items[index].quantity = self.items[index].quantity.saturating_add(1);
            return;
        }

        let target = Span::point(value);

        match self
            .items
            .binary_search_by(|item| item.span.overlap_cmp(&target))
        {
            Ok(index) => {
                self.items[index].quantity = self.items[index].quantity.saturating_add(1);
            }
            Err(_) => self.missed.quantity = self.missed.quantity.saturating_add(1),
        }
    }

    /// Returns an ordered snapshot of the statistics items.
    ///
    /// The missed, below-range and above-range items are included only when
    /// their quantity is non-zero, in the order
    /// `[missed, below, regular.., above]`. The snapshot is an independent
    /// copy.
    pub fn items(&self) -> Vec<Item<T>> {
        let mut items = Vec::with_capacity(self.items.len() + SPECIAL_ITEMS);

        if self.missed.quantity != 0 {
            items.push(self.missed);
        }

        if self.below.quantity != 0 {
            items.push(self.below);
        }

        items.extend_from_slice(&self.items);

        if self.above.quantity != 0 {
            items.push(self.above);
        }

        items
    }
}
