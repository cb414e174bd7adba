use span::{Integer, Span};

use crate::{Error, Stat};

impl<T: Integer> Stat<T> {
    /// Creates linear statistics whose items have the specified width.
    ///
    /// The predictor divides the distance from the lower bound by the
    /// width, so bucket membership is resolved without searching.
    pub fn linear(lower: T, upper: T, width: T) -> Result<Self, Error> {
        let spans = span::linear(lower, upper, width)?;

        let width = width.distance(T::ZERO);
        let predictor = move |value: T| (value.distance(lower) / width) as usize;

        Self::new(spans, Some(Box::new(predictor)))
    }

    /// Creates linear statistics with the specified quantity of items.
    ///
    /// The width is rounded up to keep the sequence within the quantity, so
    /// fewer items may be produced when the rounded width re-tiles the range
    /// more coarsely.
    pub fn linear_with_quantity(lower: T, upper: T, quantity: T) -> Result<Self, Error> {
        if lower > upper {
            return Err(span::Error::InvalidRange.into());
        }

        if quantity <= T::ZERO {
            return Err(span::Error::InvalidQuantity.into());
        }

        if quantity == T::ONE {
            let spans = vec![Span::new(lower, upper)?];

            return Self::new(spans, Some(Box::new(|_| 0)));
        }

        match span::width_for_quantity(lower, upper, quantity) {
            Ok(width) => Self::linear(lower, upper, width),
            Err(span::Error::DivideOverflow) => {
                // Reachable only for signed types with bounds at the type
                // extremes and a quantity of two: half the domain width is
                // not representable, but the domain splits exactly at zero.
                // Not generalized to other quantities.
                let below_zero = T::ZERO.checked_sub(T::ONE).ok_or(span::Error::DivideOverflow)?;

                let spans = vec![Span::new(lower, below_zero)?, Span::new(T::ZERO, upper)?];

                let predictor = |value: T| usize::from(value >= T::ZERO);

                Self::new(spans, Some(Box::new(predictor)))
            }
            Err(err) => Err(err.into()),
        }
    }
}
