use crate::{Error, Integer, Span};

/// Slices `[lower, upper]` into an ordered sequence of spans of the
/// specified width.
///
/// Every span except possibly the last is exactly `width` wide; the last is
/// truncated to end at `upper`. The sequence covers `[lower, upper]` with no
/// gaps and no intersections, even when the bounds sit at the representable
/// extremes of the value type.
pub fn linear<T: Integer>(lower: T, upper: T, width: T) -> Result<Vec<Span<T>>, Error> {
    if lower > upper {
        return Err(Error::InvalidRange);
    }

    if width <= T::ZERO {
        return Err(Error::InvalidWidth);
    }

    // Cannot underflow: width is positive.
    let step = width.checked_sub(T::ONE).ok_or(Error::InvalidWidth)?;

    let total = upper.distance(lower);
    let capacity = (total / width.distance(T::ZERO)).saturating_add(1);

    let mut spans = Vec::with_capacity(usize::try_from(capacity).unwrap_or(0));

    let mut begin = lower;

    loop {
        let end = match begin.checked_add(step) {
            Some(end) if end < upper => end,
            _ => upper,
        };

        spans.push(Span { begin, end });

        match end.checked_add(T::ONE) {
            Some(next) if next <= upper => begin = next,
            _ => break,
        }
    }

    Ok(spans)
}

/// Derives the span width that partitions `[lower, upper]` into the
/// specified quantity of spans, rounding the width up so the sequence never
/// exceeds the quantity.
///
/// Fails with [`Error::DivideOverflow`] when the width does not fit the
/// value type. With the bound checks below that is reachable in two cases:
/// a quantity of one over a full 64-bit domain, where the width is the
/// domain size itself and exceeds even `u64`, and signed types whose
/// bounds equal the type extremes with a quantity of two, where the width
/// is half the full domain and exceeds the signed maximum.
pub fn width_for_quantity<T: Integer>(lower: T, upper: T, quantity: T) -> Result<T, Error> {
    if lower > upper {
        return Err(Error::InvalidRange);
    }

    if quantity <= T::ZERO {
        return Err(Error::InvalidQuantity);
    }

    let quantity = quantity.distance(T::ZERO);

    // For d = distance and q = quantity, ceil((d + 1) / q) equals
    // d / q + 1 exactly: writing d = aq + r with 0 <= r < q gives
    // ceil((aq + r + 1) / q) = a + 1 since 1 <= r + 1 <= q. The increment
    // is checked: with q == 1 over a full 64-bit domain the quotient is
    // already u64::MAX.
    (upper.distance(lower) / quantity)
        .checked_add(1)
        .and_then(T::from_u64)
        .ok_or(Error::DivideOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(begin: i64, end: i64) -> Span<i64> {
        Span::new(begin, end).unwrap()
    }

    #[test]
    fn linear_truncates_last() {
        let spans = linear(1i64, 100, 39).unwrap();

        assert_eq!(spans, vec![span(1, 39), span(40, 78), span(79, 100)]);
    }

    #[test]
    fn linear_exact_tiling() {
        let spans = linear(0i64, 99, 25).unwrap();

        assert_eq!(
            spans,
            vec![span(0, 24), span(25, 49), span(50, 74), span(75, 99)]
        );
    }

    #[test]
    fn linear_single_value() {
        assert_eq!(linear(7i64, 7, 3).unwrap(), vec![span(7, 7)]);
    }

    #[test]
    fn linear_full_unsigned_domain() {
        let spans = linear(0u8, u8::MAX, 100).unwrap();

        let expected = vec![
            Span::new(0u8, 99).unwrap(),
            Span::new(100, 199).unwrap(),
            Span::new(200, 255).unwrap(),
        ];

        assert_eq!(spans, expected);
    }

    #[test]
    fn linear_full_signed_domain() {
        let spans = linear(i8::MIN, i8::MAX, 100).unwrap();

        let expected = vec![
            Span::new(-128i8, -29).unwrap(),
            Span::new(-28, 71).unwrap(),
            Span::new(72, 127).unwrap(),
        ];

        assert_eq!(spans, expected);
    }

    #[test]
    fn linear_covers_without_gaps() {
        for width in 1i32..=30 {
            let spans = linear(-10i32, 17, width).unwrap();

            assert_eq!(spans.first().unwrap().begin(), -10);
            assert_eq!(spans.last().unwrap().end(), 17);

            for pair in spans.windows(2) {
                assert_eq!(pair[0].end() + 1, pair[1].begin(), "width {width}");
            }

            for span in &spans[..spans.len() - 1] {
                assert_eq!(span.begin().distance(span.end()) + 1, width as u64);
            }
        }
    }

    #[test]
    fn linear_errors() {
        assert_eq!(linear(2i64, 1, 1), Err(Error::InvalidRange));
        assert_eq!(linear(1i64, 2, 0), Err(Error::InvalidWidth));
        assert_eq!(linear(1i64, 2, -1), Err(Error::InvalidWidth));
    }

    #[test]
    fn width_rounds_up() {
        assert_eq!(width_for_quantity(1i64, 100, 3), Ok(34));
        assert_eq!(width_for_quantity(1i64, 100, 100), Ok(1));
        assert_eq!(width_for_quantity(0i64, 99, 4), Ok(25));
        assert_eq!(width_for_quantity(5i64, 5, 1), Ok(1));
    }

    #[test]
    fn width_errors() {
        assert_eq!(width_for_quantity(2i64, 1, 1), Err(Error::InvalidRange));
        assert_eq!(width_for_quantity(1i64, 2, 0), Err(Error::InvalidQuantity));
        assert_eq!(width_for_quantity(1i64, 2, -1), Err(Error::InvalidQuantity));
    }

    #[test]
    fn width_overflow_at_signed_extremes() {
        // Half the full signed domain exceeds the signed maximum.
        assert_eq!(
            width_for_quantity(i64::MIN, i64::MAX, 2),
            Err(Error::DivideOverflow)
        );
        assert_eq!(
            width_for_quantity(i8::MIN, i8::MAX, 2),
            Err(Error::DivideOverflow)
        );

        // A third of it fits again.
        assert_eq!(
            width_for_quantity(i64::MIN, i64::MAX, 3),
            Ok(6_148_914_691_236_517_206)
        );

        // The unsigned full domain halves representably.
        assert_eq!(width_for_quantity(0u64, u64::MAX, 2), Ok(1 << 63));
    }

    #[test]
    fn width_overflow_at_quantity_one_full_domain() {
        // A single span over a full 64-bit domain would need a width of
        // 2^64, which no value type holds.
        assert_eq!(
            width_for_quantity(i64::MIN, i64::MAX, 1),
            Err(Error::DivideOverflow)
        );
        assert_eq!(
            width_for_quantity(0u64, u64::MAX, 1),
            Err(Error::DivideOverflow)
        );

        // A full domain one value short of the type width overflows the
        // value type instead of the accumulator.
        assert_eq!(
            width_for_quantity(i8::MIN, i8::MAX, 1),
            Err(Error::DivideOverflow)
        );

        // Narrower domains keep quantity one representable.
        assert_eq!(width_for_quantity(0u8, 254, 1), Ok(255));
        assert_eq!(width_for_quantity(1i64, 100, 1), Ok(100));
    }

    #[test]
    fn width_quantity_retiling() {
        // Six values into four buckets re-tiles to three spans of two.
        let width = width_for_quantity(1i64, 6, 4).unwrap();
        assert_eq!(width, 2);
        assert_eq!(
            linear(1i64, 6, width).unwrap(),
            vec![span(1, 2), span(3, 4), span(5, 6)]
        );
    }

    #[test]
    fn linear_at_quantity_width_spans_full_domain() {
        let width = width_for_quantity(i64::MIN, i64::MAX, 3).unwrap();
        let spans = linear(i64::MIN, i64::MAX, width).unwrap();

        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].begin(), i64::MIN);
        assert_eq!(spans[2].end(), i64::MAX);

        for pair in spans.windows(2) {
            assert_eq!(pair[0].end() + 1, pair[1].begin());
        }
    }
}
