use core::fmt::{Debug, Display};

/// A fixed-width integer type usable as the value domain of a span.
///
/// Supplies the representable bounds plus the checked arithmetic the
/// partitioning code relies on. The distance between any two values of an
/// implementing type must fit a `u64` accumulator, so implementations exist
/// for the integer types up to 64 bits wide.
pub trait Integer: Copy + Ord + Debug + Display + 'static {
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;
    const ONE: Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Exact absolute difference between two values.
    ///
    /// Valid for any pair of values, including the signed extremes where
    /// `MAX - MIN` does not fit the type itself.
    fn distance(self, other: Self) -> u64;

    /// Checked narrowing conversion from the `u64` accumulator domain.
    fn from_u64(value: u64) -> Option<Self>;
}

macro_rules! unsigned_integer {
    ($($int:ty),*) => {
        $(
            impl Integer for $int {
                const MIN: Self = <$int>::MIN;
                const MAX: Self = <$int>::MAX;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$int>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$int>::checked_sub(self, rhs)
                }

                fn distance(self, other: Self) -> u64 {
                    if self >= other {
                        (self - other) as u64
                    } else {
                        (other - self) as u64
                    }
                }

                fn from_u64(value: u64) -> Option<Self> {
                    <$int>::try_from(value).ok()
                }
            }
        )*
    };
}

macro_rules! signed_integer {
    ($(($int:ty, $uint:ty)),*) => {
        $(
            impl Integer for $int {
                const MIN: Self = <$int>::MIN;
                const MAX: Self = <$int>::MAX;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$int>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$int>::checked_sub(self, rhs)
                }

                fn distance(self, other: Self) -> u64 {
                    let (greater, lesser) = if self >= other {
                        (self, other)
                    } else {
                        (other, self)
                    };

                    // In two's complement the wrapping difference of the
                    // ordered operands, reinterpreted as the same-width
                    // unsigned type, is the exact distance even across the
                    // zero boundary.
                    greater.wrapping_sub(lesser) as $uint as u64
                }

                fn from_u64(value: u64) -> Option<Self> {
                    <$int>::try_from(value).ok()
                }
            }
        )*
    };
}

unsigned_integer!(u8, u16, u32, u64, usize);
signed_integer!((i8, u8), (i16, u16), (i32, u32), (i64, u64), (isize, usize));
