use thiserror::Error;

/// Errors returned when constructing spans or span sequences.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The lower bound is greater than the upper bound.
    #[error("lower bound is greater than upper bound")]
    InvalidRange,

    /// The span width is zero or negative.
    #[error("span width must be positive")]
    InvalidWidth,

    /// The requested quantity of spans is zero or negative.
    #[error("quantity of spans must be positive")]
    InvalidQuantity,

    /// The computed per-span width does not fit the value type.
    #[error("per-span width is not representable in the value type")]
    DivideOverflow,
}
