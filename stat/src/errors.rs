use thiserror::Error;

/// Errors returned when constructing statistics.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The list of spans is empty.
    #[error("list of spans is empty")]
    EmptySpans,

    /// The spans are not sorted ascending or intersect each other.
    #[error("spans must be sorted ascending and must not intersect")]
    UnsortedSpans,

    /// A span sequence could not be built.
    #[error(transparent)]
    Span(#[from] span::Error),
}

/// Errors returned when rendering a bar chart.
#[derive(Error, Debug)]
pub enum ChartError {
    /// A bucket quantity exceeds the chart's signed value type.
    #[error("quantity does not fit the chart value type")]
    QuantityOverflow,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
