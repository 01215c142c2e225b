use thiserror::Error;

/// Failures reported by [`RunningMedian`](crate::RunningMedian)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MedianError {
    /// The supplied value is not a number
    ///
    /// Carries the rejected input, rendered as text.
    /// The estimator is left exactly as it was before the call.
    #[error("invalid input: {0:?} is not a number")]
    InvalidInput(String),

    /// No values have been added since construction or the last clear,
    /// so there is no median to report
    #[error("no data on stream: cannot compute a median")]
    EmptyStream,
}
