use crate::error::MedianError;
use crate::heap::{Priority, PriorityQueue};

/// Exact running median of a stream of numbers
///
/// Values are split across two heaps: `lower` (a max-heap) holds the smaller half of the stream,
/// and `upper` (a min-heap) holds the larger half.
/// Every value in `lower` is less than or equal to every value in `upper`,
/// and `upper` holds the extra value whenever the total count is odd.
///
/// Values are added with [`Self::add`] (or [`Self::add_str`] for untyped text),
/// and the median can be read at any time with [`Self::compute`].
/// [`Self::clear`] discards everything seen so far.
///
/// Adding costs `O(log n)` and reading the median is `O(1)`.
#[derive(Debug, Clone)]
pub struct RunningMedian {
    /// Smaller half of the stream, largest value on top
    lower: PriorityQueue,
    /// Larger half of the stream, smallest value on top
    ///
    /// Holds one more value than [`Self::lower`] when the total count is odd
    upper: PriorityQueue,
}

impl Default for RunningMedian {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningMedian {
    /// Constructs an empty estimator
    pub fn new() -> Self {
        Self {
            lower: PriorityQueue::new(Priority::Max),
            upper: PriorityQueue::new(Priority::Min),
        }
    }

    /// Constructs an empty estimator sized for a stream of roughly `expected_len` values
    ///
    /// This only avoids reallocations; streams longer than `expected_len` are still accepted.
    pub fn with_capacity(expected_len: usize) -> Self {
        let half = expected_len / 2 + 1;
        Self {
            lower: PriorityQueue::with_capacity(Priority::Max, half),
            upper: PriorityQueue::with_capacity(Priority::Min, half),
        }
    }

    /// Total number of values held
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /// Whether no values have been added since construction or the last [`Self::clear`]
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty()
    }

    /// The smaller half of the stream, as a max-heap
    pub fn lower(&self) -> &PriorityQueue {
        &self.lower
    }

    /// The larger half of the stream, as a min-heap
    pub fn upper(&self) -> &PriorityQueue {
        &self.upper
    }

    /// Adds a value to the stream
    ///
    /// Fails with [`MedianError::InvalidInput`] if the value is NaN, in which case nothing is changed.
    pub fn add<T: Into<f64>>(&mut self, value: T) -> Result<(), MedianError> {
        let value = value.into();
        if value.is_nan() {
            return Err(Self::reject(value.to_string()));
        }

        self.insert(value);
        Ok(())
    }

    /// Parses `input` as a number and adds it to the stream
    ///
    /// Surrounding whitespace is ignored.
    /// Text that doesn't parse as an `f64`, or parses to NaN, fails with [`MedianError::InvalidInput`]
    /// before anything is changed.
    pub fn add_str(&mut self, input: &str) -> Result<(), MedianError> {
        match input.trim().parse::<f64>() {
            Ok(value) if !value.is_nan() => {
                self.insert(value);
                Ok(())
            }
            _ => Err(Self::reject(input.to_string())),
        }
    }

    /// Adds every value from `values` in order
    ///
    /// Stops at the first invalid value and returns its error.
    /// Values before it remain added.
    pub fn try_extend<I, T>(&mut self, values: I) -> Result<(), MedianError>
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        for value in values {
            self.add(value)?;
        }
        Ok(())
    }

    /// Gets the median of every value added so far
    ///
    /// With an odd count this is the middle value.
    /// With an even count it's the mean of the two middle values.
    /// Fails with [`MedianError::EmptyStream`] if nothing has been added.
    pub fn compute(&self) -> Result<f64, MedianError> {
        let Some(upper_min) = self.upper.peek() else {
            return Err(MedianError::EmptyStream);
        };

        if self.upper.len() > self.lower.len() {
            return Ok(upper_min);
        }

        match self.lower.peek() {
            Some(lower_max) => Ok((lower_max + upper_min) / 2.),
            None => Ok(upper_min),
        }
    }

    /// Gets the median, or `default` if nothing has been added
    pub fn compute_or(&self, default: f64) -> f64 {
        self.compute().unwrap_or(default)
    }

    /// Discards every value, returning the estimator to its empty state
    pub fn clear(&mut self) {
        #[cfg(feature = "log")]
        log::debug!("Clearing running median holding {} values", self.len());

        self.lower.clear();
        self.upper.clear();
    }

    /// Inserts an already validated value, keeping both halves ordered and balanced
    fn insert(&mut self, value: f64) {
        // Route the value through the upper half first, so whatever lands in the lower half
        // is no larger than anything left in the upper half
        self.upper.push(value);
        if let Some(upper_min) = self.upper.pop() {
            self.lower.push(upper_min);
        }

        // The upper half keeps the extra value on odd counts
        if self.upper.len() < self.lower.len() {
            if let Some(lower_max) = self.lower.pop() {
                #[cfg(feature = "log")]
                log::trace!("Rebalancing: moving {lower_max} to the upper half");

                self.upper.push(lower_max);
            }
        }

        #[cfg(feature = "log")]
        log::trace!(
            "Added {value}: lower holds {}, upper holds {}",
            self.lower.len(),
            self.upper.len()
        );
    }

    fn reject(input: String) -> MedianError {
        #[cfg(feature = "log")]
        log::warn!("Rejected non-numeric input: {input:?}");

        MedianError::InvalidInput(input)
    }
}
