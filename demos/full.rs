//! A more fully-fledged example, showcasing text input, error handling, and resetting a [`RunningMedian`]

use heapmedian::{MedianError, RunningMedian};

/// Raw readings, as they might arrive from a text source
///
/// Two of them are garbage and will be rejected
const READINGS: [&str; 8] = ["18.6", "83.1", "n/a", "21.5", " 21.4 ", "63.4", "NaN", "64.1"];

fn main() {
    // We know roughly how long the stream is, so reserve space up front
    let mut median = RunningMedian::with_capacity(READINGS.len());

    // Before anything is added, there is no median
    match median.compute() {
        Ok(m) => println!("Unexpected median: {m}"),
        Err(e) => println!("{e}"),
    }

    for reading in READINGS {
        match median.add_str(reading) {
            Ok(()) => println!("Added {reading:?}, {} values so far", median.len()),
            Err(MedianError::InvalidInput(input)) => println!("Skipped {input:?}"),
            Err(e) => println!("Unexpected error: {e}"),
        }

        // The median is available after every insertion
        println!("Current median: {}", median.compute_or(f64::NAN));
    }

    // Start a fresh, independent stream with the same estimator
    median.clear();
    println!("After clearing, empty: {}", median.is_empty());

    if let Err(e) = median.try_extend([1, 2, 3, 4]) {
        println!("Failed to add values: {e}");
    }
    println!("Median of the second stream: {}", median.compute_or(f64::NAN));
}
