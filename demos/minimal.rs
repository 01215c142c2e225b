//! A basic example showing minimal usage
//!
//! We construct a [`RunningMedian`], fill it with data, and then read out the exact median

use heapmedian::RunningMedian;

/// Some sample data to calculate the median for
///
/// In practice, this will probably be a much larger stream
/// Note that the exact median is 44.5
const DATA: [f64; 15] = [
    18.6, 83.1, 21.5, 21.4, 63.4, 64.1, 4.6, 92.7, 31.1, 94.8, 2.4, 44.5, 70.0, 17.1, 61.0,
];

fn main() -> Result<(), heapmedian::MedianError> {
    let mut median = RunningMedian::new();

    // Read data points from our data source, and fold them into the estimator
    for data_point in DATA {
        median.add(data_point)?;
    }

    let median = median.compute()?;
    println!("The median is: {median}");

    Ok(())
}
