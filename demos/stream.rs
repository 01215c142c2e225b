//! Replays a short stream, printing both halves and the median after every insertion
//!
//! Pass `--verbose` to also see the estimator's trace records

use heapmedian::{MedianError, RunningMedian};
use simplelog::{ColorChoice, Config, LevelFilter, TerminalMode, TermLogger};

const STREAM: [i32; 12] = [6, 10, 2, 6, 5, 0, 6, 3, 1, 0, 0, 10];

fn main() -> Result<(), MedianError> {
    let level = if std::env::args().any(|arg| arg == "--verbose") {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .expect("logger is only initialized once");

    let mut median = RunningMedian::with_capacity(STREAM.len());

    if let Err(MedianError::EmptyStream) = median.compute() {
        println!("Add data to compute stream median");
    }

    println!("Simulating stream");

    for (idx, value) in STREAM.into_iter().enumerate() {
        median.add(value)?;

        println!("Stream: {:?}", &STREAM[..=idx]);
        println!("Lower heap: {}", median.lower());
        println!("Upper heap: {}", median.upper());
        println!("Median: {}\n", median.compute()?);
    }

    Ok(())
}
