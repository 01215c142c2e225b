#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod error;
mod heap;
mod median;

pub use error::MedianError;
pub use heap::{Priority, PriorityQueue};
pub use median::RunningMedian;
