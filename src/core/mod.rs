pub mod bench;
pub mod counter;
pub mod primality;

pub use crate::domain::model::{BenchReport, RangeQuery, ScalingPoint, Schedule};
pub use crate::domain::ports::{ConfigProvider, Counter};
pub use crate::utils::error::Result;
