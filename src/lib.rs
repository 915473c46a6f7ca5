#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, FixedConfig, ScalingConfig};

pub use core::{
    bench::{scaling_sweep, Benchmark},
    counter::{PrimeCounter, SerialCounter},
    primality::is_prime,
};
pub use domain::model::{BenchReport, RangeQuery, ScalingPoint, Schedule};
pub use domain::ports::{ConfigProvider, Counter};
pub use utils::error::{BenchError, Result};
