use crate::domain::model::{Schedule, DEFAULT_CHUNK_SIZE};
use crate::utils::error::{BenchError, Result};
use crate::utils::validation::{validate_positive_number, Validate};
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScheduleKind {
    Static,
    Strided,
    Dynamic,
}

#[derive(Debug, Clone, Args)]
pub struct ScheduleOptions {
    /// Work distribution across workers
    #[arg(long, value_enum, env = "PRIME_BENCH_SCHEDULE", default_value_t = ScheduleKind::Static)]
    pub schedule: ScheduleKind,

    /// Values per task with `--schedule dynamic`
    #[arg(long, env = "PRIME_BENCH_CHUNK", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,
}

impl ScheduleOptions {
    pub fn schedule(&self) -> Schedule {
        match self.schedule {
            ScheduleKind::Static => Schedule::Static,
            ScheduleKind::Strided => Schedule::Strided,
            ScheduleKind::Dynamic => Schedule::Dynamic {
                chunk_size: self.chunk_size,
            },
        }
    }
}

impl Validate for ScheduleOptions {
    fn validate(&self) -> Result<()> {
        validate_positive_number("chunk_size", self.chunk_size, 1)?;
        if i64::try_from(self.chunk_size).is_err() {
            return Err(BenchError::ConfigError {
                message: format!("chunk_size must be at most {}", i64::MAX),
            });
        }
        Ok(())
    }
}

/// Flags shared by the single-run binaries.
#[derive(Debug, Clone, Args)]
pub struct RunOptions {
    /// Worker threads; 0 or unset defers to RAYON_NUM_THREADS, then to the core count
    #[arg(long)]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub scheduling: ScheduleOptions,

    /// Log CPU and memory usage around the timed run
    #[arg(long)]
    pub monitor: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the untimed warmup call
    #[arg(long)]
    pub no_warmup: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl RunOptions {
    pub fn threads(&self) -> Option<usize> {
        self.threads.filter(|&n| n > 0)
    }
}

impl Validate for RunOptions {
    fn validate(&self) -> Result<()> {
        self.scheduling.validate()
    }
}
