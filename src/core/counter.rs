use crate::core::primality::is_prime;
use crate::core::{ConfigProvider, Counter};
use crate::domain::model::{Schedule, MIN_LIMIT};
use crate::utils::error::{BenchError, Result};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::ops::Range;

/// Counts primes in `[2, limit)` on a dedicated rayon pool.
///
/// Every worker accumulates into its own local counter and the partial
/// counts are summed once the parallel region ends, so the result does not
/// depend on the pool size or on the schedule.
pub struct PrimeCounter {
    pool: ThreadPool,
    schedule: Schedule,
}

impl PrimeCounter {
    /// `threads = None` (or `Some(0)`) uses rayon's default size.
    pub fn new(threads: Option<usize>, schedule: Schedule) -> Result<Self> {
        if let Schedule::Dynamic { chunk_size } = schedule {
            if chunk_size == 0 || i64::try_from(chunk_size).is_err() {
                return Err(BenchError::ConfigError {
                    message: format!("chunk size must be between 1 and {}", i64::MAX),
                });
            }
        }

        let mut builder =
            ThreadPoolBuilder::new().thread_name(|index| format!("prime-worker-{}", index));
        if let Some(threads) = threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder.build()?;

        tracing::debug!(
            "Built worker pool: {} threads, schedule {}",
            pool.current_num_threads(),
            schedule
        );

        Ok(Self { pool, schedule })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.threads(), config.schedule())
    }

    fn count_static(&self, limit: i64, workers: usize) -> u64 {
        let len = (limit - MIN_LIMIT) as u64;
        let chunk = len.div_ceil(workers as u64) as i64;
        count_chunks(limit, chunk)
    }

    fn count_strided(&self, limit: i64, workers: usize) -> u64 {
        (0..workers)
            .into_par_iter()
            .with_max_len(1)
            .map(|k| {
                (MIN_LIMIT + k as i64..limit)
                    .step_by(workers)
                    .filter(|&n| is_prime(n))
                    .count() as u64
            })
            .sum()
    }
}

impl Counter for PrimeCounter {
    fn count(&self, limit: i64) -> u64 {
        if limit <= MIN_LIMIT {
            return 0;
        }

        let workers = self.pool.current_num_threads().max(1);
        self.pool.install(|| match self.schedule {
            Schedule::Static => self.count_static(limit, workers),
            Schedule::Strided => self.count_strided(limit, workers),
            Schedule::Dynamic { chunk_size } => {
                count_chunks(limit, i64::try_from(chunk_size).unwrap_or(i64::MAX))
            }
        })
    }

    fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn schedule(&self) -> Schedule {
        self.schedule
    }
}

/// Cuts `[2, limit)` into `chunk`-sized pieces; each piece is one task.
///
/// `chunk` is clamped to `[1, len]`, so piece bounds never overflow.
fn count_chunks(limit: i64, chunk: i64) -> u64 {
    let len = limit - MIN_LIMIT;
    if len <= 0 {
        return 0;
    }
    let chunk = chunk.clamp(1, len);
    let pieces = (len as u64).div_ceil(chunk as u64) as usize;

    (0..pieces)
        .into_par_iter()
        .with_max_len(1)
        .map(|i| {
            let start = MIN_LIMIT + i as i64 * chunk;
            count_range(start..start.saturating_add(chunk).min(limit))
        })
        .sum()
}

fn count_range(range: Range<i64>) -> u64 {
    range.filter(|&n| is_prime(n)).count() as u64
}

/// Single-threaded reference counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialCounter;

impl Counter for SerialCounter {
    fn count(&self, limit: i64) -> u64 {
        if limit <= MIN_LIMIT {
            return 0;
        }
        count_range(MIN_LIMIT..limit)
    }

    fn threads(&self) -> usize {
        1
    }

    fn schedule(&self) -> Schedule {
        Schedule::Static
    }
}
