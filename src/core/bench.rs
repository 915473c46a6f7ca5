use crate::core::counter::PrimeCounter;
use crate::core::Counter;
use crate::domain::model::{BenchReport, RangeQuery, ScalingPoint, Schedule, WARMUP_LIMIT};
use crate::utils::error::{BenchError, Result};
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation::validate_non_empty;
use chrono::Utc;
use std::time::Instant;

/// Warmup plus one timed run of a [`Counter`].
pub struct Benchmark<C: Counter> {
    counter: C,
    warmup: bool,
    monitor: SystemMonitor,
}

impl<C: Counter> Benchmark<C> {
    pub fn new(counter: C, warmup: bool) -> Self {
        Self {
            counter,
            warmup,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(counter: C, warmup: bool, monitor_enabled: bool) -> Self {
        Self {
            counter,
            warmup,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn counter(&self) -> &C {
        &self.counter
    }

    pub fn run(&self, query: RangeQuery) -> BenchReport {
        if self.warmup {
            // 第一次呼叫會喚醒 worker 執行緒，不計入時間
            tracing::info!("⏳ Warming up worker pool (limit {})...", WARMUP_LIMIT);
            let warm = self.counter.count(WARMUP_LIMIT);
            tracing::info!("✅ Warmup complete ({} primes below {})", warm, WARMUP_LIMIT);
        }

        self.monitor.log_stats("Before count");

        tracing::info!(
            "🚀 Counting primes in [2, {}) with {} threads ({})",
            query.limit,
            self.counter.threads(),
            self.counter.schedule()
        );

        let started_at = Utc::now();
        let start = Instant::now();
        let prime_count = self.counter.count(query.limit);
        let elapsed = start.elapsed();

        self.monitor.log_stats("After count");
        self.monitor.log_final_stats();

        tracing::info!("✅ {} primes found in {:?}", prime_count, elapsed);

        BenchReport {
            limit: query.limit,
            threads: self.counter.threads(),
            prime_count,
            elapsed_seconds: elapsed.as_secs_f64(),
            schedule: self.counter.schedule(),
            started_at,
        }
    }
}

/// Runs the benchmark once per entry of `threads_list`.
///
/// Speedup and efficiency are relative to the first entry. Fails if two
/// runs disagree on the count.
pub fn scaling_sweep(
    query: RangeQuery,
    threads_list: &[usize],
    schedule: Schedule,
    warmup: bool,
    monitor_enabled: bool,
) -> Result<Vec<ScalingPoint>> {
    validate_non_empty("threads_list", threads_list)?;

    let mut points: Vec<ScalingPoint> = Vec::with_capacity(threads_list.len());
    let mut baseline: Option<(u64, f64)> = None;

    for &threads in threads_list {
        let counter = PrimeCounter::new(Some(threads), schedule)?;
        let bench = Benchmark::new_with_monitoring(counter, warmup, monitor_enabled);
        let report = bench.run(query);

        let (expected, base_seconds) =
            *baseline.get_or_insert((report.prime_count, report.elapsed_seconds));

        if report.prime_count != expected {
            return Err(BenchError::CountMismatch {
                threads: report.threads,
                expected,
                found: report.prime_count,
            });
        }

        let speedup = if report.elapsed_seconds > 0.0 {
            base_seconds / report.elapsed_seconds
        } else {
            1.0
        };

        points.push(ScalingPoint {
            threads: report.threads,
            prime_count: report.prime_count,
            elapsed_seconds: report.elapsed_seconds,
            speedup,
            efficiency: speedup / report.threads as f64,
        });
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::counter::SerialCounter;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct RecordingCounter {
        calls: Mutex<Vec<i64>>,
        total: AtomicUsize,
    }

    impl RecordingCounter {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                total: AtomicUsize::new(0),
            }
        }
    }

    impl Counter for RecordingCounter {
        fn count(&self, limit: i64) -> u64 {
            self.calls.lock().unwrap().push(limit);
            self.total.fetch_add(1, Ordering::SeqCst);
            42
        }

        fn threads(&self) -> usize {
            6
        }

        fn schedule(&self) -> Schedule {
            Schedule::Strided
        }
    }

    #[test]
    fn test_warmup_runs_before_timed_call() {
        let bench = Benchmark::new(RecordingCounter::new(), true);
        let report = bench.run(RangeQuery::new(5_000).unwrap());

        let calls = bench.counter().calls.lock().unwrap().clone();
        assert_eq!(calls, vec![WARMUP_LIMIT, 5_000]);
        assert_eq!(report.prime_count, 42);
        assert_eq!(report.threads, 6);
        assert_eq!(report.schedule, Schedule::Strided);
    }

    #[test]
    fn test_no_warmup_single_call() {
        let bench = Benchmark::new(RecordingCounter::new(), false);
        bench.run(RangeQuery::new(10).unwrap());

        assert_eq!(bench.counter().total.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_report_fields() {
        let bench = Benchmark::new(SerialCounter, true);
        let report = bench.run(RangeQuery::new(100).unwrap());

        assert_eq!(report.limit, 100);
        assert_eq!(report.prime_count, 25);
        assert_eq!(report.threads, 1);
        assert!(report.elapsed_seconds >= 0.0);
    }

    #[test]
    fn test_scaling_sweep_counts_agree() {
        let points = scaling_sweep(
            RangeQuery::new(20_000).unwrap(),
            &[1, 2, 4],
            Schedule::Dynamic { chunk_size: 500 },
            false,
            false,
        )
        .unwrap();

        assert_eq!(points.len(), 3);
        assert!(points.iter().all(|p| p.prime_count == 2_262));
        assert_eq!(points[0].threads, 1);
        assert_eq!(points[2].threads, 4);
        assert!((points[0].speedup - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scaling_sweep_rejects_empty_list() {
        let result = scaling_sweep(
            RangeQuery::new(100).unwrap(),
            &[],
            Schedule::Static,
            false,
            false,
        );
        assert!(matches!(result, Err(BenchError::ConfigError { .. })));
    }
}
