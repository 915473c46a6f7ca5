use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest limit a run accepts; [2, 2) is the empty range.
pub const MIN_LIMIT: i64 = 2;

/// Limit used by the throwaway call made before the timed run.
pub const WARMUP_LIMIT: i64 = 1000;

/// Limit of the fixed-size benchmark binary.
pub const FIXED_LIMIT: i64 = 400_000_000;

pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// How the range [2, limit) is handed out to workers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Schedule {
    /// One contiguous chunk per worker.
    #[default]
    Static,
    /// Worker `k` of `T` takes `2 + k`, `2 + k + T`, ...
    Strided,
    /// Fixed-size chunks distributed by work stealing.
    Dynamic { chunk_size: usize },
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schedule::Static => write!(f, "static"),
            Schedule::Strided => write!(f, "strided"),
            Schedule::Dynamic { chunk_size } => write!(f, "dynamic,{}", chunk_size),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeQuery {
    pub limit: i64,
}

impl RangeQuery {
    pub fn new(limit: i64) -> crate::Result<Self> {
        crate::utils::validation::validate_limit(limit)?;
        Ok(Self { limit })
    }
}

/// Outcome of one timed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReport {
    pub limit: i64,
    pub threads: usize,
    pub prime_count: u64,
    pub elapsed_seconds: f64,
    pub schedule: Schedule,
    pub started_at: DateTime<Utc>,
}

impl BenchReport {
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, json: bool) -> crate::Result<String> {
        if json {
            self.to_json()
        } else {
            Ok(self.to_string())
        }
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "=== Versión Rust + Rayon ===")?;
        writeln!(f, "Rango: 2 a {}", self.limit)?;
        writeln!(f, "Threads Usados: {}", self.threads)?;
        writeln!(f, "Primos encontrados: {}", self.prime_count)?;
        write!(f, "Tiempo: {:.6} segundos", self.elapsed_seconds)
    }
}

/// One row of a scaling sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalingPoint {
    pub threads: usize,
    pub prime_count: u64,
    pub elapsed_seconds: f64,
    /// Relative to the first run of the sweep.
    pub speedup: f64,
    pub efficiency: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> BenchReport {
        BenchReport {
            limit: 100,
            threads: 4,
            prime_count: 25,
            elapsed_seconds: 0.0001234,
            schedule: Schedule::Static,
            started_at: Utc::now(),
        }
    }

    #[test]
    fn test_report_text_block() {
        let text = sample_report().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=== Versión Rust + Rayon ===");
        assert_eq!(lines[2], "Rango: 2 a 100");
        assert_eq!(lines[3], "Threads Usados: 4");
        assert_eq!(lines[4], "Primos encontrados: 25");
        assert_eq!(lines[5], "Tiempo: 0.000123 segundos");
    }

    #[test]
    fn test_report_json() {
        let json = sample_report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["prime_count"], 25);
        assert_eq!(value["schedule"]["kind"], "static");
        assert!(value["started_at"].is_string());
    }

    #[test]
    fn test_schedule_display() {
        assert_eq!(Schedule::Strided.to_string(), "strided");
        assert_eq!(
            Schedule::Dynamic { chunk_size: 64 }.to_string(),
            "dynamic,64"
        );
    }

    #[test]
    fn test_range_query_rejects_small_limits() {
        assert!(RangeQuery::new(2).is_ok());
        assert!(RangeQuery::new(1).is_err());
        assert!(RangeQuery::new(-10).is_err());
    }
}
