pub mod cli;

pub use cli::{RunOptions, ScheduleKind, ScheduleOptions};

use crate::core::ConfigProvider;
use crate::domain::model::{RangeQuery, Schedule, FIXED_LIMIT};
use crate::utils::error::Result;
use crate::utils::validation::{parse_limit, validate_positive_number, Validate};
use clap::Parser;

/// Parses the process arguments; usage errors go to stdout with exit code 1.
///
/// `--help` and `--version` keep clap's own output and exit code 0.
pub fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(config) => config,
        Err(e) => {
            if !e.use_stderr() {
                e.exit();
            }
            println!("{}", e.render());
            std::process::exit(USAGE_ERROR_EXIT_CODE);
        }
    }
}

pub const USAGE_ERROR_EXIT_CODE: i32 = 1;

#[derive(Debug, Clone, Parser)]
#[command(name = "prime-bench")]
#[command(about = "Count primes below a limit in parallel and time the run")]
pub struct CliConfig {
    /// Exclusive upper bound of the range [2, limit)
    #[arg(allow_negative_numbers = true)]
    pub limit: Option<String>,

    #[command(flatten)]
    pub run: RunOptions,
}

impl CliConfig {
    /// Printed on stdout when `<limit>` is missing.
    pub fn usage(program: &str) -> String {
        format!(
            "Uso: {} <limit>\nEjemplo: {} 400000000",
            program, program
        )
    }

    pub fn query(&self) -> Result<RangeQuery> {
        RangeQuery::new(parse_limit(self.limit.as_deref())?)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.query()?;
        self.run.validate()
    }
}

impl ConfigProvider for CliConfig {
    fn threads(&self) -> Option<usize> {
        self.run.threads()
    }

    fn schedule(&self) -> Schedule {
        self.run.scheduling.schedule()
    }

    fn monitor(&self) -> bool {
        self.run.monitor
    }

    fn warmup(&self) -> bool {
        !self.run.no_warmup
    }
}

/// Same run with the limit fixed at [`FIXED_LIMIT`].
#[derive(Debug, Clone, Parser)]
#[command(name = "prime-bench-fixed")]
#[command(about = "Count primes below 400000000 in parallel and time the run")]
pub struct FixedConfig {
    #[command(flatten)]
    pub run: RunOptions,
}

impl FixedConfig {
    pub fn query(&self) -> RangeQuery {
        RangeQuery { limit: FIXED_LIMIT }
    }
}

impl Validate for FixedConfig {
    fn validate(&self) -> Result<()> {
        self.run.validate()
    }
}

impl ConfigProvider for FixedConfig {
    fn threads(&self) -> Option<usize> {
        self.run.threads()
    }

    fn schedule(&self) -> Schedule {
        self.run.scheduling.schedule()
    }

    fn monitor(&self) -> bool {
        self.run.monitor
    }

    fn warmup(&self) -> bool {
        !self.run.no_warmup
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "prime-scaling")]
#[command(about = "Time the prime count at several thread counts")]
pub struct ScalingConfig {
    /// Exclusive upper bound of the range [2, limit)
    #[arg(allow_negative_numbers = true)]
    pub limit: Option<String>,

    /// Thread counts to run, e.g. 1,2,4,8 (default: powers of two up to the core count)
    #[arg(long, value_delimiter = ',')]
    pub threads_list: Vec<usize>,

    #[command(flatten)]
    pub scheduling: ScheduleOptions,

    /// Log CPU and memory usage around each timed run
    #[arg(long)]
    pub monitor: bool,

    /// Print the rows as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the untimed warmup call
    #[arg(long)]
    pub no_warmup: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ScalingConfig {
    pub fn query(&self) -> Result<RangeQuery> {
        RangeQuery::new(parse_limit(self.limit.as_deref())?)
    }

    pub fn threads_list(&self) -> Vec<usize> {
        if self.threads_list.is_empty() {
            let cores = std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1);
            default_threads_list(cores)
        } else {
            self.threads_list.clone()
        }
    }
}

impl Validate for ScalingConfig {
    fn validate(&self) -> Result<()> {
        self.query()?;
        for &threads in &self.threads_list {
            validate_positive_number("threads_list", threads, 1)?;
        }
        self.scheduling.validate()
    }
}

/// 1, 2, 4, ... up to `cores`, always ending at `cores`.
pub fn default_threads_list(cores: usize) -> Vec<usize> {
    let cores = cores.max(1);
    let mut list: Vec<usize> = std::iter::successors(Some(1usize), |n| n.checked_mul(2))
        .take_while(|&n| n < cores)
        .collect();
    list.push(cores);
    list
}
