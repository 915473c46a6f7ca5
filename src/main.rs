use prime_bench::config::parse_or_exit;
use prime_bench::utils::{logger, validation::Validate};
use prime_bench::{BenchError, Benchmark, CliConfig, ConfigProvider, PrimeCounter};

fn main() -> anyhow::Result<()> {
    let config: CliConfig = parse_or_exit();

    // 初始化日誌
    logger::init_cli_logger(config.run.verbose);

    tracing::info!("Starting prime-bench");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證參數
    let query = match config.validate().and_then(|_| config.query()) {
        Ok(query) => query,
        Err(e) => {
            tracing::error!("❌ Invalid arguments: {}", e);
            match e {
                BenchError::MissingLimit => {
                    println!("{}", CliConfig::usage(env!("CARGO_BIN_NAME")))
                }
                _ => println!("{}", e.user_friendly_message()),
            }
            std::process::exit(e.exit_code());
        }
    };

    if config.monitor() {
        tracing::info!("🔍 System monitoring enabled");
    }

    let counter = PrimeCounter::from_config(&config)?;
    let bench = Benchmark::new_with_monitoring(counter, config.warmup(), config.monitor());

    let report = bench.run(query);
    println!("{}", report.render(config.run.json)?);

    Ok(())
}
