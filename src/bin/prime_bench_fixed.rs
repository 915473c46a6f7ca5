use prime_bench::config::parse_or_exit;
use prime_bench::utils::{logger, validation::Validate};
use prime_bench::{Benchmark, ConfigProvider, FixedConfig, PrimeCounter};

fn main() -> anyhow::Result<()> {
    let config: FixedConfig = parse_or_exit();

    logger::init_cli_logger(config.run.verbose);

    tracing::info!("Starting prime-bench-fixed");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Invalid arguments: {}", e);
        println!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let counter = PrimeCounter::from_config(&config)?;
    let bench = Benchmark::new_with_monitoring(counter, config.warmup(), config.monitor());

    let report = bench.run(config.query());
    println!("{}", report.render(config.run.json)?);

    Ok(())
}
