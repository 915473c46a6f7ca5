use prime_bench::config::parse_or_exit;
use prime_bench::utils::{logger, validation::Validate};
use prime_bench::{scaling_sweep, BenchError, ScalingConfig, ScalingPoint};

fn main() -> anyhow::Result<()> {
    let config: ScalingConfig = parse_or_exit();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting prime-scaling");
    tracing::debug!("CLI config: {:?}", config);

    let query = match config.validate().and_then(|_| config.query()) {
        Ok(query) => query,
        Err(e) => {
            tracing::error!("❌ Invalid arguments: {}", e);
            match e {
                BenchError::MissingLimit => println!(
                    "Uso: {} <limit> [--threads-list 1,2,4,8]",
                    env!("CARGO_BIN_NAME")
                ),
                _ => println!("{}", e.user_friendly_message()),
            }
            std::process::exit(e.exit_code());
        }
    };

    let schedule = config.scheduling.schedule();
    let threads_list = config.threads_list();
    tracing::info!("📈 Scaling sweep over threads {:?}", threads_list);

    let points = match scaling_sweep(
        query,
        &threads_list,
        schedule,
        !config.no_warmup,
        config.monitor,
    ) {
        Ok(points) => points,
        Err(e) => {
            tracing::error!("❌ Scaling sweep failed: {}", e);
            println!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&points)?);
    } else {
        print_table(query.limit, &schedule.to_string(), &points);
    }

    Ok(())
}

fn print_table(limit: i64, schedule: &str, points: &[ScalingPoint]) {
    println!();
    println!("=== Escalabilidad Rust + Rayon ===");
    println!("Rango: 2 a {}", limit);
    println!("Planificación: {}", schedule);
    println!(
        "{:>8} {:>14} {:>14} {:>10} {:>10}",
        "Threads", "Primos", "Tiempo (s)", "Speedup", "Eficiencia"
    );
    for p in points {
        println!(
            "{:>8} {:>14} {:>14.6} {:>10.2} {:>10.2}",
            p.threads, p.prime_count, p.elapsed_seconds, p.speedup, p.efficiency
        );
    }
}
