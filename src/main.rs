use anyhow::{Context, Result};
use std::env;

use stream_katas::logging::init_logging;
use stream_katas::{run, run_all, Kata, KataConfig, KataReport};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config = KataConfig::from_env().context("Failed to load kata config")?;
    init_logging(&config.log_level);

    let reports = if args.len() > 1 && args[1] != "all" {
        // Single kata mode
        let kata: Kata = args[1].parse()?;
        vec![run(kata, &config).with_context(|| format!("Kata {} failed", kata))?]
    } else {
        // Every kata (default)
        run_all(&config).context("Kata run failed")?
    };

    print_reports(&reports, &config);

    Ok(())
}

fn print_reports(reports: &[KataReport], config: &KataConfig) {
    for report in reports {
        println!("{}", report.render(config.output));
    }
}
