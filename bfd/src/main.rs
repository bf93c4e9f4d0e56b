use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use anyhow::{Context, Result};
use bfd::config::BFDConfig;
use bfd::io;
use bfd::io::cli::Cli;
use bfd::io::output::{BFDOutput, wait_estimates};
use bfd::opt::BFDOptimizer;
use clap::Parser;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BFDConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed BFDConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .context("input file has no name")?
        .to_string_lossy()
        .into_owned();

    if !args.plan_folder.exists() {
        fs::create_dir_all(&args.plan_folder)
            .with_context(|| format!("could not create plan folder: {:?}", args.plan_folder))?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let instance = seatopt::io::import(&ext_instance)?;

    info!(
        "[MAIN] imported instance {}: {} parties requesting {} seats, {} tables offering {} seats",
        ext_instance.name,
        instance.parties.len(),
        instance.total_demand(),
        instance.tables.len(),
        instance.total_capacity()
    );

    let start = Instant::now();
    let plan = BFDOptimizer::new(instance.clone()).solve();
    let run_time_ms = start.elapsed().as_millis() as u64;

    let ext_plan = seatopt::io::export(&instance, &plan);
    let wait_estimates = wait_estimates(&ext_instance, &ext_plan, &config);

    let output = BFDOutput {
        instance: ext_instance,
        plan: ext_plan,
        wait_estimates,
        config,
        run_time_ms,
    };

    let plan_path = args.plan_folder.join(format!("plan_{input_file_stem}.json"));
    io::write_json(&output, plan_path.as_path())?;

    Ok(())
}
