use anyhow::Context;
use clap::Parser;
use export::{write_report, write_svg};
use log::info;
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;
use wsncore::parse_sensor_count;

mod export;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Headless wireless sensor network scenario driver")]
struct Args {
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Number of sensors to generate (positive integer)
    #[arg(long, value_parser = parse_sensor_count)]
    sensors: Option<usize>,
    /// Seed the random source for a reproducible scenario
    #[arg(long)]
    seed: Option<u64>,
    /// Pause after each generated sensor, in microseconds
    #[arg(long)]
    record_delay_micros: Option<u64>,
    /// Write the rendered figure as SVG
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Write sensors, head assignment and figure as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = match &args.workflow {
        Some(path) => WorkflowConfig::load(path)?,
        None => WorkflowConfig::default(),
    }
    .with_overrides(args.sensors, args.seed, args.record_delay_micros);

    let runner = Runner::new(workflow_config);
    let scenario = runner.execute()?;

    println!(
        "Scenario -> sensors {}, distinct cluster heads {}, connectors {}",
        scenario.sensor_count(),
        scenario.distinct_head_count(),
        scenario.figure.connectors.len()
    );

    if let Some(path) = &args.svg {
        let config = runner.config();
        write_svg(&scenario.figure, path, config.width, config.height)
            .with_context(|| format!("exporting figure to {}", path.display()))?;
        info!("figure written to {}", path.display());
    }
    if let Some(path) = &args.json {
        write_report(&scenario, path)?;
        info!("scenario report written to {}", path.display());
    }

    let metrics = runner.metrics();
    println!(
        "Session -> networks {}, sensors {}, rejected {}",
        metrics.networks, metrics.sensors, metrics.rejected
    );

    Ok(())
}
