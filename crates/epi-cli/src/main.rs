//! epi-cli — run one scenario through both executors and diff the results.
//!
//! ```text
//! epi-cli <TICKS> <SCENARIO> <WORKERS> [--csv] [--verbose]
//! ```
//!
//! The scenario is simulated twice from identical initial state: once
//! sequentially (the reference) and once on `WORKERS` barrier-synchronized
//! threads.  Each run's final population is written next to the scenario
//! file as `<stem>_serial_out.txt` / `<stem>_parallel_out.txt`, and the two
//! populations are compared agent by agent.  A mismatch means the parallel
//! executor raced — it is reported loudly but is a diagnostic, not a failure
//! exit.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use epi_agent::Population;
use epi_core::{RunConfig, Tick};
use epi_input::load_scenario;
use epi_output::{format_row, AgentReportRow, CsvReportWriter, ReportWriter, TextReportWriter};
use epi_sim::{first_mismatch, parallel, sequential, NoopObserver, TickObserver};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "epi-cli", about = "Serial vs. parallel epidemic grid simulation")]
struct Args {
    /// Number of simulation ticks to run.
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    ticks: u64,

    /// Path to the scenario file.
    scenario: PathBuf,

    /// Worker thread count for the parallel run.
    workers: NonZeroUsize,

    /// Also write CSV reports alongside the text reports.
    #[arg(long)]
    csv: bool,

    /// Dump every agent after each tick of the sequential run.
    #[arg(short, long)]
    verbose: bool,
}

// ── Per-tick dump (the sequential run's --verbose mode) ───────────────────────

struct DumpObserver;

impl TickObserver for DumpObserver {
    fn on_tick_end(&mut self, tick: Tick, population: &Population) {
        println!("--- {tick} ---");
        for row in AgentReportRow::collect(population) {
            println!("{}", format_row(&row));
        }
        println!();
    }
}

// ── Report files ──────────────────────────────────────────────────────────────

/// `scenario.txt` + `_serial_out.txt` → `scenario_serial_out.txt`, next to
/// the scenario file.
fn report_path(scenario: &Path, suffix: &str) -> PathBuf {
    let stem = scenario
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scenario".to_string());
    scenario.with_file_name(format!("{stem}{suffix}"))
}

fn write_report(population: &Population, path: &Path, with_csv: bool) -> Result<()> {
    let rows = AgentReportRow::collect(population);

    let mut writer = TextReportWriter::create(path)
        .with_context(|| format!("creating report file {}", path.display()))?;
    writer.write_rows(&rows)?;
    writer.finish()?;
    info!("results written to {}", path.display());

    if with_csv {
        let csv_path = path.with_extension("csv");
        let mut writer = CsvReportWriter::create(&csv_path)
            .with_context(|| format!("creating CSV report {}", csv_path.display()))?;
        writer.write_rows(&rows)?;
        writer.finish()?;
        info!("results written to {}", csv_path.display());
    }

    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    let args = Args::parse();

    // 1. Load the scenario and build one population per executor.
    let scenario = load_scenario(&args.scenario)
        .with_context(|| format!("loading scenario {}", args.scenario.display()))?;
    info!(
        agents = scenario.records.len(),
        bounds = %scenario.bounds,
        "scenario loaded"
    );

    let config = RunConfig::new(args.ticks, args.workers.get())?;
    let mut serial_population = scenario.build_population()?;
    let mut parallel_population = serial_population.clone();

    // 2. Sequential reference run.
    let start = Instant::now();
    if args.verbose {
        sequential::run(&mut serial_population, &config, &mut DumpObserver);
    } else {
        sequential::run(&mut serial_population, &config, &mut NoopObserver);
    }
    let serial_secs = start.elapsed().as_secs_f64();
    info!("sequential run finished in {serial_secs:.6} s");
    write_report(
        &serial_population,
        &report_path(&args.scenario, "_serial_out.txt"),
        args.csv,
    )?;

    // 3. Parallel run.
    let start = Instant::now();
    parallel::run(&mut parallel_population, &config)?;
    let parallel_secs = start.elapsed().as_secs_f64();
    info!(
        workers = args.workers.get(),
        "parallel run finished in {parallel_secs:.6} s"
    );
    write_report(
        &parallel_population,
        &report_path(&args.scenario, "_parallel_out.txt"),
        args.csv,
    )?;

    // 4. Summary and equivalence diagnostic.
    println!("Time for serial:   {serial_secs:.6} s");
    println!("Time for parallel: {parallel_secs:.6} s");
    println!("Speedup: {:.3}", serial_secs / parallel_secs);

    match first_mismatch(&serial_population, &parallel_population) {
        None => println!("Results match."),
        Some(index) => {
            warn!(index, "serial and parallel results diverge");
            println!("!!! RESULTS DO NOT MATCH AT {index} !!!");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::report_path;

    #[test]
    fn report_path_replaces_extension_with_suffix() {
        assert_eq!(
            report_path(Path::new("data/town.txt"), "_serial_out.txt"),
            Path::new("data/town_serial_out.txt")
        );
    }

    #[test]
    fn report_path_without_extension() {
        assert_eq!(
            report_path(Path::new("town"), "_parallel_out.txt"),
            Path::new("town_parallel_out.txt")
        );
    }
}
