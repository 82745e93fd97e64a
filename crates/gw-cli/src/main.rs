//! greenwave — traffic light schedule optimizer.
//!
//! Reads one or more problem files, searches for a schedule under a time
//! budget, and writes the best plan found per input (plus optional jam
//! CSVs and a JSON summary).  Inputs run in parallel, one rayon task per
//! file, each with its own RNG stream derived from `--seed`, so a given
//! invocation always reproduces the same plans.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::{arg, ArgAction, Command};
use rayon::prelude::*;
use serde::Serialize;

use gw_core::{Score, SearchRng};
use gw_opt::{Optimizer, Strategy};
use gw_plan::Solution;
use gw_sim::simulate;

// ── Command line ──────────────────────────────────────────────────────────────

fn cli() -> Command {
    Command::new("greenwave")
        .about("Optimizes traffic light schedules for street networks")
        .arg(
            arg!(<INPUT> ... "Problem file(s) to schedule")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--solution [FILE] "Starting plan to refine instead of the trivial one (single input only)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--"out-dir" [DIR] "Directory for plans and reports")
                .default_value("out")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--"budget-secs" [SECS] "Search time budget per input, in seconds")
                .default_value("60")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(--seed [SEED] "Base RNG seed; input number `i` uses stream `i`")
                .default_value("42")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(--strategy [NAME] "Search strategy: hill-climb, jam-targeted, or random-restart")
                .default_value("random-restart")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            arg!(--"jam-report" "Also write a per-street peak queue CSV per input")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(--summary [FILE] "Write a JSON summary of all runs to this file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

/// Parsed command line.
struct Opts {
    inputs:     Vec<PathBuf>,
    solution:   Option<PathBuf>,
    out_dir:    PathBuf,
    budget:     Duration,
    seed:       u64,
    jam_report: bool,
    summary:    Option<PathBuf>,
}

// ── Summary rows ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct RunSummary {
    input:          String,
    strategy:       String,
    intersections:  usize,
    streets:        usize,
    vehicles:       usize,
    baseline_score: Score,
    final_score:    Score,
    completed:      u32,
    elapsed_secs:   f64,
}

#[derive(Serialize)]
struct Summary {
    total_score: Score,
    runs:        Vec<RunSummary>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // `INPUT` is required and the scalar flags all carry defaults, so the
    // `unwrap`s here cannot fire once `get_matches` returns.
    let matches = cli().get_matches();
    let strategy: Strategy = matches.get_one::<String>("strategy").unwrap().parse()?;
    let opts = Opts {
        inputs:     matches.get_many::<PathBuf>("INPUT").unwrap().cloned().collect(),
        solution:   matches.get_one::<PathBuf>("solution").cloned(),
        out_dir:    matches.get_one::<PathBuf>("out-dir").unwrap().clone(),
        budget:     Duration::from_secs(*matches.get_one::<u64>("budget-secs").unwrap()),
        seed:       *matches.get_one::<u64>("seed").unwrap(),
        jam_report: matches.get_flag("jam-report"),
        summary:    matches.get_one::<PathBuf>("summary").cloned(),
    };

    run(strategy, opts)
}

fn run(strategy: Strategy, opts: Opts) -> Result<()> {
    if opts.solution.is_some() && opts.inputs.len() > 1 {
        bail!("--solution applies to a single input, got {}", opts.inputs.len());
    }
    fs::create_dir_all(&opts.out_dir)
        .with_context(|| format!("creating output directory {}", opts.out_dir.display()))?;

    let runs: Vec<RunSummary> = opts
        .inputs
        .par_iter()
        .enumerate()
        .map(|(stream, input)| process(input, stream as u64, strategy, &opts))
        .collect::<Result<_>>()?;

    let total: Score = runs.iter().map(|r| r.final_score).sum();
    log::info!("total score across {} input(s): {}", runs.len(), total);

    if let Some(path) = &opts.summary {
        let file =
            File::create(path).with_context(|| format!("creating summary {}", path.display()))?;
        serde_json::to_writer_pretty(file, &Summary { total_score: total, runs })?;
    }
    Ok(())
}

// ── Per-input pipeline ────────────────────────────────────────────────────────

/// Load one problem, search under the budget, write the outputs.
///
/// `stream` is the input's position on the command line; it keys the RNG
/// stream so multi-input runs stay reproducible regardless of how rayon
/// schedules them.
fn process(input: &Path, stream: u64, strategy: Strategy, opts: &Opts) -> Result<RunSummary> {
    let started = Instant::now();
    let name = input.display().to_string();

    let network = gw_io::load_problem(input).with_context(|| format!("reading {name}"))?;
    log::info!(
        "{}: {} intersections, {} streets, {} vehicles, horizon {}",
        name,
        network.intersection_count(),
        network.street_count(),
        network.vehicle_count(),
        network.horizon(),
    );

    let mut solution = match &opts.solution {
        Some(path) => gw_io::load_solution(path, &network)
            .with_context(|| format!("reading plan {}", path.display()))?,
        None => Solution::trivial(&network),
    };
    let baseline = simulate(&network, &solution)?.score;

    let mut optimizer = Optimizer::with_rng(&network, SearchRng::derived(opts.seed, stream));
    optimizer.run(strategy, &mut solution, opts.budget)?;

    let report = simulate(&network, &solution)?;
    log::info!(
        "{}: score {} -> {} ({} of {} vehicles finished)",
        name,
        baseline,
        report.score,
        report.completed,
        network.vehicle_count(),
    );

    let stem = input
        .file_stem()
        .map_or_else(|| String::from("input"), |s| s.to_string_lossy().into_owned());
    let plan_path = opts.out_dir.join(format!("{stem}.plan.txt"));
    gw_io::write_solution(&plan_path, &solution, &network)
        .with_context(|| format!("writing {}", plan_path.display()))?;

    if opts.jam_report {
        let jam_path = opts.out_dir.join(format!("{stem}.jams.csv"));
        gw_io::write_jam_report(&jam_path, &report.jams, &network)
            .with_context(|| format!("writing {}", jam_path.display()))?;
    }

    Ok(RunSummary {
        input:          name,
        strategy:       strategy.name().to_string(),
        intersections:  network.intersection_count(),
        streets:        network.street_count(),
        vehicles:       network.vehicle_count(),
        baseline_score: baseline,
        final_score:    report.score,
        completed:      report.completed,
        elapsed_secs:   started.elapsed().as_secs_f64(),
    })
}
