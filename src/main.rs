use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use ordo::config::Config;
use ordo::core::{find_optimal, SearchOptions, Simulator, TaskDag, TaskTable};
use ordo::report::Report;
use ordo::{olog, olog_error, olog_warn, Result};

/// Ordo - task ordering optimizer for failure-prone project plans
#[derive(Parser, Debug)]
#[command(name = "ordo")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    ORDO_DEBUG=1    Enable debug logging (alternative to --debug)")]
pub struct Cli {
    /// Enable debug logging (writes to ~/.ordo/ordo.log)
    #[arg(short = 'd', long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Find the ordering that minimizes expected project time
    Plan {
        /// Task table file (JSON rows: name, duration, fail_prob, depends_on)
        file: PathBuf,

        /// Monte Carlo trial count for the failure-time simulation
        #[arg(long)]
        trials: Option<usize>,

        /// Fixed rng seed for a reproducible simulation
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the failure-time simulation
        #[arg(long)]
        no_simulate: bool,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate a task table without running the optimizer
    Check {
        /// Task table file to validate
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    ordo::log::init(cli.debug);

    let result = match cli.command {
        Command::Plan {
            file,
            trials,
            seed,
            no_simulate,
            json,
        } => run_plan(file, trials, seed, no_simulate, json),
        Command::Check { file } => run_check(file),
    };
    if let Err(err) = &result {
        olog_error!("Command failed: {}", err);
    }
    result
}

/// Load a table, search for the optimal ordering, simulate it, report.
fn run_plan(
    file: PathBuf,
    trials: Option<usize>,
    seed: Option<u64>,
    no_simulate: bool,
    json: bool,
) -> Result<()> {
    let config = Config::load()?;
    olog!("Plan command: file={}", file.display());

    let table = TaskTable::load(&file)?;
    olog!("Loaded {} tasks from {}", table.len(), file.display());

    let options = SearchOptions {
        max_tasks: config.max_tasks,
    };
    let plan = find_optimal(&table, &options)?;

    let failure_samples = if no_simulate {
        Vec::new()
    } else {
        let trials = trials.unwrap_or(config.trials);
        if trials == 0 {
            olog_warn!("Simulation requested with 0 trials; no failure samples will be recorded");
        }
        let simulator = Simulator::new(trials);
        let samples = match seed.or(config.seed) {
            Some(seed) => simulator.run(&table, &plan.ordering, &mut StdRng::seed_from_u64(seed)),
            None => simulator.run(&table, &plan.ordering, &mut rand::thread_rng()),
        };
        olog!(
            "Simulated {} trials, {} failures recorded",
            trials,
            samples.len()
        );
        samples
    };

    let report = Report::new(&table, &plan, failure_samples);
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render());
    }
    Ok(())
}

/// Validate a table file: construction invariants plus acyclicity.
fn run_check(file: PathBuf) -> Result<()> {
    olog!("Check command: file={}", file.display());

    let table = TaskTable::load(&file)?;
    let dag = TaskDag::from_table(&table);
    dag.ensure_acyclic(&table)?;

    println!(
        "{}: {} tasks, {} dependencies, table is valid",
        file.display(),
        table.len(),
        dag.dependency_count()
    );
    Ok(())
}
