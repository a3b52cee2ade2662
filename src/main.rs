use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tis_superoptimizer::parser::parse_program_file;
use tis_superoptimizer::problem::Problem;
use tis_superoptimizer::search::{
    Algorithm, Config, EnumerativeSearch, ParallelConfig, SearchAlgorithm, SearchResult,
    run_parallel_search,
};
use tis_superoptimizer::semantics::{CheckResult, CostMetric, Cycle, Node, Port, check_detailed};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "tis-opt")]
#[command(about = "tis-opt - shortest program search for a TIS-100 node")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for the shortest program solving a problem file
    Optimize {
        /// Path to the problem YAML
        problem: PathBuf,
        /// Cycle budget per candidate (overrides the problem file)
        #[arg(long)]
        maximum_cycle: Option<u32>,
        /// Longest program to consider (overrides the problem file)
        #[arg(long)]
        maximum_length: Option<usize>,
        /// Literal operands, comma separated (overrides the problem file)
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        literals: Option<Vec<i32>>,
        /// Skip instructions that cannot affect the output
        #[arg(long)]
        prune: bool,
        /// Cost metric reported for the program found (instruction-count, content)
        #[arg(long, default_value = "instruction-count")]
        cost_metric: CostMetric,
        /// Search algorithm (enumerative, parallel); parallel when -j is given
        #[arg(long)]
        algorithm: Option<Algorithm>,
        /// Number of worker threads for parallel search
        #[arg(long, short = 'j')]
        cores: Option<usize>,
        /// Enable verbose output
        #[arg(long, short)]
        verbose: bool,
    },
    /// Check a program against a problem file
    Check {
        /// Path to the problem YAML
        problem: PathBuf,
        /// Path to the program text
        program: PathBuf,
        /// Cycle budget (overrides the problem file)
        #[arg(long)]
        maximum_cycle: Option<u32>,
    },
    /// Run a program on a node and print its final state
    Run {
        /// Path to the program text
        program: PathBuf,
        /// Values on the up port, comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        input: Vec<i32>,
        /// Cycle budget (unbounded when omitted)
        #[arg(long)]
        maximum_cycle: Option<u32>,
    },
}

/// Options for the optimize subcommand
struct OptimizeOptions {
    maximum_cycle: Option<u32>,
    maximum_length: Option<usize>,
    literals: Option<Vec<i32>>,
    prune: bool,
    cost_metric: CostMetric,
    algorithm: Algorithm,
    cores: Option<usize>,
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// --- Subcommands ---

fn optimize_problem(path: &Path, options: &OptimizeOptions) -> Result<(), Box<dyn std::error::Error>> {
    let problem = Problem::load(path)?;

    let mut config: Config = problem
        .config()
        .with_prune_redundant(options.prune)
        .with_cost_metric(options.cost_metric);
    if let Some(maximum_cycle) = options.maximum_cycle {
        config = config.with_maximum_cycle(maximum_cycle);
    }
    if let Some(maximum_length) = options.maximum_length {
        config = config.with_maximum_program_length(maximum_length);
    }
    if let Some(literals) = &options.literals {
        config = config.with_literals(literals.clone());
    }
    debug!(
        maximum_cycle = config.maximum_cycle,
        maximum_length = config.maximum_program_length,
        literals = ?config.literals,
        "loaded problem"
    );

    let node = problem.node();
    let result: SearchResult = match options.algorithm {
        Algorithm::Parallel => {
            let parallel_config = ParallelConfig::default().with_workers_option(options.cores);
            let parallel = run_parallel_search(&node, &problem.output, &config, &parallel_config);
            if !parallel.is_complete() {
                return Err(format!(
                    "workers {:?} panicked, the search is incomplete",
                    parallel.failed_workers
                )
                .into());
            }
            parallel.result
        }
        Algorithm::Enumerative => EnumerativeSearch::new().search(&node, &problem.output, &config),
    };

    match &result.program {
        Some(program) => println!("{}", program),
        None => println!("Could not find a program within the bounds"),
    }

    if options.verbose {
        println!("\nSearch Statistics:");
        print!("{}", result.statistics.format_summary());
    }

    Ok(())
}

fn check_program(
    problem_path: &Path,
    program_path: &Path,
    maximum_cycle: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let problem = Problem::load(problem_path)?;
    let program = parse_program_file(program_path)?;
    let maximum_cycle = maximum_cycle.unwrap_or(problem.config().maximum_cycle);

    match check_detailed(&problem.node(), program, &problem.output, maximum_cycle) {
        CheckResult::Accepted => {
            println!("accepted");
            Ok(())
        }
        CheckResult::WrongOutput { actual } => Err(format!(
            "rejected: wrote {:?}, expected {:?}",
            actual, problem.output
        )
        .into()),
        CheckResult::Rejected(error) => Err(format!("rejected: {}", error).into()),
    }
}

fn run_program(
    program_path: &Path,
    input: Vec<i32>,
    maximum_cycle: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let program = parse_program_file(program_path)?;
    let cycle = maximum_cycle.map_or(Cycle::Indefinitely, Cycle::Maximum);

    let halted = Node::new().set_up(Port::new(input)).load(program).run(cycle)?;

    println!("ACC: {}", halted.acc());
    println!("BAK: {}", halted.bac());
    println!("Output: {:?}", halted.down().output());
    println!("Unread input: {}", halted.up().remaining());
    Ok(())
}

// --- Main Function ---

fn main() {
    let args = Args::parse();

    match args.command {
        Commands::Optimize {
            problem,
            maximum_cycle,
            maximum_length,
            literals,
            prune,
            cost_metric,
            algorithm,
            cores,
            verbose,
        } => {
            init_logging(verbose);

            let options = OptimizeOptions {
                maximum_cycle,
                maximum_length,
                literals,
                prune,
                cost_metric,
                algorithm: algorithm.unwrap_or(if cores.is_some() {
                    Algorithm::Parallel
                } else {
                    Algorithm::Enumerative
                }),
                cores,
                verbose,
            };

            if let Err(e) = optimize_problem(&problem, &options) {
                eprintln!("Error during optimization: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Check {
            problem,
            program,
            maximum_cycle,
        } => {
            init_logging(false);

            if let Err(e) = check_program(&problem, &program, maximum_cycle) {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
        Commands::Run {
            program,
            input,
            maximum_cycle,
        } => {
            init_logging(false);

            if let Err(e) = run_program(&program, input, maximum_cycle) {
                eprintln!("Error running program: {}", e);
                std::process::exit(1);
            }
        }
    }
}
