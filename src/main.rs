//! Word Ladder - CLI
//!
//! Solves clue-driven word ladders from candidate fixtures or the embedded
//! lexicon, in single-puzzle or batch mode. Log output is controlled by
//! `RUST_LOG` (targets `orchestrator`, `search`, `generator`).

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use word_ladder::{
    commands::{
        BatchOptions, Pipeline, SolveConfig, check_words, parse_puzzles, run_batch, solve_ladder,
    },
    generator::{
        BackoffGenerator, BackoffPolicy, CandidateGenerator, FixtureGenerator, LexiconGenerator,
    },
    output::{json, print_batch_summary, print_check_report, print_solve_error, print_solve_result},
    solver::{DEFAULT_NODE_BUDGET, SolverType},
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Build word ladders from clues: one word per clue, one letter changed per step",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Solver: slot-order (default), reorder, fallback
    #[arg(short, long, global = true)]
    strategy: Option<String>,

    /// Search node budget per solve
    #[arg(long, global = true, default_value_t = DEFAULT_NODE_BUDGET)]
    node_budget: usize,

    /// Print JSON instead of colored text
    #[arg(long, global = true)]
    json: bool,

    /// Show attempts and search statistics
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single ladder
    Solve {
        /// Letters per word
        #[arg(short, long)]
        length: usize,

        /// Clue for one ladder word (repeat, in order)
        #[arg(short, long = "clue", required = true)]
        clues: Vec<String>,

        /// JSON file mapping each clue to its candidates
        #[arg(long, conflicts_with_all = ["lexicon", "lexicon_file"])]
        candidates: Option<PathBuf>,

        /// Draw candidates at random from the embedded lexicon
        #[arg(long)]
        lexicon: bool,

        /// Draw candidates from a word list file instead
        #[arg(long)]
        lexicon_file: Option<PathBuf>,

        /// Seed for lexicon draws
        #[arg(long)]
        seed: Option<u64>,

        /// Generation rounds before giving up
        #[arg(short, long, default_value = "5")]
        max_attempts: usize,

        /// One generation round, searched with slot order then reordering
        #[arg(long)]
        exhaustive: bool,
    },

    /// Solve every puzzle in a JSON batch file
    Batch {
        /// Puzzle file: `[{ word_length, clues, candidates }]`
        file: PathBuf,

        /// Generation rounds per puzzle
        #[arg(short, long, default_value = "5")]
        max_attempts: usize,

        /// One round per puzzle, searched with slot order then reordering
        #[arg(long)]
        exhaustive: bool,
    },

    /// Check a sequence of words for one-letter steps
    Check {
        /// Words in ladder order
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();
    let mode = OutputMode {
        json: cli.json,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Solve {
            length,
            clues,
            candidates,
            lexicon,
            lexicon_file,
            seed,
            max_attempts,
            exhaustive,
        } => {
            let mut config = SolveConfig::new(length, clues);
            config.max_attempts = max_attempts;
            config.pipeline = pipeline(exhaustive);
            let source = CandidateSource::from_args(candidates, lexicon, lexicon_file)?;
            let solver = solver_for(cli.strategy.as_deref(), config.pipeline, cli.node_budget);
            run_solve_command(&config, &source, seed, &solver, mode)
        }
        Commands::Batch {
            file,
            max_attempts,
            exhaustive,
        } => {
            let options = BatchOptions {
                max_attempts,
                pipeline: pipeline(exhaustive),
                show_progress: !mode.json,
            };
            let solver = solver_for(cli.strategy.as_deref(), options.pipeline, cli.node_budget);
            run_batch_command(&file, options, &solver, mode)
        }
        Commands::Check { words } => run_check_command(&words, mode),
    }
}

#[derive(Clone, Copy)]
struct OutputMode {
    json: bool,
    verbose: bool,
}

const fn pipeline(exhaustive: bool) -> Pipeline {
    if exhaustive {
        Pipeline::Exhaustive
    } else {
        Pipeline::Repair
    }
}

fn solver_for(strategy: Option<&str>, pipeline: Pipeline, node_budget: usize) -> SolverType {
    strategy.map_or_else(
        || pipeline.default_solver(node_budget),
        |name| SolverType::from_name(name, node_budget),
    )
}

/// Where `solve` gets its candidates
enum CandidateSource {
    Fixture(PathBuf),
    Lexicon(Option<PathBuf>),
}

impl CandidateSource {
    fn from_args(
        candidates: Option<PathBuf>,
        lexicon: bool,
        lexicon_file: Option<PathBuf>,
    ) -> Result<Self> {
        match (candidates, lexicon, lexicon_file) {
            (Some(path), _, _) => Ok(Self::Fixture(path)),
            (None, _, Some(path)) => Ok(Self::Lexicon(Some(path))),
            (None, true, None) => Ok(Self::Lexicon(None)),
            (None, false, None) => {
                bail!("pass --candidates FILE, --lexicon or --lexicon-file FILE")
            }
        }
    }

    fn generator(&self, seed: Option<u64>) -> Result<Box<dyn CandidateGenerator>> {
        let rng = || seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let generator: Box<dyn CandidateGenerator> = match self {
            Self::Fixture(path) => Box::new(
                FixtureGenerator::from_file(path)
                    .with_context(|| format!("loading candidates from {}", path.display()))?,
            ),
            Self::Lexicon(None) => Box::new(LexiconGenerator::embedded(rng())),
            Self::Lexicon(Some(path)) => {
                let words = load_from_file(path)
                    .with_context(|| format!("reading word list {}", path.display()))?;
                Box::new(LexiconGenerator::new(words, rng()))
            }
        };
        Ok(generator)
    }
}

fn run_solve_command(
    config: &SolveConfig,
    source: &CandidateSource,
    seed: Option<u64>,
    solver: &SolverType,
    mode: OutputMode,
) -> Result<ExitCode> {
    let inner = source.generator(seed)?;
    let mut generator = BackoffGenerator::new(inner, BackoffPolicy::default());

    match solve_ladder(config, &mut generator, solver) {
        Ok(result) => {
            if mode.json {
                print_json(&json::solve_result(&result))?;
            } else {
                print_solve_result(&result, mode.verbose);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            if mode.json {
                print_json(&json::solve_error(&err))?;
            } else {
                print_solve_error(&err, mode.verbose);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_batch_command(
    path: &Path,
    options: BatchOptions,
    solver: &SolverType,
    mode: OutputMode,
) -> Result<ExitCode> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let puzzles = parse_puzzles(&content)
        .with_context(|| format!("parsing puzzles in {}", path.display()))?;

    if !mode.json {
        println!("🪜 Solving {} puzzles...", puzzles.len());
    }
    let summary = run_batch(&puzzles, solver, options);

    if mode.json {
        print_json(&json::batch_summary(&summary))?;
    } else {
        print_batch_summary(&summary, mode.verbose);
    }

    Ok(if summary.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_check_command(words: &[String], mode: OutputMode) -> Result<ExitCode> {
    let report = check_words(words);

    if mode.json {
        print_json(&json::check_report(&report))?;
    } else {
        print_check_report(&report);
    }

    Ok(if report.is_ladder() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
