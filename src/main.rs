//! `nqueens` - solve N-Queens with the steady-state GA.
//!
//! Prints the termination report and can dump the per-generation fitness
//! history as JSON for plotting elsewhere.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use nqueens_ga::ga::{GaConfig, GaRunner, Termination};
use nqueens_ga::queens::NQueens;

#[derive(Parser)]
#[command(name = "nqueens")]
#[command(about = "Solve N-Queens with a genetic algorithm")]
struct Cli {
    /// Number of boards in the population
    #[arg(long, default_value = "100")]
    population: usize,
    /// Board size N
    #[arg(long, default_value = "8")]
    board_size: usize,
    /// Total fitness evaluations allowed
    #[arg(long, default_value = "10000")]
    max_evaluations: usize,
    /// Per-offspring mutation probability
    #[arg(long, default_value = "0.8")]
    mutation_rate: f64,
    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Write best/average fitness per generation to this JSON file
    #[arg(long)]
    history: Option<PathBuf>,
}

#[derive(Serialize)]
struct History<'a> {
    board_size: usize,
    population: usize,
    seed: u64,
    termination: Termination,
    evaluations: usize,
    best_fitness: &'a [u64],
    average_fitness: &'a [f64],
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let problem = NQueens::new(cli.board_size)?;
    let config = GaConfig {
        population_size: cli.population,
        max_evaluations: cli.max_evaluations,
        mutation_rate: cli.mutation_rate,
        seed: cli.seed,
        ..GaConfig::default()
    };

    let result = GaRunner::run(&problem, &config)?;

    match result.termination {
        Termination::Solved => println!("Solution found after {} evaluations", result.evaluations),
        Termination::BudgetExhausted => println!(
            "No solution within {} evaluations (best fitness {})",
            result.evaluations, result.best_fitness
        ),
    }
    println!("Solution: {:?}", result.best.placements());
    print!("{}", result.best);

    if let Some(path) = &cli.history {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let history = History {
            board_size: problem.board_size(),
            population: cli.population,
            seed: result.seed,
            termination: result.termination,
            evaluations: result.evaluations,
            best_fitness: &result.best_history,
            average_fitness: &result.average_history,
        };
        serde_json::to_writer_pretty(BufWriter::new(file), &history)?;
        tracing::info!("Saved fitness history to {}", path.display());
    }

    Ok(())
}
