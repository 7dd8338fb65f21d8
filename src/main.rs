use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use explico::{
    error::Result,
    parse::load_problem,
    solver::{
        engine::{SearchEngine, SearchMode},
        stats::render_stats_table,
    },
};

/// Solves a binary CSP read from a variable file and a constraint file,
/// printing the numbered trace of branch visits.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Variable file: one `NAME: value value ...` line per variable.
    var_file: PathBuf,

    /// Constraint file: one `A op B` line per constraint, op one of = ! > <.
    con_file: PathBuf,

    /// Consistency-enforcing procedure to apply during the search.
    #[arg(value_enum, default_value = "none")]
    procedure: Procedure,

    /// Print search statistics to stderr after the trace.
    #[arg(long)]
    stats: bool,

    /// Emit the full report as JSON instead of the numbered trace.
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Procedure {
    /// Plain backtracking, no consistency enforcement.
    None,
    /// Backtracking with forward checking.
    Fc,
}

impl From<Procedure> for SearchMode {
    fn from(procedure: Procedure) -> Self {
        match procedure {
            Procedure::None => SearchMode::Backtracking,
            Procedure::Fc => SearchMode::ForwardChecking,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut problem = load_problem(&args.var_file, &args.con_file)?;
    let report = SearchEngine::new(args.procedure.into()).solve(&mut problem);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (index, entry) in report.trace.iter().enumerate() {
            println!("{}. {}", index + 1, entry);
        }
    }

    if args.stats {
        eprintln!(
            "nodes visited: {}, backtracks: {}, constraint checks: {}, prunings: {}",
            report.stats.nodes_visited,
            report.stats.backtracks,
            report.stats.constraint_checks,
            report.stats.domain_prunings,
        );
        eprint!("{}", render_stats_table(&report.stats, &problem));
    }

    Ok(())
}
