use clap::Parser;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use explico::{
    error::Result,
    solver::{
        constraint::ConstraintOp,
        engine::{SearchEngine, SearchMode},
        problem::Problem,
        trace::DEFAULT_VISIT_LIMIT,
    },
};

/// Generates random instances from a seed and reports how each search mode
/// fares on them.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 20)]
    instances: usize,

    #[arg(long, default_value_t = 6)]
    variables: usize,

    #[arg(long, default_value_t = 8)]
    constraints: usize,

    #[arg(long, default_value_t = 4)]
    domain_size: i64,

    #[arg(long, default_value_t = 7)]
    seed: u64,
}

const OPS: [ConstraintOp; 4] = [
    ConstraintOp::Equal,
    ConstraintOp::NotEqual,
    ConstraintOp::GreaterThan,
    ConstraintOp::LessThan,
];

fn random_instance(rng: &mut ChaCha8Rng, args: &Args) -> Result<Problem> {
    let names: Vec<String> = (0..args.variables).map(|i| format!("V{i}")).collect();
    let variables = names
        .iter()
        .map(|name| (name.clone(), (1..=args.domain_size).collect::<Vec<i64>>()))
        .collect();

    let mut constraints = Vec::with_capacity(args.constraints);
    if args.variables >= 2 {
        for _ in 0..args.constraints {
            let a = rng.gen_range(0..args.variables);
            let mut b = rng.gen_range(0..args.variables);
            while b == a {
                b = rng.gen_range(0..args.variables);
            }
            let op = *OPS.choose(rng).unwrap();
            constraints.push((names[a].clone(), op, names[b].clone()));
        }
    }
    Problem::new(variables, constraints)
}

pub fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let modes = [
        ("none", SearchMode::Backtracking),
        ("fc", SearchMode::ForwardChecking),
    ];
    let mut solved = [0usize; 2];
    let mut truncated = [0usize; 2];
    let mut nodes = [0u64; 2];

    for index in 0..args.instances {
        let mut problem = random_instance(&mut rng, &args)?;
        print!("instance {index}:");
        for (slot, (label, mode)) in modes.iter().enumerate() {
            let report = SearchEngine::new(*mode).solve(&mut problem);
            let outcome = if report.solution.is_some() {
                solved[slot] += 1;
                "solved"
            } else if report.trace.len() >= DEFAULT_VISIT_LIMIT {
                truncated[slot] += 1;
                "cut off"
            } else {
                "unsatisfiable"
            };
            nodes[slot] += report.stats.nodes_visited;
            print!("  [{label}] {outcome}, {} visits", report.trace.len());
        }
        println!();
    }

    println!();
    for (slot, (label, _)) in modes.iter().enumerate() {
        println!(
            "{label}: solved {}/{} (cut off {}), {} nodes visited in total",
            solved[slot], args.instances, truncated[slot], nodes[slot],
        );
    }
    Ok(())
}
