use explico::{
    error::Result,
    solver::{
        constraint::ConstraintOp,
        engine::{SearchEngine, SearchMode, SolveReport},
        problem::Problem,
        stats::render_stats_table,
    },
};

const COLOURS: [&str; 3] = ["red", "green", "blue"];

const BORDERS: [(&str, &str); 9] = [
    ("WA", "NT"),
    ("WA", "SA"),
    ("NT", "SA"),
    ("NT", "Q"),
    ("SA", "Q"),
    ("SA", "NSW"),
    ("SA", "V"),
    ("Q", "NSW"),
    ("NSW", "V"),
];

pub fn create_problem() -> Result<Problem> {
    let regions = ["WA", "NT", "SA", "Q", "NSW", "V", "T"];
    Problem::new(
        regions
            .iter()
            .map(|region| (region.to_string(), vec![0, 1, 2]))
            .collect(),
        BORDERS
            .iter()
            .map(|(a, b)| (a.to_string(), ConstraintOp::NotEqual, b.to_string()))
            .collect(),
    )
}

fn print_report(report: &SolveReport) {
    for (index, entry) in report.trace.iter().enumerate() {
        println!("{}. {}", index + 1, entry);
    }
    match &report.solution {
        Some(solution) => {
            for (region, colour) in solution {
                println!("{region}: {}", COLOURS[*colour as usize]);
            }
        }
        None => println!("No colouring found within the visit budget."),
    }
}

pub fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    println!("Colouring the map of Australia with plain backtracking:");

    let mut problem = create_problem()?;
    let report = SearchEngine::new(SearchMode::Backtracking)
        .with_visit_limit(1000)
        .solve(&mut problem);
    print_report(&report);

    println!();
    println!("And again with forward checking:");
    let report = SearchEngine::new(SearchMode::ForwardChecking)
        .with_visit_limit(1000)
        .solve(&mut problem);
    print_report(&report);

    println!();
    print!("{}", render_stats_table(&report.stats, &problem));
    Ok(())
}
