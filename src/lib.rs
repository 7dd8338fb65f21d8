//! Explico is a backtracking solver for binary constraint satisfaction
//! problems (CSPs) over finite integer domains, built around an exact,
//! bounded trace of the search it performs.
//!
//! A problem is a set of named variables, each with a finite integer
//! domain, plus binary constraints (`=`, `!`, `>`, `<`) between pairs of
//! them. The solver runs a depth-first search in one of two modes: plain
//! chronological backtracking, or backtracking with one-step forward
//! checking. Branching order is chosen by the most-constrained-variable
//! heuristic (fewest remaining values, then most constraints to unassigned
//! variables, then alphabetical), and under forward checking candidate
//! values are tried least-constraining first.
//!
//! The search records one trace entry per failing branch and one for the
//! solution, stopping at the first solution or after
//! [`DEFAULT_VISIT_LIMIT`](solver::trace::DEFAULT_VISIT_LIMIT) recorded
//! visits.
//!
//! # Core Concepts
//!
//! - **[`Problem`](solver::problem::Problem)**: the validated instance,
//!   variables plus constraints. Usually built from the two-file text
//!   format by [`parse::load_problem`].
//! - **[`SearchEngine`](solver::engine::SearchEngine)**: runs the search in
//!   a chosen [`SearchMode`](solver::engine::SearchMode).
//! - **[`SolveReport`](solver::engine::SolveReport)**: the trace, the
//!   solution if one was found, and search statistics.
//!
//! # Example
//!
//! `Y` must equal `Z`; forward checking finds the solution without ever
//! visiting a failing branch:
//!
//! ```
//! use explico::solver::{
//!     constraint::ConstraintOp,
//!     engine::{SearchEngine, SearchMode},
//!     problem::Problem,
//! };
//!
//! let mut problem = Problem::new(
//!     vec![
//!         ("X".to_string(), vec![0, 1, 2]),
//!         ("Y".to_string(), vec![0, 1, 2]),
//!         ("Z".to_string(), vec![1, 2]),
//!     ],
//!     vec![("Y".to_string(), ConstraintOp::Equal, "Z".to_string())],
//! )
//! .unwrap();
//!
//! let report = SearchEngine::new(SearchMode::ForwardChecking).solve(&mut problem);
//!
//! let lines: Vec<String> = report.trace.iter().map(ToString::to_string).collect();
//! assert_eq!(lines, vec!["Z=1, Y=1, X=0 solution"]);
//! assert_eq!(
//!     report.solution.unwrap(),
//!     vec![
//!         ("X".to_string(), 0),
//!         ("Y".to_string(), 1),
//!         ("Z".to_string(), 1),
//!     ],
//! );
//! ```
pub mod error;
pub mod parse;
pub mod solver;
