use std::{cmp::Reverse, collections::HashMap};

use prettytable::{Cell, Row, Table};
use serde::Serialize;

use crate::solver::problem::{ConstraintId, Problem};

/// Search effort counters for a single `solve` call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// Candidate assignments tried, consistent or not.
    pub nodes_visited: u64,
    /// Consistent assignments later undone because their subtree failed.
    pub backtracks: u64,
    pub constraint_checks: u64,
    pub domain_prunings: u64,
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PerConstraintStats {
    pub checks: u64,
    pub prunings: u64,
}

/// Renders a per-constraint breakdown of search effort, busiest constraint
/// first. Constraints that were never touched still get a row.
pub fn render_stats_table(stats: &SearchStats, problem: &Problem) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Constraint"),
        Cell::new("ID"),
        Cell::new("Checks"),
        Cell::new("Prunings"),
    ]));

    let mut rows: Vec<(ConstraintId, PerConstraintStats)> = (0..problem.constraints().len())
        .map(|id| {
            (
                id,
                stats.constraint_stats.get(&id).copied().unwrap_or_default(),
            )
        })
        .collect();
    rows.sort_by_key(|&(id, per)| (Reverse(per.checks), id));

    for (id, per) in rows {
        let constraint = problem.constraint(id);
        table.add_row(Row::new(vec![
            Cell::new(&format!(
                "{} {} {}",
                problem.variable(constraint.main).name(),
                constraint.op,
                problem.variable(constraint.compare).name(),
            )),
            Cell::new(&id.to_string()),
            Cell::new(&per.checks.to_string()),
            Cell::new(&per.prunings.to_string()),
        ]));
    }

    table.to_string()
}
