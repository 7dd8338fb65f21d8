use im::Vector;
use serde::Serialize;
use tracing::debug;

use crate::solver::{
    heuristics::{
        value::{IdentityValueHeuristic, LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
        variable::{MostConstrainedHeuristic, VariableSelectionHeuristic},
    },
    problem::{Problem, VariableId},
    stats::SearchStats,
    trace::{Outcome, TraceEntry, TraceRecorder, DEFAULT_VISIT_LIMIT},
};

/// Which consistency discipline the engine applies at each assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Chronological backtracking with no look-ahead. Candidate values are
    /// taken in raw domain order.
    Backtracking,
    /// Backtracking plus one-step forward checking: each assignment prunes
    /// the working domains of unassigned neighbours, and candidate values
    /// are ordered least-constraining first.
    ForwardChecking,
}

/// Everything a search run produces: the bounded branch-visit trace, the
/// satisfying assignment if one was found (variables in declaration order),
/// and the effort counters.
#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub trace: Vec<TraceEntry>,
    pub solution: Option<Vec<(String, i64)>>,
    pub stats: SearchStats,
}

/// The search state threaded through every recursive call. There are no
/// process-wide globals; the top-level `solve` owns one of these for the
/// duration of the run.
struct SearchContext {
    recorder: TraceRecorder,
    stats: SearchStats,
    path: Vec<VariableId>,
}

/// The main engine for solving binary constraint satisfaction problems.
///
/// The `SearchEngine` takes a [`Problem`] and runs a depth-first
/// backtracking search over it, guided by pluggable variable- and
/// value-ordering heuristics. Depending on the [`SearchMode`] it either
/// checks each assignment against already-assigned neighbours only, or
/// additionally forward-checks the working domains of unassigned
/// neighbours.
///
/// The search stops at the first solution, or once the visit limit has been
/// reached, whichever comes first. Branch visits that end in failure and
/// the final solution visit are recorded in the report's trace; consistent
/// intermediate assignments are not.
pub struct SearchEngine {
    mode: SearchMode,
    visit_limit: usize,
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
}

impl SearchEngine {
    /// Creates an engine with the standard heuristics for `mode`: most
    /// constrained variable first in both modes, and least-constraining
    /// value ordering under forward checking only.
    pub fn new(mode: SearchMode) -> Self {
        let value_heuristic: Box<dyn ValueOrderingHeuristic> = match mode {
            SearchMode::Backtracking => Box::new(IdentityValueHeuristic),
            SearchMode::ForwardChecking => Box::new(LeastConstrainingValueHeuristic),
        };
        Self {
            mode,
            visit_limit: DEFAULT_VISIT_LIMIT,
            variable_heuristic: Box::new(MostConstrainedHeuristic),
            value_heuristic,
        }
    }

    /// Creates an engine with caller-supplied heuristics.
    pub fn with_heuristics(
        mode: SearchMode,
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            mode,
            visit_limit: DEFAULT_VISIT_LIMIT,
            variable_heuristic,
            value_heuristic,
        }
    }

    /// Overrides the default visit limit of
    /// [`DEFAULT_VISIT_LIMIT`](crate::solver::trace::DEFAULT_VISIT_LIMIT).
    pub fn with_visit_limit(mut self, visit_limit: usize) -> Self {
        self.visit_limit = visit_limit;
        self
    }

    /// Runs the search to completion and reports the outcome.
    ///
    /// The problem is reset first, so repeated calls on the same instance
    /// are independent and produce identical reports. On success the
    /// satisfying assignment is left in place on the problem; on a
    /// truncated run the assignment state is whatever the cut-off froze.
    ///
    /// # Returns
    ///
    /// A [`SolveReport`] carrying the trace, the solution if one was found
    /// within the visit limit, and the search statistics.
    pub fn solve(&self, problem: &mut Problem) -> SolveReport {
        problem.reset();
        let mut ctx = SearchContext {
            recorder: TraceRecorder::with_limit(self.visit_limit),
            stats: SearchStats::default(),
            path: Vec::new(),
        };

        debug!(
            mode = ?self.mode,
            variables = problem.variables().len(),
            constraints = problem.constraints().len(),
            "starting search"
        );
        let solved = self.search(problem, &mut ctx);
        debug!(
            solved,
            visits = ctx.recorder.len(),
            nodes = ctx.stats.nodes_visited,
            "search finished"
        );

        let solution = if solved { problem.full_assignment() } else { None };
        SolveReport {
            trace: ctx.recorder.into_entries(),
            solution,
            stats: ctx.stats,
        }
    }

    fn search(&self, problem: &mut Problem, ctx: &mut SearchContext) -> bool {
        // A budget cut-off freezes the search: unwind with no further
        // mutation or recording.
        if ctx.recorder.is_budget_exhausted() {
            return false;
        }
        if problem.is_complete() {
            if !problem.all_constraints_hold() {
                return false;
            }
            ctx.recorder
                .record(problem.assigned_pairs(&ctx.path), Outcome::Solution);
            return true;
        }

        let Some(variable) = self.variable_heuristic.select_variable(problem) else {
            return false;
        };
        // Ordered once per selection, not per failed sibling branch.
        let candidates = self.value_heuristic.order_values(problem, variable);

        for value in candidates {
            if ctx.recorder.is_sealed() {
                break;
            }
            problem.assign(variable, value);
            ctx.path.push(variable);
            ctx.stats.nodes_visited += 1;

            if !Self::assigned_neighbours_hold(problem, variable, value, &mut ctx.stats) {
                ctx.recorder
                    .record(problem.assigned_pairs(&ctx.path), Outcome::Failure);
                ctx.path.pop();
                problem.unassign(variable);
                continue;
            }

            match self.mode {
                SearchMode::ForwardChecking => {
                    let (snapshots, wiped) =
                        Self::forward_check(problem, variable, value, &mut ctx.stats);
                    if wiped {
                        ctx.recorder
                            .record(problem.assigned_pairs(&ctx.path), Outcome::Failure);
                        Self::restore(problem, snapshots);
                        ctx.path.pop();
                        problem.unassign(variable);
                        continue;
                    }
                    if self.search(problem, ctx) {
                        return true;
                    }
                    if ctx.recorder.is_budget_exhausted() {
                        return false;
                    }
                    Self::restore(problem, snapshots);
                    ctx.path.pop();
                    problem.unassign(variable);
                    ctx.stats.backtracks += 1;
                }
                SearchMode::Backtracking => {
                    if self.search(problem, ctx) {
                        return true;
                    }
                    if ctx.recorder.is_budget_exhausted() {
                        return false;
                    }
                    ctx.path.pop();
                    problem.unassign(variable);
                    ctx.stats.backtracks += 1;
                }
            }
        }

        false
    }

    /// Checks `variable = value` against every constraint whose other
    /// endpoint is already assigned. Constraints with an unassigned side
    /// are left alone.
    fn assigned_neighbours_hold(
        problem: &Problem,
        variable: VariableId,
        value: i64,
        stats: &mut SearchStats,
    ) -> bool {
        for &id in problem.constraints_on(variable) {
            let constraint = problem.constraint(id);
            let Some(other_value) = problem.assignment(constraint.other(variable)) else {
                continue;
            };
            stats.constraint_checks += 1;
            stats.constraint_stats.entry(id).or_default().checks += 1;
            if !constraint.allows(variable, value, other_value) {
                return false;
            }
        }
        true
    }

    /// One-step look-ahead: filters the working domain of every unassigned
    /// neighbour of `variable` down to the values consistent with
    /// `variable = value`. Returns the snapshots needed to undo the
    /// filtering, plus whether some neighbour's domain was wiped out.
    fn forward_check(
        problem: &mut Problem,
        variable: VariableId,
        value: i64,
        stats: &mut SearchStats,
    ) -> (Vec<(VariableId, Vector<i64>)>, bool) {
        let incident = problem.constraints_on(variable).to_vec();
        let mut snapshots = Vec::new();
        for id in incident {
            let constraint = *problem.constraint(id);
            let other = constraint.other(variable);
            if problem.variable(other).is_assigned() {
                continue;
            }
            let before = problem.variable(other).domain().working_len();
            let snapshot = problem
                .restrict_domain(other, |candidate| constraint.allows(variable, value, candidate));
            let after = problem.variable(other).domain().working_len();
            if after < before {
                let removed = (before - after) as u64;
                stats.domain_prunings += removed;
                stats.constraint_stats.entry(id).or_default().prunings += removed;
                snapshots.push((other, snapshot));
            }
            if problem.variable(other).domain().is_wiped_out() {
                return (snapshots, true);
            }
        }
        (snapshots, false)
    }

    /// Undoes forward-checking prunings. Snapshots are unwound newest
    /// first, since one neighbour may have been filtered more than once.
    fn restore(problem: &mut Problem, snapshots: Vec<(VariableId, Vector<i64>)>) {
        for (variable, snapshot) in snapshots.into_iter().rev() {
            problem.restore_domain(variable, snapshot);
        }
    }
}
