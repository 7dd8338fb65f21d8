//! Defines a collection of standard heuristics for selecting which variable
//! to branch on next during the search process.

use std::cmp::Ordering;

use crate::solver::problem::{Problem, VariableId};

/// A trait for variable-selection heuristics.
///
/// Implementors of this trait define a strategy for choosing which unassigned
/// variable the solver should branch on next. A good heuristic can
/// dramatically improve solver performance.
pub trait VariableSelectionHeuristic {
    /// Selects the next variable to be assigned.
    ///
    /// # Returns
    ///
    /// * `Some(VariableId)` of the chosen variable, if there are unassigned
    ///   variables.
    /// * `None` if all variables are already assigned.
    fn select_variable(&self, problem: &Problem) -> Option<VariableId>;
}

/// A simple heuristic that selects the first unassigned variable in
/// declaration order.
///
/// This provides a basic, deterministic way to select variables.
pub struct SelectFirstHeuristic;

impl VariableSelectionHeuristic for SelectFirstHeuristic {
    fn select_variable(&self, problem: &Problem) -> Option<VariableId> {
        problem.unassigned().next()
    }
}

/// A heuristic that selects the most constrained variable.
///
/// This is a "fail-first" strategy that prioritizes the variable with the
/// fewest remaining values in its working domain. Ties go to the variable
/// that constrains the most *unassigned* variables, so a neighbour that has
/// already been assigned no longer contributes to the tie-break. Any
/// remaining ties are resolved alphabetically by variable name.
pub struct MostConstrainedHeuristic;

impl MostConstrainedHeuristic {
    /// Number of constraints linking `variable` to a still-unassigned
    /// variable.
    fn unassigned_degree(problem: &Problem, variable: VariableId) -> usize {
        problem
            .constraints_on(variable)
            .iter()
            .filter(|&&id| {
                let other = problem.constraint(id).other(variable);
                !problem.variable(other).is_assigned()
            })
            .count()
    }

    fn compare(problem: &Problem, a: VariableId, b: VariableId) -> Ordering {
        let size_a = problem.variable(a).domain().working_len();
        let size_b = problem.variable(b).domain().working_len();
        size_a
            .cmp(&size_b)
            .then_with(|| {
                // Note that b and a are swapped here: the larger degree
                // must sort first.
                Self::unassigned_degree(problem, b).cmp(&Self::unassigned_degree(problem, a))
            })
            .then_with(|| problem.variable(a).name().cmp(problem.variable(b).name()))
    }
}

impl VariableSelectionHeuristic for MostConstrainedHeuristic {
    fn select_variable(&self, problem: &Problem) -> Option<VariableId> {
        problem
            .unassigned()
            .min_by(|&a, &b| Self::compare(problem, a, b))
    }
}
