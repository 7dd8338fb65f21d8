use crate::solver::problem::{Problem, VariableId};

/// A trait for strategies that determine the order of values to try for a
/// variable.
pub trait ValueOrderingHeuristic {
    /// Returns the candidate values for `variable`, drawn from its working
    /// domain, in the order they should be tried.
    fn order_values(&self, problem: &Problem, variable: VariableId) -> Vec<i64>;
}

/// A simple heuristic that returns values in their current working-domain
/// order.
pub struct IdentityValueHeuristic;

impl ValueOrderingHeuristic for IdentityValueHeuristic {
    fn order_values(&self, problem: &Problem, variable: VariableId) -> Vec<i64> {
        problem
            .variable(variable)
            .domain()
            .working()
            .iter()
            .copied()
            .collect()
    }
}

/// A heuristic that tries the least constraining value first.
///
/// Each candidate is scored by how many options it leaves open: the total
/// number of values across the working domains of unassigned neighbours
/// that remain compatible once the candidate is chosen. Higher scores are
/// tried first, and equal scores fall back to ascending value order.
pub struct LeastConstrainingValueHeuristic;

impl LeastConstrainingValueHeuristic {
    fn surviving_options(problem: &Problem, variable: VariableId, value: i64) -> usize {
        problem
            .constraints_on(variable)
            .iter()
            .map(|&id| {
                let constraint = problem.constraint(id);
                let other = constraint.other(variable);
                if problem.variable(other).is_assigned() {
                    return 0;
                }
                problem
                    .variable(other)
                    .domain()
                    .working()
                    .iter()
                    .filter(|&&other_value| constraint.allows(variable, value, other_value))
                    .count()
            })
            .sum()
    }
}

impl ValueOrderingHeuristic for LeastConstrainingValueHeuristic {
    fn order_values(&self, problem: &Problem, variable: VariableId) -> Vec<i64> {
        let mut scored: Vec<(i64, usize)> = problem
            .variable(variable)
            .domain()
            .working()
            .iter()
            .map(|&value| (value, Self::surviving_options(problem, variable, value)))
            .collect();
        scored.sort_by(|(value_a, score_a), (value_b, score_b)| {
            score_b.cmp(score_a).then(value_a.cmp(value_b))
        });
        scored.into_iter().map(|(value, _)| value).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::constraint::ConstraintOp;

    fn problem(
        variables: &[(&str, &[i64])],
        constraints: &[(&str, ConstraintOp, &str)],
    ) -> Problem {
        Problem::new(
            variables
                .iter()
                .map(|(name, values)| (name.to_string(), values.to_vec()))
                .collect(),
            constraints
                .iter()
                .map(|(a, op, b)| (a.to_string(), *op, b.to_string()))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn identity_follows_the_working_domain() {
        let mut p = problem(&[("X", &[3, 1, 2])], &[]);
        assert_eq!(IdentityValueHeuristic.order_values(&p, 0), vec![3, 1, 2]);
        let _ = p.restrict_domain(0, |v| v != 1);
        assert_eq!(IdentityValueHeuristic.order_values(&p, 0), vec![3, 2]);
    }

    #[test]
    fn least_constraining_ranks_by_surviving_neighbour_options() {
        // X < Y: picking X=1 leaves Y two options, X=2 one, X=3 none.
        let p = problem(
            &[("X", &[1, 2, 3]), ("Y", &[1, 2, 3])],
            &[("X", ConstraintOp::LessThan, "Y")],
        );
        assert_eq!(
            LeastConstrainingValueHeuristic.order_values(&p, 0),
            vec![1, 2, 3]
        );
        let p = problem(
            &[("X", &[1, 2, 3]), ("Y", &[1, 2, 3])],
            &[("X", ConstraintOp::GreaterThan, "Y")],
        );
        assert_eq!(
            LeastConstrainingValueHeuristic.order_values(&p, 0),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn tied_scores_fall_back_to_ascending_values() {
        // X != Y removes exactly one option whichever value is picked.
        let p = problem(
            &[("X", &[3, 1, 2]), ("Y", &[1, 2, 3])],
            &[("X", ConstraintOp::NotEqual, "Y")],
        );
        assert_eq!(
            LeastConstrainingValueHeuristic.order_values(&p, 0),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn assigned_neighbours_are_ignored() {
        let mut p = problem(
            &[("X", &[2, 1]), ("Y", &[1, 2, 3])],
            &[("X", ConstraintOp::LessThan, "Y")],
        );
        p.assign(1, 3);
        assert_eq!(
            LeastConstrainingValueHeuristic.order_values(&p, 0),
            vec![1, 2]
        );
    }

    #[test]
    fn scores_count_only_the_pruned_neighbour_domain() {
        // Against Y's full domain the order would be 3, 2, 1; with Y pruned
        // to just 1, the values 2 and 3 tie and 1 scores zero.
        let mut p = problem(
            &[("X", &[1, 2, 3]), ("Y", &[1, 2, 3])],
            &[("X", ConstraintOp::GreaterThan, "Y")],
        );
        let _ = p.restrict_domain(1, |v| v == 1);
        assert_eq!(
            LeastConstrainingValueHeuristic.order_values(&p, 0),
            vec![2, 3, 1]
        );
    }
}
