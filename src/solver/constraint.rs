use std::fmt;

use crate::solver::problem::VariableId;

/// The four relations a binary constraint can impose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintOp {
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
}

impl ConstraintOp {
    /// Parses one of the operator symbols `=`, `!`, `>`, `<`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '=' => Some(ConstraintOp::Equal),
            '!' => Some(ConstraintOp::NotEqual),
            '>' => Some(ConstraintOp::GreaterThan),
            '<' => Some(ConstraintOp::LessThan),
            _ => None,
        }
    }

    /// The text symbol this operator is written as.
    pub fn symbol(&self) -> char {
        match self {
            ConstraintOp::Equal => '=',
            ConstraintOp::NotEqual => '!',
            ConstraintOp::GreaterThan => '>',
            ConstraintOp::LessThan => '<',
        }
    }

    /// Evaluates the relation with `main` on the left-hand side.
    pub fn evaluate(&self, main: i64, compare: i64) -> bool {
        match self {
            ConstraintOp::Equal => main == compare,
            ConstraintOp::NotEqual => main != compare,
            ConstraintOp::GreaterThan => main > compare,
            ConstraintOp::LessThan => main < compare,
        }
    }
}

impl fmt::Display for ConstraintOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A binary constraint between two distinct variables.
///
/// The `main`/`compare` slots record the order the constraint was declared
/// in (`main OP compare`). Equality and inequality are symmetric; for the
/// strict comparisons the relation seen from the `compare` side is the
/// inverse, which [`Constraint::allows`] resolves so that callers never
/// swap operators by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    pub main: VariableId,
    pub compare: VariableId,
    pub op: ConstraintOp,
}

impl Constraint {
    pub fn new(main: VariableId, compare: VariableId, op: ConstraintOp) -> Self {
        Self { main, compare, op }
    }

    /// True if `variable` is one of the two endpoints.
    pub fn involves(&self, variable: VariableId) -> bool {
        variable == self.main || variable == self.compare
    }

    /// The endpoint opposite `variable`, which must be an endpoint itself.
    pub fn other(&self, variable: VariableId) -> VariableId {
        if variable == self.main {
            self.compare
        } else {
            debug_assert_eq!(variable, self.compare);
            self.main
        }
    }

    /// Evaluates the relation with both endpoints at concrete values.
    pub fn holds(&self, main_value: i64, compare_value: i64) -> bool {
        self.op.evaluate(main_value, compare_value)
    }

    /// Evaluates the relation from `variable`'s side: `value` is the value
    /// under consideration for `variable`, `other_value` the concrete value
    /// of the opposite endpoint.
    pub fn allows(&self, variable: VariableId, value: i64, other_value: i64) -> bool {
        if variable == self.main {
            self.op.evaluate(value, other_value)
        } else {
            debug_assert_eq!(variable, self.compare);
            self.op.evaluate(other_value, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn operators_evaluate_their_relation() {
        assert!(ConstraintOp::Equal.evaluate(3, 3));
        assert!(!ConstraintOp::Equal.evaluate(3, 4));
        assert!(ConstraintOp::NotEqual.evaluate(3, 4));
        assert!(!ConstraintOp::NotEqual.evaluate(3, 3));
        assert!(ConstraintOp::GreaterThan.evaluate(4, 3));
        assert!(!ConstraintOp::GreaterThan.evaluate(3, 3));
        assert!(ConstraintOp::LessThan.evaluate(3, 4));
        assert!(!ConstraintOp::LessThan.evaluate(4, 3));
    }

    #[test]
    fn symbols_round_trip() {
        for op in [
            ConstraintOp::Equal,
            ConstraintOp::NotEqual,
            ConstraintOp::GreaterThan,
            ConstraintOp::LessThan,
        ] {
            assert_eq!(ConstraintOp::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(ConstraintOp::from_symbol('?'), None);
    }

    #[test]
    fn allows_resolves_the_compare_side() {
        // Declared as 0 > 1; seen from the compare side the relation is "less".
        let constraint = Constraint::new(0, 1, ConstraintOp::GreaterThan);
        assert!(constraint.allows(0, 5, 2));
        assert!(!constraint.allows(0, 2, 5));
        assert!(constraint.allows(1, 2, 5));
        assert!(!constraint.allows(1, 5, 2));
    }

    #[test]
    fn other_returns_the_opposite_endpoint() {
        let constraint = Constraint::new(3, 7, ConstraintOp::Equal);
        assert_eq!(constraint.other(3), 7);
        assert_eq!(constraint.other(7), 3);
        assert!(constraint.involves(3));
        assert!(constraint.involves(7));
        assert!(!constraint.involves(5));
    }
}
