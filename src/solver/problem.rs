use std::collections::HashSet;

use im::Vector;

use crate::{
    error::{Error, Result},
    solver::{
        constraint::{Constraint, ConstraintOp},
        domain::Domain,
    },
};

pub type VariableId = usize;
pub type ConstraintId = usize;

/// A named variable: its domain and its current assignment state.
#[derive(Debug, Clone)]
pub struct Variable {
    name: String,
    domain: Domain,
    assignment: Option<i64>,
}

impl Variable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn assignment(&self) -> Option<i64> {
        self.assignment
    }

    pub fn is_assigned(&self) -> bool {
        self.assignment.is_some()
    }
}

/// A full CSP instance: the variable set, the constraint set, and the
/// per-variable constraint adjacency.
///
/// The structure is immutable once built; during a search only assignment
/// state and working domains change, and those are the engine's to mutate
/// and restore. Variables and constraints keep their declaration order,
/// and `VariableId`/`ConstraintId` are indices into that order.
#[derive(Debug, Clone)]
pub struct Problem {
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    adjacency: Vec<Vec<ConstraintId>>,
}

impl Problem {
    /// Builds and validates an instance from parsed declarations.
    ///
    /// Rejected up front, before any search can run: duplicate variable
    /// names, empty domains, repeated values within a domain, constraints
    /// referencing undeclared names, and constraints relating a variable
    /// to itself.
    pub fn new(
        variables: Vec<(String, Vec<i64>)>,
        constraints: Vec<(String, ConstraintOp, String)>,
    ) -> Result<Self> {
        let mut seen_names: HashSet<String> = HashSet::new();
        let mut built_variables = Vec::with_capacity(variables.len());
        for (name, values) in variables {
            if !seen_names.insert(name.clone()) {
                return Err(Error::DuplicateVariable { name });
            }
            if values.is_empty() {
                return Err(Error::EmptyDomain { name });
            }
            let mut seen_values = HashSet::new();
            for &value in &values {
                if !seen_values.insert(value) {
                    return Err(Error::DuplicateValue { name, value });
                }
            }
            built_variables.push(Variable {
                name,
                domain: Domain::new(values),
                assignment: None,
            });
        }

        let lookup = |name: &str| -> Result<VariableId> {
            built_variables
                .iter()
                .position(|v| v.name == name)
                .ok_or_else(|| Error::UnknownVariable {
                    name: name.to_owned(),
                })
        };

        let mut built_constraints = Vec::with_capacity(constraints.len());
        let mut adjacency = vec![Vec::new(); built_variables.len()];
        for (main_name, op, compare_name) in constraints {
            let main = lookup(&main_name)?;
            let compare = lookup(&compare_name)?;
            if main == compare {
                return Err(Error::SelfConstraint { name: main_name });
            }
            let id: ConstraintId = built_constraints.len();
            built_constraints.push(Constraint::new(main, compare, op));
            adjacency[main].push(id);
            adjacency[compare].push(id);
        }

        Ok(Self {
            variables: built_variables,
            constraints: built_constraints,
            adjacency,
        })
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id]
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn constraint(&self, id: ConstraintId) -> &Constraint {
        &self.constraints[id]
    }

    /// Ids of the constraints `id` participates in, in declaration order.
    pub fn constraints_on(&self, id: VariableId) -> &[ConstraintId] {
        &self.adjacency[id]
    }

    /// Resolves a variable name to its id.
    pub fn lookup(&self, name: &str) -> Option<VariableId> {
        self.variables.iter().position(|v| v.name == name)
    }

    /// Ids of the currently unassigned variables, in declaration order.
    pub fn unassigned(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.variables
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_assigned())
            .map(|(id, _)| id)
    }

    pub fn is_complete(&self) -> bool {
        self.variables.iter().all(Variable::is_assigned)
    }

    pub fn assignment(&self, id: VariableId) -> Option<i64> {
        self.variables[id].assignment
    }

    pub fn assign(&mut self, id: VariableId, value: i64) {
        debug_assert!(self.variables[id].domain.contains(value));
        self.variables[id].assignment = Some(value);
    }

    pub fn unassign(&mut self, id: VariableId) {
        self.variables[id].assignment = None;
    }

    /// Narrows `id`'s working domain, returning the snapshot to restore on
    /// backtrack. See [`Domain::restrict`].
    pub fn restrict_domain(
        &mut self,
        id: VariableId,
        keep: impl Fn(i64) -> bool,
    ) -> Vector<i64> {
        self.variables[id].domain.restrict(keep)
    }

    pub fn restore_domain(&mut self, id: VariableId, snapshot: Vector<i64>) {
        self.variables[id].domain.restore(snapshot);
    }

    /// True if every constraint holds under the current assignments. Only
    /// meaningful for a complete assignment; a constraint with an
    /// unassigned endpoint counts as not holding.
    pub fn all_constraints_hold(&self) -> bool {
        self.constraints.iter().all(|c| {
            match (self.assignment(c.main), self.assignment(c.compare)) {
                (Some(main_value), Some(compare_value)) => c.holds(main_value, compare_value),
                _ => false,
            }
        })
    }

    /// `(name, value)` pairs for the given ids, skipping any unassigned.
    pub fn assigned_pairs(&self, ids: &[VariableId]) -> Vec<(String, i64)> {
        ids.iter()
            .filter_map(|&id| {
                let variable = &self.variables[id];
                variable.assignment.map(|v| (variable.name.clone(), v))
            })
            .collect()
    }

    /// The complete assignment in declaration order, if every variable is
    /// assigned.
    pub fn full_assignment(&self) -> Option<Vec<(String, i64)>> {
        self.variables
            .iter()
            .map(|v| v.assignment.map(|value| (v.name.clone(), value)))
            .collect()
    }

    /// Clears every assignment and resets every working domain, making the
    /// instance ready for a fresh search.
    pub fn reset(&mut self) {
        for variable in &mut self.variables {
            variable.assignment = None;
            variable.domain.reset();
        }
    }
}
