use std::fmt;

use serde::Serialize;

/// Number of branch visits recorded before a search is cut off.
pub const DEFAULT_VISIT_LIMIT: usize = 30;

/// How a recorded branch visit ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Failure,
    Solution,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "failure"),
            Outcome::Solution => write!(f, "solution"),
        }
    }
}

/// One completed branch visit: the assignment path at the moment the branch
/// was judged, in assignment order, plus the outcome.
///
/// Entries are never mutated once recorded. The rendered form is the
/// assignment path as `name=value` pairs, comma-separated, followed by the
/// outcome word; line numbering is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    pub assignment: Vec<(String, i64)>,
    pub outcome: Outcome,
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.assignment.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        if !self.assignment.is_empty() {
            write!(f, " ")?;
        }
        write!(f, "{}", self.outcome)
    }
}

/// Accumulates the bounded trace of a search.
///
/// Recording stops once the visit limit is reached or a solution entry has
/// been recorded, whichever comes first; later calls are no-ops. The
/// recorder is the sole owner of its entries until the search hands them
/// over in the final report.
#[derive(Debug)]
pub struct TraceRecorder {
    entries: Vec<TraceEntry>,
    limit: usize,
    solution_recorded: bool,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_VISIT_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
            solution_recorded: false,
        }
    }

    /// Appends one branch-visit entry unless the trace is already sealed.
    pub fn record(&mut self, assignment: Vec<(String, i64)>, outcome: Outcome) {
        if self.is_sealed() {
            return;
        }
        self.entries.push(TraceEntry {
            assignment,
            outcome,
        });
        if outcome == Outcome::Solution {
            self.solution_recorded = true;
        }
    }

    /// True once no further entries will be accepted.
    pub fn is_sealed(&self) -> bool {
        self.solution_recorded || self.entries.len() >= self.limit
    }

    /// True when the trace was cut off by the visit limit rather than by a
    /// solution. Pending search frames must unwind without touching state
    /// once this holds.
    pub fn is_budget_exhausted(&self) -> bool {
        !self.solution_recorded && self.entries.len() >= self.limit
    }

    pub fn solution_recorded(&self) -> bool {
        self.solution_recorded
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TraceEntry> {
        self.entries
    }
}

impl Default for TraceRecorder {
    fn default() -> Self {
        Self::new()
    }
}
