use std::path::PathBuf;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Everything that can go wrong before a search starts.
///
/// The search itself is infallible: every branch decision is exact, so once
/// a [`crate::solver::problem::Problem`] has been built there is nothing
/// left to fail. Malformed input is rejected here, up front, and no trace
/// is produced for it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected `NAME: value value ...`")]
    MalformedVariableLine { line: usize },

    #[error("line {line}: expected `VAR OP VAR`")]
    MalformedConstraintLine { line: usize },

    #[error("line {line}: unknown operator `{symbol}` (expected one of = ! > <)")]
    UnknownOperator { line: usize, symbol: String },

    #[error("line {line}: `{token}` is not an integer")]
    InvalidValue { line: usize, token: String },

    #[error("variable `{name}` is declared more than once")]
    DuplicateVariable { name: String },

    #[error("variable `{name}` has an empty domain")]
    EmptyDomain { name: String },

    #[error("variable `{name}` lists the value {value} more than once")]
    DuplicateValue { name: String, value: i64 },

    #[error("constraint references undeclared variable `{name}`")]
    UnknownVariable { name: String },

    #[error("constraint relates variable `{name}` to itself")]
    SelfConstraint { name: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
