//! Parsing of the two-file problem format.
//!
//! A `.var` file declares one variable per line as `NAME: value value ...`,
//! and a `.con` file declares one binary constraint per line as `A op B`,
//! where `op` is one of `=`, `!`, `>`, `<`. Blank lines are skipped in both
//! files. Parsing only checks line shape; semantic validation (duplicate
//! names, empty domains, unknown references) happens when the
//! [`Problem`] is built.

use std::{fs, path::Path};

use crate::{
    error::{Error, Result},
    solver::{constraint::ConstraintOp, problem::Problem},
};

/// Parses `.var` file contents into `(name, domain)` declarations, in file
/// order.
pub fn parse_variables(input: &str) -> Result<Vec<(String, Vec<i64>)>> {
    let mut variables = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }
        let Some((name, values)) = text.split_once(':') else {
            return Err(Error::MalformedVariableLine { line });
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::MalformedVariableLine { line });
        }
        let values = values
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|_| Error::InvalidValue {
                    line,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<i64>>>()?;
        variables.push((name.to_string(), values));
    }
    Ok(variables)
}

/// Parses `.con` file contents into `(name, operator, name)` declarations,
/// in file order.
pub fn parse_constraints(input: &str) -> Result<Vec<(String, ConstraintOp, String)>> {
    let mut constraints = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let &[main, symbol, compare] = tokens.as_slice() else {
            return Err(Error::MalformedConstraintLine { line });
        };
        let op = single_char(symbol)
            .and_then(ConstraintOp::from_symbol)
            .ok_or_else(|| Error::UnknownOperator {
                line,
                symbol: symbol.to_string(),
            })?;
        constraints.push((main.to_string(), op, compare.to_string()));
    }
    Ok(constraints)
}

/// Reads a `.var` and a `.con` file and builds the validated problem.
pub fn load_problem(var_path: impl AsRef<Path>, con_path: impl AsRef<Path>) -> Result<Problem> {
    let variables = parse_variables(&read(var_path.as_ref())?)?;
    let constraints = parse_constraints(&read(con_path.as_ref())?)?;
    Problem::new(variables, constraints)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Some(symbol),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_variable_declarations() {
        let parsed = parse_variables("A: 1 2 3\n\nB: 10 -4\nlong_name: 7\n").unwrap();
        assert_eq!(
            parsed,
            vec![
                ("A".to_string(), vec![1, 2, 3]),
                ("B".to_string(), vec![10, -4]),
                ("long_name".to_string(), vec![7]),
            ]
        );
    }

    #[test]
    fn variable_lines_need_a_colon() {
        let err = parse_variables("A: 1 2\nB 1 2\n").unwrap_err();
        assert!(matches!(err, Error::MalformedVariableLine { line: 2 }));
    }

    #[test]
    fn domain_values_must_be_integers() {
        let err = parse_variables("A: 1 two 3\n").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { line: 1, token } if token == "two"));
    }

    #[test]
    fn parses_constraint_declarations() {
        let parsed = parse_constraints("A > B\n\nB ! C\nC < A\nA = C\n").unwrap();
        assert_eq!(
            parsed,
            vec![
                ("A".to_string(), ConstraintOp::GreaterThan, "B".to_string()),
                ("B".to_string(), ConstraintOp::NotEqual, "C".to_string()),
                ("C".to_string(), ConstraintOp::LessThan, "A".to_string()),
                ("A".to_string(), ConstraintOp::Equal, "C".to_string()),
            ]
        );
    }

    #[test]
    fn constraint_lines_need_three_tokens() {
        let err = parse_constraints("A > B\nA >\n").unwrap_err();
        assert!(matches!(err, Error::MalformedConstraintLine { line: 2 }));
    }

    #[test]
    fn unknown_operators_are_rejected() {
        let err = parse_constraints("A >= B\n").unwrap_err();
        assert!(matches!(err, Error::UnknownOperator { line: 1, symbol } if symbol == ">="));

        let err = parse_constraints("A ? B\n").unwrap_err();
        assert!(matches!(err, Error::UnknownOperator { line: 1, symbol } if symbol == "?"));
    }

    #[test]
    fn missing_files_surface_the_path() {
        let err = load_problem("no_such.var", "no_such.con").unwrap_err();
        assert!(matches!(err, Error::Io { path, .. } if path.ends_with("no_such.var")));
    }

    #[test]
    fn loads_the_packaged_example_files() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata");
        let problem = load_problem(dir.join("ex1.var"), dir.join("ex1.con")).unwrap();
        assert_eq!(problem.variables().len(), 3);
        assert_eq!(problem.variable(2).name(), "Z");
        assert_eq!(problem.constraints().len(), 1);
    }

    #[test]
    fn loads_a_complete_problem_end_to_end() {
        let variables = parse_variables("X: 0 1 2\nY: 0 1 2\nZ: 1 2\n").unwrap();
        let constraints = parse_constraints("Y = Z\n").unwrap();
        let problem = Problem::new(variables, constraints).unwrap();
        assert_eq!(problem.variables().len(), 3);
        assert_eq!(problem.constraints().len(), 1);
        assert_eq!(problem.constraints_on(1), &[0]);
    }
}
