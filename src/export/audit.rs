//! Checking exported text against the vocabulary and adjacency rules.

use crate::core::{Constraints, ParseError, Scramble, Violation};
use std::fmt;

/// What went wrong on one line.
#[derive(Clone, Debug, PartialEq)]
pub enum Problem {
    /// The line holds a token outside the move vocabulary
    Parse(ParseError),
    /// Two adjacent moves break an active rule
    Adjacency(Violation),
}

/// A problem and the 1-based line it was found on.
#[derive(Clone, Debug, PartialEq)]
pub struct LineProblem {
    pub line: usize,
    pub problem: Problem,
}

impl fmt::Display for LineProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            Problem::Parse(err) => write!(f, "line {}: {err}", self.line),
            Problem::Adjacency(violation) => write!(f, "line {}: {violation}", self.line),
        }
    }
}

/// Outcome of checking a block of text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Audit {
    /// Non-blank lines examined
    pub checked: usize,
    pub problems: Vec<LineProblem>,
}

impl Audit {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Check every non-blank line of `text` as one scramble.
///
/// # Example
///
/// ```rust
/// use scrambler::core::Constraints;
/// use scrambler::export::audit_text;
///
/// let audit = audit_text("R U F2\nR R'\n\nL X\n", &Constraints::default());
///
/// assert_eq!(audit.checked, 3);
/// assert_eq!(audit.problems.len(), 2);
/// assert_eq!(audit.problems[0].line, 2);
/// assert_eq!(audit.problems[1].line, 4);
/// ```
pub fn audit_text(text: &str, constraints: &Constraints) -> Audit {
    let mut audit = Audit::default();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        audit.checked += 1;
        let line_no = index + 1;

        match line.parse::<Scramble>() {
            Ok(scramble) => {
                audit
                    .problems
                    .extend(scramble.violations(constraints).into_iter().map(|violation| {
                        LineProblem {
                            line: line_no,
                            problem: Problem::Adjacency(violation),
                        }
                    }));
            }
            Err(err) => audit.problems.push(LineProblem {
                line: line_no,
                problem: Problem::Parse(err),
            }),
        }
    }

    tracing::debug!(
        checked = audit.checked,
        problems = audit.problems.len(),
        "audited scramble text"
    );
    audit
}
