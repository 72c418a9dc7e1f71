//! Declared operator sets and length-class matching.

use std::fmt;

/// Candidate operator lengths in bytes, widest first.
pub const CANDIDATE_LENGTHS: [usize; 4] = [6, 4, 2, 1];

/// Ordered set of operator tokens a filter field recognizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorSet {
    operators: Vec<String>,
}

impl OperatorSet {
    /// Build a set from declared operators, dropping empty tokens.
    pub fn new<I, S>(operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            operators: operators
                .into_iter()
                .map(Into::<String>::into)
                .filter(|op| !op.is_empty())
                .collect(),
        }
    }

    /// Parse an operator list such as `>=,==,<` split on `separator`.
    pub fn parse(list: &str, separator: &str) -> Self {
        if separator.is_empty() {
            return Self::new([list]);
        }
        Self::new(list.split(separator))
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.operators.iter().map(String::as_str)
    }

    /// Find the operator starting at the head of `rest`.
    ///
    /// Length classes are tried widest first; inside a class the first
    /// declared operator wins.
    pub fn match_prefix(&self, rest: &str) -> Option<&str> {
        for len in CANDIDATE_LENGTHS {
            let Some(candidate) = rest.get(..len) else {
                continue;
            };
            if let Some(op) = self.iter().find(|op| *op == candidate) {
                return Some(op);
            }
        }
        None
    }
}

impl<S: Into<String>> FromIterator<S> for OperatorSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for OperatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operators.join(","))
    }
}
