//! Field option strings such as `name:f sep:| ops:>=,==,<`.

use winnow::ascii::multispace0;
use winnow::combinator::{alt, preceded};
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

use crate::filter::OperatorSet;

// Parser result with winnow's default context error.
type PResult<T> = Result<T, winnow::error::ErrMode<winnow::error::ContextError>>;

/// Options recognized in a field's option string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOptions {
    pub name: Option<String>,
    pub sep: Option<String>,
    pub ops: Option<String>,
}

impl FieldOptions {
    /// Parse an option string. Unknown keys and malformed tokens are ignored;
    /// the first occurrence of a key wins.
    pub fn parse(tag: &str) -> Self {
        let mut remaining = tag;
        let mut options = FieldOptions::default();

        while !remaining.trim_start().is_empty() {
            match lex_option(&mut remaining) {
                Ok(Some((key, value))) => options.set(key, value),
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!("Tags: stopped parsing '{}' at '{}': {:?}", tag, remaining, e);
                    break;
                }
            }
        }

        options
    }

    fn set(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        let slot = match key {
            "name" => &mut self.name,
            "sep" => &mut self.sep,
            "ops" => &mut self.ops,
            _ => return,
        };
        if slot.is_none() {
            *slot = Some(value.to_string());
        }
    }

    /// Declared operators, split on `separator`.
    pub fn operators(&self, separator: &str) -> OperatorSet {
        self.ops
            .as_deref()
            .map(|list| OperatorSet::parse(list, separator))
            .unwrap_or_default()
    }
}

/// `key:value`, where the value runs to the next whitespace.
fn lex_pair<'i>(input: &mut &'i str) -> PResult<(&'i str, &'i str)> {
    let key = take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)?;
    ':'.parse_next(input)?;
    let value = take_till(0.., |c: char| c.is_whitespace()).parse_next(input)?;
    Ok((key, value))
}

/// One whitespace-separated token; `None` for tokens that are not `key:value`.
fn lex_option<'i>(input: &mut &'i str) -> PResult<Option<(&'i str, &'i str)>> {
    preceded(
        multispace0,
        alt((
            lex_pair.map(Some),
            take_till(1.., |c: char| c.is_whitespace()).value(None),
        )),
    )
    .parse_next(input)
}
