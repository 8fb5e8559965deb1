//! Parsing of `NAME = <literal>` assignment lines.
//!
//! A literal is classified against three disjoint patterns (integer, float and
//! quoted string). Every pattern is evaluated, so a literal matching more than
//! one of them is reported instead of being resolved by priority.

// the "standard" regular expression package
use regex::Regex;
// so regular expressions don't have to be recompiled
use lazy_static::lazy_static;
// integers keep every digit (arbitrary_precision)
use serde_json::{Number, Value};
use std::fmt;

use crate::error::{ConfigvarsError, Result};

lazy_static! {
    static ref ASSIGNMENT: Regex = Regex::new(r"\A[A-Za-z_][A-Za-z0-9_]* ?= ?.+\z").unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"\A[A-Za-z_][A-Za-z0-9_]*").unwrap();
    static ref INTEGER: Regex = Regex::new(r"\A[-+]?[0-9]+\z").unwrap();
    static ref FLOAT: Regex = Regex::new(
        r"(?x)\A(?:
            [-+]?[0-9]+\.[0-9]*         # 'x.y' or 'x.'
            |[-+]?[0-9]*\.[0-9]+        # '.x'
            |[-+]?[0-9]+[Ee][-+]?[0-9]+ # 'xEy' or 'xey'
        )\z"
    )
    .unwrap();
    static ref QUOTED: Regex = Regex::new(r#"(?s)\A(?:".*"|'.*')\z"#).unwrap();
}

/// A typed value taken from the right-hand side of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(Number),
    Float(f64),
    Str(String),
}

impl Literal {
    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::Int(_) => LiteralKind::Int.name(),
            Literal::Float(_) => LiteralKind::Float.name(),
            Literal::Str(_) => LiteralKind::Str.name(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Int(i) => write!(f, "{}", i),
            // Debug keeps the decimal point on whole floats
            Literal::Float(x) => write!(f, "{:?}", x),
            Literal::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Value {
        match literal {
            Literal::Int(n) => Value::Number(n),
            Literal::Float(x) => Value::from(x),
            Literal::Str(s) => Value::String(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LiteralKind {
    Int,
    Float,
    Str,
}

impl LiteralKind {
    const ALL: [LiteralKind; 3] = [LiteralKind::Int, LiteralKind::Float, LiteralKind::Str];

    fn name(self) -> &'static str {
        match self {
            LiteralKind::Int => "int",
            LiteralKind::Float => "float",
            LiteralKind::Str => "str",
        }
    }

    fn matches(self, text: &str) -> bool {
        match self {
            LiteralKind::Int => INTEGER.is_match(text),
            LiteralKind::Float => FLOAT.is_match(text),
            LiteralKind::Str => QUOTED.is_match(text),
        }
    }

    fn convert(self, text: &str) -> Result<Literal> {
        let out_of_range = || ConfigvarsError::OutOfRange {
            literal: text.to_string(),
            type_name: self.name(),
        };
        match self {
            LiteralKind::Int => canonical_integer(text)
                .parse::<Number>()
                .map(Literal::Int)
                .map_err(|_| out_of_range()),
            LiteralKind::Float => match text.parse::<f64>() {
                Ok(x) if x.is_finite() => Ok(Literal::Float(x)),
                _ => Err(out_of_range()),
            },
            // both quote characters are single bytes
            LiteralKind::Str => Ok(Literal::Str(text[1..text.len() - 1].to_string())),
        }
    }
}

/// Rewrites an integer literal as a JSON number: no '+' sign, no leading zeros.
fn canonical_integer(text: &str) -> String {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits = digits.trim_start_matches('0');
    match (negative, digits.is_empty()) {
        (_, true) => "0".to_string(),
        (true, false) => format!("-{}", digits),
        (false, false) => digits.to_string(),
    }
}

fn allowed_types() -> String {
    LiteralKind::ALL.iter().map(|k| k.name()).collect::<Vec<_>>().join(", ")
}

/// Parses a single literal, without the `NAME =` part.
pub fn parse_literal(text: &str) -> Result<Literal> {
    let matched: Vec<LiteralKind> = LiteralKind::ALL
        .iter()
        .copied()
        .filter(|kind| kind.matches(text))
        .collect();
    match matched.as_slice() {
        [] => Err(ConfigvarsError::LiteralType {
            literal: text.to_string(),
            allowed: allowed_types(),
        }),
        [kind] => kind.convert(text),
        many => Err(ConfigvarsError::Invariant(format!(
            "literal {:?} matches more than one type ({})",
            text,
            many.iter().map(|k| k.name()).collect::<Vec<_>>().join(", ")
        ))),
    }
}

/// Parses an assignment expression such as `PIN = 9858` or `SECRET='opiuasf'`
/// into the variable name and its typed value.
///
/// At most one space is accepted on either side of `=`. Everything after the
/// first `=` is the literal, once leading `=` and space characters are removed.
pub fn parse_assignment(line: &str) -> Result<(String, Literal)> {
    if !ASSIGNMENT.is_match(line) {
        return Err(ConfigvarsError::Syntax { line: line.to_string() });
    }
    let (name, eq) = match (IDENTIFIER.find(line), line.find('=')) {
        (Some(name), Some(eq)) => (name.as_str(), eq),
        _ => {
            return Err(ConfigvarsError::Invariant(format!(
                "assignment {:?} has no name or '='",
                line
            )))
        }
    };
    let text = line[eq..].trim_start_matches(['=', ' ']);
    let value = parse_literal(text)?;
    Ok((name.to_string(), value))
}
