//! Variables gathered from assignment lines, ready to be stored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::literal::{parse_assignment, Literal};

/// The ordered set of variables collected in one session.
///
/// Names are unique. Assigning an existing name replaces its value but keeps
/// the position it was first entered at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableSet {
    vars: Map<String, Value>,
}

impl VariableSet {
    pub fn new() -> Self {
        Self { vars: Map::new() }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.vars.insert(name.into(), value.into())
    }

    /// Parses an assignment line and records it, returning what was parsed.
    pub fn assign(&mut self, line: &str) -> Result<(String, Literal)> {
        let (name, literal) = parse_assignment(line)?;
        self.insert(name.clone(), literal.clone());
        Ok((name, literal))
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.vars
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.vars
    }
}

impl From<Map<String, Value>> for VariableSet {
    fn from(vars: Map<String, Value>) -> Self {
        Self { vars }
    }
}

impl FromIterator<(String, Literal)> for VariableSet {
    fn from_iter<I: IntoIterator<Item = (String, Literal)>>(iter: I) -> Self {
        let mut set = VariableSet::new();
        for (name, literal) in iter {
            set.insert(name, literal);
        }
        set
    }
}
