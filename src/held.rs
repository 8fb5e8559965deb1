//! Variable sets kept around after loading, so single variables can be looked
//! up by name without knowing which set they came from.

use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigvarsError, Result};
use crate::frozen::FrozenVars;

/// An ordered stack of held variable sets, searched most recent first.
///
/// Not synchronized: share it behind a lock (as [`crate::api::hold`] does) or
/// pass it around explicitly.
#[derive(Debug, Clone, Default)]
pub struct HeldVars {
    sets: Vec<FrozenVars>,
}

impl HeldVars {
    pub fn new() -> Self {
        Self { sets: Vec::new() }
    }

    /// Puts `vars` in front of every set held so far, or makes it the only
    /// held set when `reset` is true.
    pub fn hold(&mut self, vars: FrozenVars, reset: bool) {
        if reset {
            self.sets.clear();
        }
        self.sets.insert(0, vars);
    }

    /// The value of `name` in the most recently held set defining it.
    pub fn lookup(&self, name: &str) -> Result<&Value> {
        let found = self.sets.iter().find_map(|vars| vars.get(name).ok());
        debug!(name, found = found.is_some(), "held lookup");
        found.ok_or_else(|| ConfigvarsError::NotHeld(name.to_string()))
    }

    /// Every held variable name, most recent set first. A name shadowed by a
    /// newer set shows up once per set defining it.
    pub fn names(&self) -> Vec<String> {
        self.sets
            .iter()
            .flat_map(|vars| vars.keys().map(str::to_string))
            .collect()
    }

    pub fn sets(&self) -> &[FrozenVars] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn clear(&mut self) {
        self.sets.clear();
    }
}
