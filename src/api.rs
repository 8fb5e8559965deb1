//! Loading stored variables into programs.
//!
//! * [`load`] / [`load_with`] return a read-only [`FrozenVars`].
//! * [`populate`] copies all or selected variables into a caller record
//!   implementing [`VarTarget`].
//! * [`load_as`] deserializes the stored variables straight into a struct.
//! * [`hold`] keeps a loaded set in a process-wide list consulted by [`held`].

use lazy_static::lazy_static;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};
use tracing::info;

use crate::error::{ConfigvarsError, Result};
use crate::frozen::FrozenVars;
use crate::held::HeldVars;
use crate::settings::Settings;
use crate::storage;

lazy_static! {
    static ref HELD: Mutex<HeldVars> = Mutex::new(HeldVars::new());
}

/// Which variables [`populate`] copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Only(Vec<String>),
}

impl Selection {
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selection::Only(names.into_iter().map(Into::into).collect())
    }
}

/// A record that loaded variables can be written into.
pub trait VarTarget {
    fn set_var(&mut self, name: &str, value: &Value) -> Result<()>;
}

impl VarTarget for Map<String, Value> {
    fn set_var(&mut self, name: &str, value: &Value) -> Result<()> {
        self.insert(name.to_string(), value.clone());
        Ok(())
    }
}

impl VarTarget for HashMap<String, Value> {
    fn set_var(&mut self, name: &str, value: &Value) -> Result<()> {
        self.insert(name.to_string(), value.clone());
        Ok(())
    }
}

impl VarTarget for BTreeMap<String, Value> {
    fn set_var(&mut self, name: &str, value: &Value) -> Result<()> {
        self.insert(name.to_string(), value.clone());
        Ok(())
    }
}

/// Loads the variables for `name` using the settings from [`Settings::load`].
pub fn load(name: &str) -> Result<FrozenVars> {
    load_with(name, &Settings::load()?)
}

pub fn load_with(name: &str, settings: &Settings) -> Result<FrozenVars> {
    Ok(FrozenVars::new(storage::load(name, settings)?))
}

/// Deserializes the variables for `name` into `T`.
pub fn load_as<T: DeserializeOwned>(name: &str, settings: &Settings) -> Result<T> {
    let vars = storage::load(name, settings)?;
    Ok(serde_json::from_value(Value::Object(vars))?)
}

/// Copies the selected variables for `name` into `target`.
///
/// Every requested name is checked before anything is written, so a missing
/// variable leaves `target` untouched.
pub fn populate<T: VarTarget + ?Sized>(
    name: &str,
    selection: &Selection,
    target: &mut T,
    settings: &Settings,
) -> Result<()> {
    let vars = load_with(name, settings)?;
    let picked: Vec<(&str, &Value)> = match selection {
        Selection::All => vars.iter().map(|(k, v)| (k.as_str(), v)).collect(),
        Selection::Only(wanted) => wanted
            .iter()
            .map(|var| match vars.get(var) {
                Ok(value) => Ok((var.as_str(), value)),
                Err(_) => Err(ConfigvarsError::VarNotFound {
                    var: var.clone(),
                    name: name.to_string(),
                }),
            })
            .collect::<Result<_>>()?,
    };
    for (var, value) in picked {
        target.set_var(var, value)?;
    }
    Ok(())
}

fn held_vars() -> Result<MutexGuard<'static, HeldVars>> {
    HELD.lock().map_err(|e| ConfigvarsError::Lock(e.to_string()))
}

/// Loads the variables for `name` and holds them for [`held`] lookups.
pub fn hold(name: &str, reset: bool) -> Result<()> {
    hold_with(name, reset, &Settings::load()?)
}

pub fn hold_with(name: &str, reset: bool, settings: &Settings) -> Result<()> {
    let vars = load_with(name, settings)?;
    let mut held = held_vars()?;
    held.hold(vars, reset);
    info!(name, reset, held = held.len(), "holding variables");
    Ok(())
}

/// Looks `var` up across held sets, most recently held first.
pub fn held(var: &str) -> Result<Value> {
    held_vars()?.lookup(var).cloned()
}

pub fn held_names() -> Result<Vec<String>> {
    Ok(held_vars()?.names())
}

/// Drops every held set.
pub fn release_all() -> Result<()> {
    held_vars()?.clear();
    Ok(())
}
