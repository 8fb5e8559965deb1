//! A read-only record of loaded variables.
//!
//! [`FrozenVars`] copies the mapping it is built from, so later changes to the
//! source never show through. Lookups come in two styles, [`FrozenVars::get`]
//! (subscript) and [`FrozenVars::attr`] (attribute), and each style has set and
//! delete operations that always fail with [`ConfigvarsError::Frozen`].
//!
//! ```
//! use configvars::FrozenVars;
//! use serde_json::json;
//!
//! let source = json!({"PIN": 9574, "MAIL_PASSWORD": "password1234"});
//! let vars = FrozenVars::try_from(&source).unwrap();
//! assert_eq!(vars.attr("PIN").unwrap(), &json!(9574));
//! assert_eq!(vars.get("MAIL_PASSWORD").unwrap(), "password1234");
//! assert!(vars.set_attr("MAIL_PASSWORD", json!("mypass")).is_err());
//! ```

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::{ConfigvarsError, Result};
use crate::variables::VariableSet;
use tracing::trace;

const TYPE_NAME: &str = "FrozenVars";

#[derive(Clone, PartialEq, Default)]
pub struct FrozenVars {
    data: Map<String, Value>,
}

impl FrozenVars {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// Subscript-style lookup.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.data
            .get(key)
            .ok_or_else(|| ConfigvarsError::KeyNotFound(key.to_string()))
    }

    /// Attribute-style lookup. Resolves against the same data as [`FrozenVars::get`].
    pub fn attr(&self, name: &str) -> Result<&Value> {
        trace!(name, "attribute lookup");
        self.get(name)
    }

    /// Looks up `key` and deserializes it into `T`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self.get(key)?;
        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn set_item(&self, _key: &str, _value: Value) -> Result<()> {
        frozen("cannot set item")
    }

    pub fn set_attr(&self, _name: &str, _value: Value) -> Result<()> {
        frozen("cannot set attribute")
    }

    pub fn del_item(&self, _key: &str) -> Result<()> {
        frozen("cannot delete item")
    }

    pub fn del_attr(&self, _name: &str) -> Result<()> {
        frozen("cannot delete attribute")
    }

    /// Keys in insertion order. Every call starts a fresh iterator.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.data.iter()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Compares against an arbitrary JSON value. Only objects are comparable.
    pub fn try_eq(&self, other: &Value) -> Result<bool> {
        match other {
            Value::Object(map) => Ok(self.data == *map),
            other => Err(ConfigvarsError::TypeMismatch {
                expected: TYPE_NAME,
                found: json_type_name(other),
            }),
        }
    }

    /// A mutable copy of the contents, detached from this record.
    pub fn to_map(&self) -> Map<String, Value> {
        self.data.clone()
    }
}

fn frozen(message: &'static str) -> Result<()> {
    Err(ConfigvarsError::Frozen(message))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<&Map<String, Value>> for FrozenVars {
    fn from(data: &Map<String, Value>) -> Self {
        Self::new(data.clone())
    }
}

impl From<Map<String, Value>> for FrozenVars {
    fn from(data: Map<String, Value>) -> Self {
        Self::new(data)
    }
}

impl From<&VariableSet> for FrozenVars {
    fn from(vars: &VariableSet) -> Self {
        Self::new(vars.as_map().clone())
    }
}

impl From<VariableSet> for FrozenVars {
    fn from(vars: VariableSet) -> Self {
        Self::new(vars.into_map())
    }
}

impl TryFrom<&Value> for FrozenVars {
    type Error = ConfigvarsError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::from(map)),
            other => Err(ConfigvarsError::TypeMismatch {
                expected: TYPE_NAME,
                found: json_type_name(other),
            }),
        }
    }
}

impl PartialEq<Map<String, Value>> for FrozenVars {
    fn eq(&self, other: &Map<String, Value>) -> bool {
        self.data == *other
    }
}

impl PartialEq<FrozenVars> for Map<String, Value> {
    fn eq(&self, other: &FrozenVars) -> bool {
        *self == other.data
    }
}

impl PartialEq<VariableSet> for FrozenVars {
    fn eq(&self, other: &VariableSet) -> bool {
        self.data == *other.as_map()
    }
}

impl PartialEq<HashMap<String, Value>> for FrozenVars {
    fn eq(&self, other: &HashMap<String, Value>) -> bool {
        self.data.len() == other.len()
            && self.data.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl PartialEq<BTreeMap<String, Value>> for FrozenVars {
    fn eq(&self, other: &BTreeMap<String, Value>) -> bool {
        self.data.len() == other.len()
            && self.data.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<'a> IntoIterator for &'a FrozenVars {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl fmt::Display for FrozenVars {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let contents = serde_json::to_string(&self.data).map_err(|_| fmt::Error)?;
        write!(f, "{}({})", TYPE_NAME, contents)
    }
}

impl fmt::Debug for FrozenVars {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
