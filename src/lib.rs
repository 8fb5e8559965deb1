//! Configvars – configuration variables kept out of your shell profile.
//!
//! Local development secrets (mail credentials, API keys, ...) are usually set
//! as environment variables, which crowds shell startup files and makes it easy
//! to forget what each variable is for. Configvars stores project-specific
//! variables in one JSON file per *storage name* and loads them back as
//! read-only records.
//!
//! ## Modules
//! * [`literal`] – Parsing of `NAME = <literal>` lines into typed values
//!   (integer, float or quoted string).
//! * [`variables`] – The ordered [`variables::VariableSet`] collected in a session.
//! * [`frozen`] – [`frozen::FrozenVars`], the immutable record handed to programs.
//! * [`settings`] – Storage directory and file-name template, layered from
//!   defaults, a settings file and `CONFIGVARS_*` environment variables.
//! * [`storage`] – JSON store/load keyed by storage name.
//! * [`held`] – An explicit stack of held variable sets.
//! * [`api`] – `load`, `populate`, `load_as` and the process-wide `hold`.
//! * [`session`] – The interactive prompt loop used by the binary.
//!
//! ## Storing variables
//! From the command line:
//! ```text
//! $ configvars
//! storage name: flask.website
//! Enter the variables you want to store. An empty string will save the variables and exit.
//! >>> MAIL_USER = "user@example.com"
//! >>> MAIL_PASSWORD = "my_pass"
//! >>> PIN = 9574
//! >>>
//! ```
//!
//! ## Using stored variables
//! ```
//! use configvars::{storage, Settings, VariableSet};
//! use configvars::api::{self, Selection};
//! use serde_json::{json, Map, Value};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let settings = Settings::new(dir.path(), "{name}.json").unwrap();
//!
//! let mut vars = VariableSet::new();
//! vars.assign("MAIL_USER = 'user@example.com'").unwrap();
//! vars.assign("PIN = 9574").unwrap();
//! storage::store("flask.website", &vars, &settings).unwrap();
//!
//! let loaded = api::load_with("flask.website", &settings).unwrap();
//! assert_eq!(loaded.attr("PIN").unwrap(), &json!(9574));
//!
//! let mut config = Map::<String, Value>::new();
//! api::populate("flask.website", &Selection::only(["MAIL_USER"]), &mut config, &settings).unwrap();
//! assert_eq!(config["MAIL_USER"], "user@example.com");
//! ```

pub mod api;
pub mod error;
pub mod frozen;
pub mod held;
pub mod literal;
pub mod session;
pub mod settings;
pub mod storage;
pub mod variables;

pub use error::{ConfigvarsError, Result};
pub use frozen::FrozenVars;
pub use literal::{parse_assignment, Literal};
pub use settings::Settings;
pub use variables::VariableSet;
