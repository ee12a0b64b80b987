use crate::{
    compile::{EnumHooks, Hooks},
    Error, Result,
};

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Compilation settings shared by every model in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Database schema (namespace) every table is created in
    pub schema: String,

    /// Use `BIGSERIAL` / `BIGINT` for auto-increment keys and references to
    /// them instead of `SERIAL` / `INTEGER`
    #[serde(default)]
    pub use_big_serial: bool,
}

/// A [`Config`] together with the lifecycle hooks run around each model
/// and each enum.
#[derive(Debug, Default)]
pub struct CompileConfig {
    pub config: Config,
    pub hooks: Hooks,
    pub enum_hooks: EnumHooks,
}

impl Config {
    pub fn new(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            use_big_serial: false,
        }
    }

    pub fn use_big_serial(mut self, use_big_serial: bool) -> Self {
        self.use_big_serial = use_big_serial;
        self
    }

    /// Reads a config from a JSON document.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|err| Error::from(err).context(Error::malformed_entry(path.display().to_string())))
    }

    pub fn validate(&self) -> Result<()> {
        if self.schema.trim().is_empty() {
            return Err(Error::config_invalid("schema cannot be empty"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("public")
    }
}

impl CompileConfig {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            hooks: Hooks::default(),
            enum_hooks: EnumHooks::default(),
        }
    }

    pub fn hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn enum_hooks(mut self, enum_hooks: EnumHooks) -> Self {
        self.enum_hooks = enum_hooks;
        self
    }
}

impl From<Config> for CompileConfig {
    fn from(config: Config) -> Self {
        Self::new(config)
    }
}
