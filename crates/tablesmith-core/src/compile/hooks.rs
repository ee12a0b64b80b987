use crate::{
    registry::{Enum, Model},
    schema::db::Table,
    Config, Error, Result,
};

use std::{borrow::Cow, fmt};

/// Rewrites the config and the compiled item before compilation starts.
pub type StartHook<T = Model> = Box<dyn Fn(Config, T) -> Result<(Config, T)> + Send + Sync>;

/// Receives the compiled tables and returns the set handed to the caller.
pub type SuccessHook = Box<dyn Fn(Vec<Table>) -> Result<Vec<Table>> + Send + Sync>;

/// Receives the active config, a copy of the compiled item and the error
/// that ended compilation. The returned error is what the caller sees.
pub type FailureHook<T = Model> = Box<dyn Fn(Config, T, Error) -> Error + Send + Sync>;

/// Hooks run around each model.
pub type Hooks = HookSet<Model>;

/// Hooks run around each enum.
pub type EnumHooks = HookSet<Enum>;

/// The lifecycle phase a hook error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookPhase {
    Start,
    Success,
}

/// Optional callbacks run around the compilation of a single model or enum.
///
/// Every hook is independent; an unset hook passes its input through
/// unchanged. Hooks only ever see owned copies, never state the compiler
/// still holds.
pub struct HookSet<T> {
    on_start: Option<StartHook<T>>,
    on_success: Option<SuccessHook>,
    on_failure: Option<FailureHook<T>>,
}

impl<T: Clone> HookSet<T> {
    pub fn new() -> Self {
        Self {
            on_start: None,
            on_success: None,
            on_failure: None,
        }
    }

    pub fn on_start<F>(mut self, f: F) -> Self
    where
        F: Fn(Config, T) -> Result<(Config, T)> + Send + Sync + 'static,
    {
        self.on_start = Some(Box::new(f));
        self
    }

    pub fn on_success<F>(mut self, f: F) -> Self
    where
        F: Fn(Vec<Table>) -> Result<Vec<Table>> + Send + Sync + 'static,
    {
        self.on_success = Some(Box::new(f));
        self
    }

    pub fn on_failure<F>(mut self, f: F) -> Self
    where
        F: Fn(Config, T, Error) -> Error + Send + Sync + 'static,
    {
        self.on_failure = Some(Box::new(f));
        self
    }

    pub(super) fn start<'a>(
        &self,
        config: &'a Config,
        item: &'a T,
    ) -> Result<(Cow<'a, Config>, Cow<'a, T>)> {
        let Some(on_start) = &self.on_start else {
            return Ok((Cow::Borrowed(config), Cow::Borrowed(item)));
        };

        let (config, item) = on_start(config.clone(), item.clone())
            .map_err(|err| err.context(Error::hook_failed(HookPhase::Start)))?;

        Ok((Cow::Owned(config), Cow::Owned(item)))
    }

    /// The tables are moved into the hook, so the hook owns the only copy.
    pub(super) fn success(&self, name: &str, tables: Vec<Table>) -> Result<Vec<Table>> {
        let Some(on_success) = &self.on_success else {
            return Ok(tables);
        };

        if tables.is_empty() {
            return Err(Error::nil_table_set(name));
        }

        on_success(tables).map_err(|err| err.context(Error::hook_failed(HookPhase::Success)))
    }

    pub(super) fn failure(&self, config: &Config, item: &T, err: Error) -> Error {
        match &self.on_failure {
            Some(on_failure) => on_failure(config.clone(), item.clone(), err),
            None => err,
        }
    }
}

impl<T: Clone> Default for HookSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for HookSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_start", &self.on_start.is_some())
            .field("on_success", &self.on_success.is_some())
            .field("on_failure", &self.on_failure.is_some())
            .finish()
    }
}

impl fmt::Display for HookPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HookPhase::Start => "start",
            HookPhase::Success => "success",
        })
    }
}
