mod enum_table;

mod hooks;
pub use hooks::{EnumHooks, FailureHook, HookPhase, HookSet, Hooks, StartHook, SuccessHook};

mod junction;

pub mod name;

mod relation;

mod table;
pub use table::{ensure_named_foreign_keys, quote_reserved_column_names, RESERVED_WORDS};

mod typemap;
pub use typemap::TypeMap;

use crate::{
    config::CompileConfig,
    registry::{Enum, Model, Registry},
    schema::{self, db::Table},
    Config, Error, Result,
};

use std::collections::{BTreeMap, HashMap, HashSet};

/// Every table compiled from a registry, keyed by the enum or model that
/// produced it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Compiled {
    pub enums: BTreeMap<String, Vec<Table>>,
    pub models: BTreeMap<String, Vec<Table>>,
}

impl Compiled {
    /// Each distinct table once: enum tables first, then model and junction
    /// tables in model name order. A junction declared from both sides is
    /// yielded for the first side only.
    pub fn tables(&self) -> Vec<&Table> {
        let mut seen = HashSet::new();
        let mut tables = vec![];

        for table in self.enums.values().chain(self.models.values()).flatten() {
            if seen.insert(table.name.as_str()) {
                tables.push(table);
            }
        }

        tables
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty() && self.models.is_empty()
    }
}

/// Compiles one model into its table followed by its junction tables.
///
/// The start hook may replace the config and model before compilation. Any
/// error, including one returned by the start or success hook, is routed
/// through the failure hook, which receives the active config and a copy of
/// the model as the caller passed it.
pub fn compile_model(
    config: &CompileConfig,
    registry: &Registry,
    model: &Model,
) -> Result<Vec<Table>> {
    let hooks = &config.hooks;

    tracing::debug!(model = %model.name, schema = %config.config.schema, "compiling model");

    let (active_config, active_model) = match hooks.start(&config.config, model) {
        Ok(active) => active,
        Err(err) => return Err(fail(config, &config.config, model, err)),
    };

    let tables = match table::build(&active_config, registry, &active_model) {
        Ok(tables) => tables,
        Err(err) => return Err(fail(config, &active_config, model, err)),
    };

    let tables = match hooks.success(&active_model.name, tables) {
        Ok(tables) => tables,
        Err(err) => return Err(fail(config, &active_config, model, err)),
    };

    tracing::debug!(model = %model.name, tables = tables.len(), "compiled model");

    Ok(tables)
}

/// Compiles one enum into its seeded backing table.
///
/// Hooks behave as for [`compile_model`], using the enum hooks of `config`.
pub fn compile_enum(config: &CompileConfig, enum_type: &Enum) -> Result<Vec<Table>> {
    let hooks = &config.enum_hooks;

    tracing::debug!(enum_type = %enum_type.name, schema = %config.config.schema, "compiling enum");

    let (active_config, active_enum) = match hooks.start(&config.config, enum_type) {
        Ok(active) => active,
        Err(err) => return Err(fail_enum(config, &config.config, enum_type, err)),
    };

    let table = match enum_table::build(&active_config, &active_enum) {
        Ok(table) => table,
        Err(err) => return Err(fail_enum(config, &active_config, enum_type, err)),
    };

    match hooks.success(&active_enum.name, vec![table]) {
        Ok(tables) => Ok(tables),
        Err(err) => Err(fail_enum(config, &active_config, enum_type, err)),
    }
}

/// Compiles every enum and then every model in `registry`, each in sorted
/// name order.
///
/// The first item that fails aborts the batch and its error is returned.
/// Two items producing different tables under the same name fail the batch
/// with an `InvalidSchema` error.
pub fn compile_all(config: &CompileConfig, registry: &Registry) -> Result<Compiled> {
    let span = tracing::info_span!(
        "compile_all",
        enums = registry.enums().len(),
        models = registry.models().len()
    );
    let _enter = span.enter();

    let mut compiled = Compiled::default();

    for enum_type in registry.enums() {
        let tables = compile_enum(config, enum_type)?;
        compiled.enums.insert(enum_type.name.clone(), tables);
    }

    for model in registry.models() {
        let tables = compile_model(config, registry, model)?;
        compiled.models.insert(model.name.clone(), tables);
    }

    check_table_owners(&compiled)?;
    schema::verify(compiled.tables())?;

    tracing::info!(
        enums = compiled.enums.len(),
        models = compiled.models.len(),
        "compiled registry"
    );

    Ok(compiled)
}

/// Tables sharing a name must be identical, which only happens for a
/// junction declared from both of its sides.
fn check_table_owners(compiled: &Compiled) -> Result<()> {
    let mut owners: HashMap<&str, (&str, &Table)> = HashMap::new();

    let all = compiled.enums.iter().chain(&compiled.models);

    for (owner, tables) in all {
        for table in tables {
            match owners.get(table.name.as_str()) {
                Some((first, existing)) if *existing != table => {
                    return Err(Error::invalid_schema(format!(
                        "table `{}` is produced by both `{first}` and `{owner}`",
                        table.name
                    )));
                }
                Some(_) => {}
                None => {
                    owners.insert(table.name.as_str(), (owner.as_str(), table));
                }
            }
        }
    }

    Ok(())
}

fn fail(config: &CompileConfig, active: &Config, model: &Model, err: Error) -> Error {
    tracing::warn!(model = %model.name, error = %err, "model compilation failed");
    config.hooks.failure(active, model, err)
}

fn fail_enum(config: &CompileConfig, active: &Config, enum_type: &Enum, err: Error) -> Error {
    tracing::warn!(enum_type = %enum_type.name, error = %err, "enum compilation failed");
    config.enum_hooks.failure(active, enum_type, err)
}
