use super::{junction, name, relation, typemap::TypeMap};
use crate::{
    registry::{Model, Registry, PRIMARY_IDENTIFIER},
    schema::{
        self,
        db::{Column, ForeignKey, Index, ReferentialAction, Table, Type},
    },
    Config, Error, Result,
};

/// Column names PostgreSQL would misread when they appear bare inside an
/// index column list.
pub const RESERVED_WORDS: &[&str] = &[
    "name", "type", "user", "case", "when", "then", "else", "end", "null", "true", "false",
    "select", "insert", "update", "delete", "from", "where", "group", "order", "limit", "offset",
    "join", "on", "using", "and", "or", "not", "between", "alter", "table", "index", "unique",
    "primary", "foreign", "key",
];

/// State for compiling one model into its table and junction tables.
struct BuildTables<'a> {
    config: &'a Config,

    registry: &'a Registry,

    types: TypeMap,

    model: &'a Model,

    /// The model's own table, built up in place
    table: Table,
}

/// Compiles `model` into its table followed by one junction table per
/// to-many relation, in sorted relation order.
///
/// Derived names that collide, such as a `CompanyID` field next to a
/// `Company` relation, fail verification and are reported as
/// `InvalidSchema`.
pub(super) fn build(config: &Config, registry: &Registry, model: &Model) -> Result<Vec<Table>> {
    config.validate()?;
    model.validate(registry)?;

    if model.primary_identifier().is_none() {
        return Err(Error::missing_primary_identifier(&model.name));
    }

    let mut build = BuildTables {
        config,
        registry,
        types: TypeMap::new(config.use_big_serial),
        model,
        table: Table::new(&config.schema, name::table_name(&model.name)),
    };

    build.build_field_columns()?;

    let relations = relation::resolve(registry, model)?;
    build.build_relation_columns(&relations)?;
    build.build_foreign_key_indices();

    add_unique_indices_from_identifiers(&mut build.table, model);
    quote_reserved_column_names(&mut build.table);
    ensure_named_foreign_keys(&mut build.table);

    let mut tables = vec![build.table];

    for resolved in relations.iter().filter(|r| r.ty.is_for() && r.ty.is_many()) {
        let mut table = junction::build(config, &build.types, model, &resolved.target)?;
        quote_reserved_column_names(&mut table);
        ensure_named_foreign_keys(&mut table);
        tables.push(table);
    }

    schema::verify(&tables)?;

    Ok(tables)
}

impl BuildTables<'_> {
    /// One column per field, sorted by field name. Enum-typed fields become
    /// an integer column referencing the enum's table.
    fn build_field_columns(&mut self) -> Result<()> {
        let primary = self
            .model
            .primary_identifier()
            .ok_or_else(|| Error::missing_primary_identifier(&self.model.name))?;

        for field_name in self.model.sorted_field_names() {
            let field = &self.model.fields[field_name];
            let primary_key = primary.contains(field_name);

            if let Some(ty) = self.types.column(&field.ty) {
                let column = Column::new(name::column_name(field_name), ty).primary_key(primary_key);
                self.table.columns.push(column);
                continue;
            }

            let enum_type = match field.ty.as_named() {
                Some(enum_name) => self.registry.enum_type(enum_name).map_err(|_| {
                    Error::unsupported_field_type(&self.model.name, field_name, enum_name)
                })?,
                None => {
                    return Err(Error::unsupported_field_type(
                        &self.model.name,
                        field_name,
                        field.ty.as_str(),
                    ))
                }
            };

            let column_name = name::enum_column_name(field_name);
            let columns = vec![column_name.clone()];

            self.table.foreign_keys.push(ForeignKey {
                schema: self.config.schema.clone(),
                name: name::foreign_key_name(&self.table.name, &columns),
                table_name: self.table.name.clone(),
                columns,
                ref_table_name: name::table_name(&enum_type.name),
                ref_columns: vec!["id".to_string()],
                on_delete: Some(ReferentialAction::Cascade),
                on_update: None,
            });

            self.table.columns.push(
                Column::new(column_name, Type::Integer)
                    .not_null()
                    .primary_key(primary_key),
            );
        }

        Ok(())
    }

    fn build_relation_columns(&mut self, relations: &[relation::Resolved<'_>]) -> Result<()> {
        for resolved in relations {
            if !(resolved.ty.is_for() && resolved.ty.is_one()) {
                continue;
            }

            let (column, fk) = relation::to_one(
                &self.config.schema,
                &self.table.name,
                &self.types,
                &resolved.target,
            )?;

            self.table.columns.push(column);
            self.table.foreign_keys.push(fk);
        }

        Ok(())
    }

    fn build_foreign_key_indices(&mut self) {
        self.table.indices = foreign_key_indices(&self.table.name, &self.table.foreign_keys);
    }
}

/// One non-unique index per foreign key column.
pub(super) fn foreign_key_indices(table: &str, foreign_keys: &[ForeignKey]) -> Vec<Index> {
    foreign_keys
        .iter()
        .flat_map(|fk| &fk.columns)
        .map(|column| Index {
            name: name::index_name(table, &[column]),
            table_name: table.to_string(),
            columns: vec![column.clone()],
            unique: false,
        })
        .collect()
}

/// Adds a unique index for every identifier other than the primary one,
/// sorted by identifier name. Identifiers over the same columns share one
/// index.
fn add_unique_indices_from_identifiers(table: &mut Table, model: &Model) {
    for identifier_name in model.sorted_identifier_names() {
        if identifier_name == PRIMARY_IDENTIFIER {
            continue;
        }

        let columns: Vec<_> = model.identifiers[identifier_name]
            .fields
            .iter()
            .map(|field| identifier_column_name(model, field))
            .collect();

        let index_name = name::unique_index_name(&table.name, &columns);
        if table
            .index(&index_name)
            .is_some_and(|index| index.columns == columns)
        {
            continue;
        }

        table.indices.push(Index {
            name: index_name,
            table_name: table.name.clone(),
            columns,
            unique: true,
        });
    }
}

/// The column a field compiles to: enum-typed fields carry the `_id`
/// suffix.
fn identifier_column_name(model: &Model, field: &str) -> String {
    match model.fields.get(field) {
        Some(f) if f.ty.as_named().is_some() => name::enum_column_name(field),
        _ => name::column_name(field),
    }
}

/// Double-quotes reserved words inside index column lists.
pub fn quote_reserved_column_names(table: &mut Table) {
    for index in &mut table.indices {
        for column in &mut index.columns {
            if RESERVED_WORDS.contains(&column.as_str()) {
                *column = format!("\"{column}\"");
            }
        }
    }
}

/// Names unnamed foreign keys and defaults their delete action to cascade.
pub fn ensure_named_foreign_keys(table: &mut Table) {
    for fk in &mut table.foreign_keys {
        if fk.name.is_empty() {
            fk.name = name::foreign_key_name(&table.name, &fk.columns);
        }

        if fk.on_delete.is_none() {
            fk.on_delete = Some(ReferentialAction::Cascade);
        }
    }
}
