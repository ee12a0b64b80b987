use super::{
    name,
    relation::Participant,
    table::foreign_key_indices,
    typemap::TypeMap,
};
use crate::{
    registry::Model,
    schema::{
        db::{Column, Table, UniqueConstraint},
        Name,
    },
    Config, Result,
};

/// Builds the join table for a to-many relation from `owner` to `target`.
///
/// Participants are ordered by name before anything is derived, so the
/// table is identical whichever side declared the relation. In a self
/// relation the second column is prefixed with `related_`.
pub(super) fn build(
    config: &Config,
    types: &TypeMap,
    owner: &Model,
    target: &Participant<'_>,
) -> Result<Table> {
    let owner = Participant::new(owner)?;

    let (first, second) = if Name::new(owner.name()) <= Name::new(target.name()) {
        (owner, *target)
    } else {
        (*target, owner)
    };

    let table_name = name::junction_table_name(first.name(), second.name());

    let first_column = first.foreign_key_column();
    let mut second_column = second.foreign_key_column();
    if first_column == second_column {
        second_column = format!("related_{second_column}");
    }

    let mut table = Table::new(&config.schema, &table_name);

    table.columns = vec![
        Column::new("id", types.serial()).primary_key(true),
        Column::new(&first_column, first.foreign_type(types)?).not_null(),
        Column::new(&second_column, second.foreign_type(types)?).not_null(),
    ];

    table.foreign_keys = vec![
        first.reference(&config.schema, &table_name, first_column.clone()),
        second.reference(&config.schema, &table_name, second_column.clone()),
    ];

    let columns = vec![first_column, second_column];
    table.unique_constraints.push(UniqueConstraint {
        name: name::unique_constraint_name(&table_name, &columns),
        table_name: table_name.clone(),
        columns,
    });

    table.indices = foreign_key_indices(&table_name, &table.foreign_keys);

    tracing::debug!(
        table = %table_name,
        owner = %owner.name(),
        target = %target.name(),
        "synthesized junction table"
    );

    Ok(table)
}
