use super::{name, typemap::TypeMap};
use crate::{
    registry::{Enum, FieldType},
    schema::{
        self,
        db::{Column, Seed, Table, Type, UniqueConstraint},
    },
    Config, Error, Result,
};

use serde_json::Value;

/// Column holding the entry name
const KEY_COLUMN: &str = "key";

/// Column holding the entry value
const VALUE_COLUMN: &str = "value";

/// Compiles `enum_type` into its backing table: a serial `id`, the entry
/// name and the entry value, seeded with one row per entry in declaration
/// order.
pub(super) fn build(config: &Config, enum_type: &Enum) -> Result<Table> {
    config.validate()?;

    if enum_type.name.trim().is_empty() {
        return Err(Error::invalid_enum(&enum_type.name, "name cannot be empty"));
    }

    let types = TypeMap::new(config.use_big_serial);
    let value_ty = types.foreign(&enum_type.ty).ok_or_else(|| {
        Error::invalid_enum(
            &enum_type.name,
            format!("entry type `{}` is not a primitive", enum_type.ty.as_str()),
        )
    })?;

    let table_name = name::table_name(&enum_type.name);
    let mut table = Table::new(&config.schema, &table_name);

    table.columns = vec![
        Column::new("id", types.serial()).primary_key(true),
        Column::new(KEY_COLUMN, Type::Text).not_null(),
        Column::new(VALUE_COLUMN, value_ty).not_null(),
    ];

    let columns = vec![KEY_COLUMN.to_string()];
    table.unique_constraints.push(UniqueConstraint {
        name: name::unique_constraint_name(&table_name, &columns),
        table_name: table_name.clone(),
        columns,
    });

    let mut seed = Seed::new([KEY_COLUMN, VALUE_COLUMN]);
    for (key, value) in &enum_type.entries {
        check_entry(enum_type, key, value)?;
        seed.rows.push(vec![Value::String(key.clone()), value.clone()]);
    }
    table.seed = Some(seed);

    schema::verify([&table])?;

    tracing::debug!(
        table = %table_name,
        entries = enum_type.entries.len(),
        "compiled enum table"
    );

    Ok(table)
}

/// Entry values must be literals of the enum's entry type.
fn check_entry(enum_type: &Enum, key: &str, value: &Value) -> Result<()> {
    let fits = match &enum_type.ty {
        FieldType::AutoIncrement | FieldType::Integer => value.is_i64(),
        FieldType::Float => value.is_number(),
        FieldType::Boolean => value.is_boolean(),
        FieldType::UUID
        | FieldType::String
        | FieldType::Time
        | FieldType::Date
        | FieldType::Protected
        | FieldType::Sealed => value.is_string(),
        FieldType::Named(_) => false,
    };

    if fits {
        return Ok(());
    }

    Err(Error::invalid_enum(
        &enum_type.name,
        format!(
            "entry `{key}` has value `{value}`, expected {}",
            enum_type.ty.as_str()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn values_must_match_entry_type() {
        let status = Enum::new("OrderStatus", FieldType::Integer).entry("Open", 1);
        assert!(check_entry(&status, "Open", &json!(1)).is_ok());

        let err = check_entry(&status, "Open", &json!("1")).unwrap_err();
        assert!(err.is_invalid_enum());
        assert_eq!(
            err.to_string(),
            "invalid enum `OrderStatus`: entry `Open` has value `\"1\"`, expected Integer"
        );

        let rate = Enum::new("Rate", FieldType::Float);
        assert!(check_entry(&rate, "Half", &json!(0.5)).is_ok());
        assert!(check_entry(&rate, "One", &json!(1)).is_ok());
        assert!(check_entry(&rate, "None", &json!(null)).is_err());
    }
}
