use super::db::{ForeignKey, Table};
use crate::{Error, Result};

use std::collections::{HashMap, HashSet};

/// Checks the structural invariants of a compiled table set.
///
/// Table names must be unique across the set. Within each table, column
/// names and index and constraint names must be unique, and every column an
/// index, unique constraint, foreign key or seed lists must exist. A foreign
/// key's referenced columns must exist on the referenced table when that
/// table is part of the set; references to tables compiled elsewhere are not
/// checked.
pub fn verify<'a>(tables: impl IntoIterator<Item = &'a Table>) -> Result<()> {
    let tables: Vec<&Table> = tables.into_iter().collect();
    let mut by_name = HashMap::new();

    for &table in &tables {
        if by_name.insert(table.name.as_str(), table).is_some() {
            return Err(Error::invalid_schema(format!(
                "duplicate table `{}`",
                table.name
            )));
        }
    }

    for table in tables {
        Verify { table }.verify(&by_name)?;
    }

    Ok(())
}

struct Verify<'a> {
    table: &'a Table,
}

impl Verify<'_> {
    fn verify(&self, tables: &HashMap<&str, &Table>) -> Result<()> {
        self.verify_columns_are_unique()?;
        self.verify_names_are_unique()?;
        self.verify_index_columns_exist()?;
        self.verify_unique_constraint_columns_exist()?;
        self.verify_seed()?;

        for fk in &self.table.foreign_keys {
            self.verify_foreign_key(fk, tables)?;
        }

        Ok(())
    }

    fn verify_columns_are_unique(&self) -> Result<()> {
        let mut names = HashSet::new();

        for column in &self.table.columns {
            if !names.insert(&column.name) {
                return Err(Error::invalid_schema(format!(
                    "duplicate column `{}` on table `{}`",
                    column.name, self.table.name
                )));
            }
        }

        Ok(())
    }

    fn verify_names_are_unique(&self) -> Result<()> {
        let mut names = HashSet::new();

        let all_names = self
            .table
            .indices
            .iter()
            .map(|index| &index.name)
            .chain(self.table.unique_constraints.iter().map(|c| &c.name))
            .chain(self.table.foreign_keys.iter().map(|fk| &fk.name));

        for name in all_names {
            if !names.insert(name) {
                return Err(Error::invalid_schema(format!(
                    "duplicate index or constraint name `{name}` on table `{}`",
                    self.table.name
                )));
            }
        }

        Ok(())
    }

    fn verify_index_columns_exist(&self) -> Result<()> {
        for index in &self.table.indices {
            if index.columns.is_empty() {
                return Err(Error::invalid_schema(format!(
                    "index `{}` has no columns",
                    index.name
                )));
            }

            for column in &index.columns {
                self.verify_column(unquote(column), &index.name)?;
            }
        }

        Ok(())
    }

    fn verify_unique_constraint_columns_exist(&self) -> Result<()> {
        for constraint in &self.table.unique_constraints {
            for column in &constraint.columns {
                self.verify_column(column, &constraint.name)?;
            }
        }

        Ok(())
    }

    fn verify_seed(&self) -> Result<()> {
        let Some(seed) = &self.table.seed else {
            return Ok(());
        };

        for column in &seed.columns {
            self.verify_column(column, "seed")?;
        }

        if let Some(row) = seed.rows.iter().find(|row| row.len() != seed.columns.len()) {
            return Err(Error::invalid_schema(format!(
                "seed row of table `{}` has {} values for {} columns",
                self.table.name,
                row.len(),
                seed.columns.len()
            )));
        }

        Ok(())
    }

    fn verify_foreign_key(&self, fk: &ForeignKey, tables: &HashMap<&str, &Table>) -> Result<()> {
        if fk.name.is_empty() {
            return Err(Error::invalid_schema(format!(
                "unnamed foreign key on table `{}`",
                self.table.name
            )));
        }

        if fk.columns.is_empty() || fk.columns.len() != fk.ref_columns.len() {
            return Err(Error::invalid_schema(format!(
                "foreign key `{}` has {} columns but references {}",
                fk.name,
                fk.columns.len(),
                fk.ref_columns.len()
            )));
        }

        for column in &fk.columns {
            self.verify_column(column, &fk.name)?;
        }

        let Some(ref_table) = tables.get(fk.ref_table_name.as_str()) else {
            return Ok(());
        };

        for column in &fk.ref_columns {
            if ref_table.column(column).is_none() {
                return Err(Error::invalid_schema(format!(
                    "foreign key `{}` references missing column `{}.{column}`",
                    fk.name, ref_table.name
                )));
            }
        }

        Ok(())
    }

    fn verify_column(&self, column: &str, owner: &str) -> Result<()> {
        if self.table.column(column).is_none() {
            return Err(Error::invalid_schema(format!(
                "`{owner}` lists missing column `{}.{column}`",
                self.table.name
            )));
        }
        Ok(())
    }
}

fn unquote(name: &str) -> &str {
    name.strip_prefix('"')
        .and_then(|name| name.strip_suffix('"'))
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::db::{Column, Index, Seed, Type};

    fn table() -> Table {
        let mut table = Table::new("public", "orders");
        table.columns.push(Column::new("id", Type::Serial).primary_key(true));
        table.columns.push(Column::new("order", Type::Integer));
        table
    }

    #[test]
    fn quoted_index_columns_resolve() {
        let mut table = table();
        table.indices.push(Index {
            name: "idx_orders_order".to_string(),
            table_name: "orders".to_string(),
            columns: vec!["\"order\"".to_string()],
            unique: false,
        });

        assert!(verify(&[table]).is_ok());
    }

    #[test]
    fn duplicate_index_names_are_rejected() {
        let mut table = table();
        let index = Index {
            name: "idx_orders_id".to_string(),
            table_name: "orders".to_string(),
            columns: vec!["id".to_string()],
            unique: false,
        };
        table.indices.push(index.clone());
        table.indices.push(index);

        let err = verify(&[table]).unwrap_err();
        assert!(err.is_invalid_schema());
    }

    #[test]
    fn missing_referenced_column_is_rejected() {
        let mut table = table();
        table.foreign_keys.push(ForeignKey {
            schema: "public".to_string(),
            name: "fk_orders_order".to_string(),
            table_name: "orders".to_string(),
            columns: vec!["order".to_string()],
            ref_table_name: "orders".to_string(),
            ref_columns: vec!["uuid".to_string()],
            on_delete: None,
            on_update: None,
        });

        let err = verify(&[table]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid schema: foreign key `fk_orders_order` references missing column `orders.uuid`"
        );
    }

    #[test]
    fn duplicate_table_names_are_rejected() {
        let err = verify(&[table(), table()]).unwrap_err();
        assert_eq!(err.to_string(), "invalid schema: duplicate table `orders`");
    }

    #[test]
    fn seed_rows_match_columns() {
        let mut table = table();
        let mut seed = Seed::new(["order"]);
        seed.rows.push(vec![serde_json::json!(1)]);
        table.seed = Some(seed.clone());
        assert!(verify(&[table.clone()]).is_ok());

        seed.rows.push(vec![serde_json::json!(2), serde_json::json!(3)]);
        table.seed = Some(seed);
        let err = verify(&[table.clone()]).unwrap_err();
        assert!(err.is_invalid_schema());

        table.seed = Some(Seed::new(["status"]));
        let err = verify(&[table]).unwrap_err();
        assert!(err.is_invalid_schema());
    }
}
