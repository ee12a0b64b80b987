use super::{Comma, Formatter, Ident, Period, ToSql};

use tablesmith_core::schema::db::{ForeignKey, Table, UniqueConstraint};

/// `CREATE TABLE` for a table, including its key and constraint clauses
pub(super) struct CreateTable<'a>(pub(super) &'a Table);

struct PrimaryKey<'a>(&'a Table);

impl ToSql for CreateTable<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = self.0;
        let name = Period([Ident(&table.schema), Ident(&table.name)]);
        let if_not_exists = f.serializer.if_not_exists.then_some("IF NOT EXISTS ");

        fmt!(f, "CREATE TABLE " if_not_exists name " (");

        let mut s = "\n    ";
        for column in &table.columns {
            fmt!(f, s column);
            s = ",\n    ";
        }

        if table.primary_key_columns().next().is_some() {
            fmt!(f, s PrimaryKey(table));
        }

        for constraint in &table.unique_constraints {
            fmt!(f, s constraint);
        }

        for fk in &table.foreign_keys {
            fmt!(f, s fk);
        }

        fmt!(f, "\n)");
    }
}

impl ToSql for PrimaryKey<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = Comma(self.0.primary_key_columns().map(|column| Ident(&column.name)));
        fmt!(f, "PRIMARY KEY (" columns ")");
    }
}

impl ToSql for &UniqueConstraint {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Ident(&self.name);
        let columns = Comma(self.columns.iter().map(Ident));

        fmt!(f, "CONSTRAINT " name " UNIQUE (" columns ")");
    }
}

impl ToSql for &ForeignKey {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Ident(&self.name);
        let columns = Comma(self.columns.iter().map(Ident));
        let ref_table = Period([Ident(&self.schema), Ident(&self.ref_table_name)]);
        let ref_columns = Comma(self.ref_columns.iter().map(Ident));

        fmt!(
            f, "CONSTRAINT " name " FOREIGN KEY (" columns ") REFERENCES " ref_table " (" ref_columns ")"
        );

        if let Some(action) = self.on_delete {
            fmt!(f, " ON DELETE " action.as_sql());
        }

        if let Some(action) = self.on_update {
            fmt!(f, " ON UPDATE " action.as_sql());
        }
    }
}
