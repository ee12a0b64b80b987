use super::{Comma, Formatter, Ident, Period, ToSql};

use serde_json::Value;
use tablesmith_core::schema::db::{Seed, Table};

/// `INSERT` of a table's seed rows, one row per line
pub(super) struct InsertSeed<'a> {
    pub(super) table: &'a Table,
    pub(super) seed: &'a Seed,
}

/// A JSON value as a SQL literal
struct Literal<'a>(&'a Value);

impl ToSql for InsertSeed<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table_name = Period([Ident(&self.table.schema), Ident(&self.table.name)]);
        let columns = Comma(self.seed.columns.iter().map(Ident));

        fmt!(f, "INSERT INTO " table_name " (" columns ") VALUES");

        let mut s = "\n    ";
        for row in &self.seed.rows {
            let values = Comma(row.iter().map(Literal));
            fmt!(f, s "(" values ")");
            s = ",\n    ";
        }

        if f.serializer.if_not_exists {
            fmt!(f, "\nON CONFLICT DO NOTHING");
        }
    }
}

impl ToSql for Literal<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self.0 {
            Value::Null => f.dst.push_str("NULL"),
            Value::Bool(true) => f.dst.push_str("TRUE"),
            Value::Bool(false) => f.dst.push_str("FALSE"),
            Value::Number(number) => f.dst.push_str(&number.to_string()),
            Value::String(text) => quoted(text, f),
            other => quoted(&other.to_string(), f),
        }
    }
}

fn quoted(text: &str, f: &mut Formatter<'_>) {
    f.dst.push('\'');
    for c in text.chars() {
        if c == '\'' {
            f.dst.push('\'');
        }
        f.dst.push(c);
    }
    f.dst.push('\'');
}
