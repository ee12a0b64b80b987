use super::{Formatter, Ident, ToSql};

use tablesmith_core::schema::db::Column;

impl ToSql for &Column {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Ident(&self.name);
        let not_null = if self.not_null { " NOT NULL" } else { "" };

        fmt!(f, name " " self.ty not_null);

        if let Some(default) = &self.default {
            fmt!(f, " DEFAULT " default);
        }
    }
}
