use super::{Formatter, ToSql};

use tablesmith_core::schema::db::Type;

impl ToSql for Type {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.as_sql());
    }
}
