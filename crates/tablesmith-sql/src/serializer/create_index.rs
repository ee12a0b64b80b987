use super::{Comma, Formatter, Ident, IndexColumn, Period, ToSql};

use tablesmith_core::schema::db::{Index, Table};

/// `CREATE INDEX` for one of a table's indices
pub(super) struct CreateIndex<'a> {
    pub(super) table: &'a Table,
    pub(super) index: &'a Index,
}

impl ToSql for CreateIndex<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let index_name = Ident(&self.index.name);
        let table_name = Period([Ident(&self.table.schema), Ident(&self.table.name)]);
        let columns = Comma(self.index.columns.iter().map(IndexColumn));
        let unique = if self.index.unique { "UNIQUE " } else { "" };
        let if_not_exists = f.serializer.if_not_exists.then_some("IF NOT EXISTS ");

        fmt!(
            f, "CREATE " unique "INDEX " if_not_exists index_name " ON " table_name " (" columns ")"
        );
    }
}
