#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Period};

mod ident;
use ident::{Ident, IndexColumn};

// Fragment serializers
mod column_def;
mod create_index;
mod create_table;
mod insert;
mod ty;

use create_index::CreateIndex;
use create_table::CreateTable;
use insert::InsertSeed;

use tablesmith_core::schema::db::{Index, Seed, Table};

/// Renders compiled tables as PostgreSQL DDL
#[derive(Debug, Clone)]
pub struct Serializer {
    /// Emit `IF NOT EXISTS` so the output can be applied more than once
    if_not_exists: bool,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn postgresql() -> Serializer {
        Serializer {
            if_not_exists: true,
        }
    }

    pub fn if_not_exists(mut self, if_not_exists: bool) -> Self {
        self.if_not_exists = if_not_exists;
        self
    }

    /// The `CREATE TABLE` statement followed by one `CREATE INDEX` statement
    /// per index and the seed `INSERT`, if any, each terminated by `;` and a
    /// newline.
    pub fn serialize_table(&self, table: &Table) -> String {
        let mut ret = self.create_table(table);
        ret.push_str(";\n");

        for index in &table.indices {
            ret.push_str(&self.create_index(table, index));
            ret.push_str(";\n");
        }

        if let Some(seed) = table.seed.as_ref().filter(|seed| !seed.is_empty()) {
            ret.push_str(&self.insert_seed(table, seed));
            ret.push_str(";\n");
        }

        ret
    }

    pub fn create_table(&self, table: &Table) -> String {
        self.render(CreateTable(table))
    }

    pub fn create_index(&self, table: &Table, index: &Index) -> String {
        self.render(CreateIndex { table, index })
    }

    pub fn insert_seed(&self, table: &Table, seed: &Seed) -> String {
        self.render(InsertSeed { table, seed })
    }

    fn render(&self, stmt: impl ToSql) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);
        ret
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::postgresql()
    }
}
