use crate::{schema::db::Table, Result};

/// Destination for compiled tables.
///
/// The compiler produces schema objects only; rendering and storing them is
/// up to the writer.
pub trait TableWriter {
    fn write_table(&mut self, table: &Table) -> Result<()>;

    /// Writes `tables` in order, stopping at the first error.
    fn write_all<'a, I>(&mut self, tables: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Table>,
        Self: Sized,
    {
        for table in tables {
            self.write_table(table)?;
        }
        Ok(())
    }
}

/// Collects tables in memory.
impl TableWriter for Vec<Table> {
    fn write_table(&mut self, table: &Table) -> Result<()> {
        self.push(table.clone());
        Ok(())
    }
}
