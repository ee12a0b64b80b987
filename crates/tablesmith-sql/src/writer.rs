use crate::Serializer;

use std::{
    fs,
    path::{Path, PathBuf},
};
use tablesmith_core::{schema::db::Table, Result, TableWriter};

/// Writes each table's DDL to `<dir>/<table>.sql`.
#[derive(Debug)]
pub struct SqlFileWriter {
    dir: PathBuf,
    serializer: Serializer,
}

impl SqlFileWriter {
    /// Creates the output directory if it does not exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> Result<SqlFileWriter> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        Ok(SqlFileWriter {
            dir,
            serializer: Serializer::postgresql(),
        })
    }

    pub fn serializer(mut self, serializer: Serializer) -> Self {
        self.serializer = serializer;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, table: &Table) -> PathBuf {
        self.dir.join(format!("{}.sql", table.name))
    }
}

impl TableWriter for SqlFileWriter {
    fn write_table(&mut self, table: &Table) -> Result<()> {
        let path = self.path_for(table);
        fs::write(&path, self.serializer.serialize_table(table))?;

        tracing::debug!(table = %table.name, path = %path.display(), "wrote table");
        Ok(())
    }
}
