use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tablesmith_core::{compile_all, CompileConfig, Config, Registry, TableWriter};
use tablesmith_sql::SqlFileWriter;

#[derive(Parser, Debug)]
pub struct CompileCommand {
    /// Registry directory holding `models/` and `enums/`
    #[arg(short, long)]
    registry: PathBuf,

    /// Directory the SQL files are written to
    #[arg(short, long)]
    out: PathBuf,

    /// JSON config file. Defaults to `tablesmith.json` in the registry
    /// directory when that file exists.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Schema the tables are created in. Overrides the config file.
    #[arg(short, long)]
    schema: Option<String>,

    /// Use BIGSERIAL keys
    #[arg(long)]
    big_serial: bool,
}

const DEFAULT_CONFIG_FILE: &str = "tablesmith.json";

impl CompileCommand {
    pub fn run(self) -> Result<()> {
        let config = self.load_config()?;
        config.validate()?;

        let registry = Registry::load_dir(&self.registry)
            .with_context(|| format!("failed to load registry {}", self.registry.display()))?;

        tracing::info!(
            models = registry.models().len(),
            enums = registry.enums().len(),
            schema = %config.schema,
            "loaded registry"
        );

        let compiled = compile_all(&CompileConfig::new(config), &registry)?;

        let tables = compiled.tables();

        let mut writer = SqlFileWriter::new(&self.out)?;
        writer
            .write_all(tables.iter().copied())
            .with_context(|| format!("failed to write tables to {}", self.out.display()))?;

        tracing::info!(
            tables = tables.len(),
            out = %self.out.display(),
            "wrote schema"
        );

        Ok(())
    }

    fn load_config(&self) -> Result<Config> {
        let path = match &self.config {
            Some(path) => Some(path.clone()),
            None => Some(self.registry.join(DEFAULT_CONFIG_FILE)).filter(|path| path.is_file()),
        };

        let mut config = match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "reading config");
                Config::from_file(&path)?
            }
            None => Config::default(),
        };

        if let Some(schema) = &self.schema {
            config.schema = schema.clone();
        }

        if self.big_serial {
            config.use_big_serial = true;
        }

        Ok(config)
    }
}
