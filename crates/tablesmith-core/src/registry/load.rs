use super::{Enum, Model, Registry};
use crate::{Error, Result};

use serde::de::DeserializeOwned;
use std::{
    fs,
    path::{Path, PathBuf},
};

const MODELS_DIR: &str = "models";
const ENUMS_DIR: &str = "enums";

impl Registry {
    /// Loads a registry from a directory laid out as
    ///
    /// ```text
    /// <root>/models/*.json
    /// <root>/enums/*.json
    /// ```
    ///
    /// Either sub-directory may be absent. A document that cannot be decoded
    /// fails the load with a malformed-entry error naming the file.
    pub fn load_dir(root: impl AsRef<Path>) -> Result<Registry> {
        let root = root.as_ref();
        let mut registry = Registry::new();

        for path in json_files(&root.join(ENUMS_DIR))? {
            let enum_type: Enum = read_entry(&path)?;
            tracing::debug!(name = %enum_type.name, path = %path.display(), "loaded enum");
            registry.insert_enum(enum_type);
        }

        for path in json_files(&root.join(MODELS_DIR))? {
            let model: Model = read_entry(&path)?;
            tracing::debug!(name = %model.name, path = %path.display(), "loaded model");
            registry.insert_model(model);
        }

        Ok(registry)
    }
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(vec![]);
    }

    let mut paths = vec![];
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

fn read_entry<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|err| Error::from(err).context(Error::malformed_entry(path.display().to_string())))
}
