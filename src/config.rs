use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::AppError;
use crate::model::CourseCatalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub catalog: CatalogSource,
    pub output: OutputFormat,
}

/// Flag beats environment beats the built-in catalog. An empty env value
/// counts as unset.
pub fn resolve(
    catalog_flag: Option<PathBuf>,
    catalog_env: Option<String>,
    json: bool,
) -> RunConfig {
    let catalog = match (catalog_flag, catalog_env) {
        (Some(path), _) => CatalogSource::File(path),
        (None, Some(env)) if !env.trim().is_empty() => {
            info!(path = %env.trim(), "catalog taken from environment");
            CatalogSource::File(PathBuf::from(env.trim()))
        }
        _ => {
            debug!("no catalog configured, using built-in catalog");
            CatalogSource::Builtin
        }
    };
    RunConfig {
        catalog,
        output: if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
    }
}

impl RunConfig {
    pub fn load_catalog(&self) -> Result<CourseCatalog, AppError> {
        match &self.catalog {
            CatalogSource::Builtin => Ok(CourseCatalog::builtin()),
            CatalogSource::File(path) => CourseCatalog::load(path),
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
