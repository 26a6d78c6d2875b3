use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use apigen_core::{Client, GeneratorOptions};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Reads the raw IR emitted by the parser.
pub fn load_client(path: &Path) -> Result<Client> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading input file {}", path.display()))?;
    let client: Client = from_json(&content)
        .with_context(|| format!("parsing input file {}", path.display()))?;
    debug!(
        models = client.models.len(),
        services = client.services.len(),
        schemas = client.schemas.len(),
        "loaded client"
    );
    Ok(client)
}

/// Reads generator options from a YAML (`.yaml`, `.yml`) or JSON file.
pub fn load_options(path: &Path) -> Result<GeneratorOptions> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    parse_options(&content, is_yaml(path))
        .with_context(|| format!("parsing config file {}", path.display()))
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| matches!(extension, "yaml" | "yml"))
}

fn parse_options(content: &str, yaml: bool) -> Result<GeneratorOptions> {
    if yaml {
        let options = serde_saphyr::from_str(content)?;
        return Ok(options);
    }
    from_json(content)
}

/// Deserializes JSON, reporting the path of the offending field on error.
fn from_json<T: DeserializeOwned>(content: &str) -> Result<T> {
    let deserializer = &mut serde_json::Deserializer::from_str(content);
    let value = serde_path_to_error::deserialize(deserializer)?;
    Ok(value)
}
