// Contains the primary public loading functions for stale_policy.

use std::{
  env,
  fs::File,
  io,
  path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
  config::{
    processed::{process_raw_document, PolicySet},
    raw::DocumentRaw,
  },
  error::{Error, Result},
};

const DEFAULT_CONFIG_BASE_NAME: &str = "stale_policies";
const DEFAULT_CONFIG_EXTENSION: &str = "yaml";

/// Finds the configuration file based on common patterns and an optional environment suffix.
///
/// `stale_policies.<env>.yaml` is preferred over `stale_policies.yaml` when an
/// environment is given, either as an argument or via `STALE_BOT_ENV` /
/// `APP_ENV`.
pub fn find_config_file(environment_suffix: Option<&str>) -> Result<PathBuf> {
  let base_name = DEFAULT_CONFIG_BASE_NAME;
  let extension = DEFAULT_CONFIG_EXTENSION;

  let env_from_var = environment_suffix
    .map(|s| s.to_string())
    .or_else(|| env::var("STALE_BOT_ENV").ok())
    .or_else(|| env::var("APP_ENV").ok());

  let mut files_to_check: Vec<String> = Vec::new();

  if let Some(env_str) = &env_from_var {
    if !env_str.is_empty() {
      files_to_check.push(format!("{}.{}.{}", base_name, env_str, extension));
    }
  }
  files_to_check.push(format!("{}.{}", base_name, extension));

  let search_dirs = [PathBuf::from(".")];

  for dir in &search_dirs {
    for file_name in &files_to_check {
      let path = dir.join(file_name);
      if path.exists() && path.is_file() {
        debug!(path = %path.display(), "Found configuration file");
        return Ok(path);
      }
    }
  }

  Err(Error::ConfigNotFound(format!(
    "Searched for: {:?} in {:?}. Provide a config file or check STALE_BOT_ENV/APP_ENV.",
    files_to_check, search_dirs
  )))
}

/// Loads and validates a policy document from a file path.
pub fn load_from_file(config_path: &Path) -> Result<PolicySet> {
  debug!(path = %config_path.display(), "Loading staleness policies");

  let file = File::open(config_path)?;
  let reader = io::BufReader::new(file);
  let raw_document: DocumentRaw =
    serde_yaml::from_reader(reader).map_err(|e| Error::ConfigParse(e.to_string()))?;

  let policies = process_raw_document(raw_document)?;
  info!(
    path = %config_path.display(),
    policies = policies.len(),
    "Loaded staleness policies"
  );
  Ok(policies)
}

/// Loads and validates a policy document from a YAML string.
pub fn load_from_str(yaml: &str) -> Result<PolicySet> {
  let raw_document: DocumentRaw =
    serde_yaml::from_str(yaml).map_err(|e| Error::ConfigParse(e.to_string()))?;
  process_raw_document(raw_document)
}
