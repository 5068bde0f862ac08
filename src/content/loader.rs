//! Loader for the RON configuration file.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::PlatformerConfig;
use super::validation::validate_config;

/// Error type for configuration loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse configuration text. `file` only labels errors.
pub fn parse_config(file: &str, contents: &str) -> Result<PlatformerConfig, Vec<ContentLoadError>> {
    let config: PlatformerConfig = ron_options().from_str(contents).map_err(|e| {
        vec![ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        }]
    })?;

    let issues = validate_config(&config);
    if issues.is_empty() {
        Ok(config)
    } else {
        Err(issues
            .into_iter()
            .map(|issue| ContentLoadError {
                file: file.to_string(),
                message: issue.to_string(),
            })
            .collect())
    }
}

/// Load and validate the configuration file at `path`.
/// Returns every error found so they can all be reported at once.
pub fn load_config(path: &Path) -> Result<PlatformerConfig, Vec<ContentLoadError>> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| {
        vec![ContentLoadError {
            file: file_name.clone(),
            message: format!("IO error: {}", e),
        }]
    })?;

    parse_config(&file_name, &contents)
}
