//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::CaravanConfig;
use crate::domain::errors::CaravanError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`CaravanConfig`]
/// 4. Applies environment variable overrides (`CARAVAN_MODE`,
///    `CARAVAN_CHUNK_SIZE`)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced environment
/// variable is unset, parsing fails, or validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<CaravanConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CaravanError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CaravanError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: CaravanConfig = toml::from_str(&contents)
        .map_err(|e| CaravanError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate()?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched. Returns an error listing every
/// referenced variable that is not set.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static regex");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(CaravanError::Configuration(format!(
            "Missing environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides on top of the parsed file
fn apply_env_overrides(config: &mut CaravanConfig) -> Result<()> {
    if let Ok(mode) = std::env::var("CARAVAN_MODE") {
        config.mode = mode.parse()?;
    }

    if let Ok(chunk_size) = std::env::var("CARAVAN_CHUNK_SIZE") {
        config.batch.chunk_size = chunk_size.parse().map_err(|e| {
            CaravanError::Configuration(format!("Invalid CARAVAN_CHUNK_SIZE: {e}"))
        })?;
    }

    Ok(())
}
