//! Optional `config.toml` for the command-line shell.

use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB
pub const DEFAULT_MAX_DEPTH: usize = 1000;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub eval: EvalConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EvalConfig {
    /// Deepest reference chain before evaluation gives up; 0 disables the guard.
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Cell separator used when printing a whole table.
    pub separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            separator: "\t".to_string(),
        }
    }
}

/// Turn a `max_depth` setting into an evaluation limit.
pub fn depth_limit(max_depth: usize) -> Option<usize> {
    (max_depth > 0).then_some(max_depth)
}

pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Load the config file, falling back to defaults.
///
/// An explicit `config_file` that is missing produces a warning; a missing
/// default file does not.
pub fn load_config(config_file: Option<&PathBuf>) -> (Config, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let Some(path) = config_file.cloned().or_else(user_config_path) else {
        return (Config::default(), warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Config::default(), warnings);
    }

    let config = match std::fs::metadata(&path) {
        Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => {
            warnings.push(format!(
                "Refusing to read {}: file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            ));
            None
        }
        Ok(_) => match std::fs::read_to_string(&path) {
            Ok(content) => match parse_config(&content) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                    None
                }
            },
            Err(err) => {
                warnings.push(format!("Failed to read {}: {}", path.display(), err));
                None
            }
        },
        Err(err) => {
            warnings.push(format!(
                "Failed to read metadata for {}: {}",
                path.display(),
                err
            ));
            None
        }
    };

    (config.unwrap_or_default(), warnings)
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "tabsheet")?;
    Some(proj.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.eval.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.output.separator, "\t");
    }

    #[test]
    fn test_parse_values() {
        let config = parse_config("[eval]\nmax_depth = 0\n\n[output]\nseparator = \",\"\n").unwrap();
        assert_eq!(config.eval.max_depth, 0);
        assert_eq!(config.output.separator, ",");
        assert_eq!(depth_limit(config.eval.max_depth), None);
        assert_eq!(depth_limit(25), Some(25));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(parse_config("[eval]\ndepth = 3\n").is_err());
        assert!(parse_config("[colors]\n").is_err());
    }

    #[test]
    fn test_missing_explicit_file_warns() {
        let path = PathBuf::from("/definitely/not/here/config.toml");
        let (config, warnings) = load_config(Some(&path));
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("not found"));
    }

    #[test]
    fn test_malformed_file_warns_and_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[eval\nmax_depth = ").unwrap();
        let (config, warnings) = load_config(Some(&path));
        assert_eq!(config, Config::default());
        assert!(warnings[0].starts_with("Failed to parse"));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[eval]\nmax_depth = 12\n").unwrap();
        let (config, warnings) = load_config(Some(&path));
        assert!(warnings.is_empty());
        assert_eq!(config.eval.max_depth, 12);
        assert_eq!(config.output.separator, "\t");
    }
}
