use std::env;

/// Marker written by spreadsheet applications for a division by zero.
pub const DEFAULT_MARKER: &str = "#DIV/0!";
/// Value the marker is replaced with before comparing.
pub const DEFAULT_SENTINEL: &str = "err";

pub const ENV_REPORT_ALL: &str = "SHEET_DIFF_REPORT_ALL";
pub const ENV_MARKER: &str = "SHEET_DIFF_MARKER";
pub const ENV_SENTINEL: &str = "SHEET_DIFF_SENTINEL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid boolean for {name}: {value}")]
    InvalidBool { name: &'static str, value: String },

    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

/// How far the differ goes once a sheet is found to differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// Stop at the first sheet with any mismatch.
    #[default]
    FirstDifference,
    /// Compare every common sheet and report all mismatches.
    Exhaustive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffConfig {
    pub mode: ReportMode,
    pub marker: String,
    pub sentinel: String,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            mode: ReportMode::default(),
            marker: DEFAULT_MARKER.to_string(),
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }
}

impl DiffConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = match env::var(ENV_REPORT_ALL) {
            Ok(value) => {
                if parse_bool(ENV_REPORT_ALL, &value)? {
                    ReportMode::Exhaustive
                } else {
                    ReportMode::FirstDifference
                }
            }
            Err(_) => ReportMode::default(),
        };

        let config = DiffConfig {
            mode,
            marker: env::var(ENV_MARKER).unwrap_or_else(|_| DEFAULT_MARKER.to_string()),
            sentinel: env::var(ENV_SENTINEL).unwrap_or_else(|_| DEFAULT_SENTINEL.to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.marker.is_empty() {
            return Err(ConfigError::Empty { name: "marker" });
        }
        Ok(())
    }

    pub fn exhaustive(mut self) -> Self {
        self.mode = ReportMode::Exhaustive;
        self
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DiffConfig::default();
        assert_eq!(config.mode, ReportMode::FirstDifference);
        assert_eq!(config.marker, "#DIV/0!");
        assert_eq!(config.sentinel, "err");
    }

    #[test]
    fn test_parse_bool_variants() {
        assert!(parse_bool("X", "TRUE").unwrap());
        assert!(parse_bool("X", " yes ").unwrap());
        assert!(!parse_bool("X", "0").unwrap());
        assert!(!parse_bool("X", "").unwrap());
    }

    #[test]
    fn test_parse_bool_rejects_garbage() {
        let err = parse_bool(ENV_REPORT_ALL, "maybe").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid boolean for SHEET_DIFF_REPORT_ALL: maybe"
        );
    }

    #[test]
    fn test_empty_marker_is_rejected() {
        let config = DiffConfig {
            marker: String::new(),
            ..DiffConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Empty { .. })));
    }

    #[test]
    fn test_exhaustive_builder() {
        let config = DiffConfig::default().exhaustive();
        assert_eq!(config.mode, ReportMode::Exhaustive);
    }
}
