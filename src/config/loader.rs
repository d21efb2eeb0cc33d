//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file, or from the built-in defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::info;

use crate::calculation::{check_rate_coverage, check_rates, normalize_windows};
use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfiguration, PayrollFile, RateTable, RawShiftWindow};

/// Default shift windows: name, start, end.
const DEFAULT_SHIFTS: [(&str, &str, &str); 3] = [
    ("night_shift", "00:01", "09:00"),
    ("day_shift", "09:01", "18:00"),
    ("evening_shift", "18:01", "00:00"),
];

/// Monday to Friday rates for night, day and evening shifts.
const WEEKDAY_RATES: [i64; 3] = [25, 15, 20];

/// Saturday and Sunday rates for night, day and evening shifts.
const WEEKEND_RATES: [i64; 3] = [30, 20, 25];

const DEFAULT_CURRENCY: &str = "USD";

/// Options controlling configuration validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Fail when a configured day has no rate for a configured shift,
    /// instead of warning and paying those hours at zero.
    pub strict_rates: bool,
}

/// Loads and validates payroll configuration.
///
/// # File Format
///
/// ```yaml
/// currency: USD
/// shifts:
///   night_shift: { start: "00:01", end: "09:00" }
///   day_shift: { start: "09:01", end: "18:00" }
///   evening_shift: { start: "18:01", end: "00:00" }
/// rates:
///   MO: { night_shift: 25, day_shift: 15, evening_shift: 20 }
///   SA: { night_shift: 30, day_shift: 20, evening_shift: 25 }
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// println!("Shifts: {}", loader.config().windows().len());
/// # Ok::<(), shift_payroll::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfiguration,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file with default options.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file cannot be read
    /// - [`EngineError::ConfigParseError`] if the YAML is invalid
    /// - [`EngineError::InvalidShiftWindow`] if a window is malformed
    /// - [`EngineError::InvalidRate`] if a rate is negative or too large
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        Self::load_with(path, LoadOptions::default())
    }

    /// Loads configuration from a YAML file.
    pub fn load_with<P: AsRef<Path>>(path: P, options: LoadOptions) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content, &path_str, options)?;
        info!(
            path = %path_str,
            shifts = loader.config.windows().len(),
            days = loader.config.rates().days().count(),
            "Loaded payroll configuration"
        );
        Ok(loader)
    }

    /// Parses configuration from YAML text; `source` names it in errors.
    pub fn from_yaml_str(content: &str, source: &str, options: LoadOptions) -> EngineResult<Self> {
        let file: PayrollFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;
        Self::from_file(file, options)
    }

    /// Builds the default configuration: night, day and evening shifts with
    /// weekday and weekend rate sets.
    pub fn builtin() -> EngineResult<Self> {
        let shifts: BTreeMap<String, RawShiftWindow> = DEFAULT_SHIFTS
            .iter()
            .map(|(name, start, end)| (name.to_string(), RawShiftWindow::new(*start, *end)))
            .collect();

        let mut rates = RateTable::new();
        for (index, day) in crate::models::DAY_CODES.iter().enumerate() {
            let row = if index < 5 { WEEKDAY_RATES } else { WEEKEND_RATES };
            for ((name, _, _), rate) in DEFAULT_SHIFTS.iter().zip(row) {
                rates.insert(*day, *name, Decimal::from(rate));
            }
        }

        Self::from_file(
            PayrollFile {
                currency: DEFAULT_CURRENCY.to_string(),
                shifts,
                rates,
            },
            LoadOptions {
                strict_rates: true,
            },
        )
    }

    fn from_file(file: PayrollFile, options: LoadOptions) -> EngineResult<Self> {
        let windows = normalize_windows(&file.shifts)?;
        check_rates(&file.rates)?;
        check_rate_coverage(&windows, &file.rates, options.strict_rates)?;
        Ok(Self {
            config: PayrollConfiguration::new(windows, file.rates, file.currency),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfiguration {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfiguration {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/payroll.yaml"
    }

    #[test]
    fn test_builtin_configuration() {
        let loader = ConfigLoader::builtin().unwrap();
        let config = loader.config();

        assert_eq!(config.currency(), "USD");
        assert_eq!(config.windows().len(), 3);
        assert_eq!(config.rates().days().count(), 7);
        assert_eq!(config.rates().rate("MO", "night_shift"), Some(Decimal::from(25)));
        assert_eq!(config.rates().rate("FR", "day_shift"), Some(Decimal::from(15)));
        assert_eq!(config.rates().rate("SA", "evening_shift"), Some(Decimal::from(25)));
        assert_eq!(config.rates().rate("SU", "night_shift"), Some(Decimal::from(30)));
    }

    #[test]
    fn test_file_matches_builtin() {
        let from_file = ConfigLoader::load(config_path());
        assert!(from_file.is_ok(), "Failed to load config: {:?}", from_file.err());

        let builtin = ConfigLoader::builtin().unwrap();
        assert_eq!(from_file.unwrap().config(), builtin.config());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/payroll.yaml") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("shifts: [", "inline", LoadOptions::default());
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "inline"),
            _ => panic!("Expected ConfigParseError"),
        }
    }

    #[test]
    fn test_invalid_window_fails_load() {
        let yaml = r#"
shifts:
  late_shift: { start: "22:00", end: "06:00" }
rates:
  MO: { late_shift: 30 }
"#;
        let result = ConfigLoader::from_yaml_str(yaml, "inline", LoadOptions::default());
        assert!(matches!(result, Err(EngineError::InvalidShiftWindow { .. })));
    }

    #[test]
    fn test_negative_rate_fails_load() {
        let yaml = r#"
shifts:
  day_shift: { start: "09:00", end: "18:00" }
rates:
  MO: { day_shift: -15 }
"#;
        for strict_rates in [false, true] {
            let result = ConfigLoader::from_yaml_str(yaml, "inline", LoadOptions { strict_rates });
            match result {
                Err(EngineError::InvalidRate { day, shift, .. }) => {
                    assert_eq!(day, "MO");
                    assert_eq!(shift, "day_shift");
                }
                other => panic!("Expected InvalidRate error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_oversized_rate_fails_load() {
        let yaml = r#"
shifts:
  day_shift: { start: "09:00", end: "18:00" }
rates:
  MO: { day_shift: "79228162514264337593543950335" }
"#;
        let result = ConfigLoader::from_yaml_str(yaml, "inline", LoadOptions::default());
        assert!(matches!(result, Err(EngineError::InvalidRate { .. })));
    }

    #[test]
    fn test_missing_rate_is_lenient_by_default() {
        let yaml = r#"
currency: EUR
shifts:
  day_shift: { start: "09:00", end: "18:00" }
  evening_shift: { start: "18:00", end: "00:00" }
rates:
  MO: { day_shift: 15 }
"#;
        let loader = ConfigLoader::from_yaml_str(yaml, "inline", LoadOptions::default()).unwrap();
        assert_eq!(loader.config().currency(), "EUR");
        assert_eq!(loader.config().rates().rate("MO", "evening_shift"), None);

        let strict = ConfigLoader::from_yaml_str(
            yaml,
            "inline",
            LoadOptions {
                strict_rates: true,
            },
        );
        assert!(matches!(strict, Err(EngineError::MissingRate { .. })));
    }
}
