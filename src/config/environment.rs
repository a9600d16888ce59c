//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. El binario llama a
//! `dotenvy::dotenv()` antes de `EnvironmentConfig::from_env()`.

use std::env;
use std::str::FromStr;

use tracing::Level;

use crate::utils::errors::{AppError, AppResult};

pub const DEFAULT_SERVICE_MILEAGE_THRESHOLD: u32 = 60_000;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub log_level: Level,
    pub service_mileage_threshold: u32,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            log_level: Level::INFO,
            service_mileage_threshold: DEFAULT_SERVICE_MILEAGE_THRESHOLD,
        }
    }
}

impl EnvironmentConfig {
    /// Leer `SHOP_ENVIRONMENT`, `SHOP_LOG_LEVEL` y `SHOP_SERVICE_MILEAGE_THRESHOLD`.
    /// Las variables ausentes usan el valor por defecto.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let environment = lookup("SHOP_ENVIRONMENT").unwrap_or(defaults.environment);
        let log_level = match lookup("SHOP_LOG_LEVEL") {
            Some(value) => parse_var("SHOP_LOG_LEVEL", &value)?,
            None => defaults.log_level,
        };
        let service_mileage_threshold = match lookup("SHOP_SERVICE_MILEAGE_THRESHOLD") {
            Some(value) => parse_var("SHOP_SERVICE_MILEAGE_THRESHOLD", &value)?,
            None => defaults.service_mileage_threshold,
        };

        Ok(Self {
            environment,
            log_level,
            service_mileage_threshold,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> AppResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} has an invalid value: '{}'", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.is_development());
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.service_mileage_threshold, 60_000);
    }

    #[test]
    fn test_values_from_environment() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("SHOP_ENVIRONMENT", "production"),
            ("SHOP_LOG_LEVEL", "debug"),
            ("SHOP_SERVICE_MILEAGE_THRESHOLD", " 75000 "),
        ]))
        .unwrap();
        assert!(config.is_production());
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.service_mileage_threshold, 75_000);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let err = EnvironmentConfig::from_lookup(lookup_from(&[(
            "SHOP_SERVICE_MILEAGE_THRESHOLD",
            "-5",
        )]))
        .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = EnvironmentConfig::from_lookup(lookup_from(&[("SHOP_LOG_LEVEL", "loud")])).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }
}
