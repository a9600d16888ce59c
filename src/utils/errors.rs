//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema.
//! En los repositorios las búsquedas sin resultado NO son errores: se
//! representan con `Option`, `bool` o colecciones vacías. `NotFound` queda
//! para las operaciones estrictas de `ShopState`.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid appointment: {}", .0.join("; "))]
    InvalidAppointment(Vec<String>),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Date parse error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Código estable para logs y para la capa de presentación
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InvalidAppointment(_) => "INVALID_APPOINTMENT",
            AppError::InvalidReference(_) => "INVALID_REFERENCE",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::DateParse(_) => "DATE_PARSE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de referencia inválida
pub fn invalid_reference_error(resource: &str, id: &str) -> AppError {
    AppError::InvalidReference(format!("{} not found: {}", resource, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = invalid_reference_error("Vehicle", "abc");
        assert_eq!(err.to_string(), "Invalid reference: Vehicle not found: abc");
        assert_eq!(err.code(), "INVALID_REFERENCE");

        let err = not_found_error("Customer", "42");
        assert_eq!(err.to_string(), "Not found: Customer with id '42' not found");
    }

    #[test]
    fn test_invalid_appointment_joins_errors() {
        let err = AppError::InvalidAppointment(vec![
            "Customer name is required".to_string(),
            "Service type is required".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid appointment: Customer name is required; Service type is required"
        );
    }

    #[test]
    fn test_validation_error_helper() {
        match validation_error("cost", "must not be negative") {
            AppError::Validation(errors) => {
                assert!(errors.field_errors().contains_key("cost"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
