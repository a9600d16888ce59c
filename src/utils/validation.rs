//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! de contacto y valores numéricos. Se usan como validadores `custom`
//! en los structs de request de `models`.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid");
    static ref PHONE_DIGITS_REGEX: Regex =
        Regex::new(r"^(\d{7}|\d{10})$").expect("phone regex is valid");
    static ref ZIP_CODE_REGEX: Regex =
        Regex::new(r"^\d{5}(-\d{4})?$").expect("zip code regex is valid");
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar longitud mínima y máxima
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        let mut error = ValidationError::new("length");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor esté en un rango específico
pub fn validate_range<T: PartialOrd + std::fmt::Display + Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !EMAIL_REGEX.is_match(value) {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono: 7 o 10 dígitos, ignorando `-`, `(`, `)` y espacios
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let clean_phone: String = value
        .chars()
        .filter(|c| !matches!(c, '-' | '(' | ')') && !c.is_whitespace())
        .collect();
    if !PHONE_DIGITS_REGEX.is_match(&clean_phone) {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar código postal (`12345` o `12345-6789`)
pub fn validate_zip_code(value: &str) -> Result<(), ValidationError> {
    if !ZIP_CODE_REGEX.is_match(value) {
        let mut error = ValidationError::new("zip_code");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"NNNNN or NNNNN-NNNN".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Limpiar un string de entrada: trim y sin `<` ni `>`
pub fn sanitize_string(value: &str) -> String {
    value.trim().replace(['<', '>'], "")
}
