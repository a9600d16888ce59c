//! Utilidades del sistema
//! 
//! Este módulo contiene utilidades para manejo de errores, validación
//! de campos y cálculos de fecha y hora.

pub mod dates;
pub mod errors;
pub mod validation;

pub use errors::{AppError, AppResult};
