//! Services module
//! 
//! Este módulo contiene la lógica de negocio que no pertenece a un
//! repositorio concreto: por ahora, las reglas de agenda de citas.

pub mod appointment_validation;

pub use appointment_validation::{validate_appointment, AppointmentValidator};
