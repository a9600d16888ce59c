//! Reglas de validación de citas
//!
//! Validación pura: no modifica ni guarda la cita. Acumula todos los
//! errores en orden en vez de cortar en el primero.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::models::{Appointment, ValidationResult};
use crate::utils::dates;

pub const CUSTOMER_NAME_REQUIRED: &str = "Customer name is required";
pub const SERVICE_TYPE_REQUIRED: &str = "Service type is required";
pub const SCHEDULED_DATE_REQUIRED: &str = "Scheduled date is required";
pub const SCHEDULED_DATE_IN_PAST: &str = "Scheduled date cannot be in the past";

/// Validador de restricciones de agenda
#[derive(Debug, Clone, Copy, Default)]
pub struct AppointmentValidator;

impl AppointmentValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validar contra la hora local actual
    pub fn validate_appointment(&self, appointment: &Appointment) -> ValidationResult {
        self.validate_appointment_at(appointment, dates::now())
    }

    /// Validar contra una lectura explícita del reloj.
    ///
    /// Una fecha igual a `now` se acepta; solo falla si es estrictamente anterior.
    pub fn validate_appointment_at(
        &self,
        appointment: &Appointment,
        now: NaiveDateTime,
    ) -> ValidationResult {
        let mut errors = Vec::new();

        if appointment.customer_name.trim().is_empty() {
            errors.push(CUSTOMER_NAME_REQUIRED.to_string());
        }

        if appointment.service_type.trim().is_empty() {
            errors.push(SERVICE_TYPE_REQUIRED.to_string());
        }

        match appointment.scheduled_date {
            None => errors.push(SCHEDULED_DATE_REQUIRED.to_string()),
            Some(scheduled) if dates::is_past_at(scheduled, now) => {
                errors.push(SCHEDULED_DATE_IN_PAST.to_string());
            }
            Some(_) => {}
        }

        debug!(
            appointment_id = %appointment.id(),
            error_count = errors.len(),
            "Cita validada"
        );

        ValidationResult::from_errors(errors)
    }
}

/// Atajo sobre `AppointmentValidator::validate_appointment`
pub fn validate_appointment(appointment: &Appointment) -> ValidationResult {
    AppointmentValidator::new().validate_appointment(appointment)
}
