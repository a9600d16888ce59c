//! Modelo de Appointment
//!
//! Una cita se construye con estado "pending" y se valida con
//! `services::appointment_validation` antes de aceptarse.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estado inicial de toda cita
pub const DEFAULT_STATUS: &str = "pending";

/// Estado tras confirmar la cita en lote
pub const CONFIRMED_STATUS: &str = "confirmed";

/// Cita de servicio propuesta por un cliente
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    id: Uuid,
    pub customer_name: String,
    pub service_type: String,
    pub scheduled_date: Option<NaiveDateTime>,
    pub vehicle_info: Option<String>,
    pub status: String,
    pub processed_at: Option<NaiveDateTime>,
}

impl Appointment {
    pub fn new(
        customer_name: impl Into<String>,
        service_type: impl Into<String>,
        scheduled_date: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_name: customer_name.into(),
            service_type: service_type.into(),
            scheduled_date,
            vehicle_info: None,
            status: DEFAULT_STATUS.to_string(),
            processed_at: None,
        }
    }

    pub fn with_vehicle_info(mut self, vehicle_info: impl Into<String>) -> Self {
        self.vehicle_info = Some(vehicle_info.into());
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

/// Resultado de validar una cita
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// `valid` se deriva siempre de la lista de errores
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Métricas acumuladas de las confirmaciones en lote
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingStats {
    pub total_processed: u64,
    pub average_time_ms: f64,
    pub errors: u64,
}

impl ProcessingStats {
    /// Registrar una cita procesada y actualizar el promedio
    pub fn record_processed(&mut self, elapsed_ms: f64) {
        self.total_processed += 1;
        self.average_time_ms += (elapsed_ms - self.average_time_ms) / self.total_processed as f64;
    }

    pub fn record_error(&mut self) {
        self.errors += 1;
    }
}
