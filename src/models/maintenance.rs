//! Modelo de MaintenanceRecord
//!
//! Un registro de mantenimiento siempre pertenece a un Vehicle existente
//! en el momento de crearse. Nunca se borra ni se reordena.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::utils::validation::{validate_non_negative, validate_not_empty};

/// Registro de mantenimiento de un vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    id: Uuid,
    vehicle_id: Uuid,
    pub service_date: DateTime<Utc>,
    pub service_type: String,
    pub description: Option<String>,
    cost: Decimal,
    pub mileage_at_service: u32,
    pub technician_name: Option<String>,
}

impl MaintenanceRecord {
    /// Crear un registro con fecha de servicio = ahora y costo 0
    pub fn new(vehicle_id: Uuid, service_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            vehicle_id,
            service_date: Utc::now(),
            service_type: service_type.into(),
            description: None,
            cost: Decimal::ZERO,
            mileage_at_service: 0,
            technician_name: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn vehicle_id(&self) -> Uuid {
        self.vehicle_id
    }

    pub fn cost(&self) -> Decimal {
        self.cost
    }

    /// Cambiar el costo. Un valor negativo se rechaza y el registro no cambia.
    pub fn set_cost(&mut self, cost: Decimal) -> Result<(), ValidationError> {
        validate_non_negative(cost)?;
        self.cost = cost;
        Ok(())
    }
}

/// Request para crear un registro de mantenimiento completo
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMaintenanceRecord {
    #[validate(length(min = 1, max = 100), custom = "validate_not_empty")]
    pub service_type: String,

    pub description: Option<String>,

    #[validate(custom = "validate_cost")]
    pub cost: Decimal,

    pub mileage_at_service: u32,

    pub technician_name: Option<String>,

    pub service_date: Option<DateTime<Utc>>,
}

impl NewMaintenanceRecord {
    pub fn new(service_type: impl Into<String>, cost: Decimal) -> Self {
        Self {
            service_type: service_type.into(),
            description: None,
            cost,
            mileage_at_service: 0,
            technician_name: None,
            service_date: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_mileage(mut self, mileage_at_service: u32) -> Self {
        self.mileage_at_service = mileage_at_service;
        self
    }

    pub fn with_technician(mut self, technician_name: impl Into<String>) -> Self {
        self.technician_name = Some(technician_name.into());
        self
    }

    pub fn with_service_date(mut self, service_date: DateTime<Utc>) -> Self {
        self.service_date = Some(service_date);
        self
    }

    /// Construir el registro para un vehículo ya verificado
    pub(crate) fn into_record(self, vehicle_id: Uuid) -> MaintenanceRecord {
        let mut record = MaintenanceRecord::new(vehicle_id, self.service_type);
        if let Some(service_date) = self.service_date {
            record.service_date = service_date;
        }
        record.description = self.description;
        record.cost = self.cost;
        record.mileage_at_service = self.mileage_at_service;
        record.technician_name = self.technician_name;
        record
    }
}

fn validate_cost(cost: &Decimal) -> Result<(), ValidationError> {
    validate_non_negative(*cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_new_record_defaults() {
        let vehicle_id = Uuid::new_v4();
        let before = Utc::now();
        let record = MaintenanceRecord::new(vehicle_id, "Oil Change");

        assert_eq!(record.vehicle_id(), vehicle_id);
        assert_eq!(record.cost(), Decimal::ZERO);
        assert_eq!(record.mileage_at_service, 0);
        assert!(record.service_date >= before);
    }

    #[test]
    fn test_into_record_copies_fields() {
        let vehicle_id = Uuid::new_v4();
        let record = NewMaintenanceRecord::new("Brake Inspection", Decimal::from_str("89.99").unwrap())
            .with_mileage(45000)
            .with_technician("Sarah Smith")
            .into_record(vehicle_id);

        assert_eq!(record.service_type, "Brake Inspection");
        assert_eq!(record.cost(), Decimal::from_str("89.99").unwrap());
        assert_eq!(record.mileage_at_service, 45000);
        assert_eq!(record.technician_name.as_deref(), Some("Sarah Smith"));
        assert!(record.description.is_none());
    }

    #[test]
    fn test_negative_cost_is_rejected() {
        let request = NewMaintenanceRecord::new("Refund", Decimal::new(-500, 2));
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("cost"));
    }

    #[test]
    fn test_set_cost_keeps_value_non_negative() {
        let mut record = MaintenanceRecord::new(Uuid::new_v4(), "Oil Change");

        assert!(record.set_cost(Decimal::new(4599, 2)).is_ok());
        assert!(record.set_cost(Decimal::new(-4599, 2)).is_err());
        assert_eq!(record.cost(), Decimal::new(4599, 2));
    }
}
