//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y el request validado para
//! registrar vehículos. `owner_id` es una referencia débil a un Customer:
//! no se verifica que exista ni se borra en cascada.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::utils::validation::{validate_not_empty, validate_range};

/// Primer año de fabricación aceptado
pub const MIN_MODEL_YEAR: i32 = 1886;

/// Último año de fabricación aceptado
pub const MAX_MODEL_YEAR: i32 = 2100;

/// Vehicle principal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: Uuid,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub mileage: u32,
    pub owner_id: Option<Uuid>,
}

impl Vehicle {
    pub fn new(
        vin: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            vin: vin.into(),
            make: make.into(),
            model: model.into(),
            year,
            color: None,
            mileage: 0,
            owner_id: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Nombre para mostrar: "2020 Honda Accord"
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

/// Request para registrar un nuevo vehículo
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewVehicle {
    #[validate(length(equal = 17))]
    pub vin: String,

    #[validate(length(min = 1, max = 100), custom = "validate_not_empty")]
    pub make: String,

    #[validate(length(min = 1, max = 100), custom = "validate_not_empty")]
    pub model: String,

    #[validate(custom = "validate_model_year")]
    pub year: i32,

    #[validate(length(min = 2, max = 50))]
    pub color: Option<String>,

    pub mileage: Option<u32>,
}

impl NewVehicle {
    pub fn new(
        vin: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            vin: vin.into(),
            make: make.into(),
            model: model.into(),
            year,
            color: None,
            mileage: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_mileage(mut self, mileage: u32) -> Self {
        self.mileage = Some(mileage);
        self
    }
}

fn validate_model_year(year: i32) -> Result<(), ValidationError> {
    validate_range(year, MIN_MODEL_YEAR, MAX_MODEL_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vehicle_defaults() {
        let vehicle = Vehicle::new("1HGCM82633A123456", "Honda", "Accord", 2020);
        assert_eq!(vehicle.mileage, 0);
        assert!(vehicle.color.is_none());
        assert!(vehicle.owner_id.is_none());
        assert_eq!(vehicle.display_name(), "2020 Honda Accord");
    }

    #[test]
    fn test_new_vehicle_validation() {
        let valid = NewVehicle::new("1HGCM82633A123456", "Honda", "Accord", 2020)
            .with_color("Silver")
            .with_mileage(45000);
        assert!(valid.validate().is_ok());

        let short_vin = NewVehicle::new("1HGCM826", "Honda", "Accord", 2020);
        let errors = short_vin.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("vin"));

        let bad_year = NewVehicle::new("1HGCM82633A123456", "Honda", "Accord", 1700);
        let errors = bad_year.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("year"));
    }

    #[test]
    fn test_model_year_bounds_are_inclusive() {
        let oldest = NewVehicle::new("1HGCM82633A123456", "Benz", "Motorwagen", MIN_MODEL_YEAR);
        assert!(oldest.validate().is_ok());
        let newest = NewVehicle::new("1HGCM82633A123456", "Honda", "Accord", MAX_MODEL_YEAR);
        assert!(newest.validate().is_ok());

        let errors = NewVehicle::new("1HGCM82633A123456", "Honda", "Accord", MAX_MODEL_YEAR + 1)
            .validate()
            .unwrap_err();
        assert_eq!(errors.field_errors()["year"][0].code, "range");
    }
}
