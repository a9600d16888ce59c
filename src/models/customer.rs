//! Modelo de Customer
//!
//! Este módulo contiene el struct Customer, su dirección y el request
//! validado para registrar clientes nuevos.
//! `vehicle_ids` es una referencia débil: no se sincroniza con `Vehicle::owner_id`.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::utils::validation::{
    validate_email, validate_length, validate_not_empty, validate_phone, validate_zip_code,
};

/// Dirección postal del cliente
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip_code: zip_code.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.city, self.state, self.zip_code)
    }
}

/// Customer principal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<Address>,
    vehicle_ids: Vec<Uuid>,
}

impl Customer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            address: None,
            vehicle_ids: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn vehicle_ids(&self) -> &[Uuid] {
        &self.vehicle_ids
    }

    /// Agregar un vehículo a la lista del cliente (solo append)
    pub fn add_vehicle(&mut self, vehicle_id: Uuid) {
        self.vehicle_ids.push(vehicle_id);
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Request para registrar un nuevo customer
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCustomer {
    #[validate(length(min = 1, max = 100), custom = "validate_not_empty")]
    pub first_name: String,

    #[validate(length(min = 1, max = 100), custom = "validate_not_empty")]
    pub last_name: String,

    #[validate(custom = "validate_email")]
    pub email: String,

    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,

    #[validate(custom = "validate_address")]
    pub address: Option<Address>,
}

impl NewCustomer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            address: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }
}

fn validate_address(address: &Address) -> Result<(), ValidationError> {
    validate_not_empty(&address.street)?;
    validate_length(&address.street, 1, 200)?;
    validate_not_empty(&address.city)?;
    validate_length(&address.city, 1, 100)?;
    validate_length(address.state.trim(), 2, 2)?;
    validate_zip_code(&address.zip_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_has_unique_id_and_no_vehicles() {
        let a = Customer::new("John", "Smith", "john.smith@email.com");
        let b = Customer::new("John", "Smith", "john.smith@email.com");
        assert_ne!(a.id(), b.id());
        assert!(a.vehicle_ids().is_empty());
        assert_eq!(a.full_name(), "John Smith");
    }

    #[test]
    fn test_add_vehicle_appends_in_order() {
        let mut customer = Customer::new("Sarah", "Johnson", "sarah.j@email.com");
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        customer.add_vehicle(first);
        customer.add_vehicle(second);
        assert_eq!(customer.vehicle_ids(), &[first, second]);
    }

    #[test]
    fn test_address_display() {
        let address = Address::new("123 Main St", "Springfield", "IL", "62701");
        assert_eq!(address.to_string(), "123 Main St, Springfield, IL 62701");
    }

    #[test]
    fn test_new_customer_validation() {
        let valid = NewCustomer::new("John", "Smith", "john.smith@email.com")
            .with_phone("555-0101")
            .with_address(Address::new("123 Main St", "Springfield", "IL", "62701"));
        assert!(valid.validate().is_ok());

        let bad_email = NewCustomer::new("John", "Smith", "not-an-email");
        let errors = bad_email.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));

        let bad_zip = NewCustomer::new("John", "Smith", "john@email.com")
            .with_address(Address::new("123 Main St", "Springfield", "IL", "ABCDE"));
        let errors = bad_zip.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("address"));

        let blank_name = NewCustomer::new("  ", "Smith", "john@email.com");
        assert!(blank_name.validate().is_err());
    }

    #[test]
    fn test_address_state_must_be_two_letter_code() {
        let spelled_out = NewCustomer::new("John", "Smith", "john@email.com")
            .with_address(Address::new("123 Main St", "Springfield", "Illinois", "62701"));
        let errors = spelled_out.validate().unwrap_err();
        assert_eq!(errors.field_errors()["address"][0].code, "length");

        let long_street = NewCustomer::new("John", "Smith", "john@email.com")
            .with_address(Address::new("x".repeat(201), "Springfield", "IL", "62701"));
        assert!(long_street.validate().is_err());
    }
}
