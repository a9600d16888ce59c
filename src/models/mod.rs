//! Modelos del sistema
//! 
//! Este módulo contiene todos los modelos de datos del taller: clientes,
//! vehículos, historial de mantenimiento y citas.

pub mod appointment;
pub mod customer;
pub mod maintenance;
pub mod vehicle;

pub use appointment::{
    Appointment, ProcessingStats, ValidationResult, CONFIRMED_STATUS, DEFAULT_STATUS,
};
pub use customer::{Address, Customer, NewCustomer};
pub use maintenance::{MaintenanceRecord, NewMaintenanceRecord};
pub use vehicle::{NewVehicle, Vehicle};
