//! Shared application state
//!
//! Este módulo define el estado compartido del taller: los tres
//! repositorios, cada uno detrás de su propio `RwLock`. Las lecturas
//! comparten el lock; altas, cambios y bajas lo toman en exclusiva.
//! Orden de adquisición: customers, vehicles, appointments.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::models::{
    Appointment, Customer, MaintenanceRecord, NewCustomer, NewMaintenanceRecord, NewVehicle,
    ProcessingStats, Vehicle,
};
use crate::repositories::{AppointmentRepository, CustomerRepository, VehicleRepository};
use crate::utils::errors::{invalid_reference_error, not_found_error, AppResult};

/// Resumen de un cliente con sus vehículos y el gasto total en mantenimiento
#[derive(Debug, Clone, Serialize)]
pub struct CustomerSummary {
    pub customer: Customer,
    pub vehicles: Vec<Vehicle>,
    pub total_maintenance_cost: Decimal,
}

#[derive(Clone)]
pub struct ShopState {
    pub config: EnvironmentConfig,
    pub customers: Arc<RwLock<CustomerRepository>>,
    pub vehicles: Arc<RwLock<VehicleRepository>>,
    pub appointments: Arc<RwLock<AppointmentRepository>>,
}

impl ShopState {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            config,
            customers: Arc::new(RwLock::new(CustomerRepository::new())),
            vehicles: Arc::new(RwLock::new(VehicleRepository::new())),
            appointments: Arc::new(RwLock::new(AppointmentRepository::new())),
        }
    }

    /// Validar el request y dar de alta el cliente con teléfono y dirección
    pub async fn register_customer(&self, request: NewCustomer) -> AppResult<Customer> {
        request.validate()?;

        let mut customers = self.customers.write().await;
        let customer = customers.add(request.first_name, request.last_name, request.email);
        let id = customer.id();
        if let Some(phone) = request.phone {
            customers.set_phone(id, phone);
        }
        if let Some(address) = request.address {
            customers.set_address(id, address);
        }

        Ok(customers.find_by_id(id).cloned().unwrap_or(customer))
    }

    /// Validar el request y registrar el vehículo (sin dueño)
    pub async fn register_vehicle(&self, request: NewVehicle) -> AppResult<Vehicle> {
        request.validate()?;

        let mut vehicles = self.vehicles.write().await;
        let vehicle = vehicles.add_vehicle(request.vin, request.make, request.model, request.year);
        let id = vehicle.id();
        if let Some(color) = request.color {
            vehicles.set_color(id, color);
        }
        if let Some(mileage) = request.mileage {
            vehicles.update_mileage(id, mileage);
        }

        Ok(vehicles.get_vehicle(id).cloned().unwrap_or(vehicle))
    }

    /// Búsqueda estricta: `AppError::NotFound` si el cliente no existe
    pub async fn get_customer(&self, customer_id: Uuid) -> AppResult<Customer> {
        self.customers
            .read()
            .await
            .find_by_id(customer_id)
            .cloned()
            .ok_or_else(|| not_found_error("Customer", &customer_id.to_string()))
    }

    /// Búsqueda estricta: `AppError::NotFound` si el vehículo no existe
    pub async fn get_vehicle(&self, vehicle_id: Uuid) -> AppResult<Vehicle> {
        self.vehicles
            .read()
            .await
            .get_vehicle(vehicle_id)
            .cloned()
            .ok_or_else(|| not_found_error("Vehicle", &vehicle_id.to_string()))
    }

    /// Asignar un vehículo a un cliente actualizando ambos lados de la referencia.
    ///
    /// No quita el vehículo de la lista de un dueño anterior.
    pub async fn assign_vehicle(&self, customer_id: Uuid, vehicle_id: Uuid) -> AppResult<()> {
        let mut customers = self.customers.write().await;
        let mut vehicles = self.vehicles.write().await;

        if customers.find_by_id(customer_id).is_none() {
            warn!(customer_id = %customer_id, "Asignación rechazada: cliente inexistente");
            return Err(invalid_reference_error("Customer", &customer_id.to_string()));
        }
        if !vehicles.assign_owner(vehicle_id, Some(customer_id)) {
            warn!(vehicle_id = %vehicle_id, "Asignación rechazada: vehículo inexistente");
            return Err(invalid_reference_error("Vehicle", &vehicle_id.to_string()));
        }
        customers.link_vehicle(customer_id, vehicle_id);

        info!(customer_id = %customer_id, vehicle_id = %vehicle_id, "Vehículo asignado a cliente");
        Ok(())
    }

    pub async fn record_service(
        &self,
        vehicle_id: Uuid,
        request: NewMaintenanceRecord,
    ) -> AppResult<MaintenanceRecord> {
        self.vehicles
            .write()
            .await
            .add_maintenance_record_with(vehicle_id, request)
    }

    /// Corregir el costo de un registro ya creado
    pub async fn update_service_cost(
        &self,
        vehicle_id: Uuid,
        record_id: Uuid,
        cost: Decimal,
    ) -> AppResult<MaintenanceRecord> {
        let mut vehicles = self.vehicles.write().await;
        if !vehicles.set_cost(vehicle_id, record_id, cost)? {
            return Err(not_found_error("MaintenanceRecord", &record_id.to_string()));
        }

        vehicles
            .maintenance_record_mut(vehicle_id, record_id)
            .map(|record| record.clone())
            .ok_or_else(|| not_found_error("MaintenanceRecord", &record_id.to_string()))
    }

    /// Cliente, sus vehículos (por `owner_id`) y la suma de sus costos de mantenimiento
    pub async fn customer_summary(&self, customer_id: Uuid) -> Option<CustomerSummary> {
        let customers = self.customers.read().await;
        let vehicles = self.vehicles.read().await;

        let customer = customers.find_by_id(customer_id)?.clone();
        let owned = vehicles.get_vehicles_by_owner(customer_id);
        let total_maintenance_cost: Decimal = owned
            .iter()
            .map(|v| vehicles.get_total_maintenance_cost(v.id()))
            .sum();

        Some(CustomerSummary {
            customer,
            vehicles: owned,
            total_maintenance_cost,
        })
    }

    /// Vehículos por encima del umbral de kilometraje configurado
    pub async fn vehicles_due_for_service(&self) -> Vec<Vehicle> {
        self.vehicles
            .read()
            .await
            .find_vehicles_needing_service(self.config.service_mileage_threshold)
    }

    pub async fn schedule_appointment(&self, appointment: Appointment) -> AppResult<Appointment> {
        self.appointments.write().await.schedule(appointment)
    }

    /// Confirmar un lote de citas; los ids desconocidos cuentan como error
    pub async fn confirm_appointments(&self, ids: &[Uuid]) -> Vec<Appointment> {
        let confirmed = self.appointments.write().await.confirm_batch(ids);
        info!(requested = ids.len(), confirmed = confirmed.len(), "Citas confirmadas");
        confirmed
    }

    pub async fn appointment_stats(&self) -> ProcessingStats {
        self.appointments.read().await.stats().clone()
    }
}
