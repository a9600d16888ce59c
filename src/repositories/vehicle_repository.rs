use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::models::{MaintenanceRecord, NewMaintenanceRecord, Vehicle};
use crate::utils::errors::{invalid_reference_error, validation_error, AppResult};

/// Repositorio en memoria de vehículos y su historial de mantenimiento.
///
/// Cada vehículo tiene una secuencia de registros en orden de alta (no por
/// `service_date`). Las consultas sobre un id desconocido devuelven vacío o
/// cero; solo crear un registro para un vehículo inexistente es un error.
#[derive(Debug, Default)]
pub struct VehicleRepository {
    vehicles: HashMap<Uuid, Vehicle>,
    maintenance_history: HashMap<Uuid, Vec<MaintenanceRecord>>,
}

impl VehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vehicle(
        &mut self,
        vin: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
    ) -> Vehicle {
        let vehicle = Vehicle::new(vin, make, model, year);
        let id = vehicle.id();

        self.vehicles.insert(id, vehicle.clone());
        self.maintenance_history.insert(id, Vec::new());

        info!(vehicle_id = %id, vin = %vehicle.vin, "Vehículo registrado");
        vehicle
    }

    pub fn get_vehicle(&self, id: Uuid) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    pub fn get_vehicle_mut(&mut self, id: Uuid) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(&id)
    }

    /// Vehículos cuyo `owner_id` coincide. Sin orden garantizado.
    pub fn get_vehicles_by_owner(&self, owner_id: Uuid) -> Vec<Vehicle> {
        self.vehicles
            .values()
            .filter(|v| v.owner_id == Some(owner_id))
            .cloned()
            .collect()
    }

    /// Todos los vehículos. Sin orden garantizado.
    pub fn get_all_vehicles(&self) -> Vec<Vehicle> {
        self.vehicles.values().cloned().collect()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn update_mileage(&mut self, id: Uuid, mileage: u32) -> bool {
        self.get_vehicle_mut(id)
            .map(|vehicle| vehicle.mileage = mileage)
            .is_some()
    }

    pub fn set_color(&mut self, id: Uuid, color: impl Into<String>) -> bool {
        self.get_vehicle_mut(id)
            .map(|vehicle| vehicle.color = Some(color.into()))
            .is_some()
    }

    /// Cambia el dueño. No verifica que el cliente exista.
    pub fn assign_owner(&mut self, id: Uuid, owner_id: Option<Uuid>) -> bool {
        self.get_vehicle_mut(id)
            .map(|vehicle| vehicle.owner_id = owner_id)
            .is_some()
    }

    /// Crea un registro con fecha = ahora y lo agrega al final del historial
    pub fn add_maintenance_record(
        &mut self,
        vehicle_id: Uuid,
        service_type: impl Into<String>,
    ) -> AppResult<MaintenanceRecord> {
        let record = MaintenanceRecord::new(vehicle_id, service_type);
        self.append_record(record)
    }

    /// Igual que `add_maintenance_record` pero con todos los campos del request
    pub fn add_maintenance_record_with(
        &mut self,
        vehicle_id: Uuid,
        request: NewMaintenanceRecord,
    ) -> AppResult<MaintenanceRecord> {
        request.validate()?;
        self.append_record(request.into_record(vehicle_id))
    }

    /// Acceso mutable a un registro. El costo solo cambia con `set_cost`.
    pub fn maintenance_record_mut(
        &mut self,
        vehicle_id: Uuid,
        record_id: Uuid,
    ) -> Option<&mut MaintenanceRecord> {
        self.maintenance_history
            .get_mut(&vehicle_id)?
            .iter_mut()
            .find(|record| record.id() == record_id)
    }

    /// Cambiar el costo de un registro existente.
    ///
    /// `Ok(false)` si el vehículo o el registro no existen; un costo negativo
    /// es `AppError::Validation` y el registro queda igual.
    pub fn set_cost(&mut self, vehicle_id: Uuid, record_id: Uuid, cost: Decimal) -> AppResult<bool> {
        let Some(record) = self.maintenance_record_mut(vehicle_id, record_id) else {
            return Ok(false);
        };
        if record.set_cost(cost).is_err() {
            warn!(record_id = %record_id, cost = %cost, "Costo de mantenimiento rechazado");
            return Err(validation_error("cost", "Cost must not be negative"));
        }

        debug!(record_id = %record_id, cost = %cost, "Costo de mantenimiento actualizado");
        Ok(true)
    }

    /// Copia del historial en orden de alta; vacío si el vehículo no existe
    pub fn get_maintenance_history(&self, vehicle_id: Uuid) -> Vec<MaintenanceRecord> {
        self.maintenance_history
            .get(&vehicle_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Suma de costos del historial; cero si el vehículo no existe
    pub fn get_total_maintenance_cost(&self, vehicle_id: Uuid) -> Decimal {
        self.maintenance_history
            .get(&vehicle_id)
            .map(|records| records.iter().map(MaintenanceRecord::cost).sum::<Decimal>())
            .unwrap_or(Decimal::ZERO)
    }

    /// Vehículos con kilometraje estrictamente mayor que `mileage_threshold`
    pub fn find_vehicles_needing_service(&self, mileage_threshold: u32) -> Vec<Vehicle> {
        let due: Vec<Vehicle> = self
            .vehicles
            .values()
            .filter(|v| v.mileage > mileage_threshold)
            .cloned()
            .collect();
        debug!(mileage_threshold, found = due.len(), "Vehículos que requieren servicio");
        due
    }

    fn append_record(&mut self, record: MaintenanceRecord) -> AppResult<MaintenanceRecord> {
        let vehicle_id = record.vehicle_id();
        if !self.vehicles.contains_key(&vehicle_id) {
            warn!(vehicle_id = %vehicle_id, "Registro de mantenimiento rechazado: vehículo inexistente");
            return Err(invalid_reference_error("Vehicle", &vehicle_id.to_string()));
        }

        self.maintenance_history
            .entry(vehicle_id)
            .or_default()
            .push(record.clone());

        info!(
            vehicle_id = %vehicle_id,
            record_id = %record.id(),
            service_type = %record.service_type,
            "Registro de mantenimiento agregado"
        );
        Ok(record)
    }
}
