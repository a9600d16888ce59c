use std::collections::HashMap;

use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{Address, Customer};

/// Repositorio en memoria de clientes.
///
/// Indexado por id, con una secuencia aparte que conserva el orden de alta
/// para `get_all` y las búsquedas.
#[derive(Debug, Default)]
pub struct CustomerRepository {
    customers: HashMap<Uuid, Customer>,
    order: Vec<Uuid>,
}

impl CustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Customer {
        let customer = Customer::new(first_name, last_name, email);
        let id = customer.id();

        self.customers.insert(id, customer.clone());
        self.order.push(id);

        info!(customer_id = %id, total = self.order.len(), "Cliente creado");
        customer
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<&Customer> {
        self.customers.get(&id)
    }

    pub fn find_by_id_mut(&mut self, id: Uuid) -> Option<&mut Customer> {
        self.customers.get_mut(&id)
    }

    /// Coincidencia exacta de email, sin distinguir mayúsculas
    pub fn find_by_email(&self, email: &str) -> Vec<Customer> {
        let needle = email.to_lowercase();
        self.filter_in_order(|c| c.email.to_lowercase() == needle)
    }

    /// Busca `term` dentro de "first_name last_name", sin distinguir mayúsculas
    pub fn search_by_name(&self, term: &str) -> Vec<Customer> {
        let needle = term.to_lowercase();
        let results = self.filter_in_order(|c| c.full_name().to_lowercase().contains(&needle));
        debug!(term, found = results.len(), "Búsqueda de clientes por nombre");
        results
    }

    /// Copia de todos los clientes en orden de alta
    pub fn get_all(&self) -> Vec<Customer> {
        self.filter_in_order(|_| true)
    }

    /// Sobrescribe nombre, apellido y email. No toca teléfono ni dirección.
    pub fn update(
        &mut self,
        id: Uuid,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> bool {
        match self.customers.get_mut(&id) {
            Some(customer) => {
                customer.first_name = first_name.into();
                customer.last_name = last_name.into();
                customer.email = email.into();
                info!(customer_id = %id, "Cliente actualizado");
                true
            }
            None => {
                debug!(customer_id = %id, "Actualización ignorada: cliente inexistente");
                false
            }
        }
    }

    /// Elimina el cliente. Sus vehículos no se tocan.
    pub fn delete(&mut self, id: Uuid) -> bool {
        if self.customers.remove(&id).is_none() {
            return false;
        }
        self.order.retain(|existing| *existing != id);
        info!(customer_id = %id, total = self.order.len(), "Cliente eliminado");
        true
    }

    pub fn set_phone(&mut self, id: Uuid, phone: impl Into<String>) -> bool {
        self.find_by_id_mut(id)
            .map(|customer| customer.phone = Some(phone.into()))
            .is_some()
    }

    pub fn set_address(&mut self, id: Uuid, address: Address) -> bool {
        self.find_by_id_mut(id)
            .map(|customer| customer.address = Some(address))
            .is_some()
    }

    /// Agrega `vehicle_id` a la lista del cliente. No valida el vehículo.
    pub fn link_vehicle(&mut self, id: Uuid, vehicle_id: Uuid) -> bool {
        self.find_by_id_mut(id)
            .map(|customer| customer.add_vehicle(vehicle_id))
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn filter_in_order<F>(&self, predicate: F) -> Vec<Customer>
    where
        F: Fn(&Customer) -> bool,
    {
        self.order
            .iter()
            .filter_map(|id| self.customers.get(id))
            .filter(|customer| predicate(customer))
            .cloned()
            .collect()
    }
}
