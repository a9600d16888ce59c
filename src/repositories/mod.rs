//! Repositorios en memoria
//! 
//! Cada repositorio es dueño de su colección y se modifica con `&mut self`.
//! La serialización entre lectores y escritores la pone `ShopState`.

pub mod appointment_repository;
pub mod customer_repository;
pub mod vehicle_repository;

pub use appointment_repository::AppointmentRepository;
pub use customer_repository::CustomerRepository;
pub use vehicle_repository::VehicleRepository;
