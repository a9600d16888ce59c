//! Registros del taller
//! 
//! Clientes, vehículos, historial de mantenimiento y citas en memoria,
//! con las reglas de agenda y los cálculos de horas laborables.

pub mod config;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;
pub mod utils;

pub use state::{CustomerSummary, ShopState};
pub use utils::errors::{AppError, AppResult};
