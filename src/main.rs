use std::str::FromStr;

use anyhow::Result;
use dotenvy::dotenv;
use rust_decimal::Decimal;
use tracing::{info, warn};

use autoshop_records::config::environment::EnvironmentConfig;
use autoshop_records::models::{Address, Appointment, NewCustomer, NewMaintenanceRecord, NewVehicle};
use autoshop_records::utils::dates;
use autoshop_records::ShopState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🔧 Auto Shop Records - entorno '{}'", config.environment);

    let state = ShopState::new(config);

    // Clientes
    let john = state
        .register_customer(
            NewCustomer::new("John", "Smith", "john.smith@email.com")
                .with_phone("555-0101")
                .with_address(Address::new("123 Main St", "Springfield", "IL", "62701")),
        )
        .await?;
    let sarah = state
        .register_customer(
            NewCustomer::new("Sarah", "Johnson", "sarah.j@email.com")
                .with_phone("555-0102")
                .with_address(Address::new("456 Oak Ave", "Springfield", "IL", "62702")),
        )
        .await?;

    // Vehículos
    let accord = state
        .register_vehicle(
            NewVehicle::new("1HGCM82633A123456", "Honda", "Accord", 2020)
                .with_color("Silver")
                .with_mileage(45000),
        )
        .await?;
    let f150 = state
        .register_vehicle(
            NewVehicle::new("1FTFW1ET5EFC12345", "Ford", "F-150", 2019)
                .with_color("Blue")
                .with_mileage(62000),
        )
        .await?;
    let highlander = state
        .register_vehicle(
            NewVehicle::new("5TDJKRFH0HS123456", "Toyota", "Highlander", 2021)
                .with_color("White")
                .with_mileage(28000),
        )
        .await?;

    state.assign_vehicle(john.id(), accord.id()).await?;
    state.assign_vehicle(sarah.id(), f150.id()).await?;
    state.assign_vehicle(john.id(), highlander.id()).await?;

    // Mantenimiento
    state
        .record_service(
            accord.id(),
            NewMaintenanceRecord::new("Oil Change", Decimal::from_str("45.99")?)
                .with_mileage(45000)
                .with_technician("Mike Johnson")
                .with_description("Regular oil change with synthetic oil"),
        )
        .await?;
    state
        .record_service(
            accord.id(),
            NewMaintenanceRecord::new("Brake Inspection", Decimal::from_str("89.99")?)
                .with_mileage(45000)
                .with_technician("Sarah Smith"),
        )
        .await?;
    state
        .record_service(
            f150.id(),
            NewMaintenanceRecord::new("Tire Rotation", Decimal::from_str("35.00")?)
                .with_mileage(62000)
                .with_technician("Mike Johnson"),
        )
        .await?;

    for vehicle in state.vehicles_due_for_service().await {
        info!("🚗 Requiere servicio: {} ({} millas)", vehicle.display_name(), vehicle.mileage);
    }

    // Citas
    let upcoming = Appointment::new("Jane Smith", "Oil Change", dates::add_days(dates::now(), 3))
        .with_vehicle_info("2021 Honda Accord");
    let scheduled = state.schedule_appointment(upcoming).await?;
    if let Some(date) = scheduled.scheduled_date {
        info!("📅 Cita agendada para {}", dates::format_for_display(date));
    }

    let late = Appointment::new("John Doe", "Brake Service", dates::add_days(dates::now(), -1));
    if let Err(e) = state.schedule_appointment(late).await {
        warn!("❌ Cita rechazada: {}", e);
    }

    let confirmed = state.confirm_appointments(&[scheduled.id()]).await;
    info!("✅ {} cita(s) confirmadas", confirmed.len());
    println!("{}", serde_json::to_string_pretty(&state.appointment_stats().await)?);

    let now = dates::now();
    if let Some(two_days_ago) = dates::add_days(now, -2) {
        let business_hours = dates::calculate_business_hours(two_days_ago, now);
        info!("⏱️ Horas laborables en los últimos 2 días: {}", business_hours);
    }

    // Resúmenes
    for customer_id in [john.id(), sarah.id()] {
        if let Some(summary) = state.customer_summary(customer_id).await {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    info!("👋 Demostración terminada");
    Ok(())
}
