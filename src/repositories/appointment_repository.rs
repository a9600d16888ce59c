use std::time::Instant;

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::{Appointment, ProcessingStats, CONFIRMED_STATUS};
use crate::services::AppointmentValidator;
use crate::utils::dates;
use crate::utils::errors::{AppError, AppResult};

/// Agenda en memoria. Solo acepta citas que pasan `AppointmentValidator`.
#[derive(Debug, Default)]
pub struct AppointmentRepository {
    validator: AppointmentValidator,
    appointments: Vec<Appointment>,
    stats: ProcessingStats,
}

impl AppointmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validar y guardar la cita. Una cita inválida no se guarda.
    pub fn schedule(&mut self, appointment: Appointment) -> AppResult<Appointment> {
        let result = self.validator.validate_appointment(&appointment);
        if !result.is_valid() {
            warn!(
                appointment_id = %appointment.id(),
                errors = ?result.errors,
                "Cita rechazada"
            );
            return Err(AppError::InvalidAppointment(result.errors));
        }

        self.appointments.push(appointment.clone());
        info!(
            appointment_id = %appointment.id(),
            service_type = %appointment.service_type,
            "Cita agendada"
        );
        Ok(appointment)
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id() == id)
    }

    pub fn get_all(&self) -> Vec<Appointment> {
        self.appointments.clone()
    }

    pub fn find_by_status(&self, status: &str) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.status == status)
            .cloned()
            .collect()
    }

    /// Coincidencia exacta de nombre, sin distinguir mayúsculas
    pub fn find_by_customer_name(&self, customer_name: &str) -> Vec<Appointment> {
        let needle = customer_name.trim().to_lowercase();
        self.appointments
            .iter()
            .filter(|a| a.customer_name.trim().to_lowercase() == needle)
            .cloned()
            .collect()
    }

    pub fn update_status(&mut self, id: Uuid, status: impl Into<String>) -> bool {
        match self.appointments.iter_mut().find(|a| a.id() == id) {
            Some(appointment) => {
                appointment.status = status.into();
                info!(appointment_id = %id, status = %appointment.status, "Estado de cita actualizado");
                true
            }
            None => false,
        }
    }

    /// Confirmar un lote de citas con la hora local actual
    pub fn confirm_batch(&mut self, ids: &[Uuid]) -> Vec<Appointment> {
        self.confirm_batch_at(ids, dates::now())
    }

    /// Confirmar cada cita del lote: estado "confirmed" y `processed_at = processed_at`.
    ///
    /// Devuelve las citas confirmadas en el orden del lote. Un id desconocido
    /// se cuenta como error en las estadísticas y se omite.
    pub fn confirm_batch_at(&mut self, ids: &[Uuid], processed_at: NaiveDateTime) -> Vec<Appointment> {
        let mut confirmed = Vec::with_capacity(ids.len());

        for &id in ids {
            let start = Instant::now();
            match self.appointments.iter_mut().find(|a| a.id() == id) {
                Some(appointment) => {
                    appointment.status = CONFIRMED_STATUS.to_string();
                    appointment.processed_at = Some(processed_at);
                    confirmed.push(appointment.clone());
                    self.stats
                        .record_processed(start.elapsed().as_secs_f64() * 1000.0);
                }
                None => {
                    warn!(appointment_id = %id, "Confirmación omitida: cita inexistente");
                    self.stats.record_error();
                }
            }
        }

        debug!(
            requested = ids.len(),
            confirmed = confirmed.len(),
            total_processed = self.stats.total_processed,
            "Lote de citas procesado"
        );
        confirmed
    }

    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.appointments.len();
        self.appointments.retain(|a| a.id() != id);
        before != self.appointments.len()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_STATUS;
    use crate::services::appointment_validation::{CUSTOMER_NAME_REQUIRED, SCHEDULED_DATE_IN_PAST};

    fn in_days(days: i64) -> Option<NaiveDateTime> {
        dates::add_days(dates::now(), days)
    }

    #[test]
    fn test_schedule_valid_appointment() {
        let mut repo = AppointmentRepository::new();
        let appointment = Appointment::new("Jane Smith", "Oil Change", in_days(3))
            .with_vehicle_info("2021 Honda Accord");

        let stored = repo.schedule(appointment.clone()).unwrap();
        assert_eq!(stored, appointment);
        assert_eq!(repo.find_by_id(appointment.id()), Some(&appointment));
        assert_eq!(repo.find_by_status("pending").len(), 1);
    }

    #[test]
    fn test_schedule_rejects_invalid_appointment() {
        let mut repo = AppointmentRepository::new();

        let err = repo
            .schedule(Appointment::new("John Doe", "Brake Service", in_days(-1)))
            .unwrap_err();
        match err {
            AppError::InvalidAppointment(errors) => {
                assert_eq!(errors, vec![SCHEDULED_DATE_IN_PAST.to_string()]);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let err = repo
            .schedule(Appointment::new("", "Brake Service", in_days(1)))
            .unwrap_err();
        assert!(err.to_string().contains(CUSTOMER_NAME_REQUIRED));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_status_updates_and_delete() {
        let mut repo = AppointmentRepository::new();
        let first = repo.schedule(Appointment::new("Jane Smith", "Oil Change", in_days(1))).unwrap();
        let second = repo.schedule(Appointment::new("jane smith ", "Alignment", in_days(2))).unwrap();

        assert!(repo.update_status(first.id(), "confirmed"));
        assert!(!repo.update_status(Uuid::new_v4(), "confirmed"));
        assert_eq!(repo.find_by_status("confirmed")[0].id(), first.id());
        assert_eq!(repo.find_by_status("pending")[0].id(), second.id());
        assert_eq!(repo.find_by_customer_name("Jane Smith").len(), 2);

        assert!(repo.delete(first.id()));
        assert!(!repo.delete(first.id()));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get_all()[0].id(), second.id());
    }

    #[test]
    fn test_confirm_batch_updates_status_and_stats() {
        let mut repo = AppointmentRepository::new();
        let alice = repo.schedule(Appointment::new("Alice Johnson", "Oil Change", in_days(1))).unwrap();
        let bob = repo.schedule(Appointment::new("Bob Wilson", "Brake Inspection", in_days(2))).unwrap();
        let carol = repo.schedule(Appointment::new("Carol Davis", "Tire Rotation", in_days(3))).unwrap();
        let processed_at = dates::now();

        let confirmed = repo.confirm_batch_at(&[carol.id(), Uuid::new_v4(), alice.id()], processed_at);

        let ids: Vec<Uuid> = confirmed.iter().map(Appointment::id).collect();
        assert_eq!(ids, vec![carol.id(), alice.id()]);
        assert!(confirmed
            .iter()
            .all(|a| a.status == CONFIRMED_STATUS && a.processed_at == Some(processed_at)));

        let untouched = repo.find_by_id(bob.id()).unwrap();
        assert_eq!(untouched.status, DEFAULT_STATUS);
        assert!(untouched.processed_at.is_none());
        assert_eq!(repo.find_by_status(CONFIRMED_STATUS).len(), 2);

        let stats = repo.stats();
        assert_eq!(stats.total_processed, 2);
        assert_eq!(stats.errors, 1);
        assert!(stats.average_time_ms >= 0.0);
    }

    #[test]
    fn test_stats_accumulate_across_batches() {
        let mut repo = AppointmentRepository::new();
        let alice = repo.schedule(Appointment::new("Alice Johnson", "Oil Change", in_days(1))).unwrap();

        assert!(repo.confirm_batch(&[]).is_empty());
        assert_eq!(repo.stats(), &ProcessingStats::default());

        repo.confirm_batch(&[alice.id()]);
        repo.confirm_batch(&[alice.id(), Uuid::new_v4(), Uuid::new_v4()]);

        assert_eq!(repo.stats().total_processed, 2);
        assert_eq!(repo.stats().errors, 2);
    }
}
