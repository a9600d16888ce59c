//! Utilidades de fecha y hora
//!
//! Funciones puras sobre `NaiveDateTime` (hora local del taller, sin zona).
//! Solo `is_past`, `is_future` y `current_timestamp` consultan el reloj.

use chrono::{
    DateTime, Datelike, Days, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Timelike, Utc, Weekday,
};

use crate::utils::errors::AppResult;

/// Formato ISO local (`2024-01-15T14:30:00`)
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Formato de presentación (`Jan 15, 2024 02:30 PM`)
pub const DISPLAY_FORMAT: &str = "%b %d, %Y %I:%M %p";

/// Primera hora laboral (inclusive)
pub const BUSINESS_OPEN_HOUR: u32 = 9;

/// Hora de cierre (exclusiva)
pub const BUSINESS_CLOSE_HOUR: u32 = 17;

/// Hora local actual
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Convertir un instante UTC a hora local
pub fn to_local_date_time(instant: DateTime<Utc>) -> NaiveDateTime {
    instant.with_timezone(&Local).naive_local()
}

/// Convertir hora local a instante UTC.
///
/// Devuelve `None` si la hora local no existe (salto de horario de verano);
/// si es ambigua se toma el instante más temprano.
pub fn to_utc(date_time: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&date_time)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Formatear para mostrar al usuario
pub fn format_for_display(date_time: NaiveDateTime) -> String {
    date_time.format(DISPLAY_FORMAT).to_string()
}

/// Formatear en ISO local
pub fn format_iso(date_time: NaiveDateTime) -> String {
    date_time.format(ISO_FORMAT).to_string()
}

/// Parsear un string ISO local (`2024-01-15T14:30:00`, fracciones opcionales)
pub fn parse_iso_string(value: &str) -> AppResult<NaiveDateTime> {
    Ok(value.trim().parse::<NaiveDateTime>()?)
}

/// Timestamp actual en formato ISO
pub fn current_timestamp() -> String {
    format_iso(now())
}

pub fn is_past(date_time: NaiveDateTime) -> bool {
    is_past_at(date_time, now())
}

pub fn is_future(date_time: NaiveDateTime) -> bool {
    is_future_at(date_time, now())
}

/// `date_time` estrictamente anterior a `reference`
pub fn is_past_at(date_time: NaiveDateTime, reference: NaiveDateTime) -> bool {
    date_time < reference
}

/// `date_time` estrictamente posterior a `reference`
pub fn is_future_at(date_time: NaiveDateTime, reference: NaiveDateTime) -> bool {
    date_time > reference
}

/// Días completos entre dos fechas (trunca hacia cero, puede ser negativo)
pub fn days_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_days()
}

/// Sumar días de calendario (acepta valores negativos).
///
/// `None` si el resultado sale del rango representable.
pub fn add_days(date_time: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    let delta = Days::new(days.unsigned_abs());
    if days >= 0 {
        date_time.checked_add_days(delta)
    } else {
        date_time.checked_sub_days(delta)
    }
}

/// Medianoche del mismo día
pub fn start_of_day(date_time: NaiveDateTime) -> NaiveDateTime {
    date_time.date().and_time(NaiveTime::MIN)
}

/// Último instante representable del mismo día (23:59:59.999999999)
pub fn end_of_day(date_time: NaiveDateTime) -> NaiveDateTime {
    // La resta sobre NaiveTime da la vuelta: 00:00 - 1ns = 23:59:59.999999999
    date_time.date().and_time(NaiveTime::MIN - Duration::nanoseconds(1))
}

pub fn is_same_day(first: NaiveDateTime, second: NaiveDateTime) -> bool {
    first.date() == second.date()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Calcular horas laborables (lunes a viernes, 9:00 a 17:00) entre dos fechas.
///
/// Recorre el intervalo `[start, end)` hora por hora desde `start` y cuenta
/// cada paso cuya hora de inicio cae en día laborable y en `[9, 17)`.
/// El recorrido es lineal en el número de horas; no hay fórmula cerrada.
pub fn calculate_business_hours(start: NaiveDateTime, end: NaiveDateTime) -> u64 {
    let mut hours = 0;
    let mut current = start;

    while current < end {
        if !is_weekend(current.date())
            && (BUSINESS_OPEN_HOUR..BUSINESS_CLOSE_HOUR).contains(&current.hour())
        {
            hours += 1;
        }
        match current.checked_add_signed(Duration::hours(1)) {
            Some(next) => current = next,
            None => break,
        }
    }

    hours
}

/// Días laborables en el rango de fechas inclusivo `[start, end]`
pub fn count_business_days(start: NaiveDate, end: NaiveDate) -> u32 {
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| !is_weekend(*day))
        .count() as u32
}

/// Siguiente día laborable estrictamente posterior a `date`
pub fn next_business_day(date: NaiveDate) -> NaiveDate {
    date.iter_days()
        .skip(1)
        .find(|day| !is_weekend(*day))
        .unwrap_or(date)
}
