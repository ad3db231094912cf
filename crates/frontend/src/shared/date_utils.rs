/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};

const MESES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Разбор времени из API: RFC 3339 или локальное время без смещения
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Format API timestamp as a long Spanish date with time
/// Example: "2024-03-15T14:02:26.123" -> "15 de marzo de 2024, 14:02"
pub fn format_long_datetime_es(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => format!(
            "{} de {} de {}, {:02}:{:02}",
            dt.day(),
            MESES[dt.month0() as usize],
            dt.year(),
            dt.hour(),
            dt.minute()
        ),
        None => value.to_string(),
    }
}

/// Format ISO datetime string to DD/MM/YYYY HH:MM
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long_datetime_es() {
        assert_eq!(
            format_long_datetime_es("2024-03-15T14:02:26.123"),
            "15 de marzo de 2024, 14:02"
        );
        assert_eq!(
            format_long_datetime_es("2024-12-01T08:05:00Z"),
            "1 de diciembre de 2024, 08:05"
        );
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-03-15T09:30"), "15/03/2024 09:30");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_long_datetime_es("invalid"), "invalid");
        assert_eq!(format_datetime(""), "");
    }
}
