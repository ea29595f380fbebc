use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

/// Convert an epoch in seconds to a local, offset-free ISO-8601 string
///
/// Whole seconds render as `2024-01-15T10:30:00`; fractional seconds add
/// microseconds (`2024-01-15T10:30:00.250000`). Returns `None` for NaN,
/// infinities, and instants outside years 1 through 9999.
pub fn epoch_to_iso(epoch_secs: f64) -> Option<String> {
    epoch_to_iso_in(epoch_secs, &Local)
}

/// [`epoch_to_iso`] rendered in an explicit timezone
pub fn epoch_to_iso_in<Tz: TimeZone>(epoch_secs: f64, tz: &Tz) -> Option<String> {
    if !epoch_secs.is_finite() {
        return None;
    }

    let micros = (epoch_secs * 1_000_000.0).round();
    if micros < i64::MIN as f64 || micros > i64::MAX as f64 {
        return None;
    }

    let micros = micros as i64;
    let secs = micros.div_euclid(1_000_000);
    let nanos = (micros.rem_euclid(1_000_000) * 1_000) as u32;
    let instant = DateTime::from_timestamp(secs, nanos)?;
    let naive = instant.with_timezone(tz).naive_local();
    if !(1..=9999).contains(&naive.year()) {
        return None;
    }

    let formatted = if naive.nanosecond() == 0 {
        naive.format("%Y-%m-%dT%H:%M:%S")
    } else {
        naive.format("%Y-%m-%dT%H:%M:%S%.6f")
    };
    Some(formatted.to_string())
}
