//! Builders for domain primitives.

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::domain::time::taipei;
use crate::domain::{IndexReading, RecipientId};

/// 2024-03-01 09:00 UTC+8, the reference instant used across tests.
pub fn reference_time() -> DateTime<FixedOffset> {
    taipei()
        .with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
        .single()
        .expect("valid reference time")
}

/// A reading with the label derived from the value, as the provider does.
pub fn reading(value: f64) -> IndexReading {
    IndexReading::try_new(value, classify(value), reference_time()).expect("valid test reading")
}

/// A recipient id.
pub fn recipient(id: &str) -> RecipientId {
    RecipientId::try_new(id).expect("valid test recipient")
}

fn classify(value: f64) -> &'static str {
    match value {
        v if v < 25.0 => "Extreme Fear",
        v if v < 47.0 => "Fear",
        v if v < 55.0 => "Neutral",
        v if v < 75.0 => "Greed",
        _ => "Extreme Greed",
    }
}
