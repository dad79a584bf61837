//! Destination key derivation

use chrono::{Datelike, NaiveDate};

/// Build the date-prefixed destination key for a file base name.
///
/// The prefix renders as unpadded year, full English month name, and
/// unpadded day, e.g. `2026August5/photo.png`. Keys have day granularity
/// only: same-day uploads of identically named files overwrite each other.
pub fn destination_key(date: NaiveDate, base_name: &str) -> String {
    format!(
        "{}{}{}/{}",
        date.year(),
        date.format("%B"),
        date.day(),
        base_name
    )
}
