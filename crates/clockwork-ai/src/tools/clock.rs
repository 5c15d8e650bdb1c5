//! Current wall-clock time lookup.

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

/// Structured result of the time tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentTime {
    pub status: String,
    /// Local time as `HH:MM` on a 24-hour clock.
    pub time: String,
}

/// Read the system clock.
pub fn get_current_time() -> CurrentTime {
    current_time_at(&Local::now())
}

pub fn current_time_at<Tz: TimeZone>(now: &DateTime<Tz>) -> CurrentTime
where
    Tz::Offset: std::fmt::Display,
{
    CurrentTime {
        status: "success".to_string(),
        time: now.format("%H:%M").to_string(),
    }
}
