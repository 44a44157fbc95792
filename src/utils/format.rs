//! Formatting utilities for display strings.

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Wall-clock time in the browser's local time zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalTime {
    pub year: u32,
    /// 1-12
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl LocalTime {
    /// Current local time from the JavaScript clock.
    pub fn now() -> Self {
        let date = js_sys::Date::new_0();
        Self {
            year: date.get_full_year(),
            month: date.get_month() + 1,
            day: date.get_date(),
            hour: date.get_hours(),
            minute: date.get_minutes(),
        }
    }
}

/// Format a timestamp for the page footer (e.g., "October 19, 2026, 09:05").
pub fn format_last_updated(time: &LocalTime) -> String {
    let month = time
        .month
        .checked_sub(1)
        .and_then(|i| MONTHS.get(i as usize))
        .copied()
        .unwrap_or("?");
    format!(
        "{} {}, {}, {:02}:{:02}",
        month, time.day, time.year, time.hour, time.minute
    )
}
