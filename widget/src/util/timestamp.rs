//! Message timestamp labels (`MM-DD HH:MM:SS`, local time).

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

/// Broken-down local time. `month` is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalTime {
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

pub fn format_timestamp(t: LocalTime) -> String {
    format!("{:02}-{:02} {:02}:{:02}:{:02}", t.month, t.day, t.hour, t.minute, t.second)
}

/// Label for "now" in the browser's local time zone.
#[cfg(feature = "csr")]
pub fn now_label() -> String {
    let now = js_sys::Date::new_0();
    format_timestamp(LocalTime {
        month: now.get_month() + 1,
        day: now.get_date(),
        hour: now.get_hours(),
        minute: now.get_minutes(),
        second: now.get_seconds(),
    })
}

/// Native builds have no local clock source; tests pass explicit labels.
#[cfg(not(feature = "csr"))]
pub fn now_label() -> String {
    format_timestamp(LocalTime { month: 1, day: 1, hour: 0, minute: 0, second: 0 })
}
