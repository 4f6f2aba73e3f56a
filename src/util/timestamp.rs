use chrono::{Local, SecondsFormat};

#[inline(always)]
pub fn timestamp_now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("Invalid current time")
        .as_millis() as u64
}

/// Current local time as ISO-8601 with the UTC offset, e.g. `2024-03-01T10:20:30+01:00`.
pub fn iso8601_now() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}
