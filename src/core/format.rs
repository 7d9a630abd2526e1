use crate::core::pad::pad;

/// Formats six date/time components as `YYYY-MM-DDTHH:MM:SS`.
///
/// Month, day, hour, minute and second are zero-padded to two digits; the
/// year is written as given. Nothing is validated, so `month = 13` or
/// `second = 99` come out as-is.
pub fn format_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> String {
    format!(
        "{}-{}-{}T{}:{}:{}",
        year,
        pad(month, 2),
        pad(day, 2),
        pad(hour, 2),
        pad(minute, 2),
        pad(second, 2)
    )
}
