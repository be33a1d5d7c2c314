use super::time::CLOCK_FORMAT;
use chrono::NaiveTime;

/// Renders fractional hours as `HH:MM`, keeping the sign of negative values.
///
/// ```rust
/// use shiftbook::libs::formatter::format_duration;
///
/// assert_eq!(format_duration(7.5), "07:30");
/// assert_eq!(format_duration(-0.25), "-00:15");
/// ```
pub fn format_duration(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { "-" } else { "" };
    let total_minutes = total_minutes.abs();
    format!("{}{:02}:{:02}", sign, total_minutes / 60, total_minutes % 60)
}

/// Renders hours with two decimals, e.g. `7.50`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

pub fn format_clock(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}
