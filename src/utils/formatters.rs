// Formatting utilities

use chrono::{DateTime, Utc};

/// Render epoch seconds as UTC `YYYY-MM-DD HH:MM:SS`.
/// Returns None for out-of-range values.
pub fn format_timestamp(epoch_secs: i64) -> Option<String> {
    let dt: DateTime<Utc> = DateTime::from_timestamp(epoch_secs, 0)?;
    Some(dt.format("%Y-%m-%d %H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp(1609459200).as_deref(),
            Some("2021-01-01 00:00:00")
        );
        assert_eq!(format_timestamp(0).as_deref(), Some("1970-01-01 00:00:00"));
    }

    #[test]
    fn test_format_timestamp_out_of_range() {
        assert_eq!(format_timestamp(i64::MAX), None);
    }
}
