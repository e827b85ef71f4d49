//! Utilities for date and time formatting
//!
//! Provides consistent date formatting across the site
use chrono::{DateTime, Utc};

/// Format a timestamp as DD/MM/YYYY
/// Example: 2024-03-15T14:02:26Z -> "15/03/2024"
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%d/%m/%Y").to_string()
}

/// Same as [`format_date`] with a dash for missing timestamps
pub fn format_optional_date(at: Option<&DateTime<Utc>>) -> String {
    at.map(format_date).unwrap_or_else(|| "\u{2014}".to_string())
}

/// Human-readable byte size for attachment lists
/// Example: 1536 -> "1.5 KB"
pub fn format_size(bytes: f64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes.max(0.0);
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", value as u64, UNITS[unit])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let at: DateTime<Utc> = "2024-03-15T14:02:26.123Z".parse().unwrap();
        assert_eq!(format_date(&at), "15/03/2024");
    }

    #[test]
    fn test_missing_date() {
        assert_eq!(format_optional_date(None), "\u{2014}");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512.0), "512 B");
        assert_eq!(format_size(1536.0), "1.5 KB");
        assert_eq!(format_size(5.0 * 1024.0 * 1024.0), "5.0 MB");
    }
}
