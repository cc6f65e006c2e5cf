/// Utilities for date formatting shared by the event views.

/// Format an ISO date string to DD.MM.YYYY.
/// Example: "2026-09-01" or "2026-09-01T18:00:00Z" -> "01.09.2026"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// The date part of an ISO datetime, as `<input type="date">` expects it.
pub fn date_input_value(date_str: &str) -> String {
    date_str.split('T').next().unwrap_or(date_str).to_string()
}

/// Today as YYYY-MM-DD, used as the lower bound of date pickers.
pub fn today_iso() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-09-01"), "01.09.2026");
        assert_eq!(format_date("2026-09-01T18:00:00Z"), "01.09.2026");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_date_input_value() {
        assert_eq!(date_input_value("2026-09-01T18:00:00Z"), "2026-09-01");
        assert_eq!(date_input_value("2026-09-01"), "2026-09-01");
    }
}
