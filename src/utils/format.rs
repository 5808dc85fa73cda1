//! Display formatting helpers for page sections.

use crate::models::TimePeriod;

/// `"Dec 2020 - Nov 2022"`.
pub fn format_period(period: &TimePeriod) -> String {
    format!("{} - {}", period.start, period.end)
}

/// Compact years-of-experience label (`3` -> `"3y"`).
pub fn format_years(years: u8) -> String {
    format!("{}y", years)
}

/// Overflow label for truncated lists (`"+2 more"`), `None` when nothing is hidden.
pub fn format_overflow(hidden: usize) -> Option<String> {
    (hidden > 0).then(|| format!("+{} more", hidden))
}

/// Footer copyright line.
pub fn format_copyright(year: u32, name: &str) -> String {
    format!("© {} {}. All rights reserved.", year, name)
}

/// Browser tab title.
pub fn format_document_title(name: &str, title: &str) -> String {
    format!("{} - {}", name, title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_period() {
        let period = TimePeriod {
            start: "Dec 2024".to_string(),
            end: "Present".to_string(),
        };
        assert_eq!(format_period(&period), "Dec 2024 - Present");
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(0), "0y");
        assert_eq!(format_years(12), "12y");
    }

    #[test]
    fn test_format_overflow() {
        assert_eq!(format_overflow(0), None);
        assert_eq!(format_overflow(3).as_deref(), Some("+3 more"));
    }

    #[test]
    fn test_format_copyright() {
        assert_eq!(
            format_copyright(2026, "Ada"),
            "© 2026 Ada. All rights reserved."
        );
    }

    #[test]
    fn test_format_document_title() {
        assert_eq!(
            format_document_title("Ada", "Engineer"),
            "Ada - Engineer"
        );
    }
}
