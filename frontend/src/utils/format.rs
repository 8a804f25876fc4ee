use chrono::{NaiveDate, NaiveTime};

/// en-US dollar amount with thousands separators, e.g. `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// `2025-01-10` (optionally followed by a time) to `Jan 10, 2025`.
pub fn format_date(value: &str) -> Option<String> {
    let day = value.trim().get(..10)?;
    let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()?;
    Some(date.format("%b %-d, %Y").to_string())
}

/// `14:05` or `14:05:00` to `2:05 PM`.
pub fn format_time(value: &str) -> Option<String> {
    let value = value.trim();
    let time = NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()?;
    Some(time.format("%-I:%M %p").to_string())
}

/// Shortest form of a number of hours, as a browser prints it (`8`, `7.5`).
pub fn hours_display(hours: f64) -> String {
    format!("{}", hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-3.0), "-$3.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn dates_render_as_short_month() {
        assert_eq!(format_date("2025-01-10").as_deref(), Some("Jan 10, 2025"));
        assert_eq!(
            format_date("2024-12-03T08:00:00").as_deref(),
            Some("Dec 3, 2024")
        );
        assert_eq!(format_date("10/01/2025"), None);
    }

    #[test]
    fn times_render_in_twelve_hour_clock() {
        assert_eq!(format_time("14:05:00").as_deref(), Some("2:05 PM"));
        assert_eq!(format_time("09:30").as_deref(), Some("9:30 AM"));
        assert_eq!(format_time("00:15").as_deref(), Some("12:15 AM"));
        assert_eq!(format_time("late"), None);
    }

    #[test]
    fn hours_drop_trailing_zero_fraction() {
        assert_eq!(hours_display(8.0), "8");
        assert_eq!(hours_display(7.25), "7.25");
    }
}
