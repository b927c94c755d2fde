use chrono::{Datelike, Days, NaiveDate};

/// Abbreviate a view count the way the leaderboard displays it.
///
/// Counts are truncated, not rounded: `15000` is `"1만"`, `9999` is `"9천"`.
pub fn format_view_count(count: u64) -> String {
    if count >= 10_000 {
        format!("{}만", count / 10_000)
    } else if count >= 1_000 {
        format!("{}천", count / 1_000)
    } else {
        count.to_string()
    }
}

/// The Monday on or before `date`. Sunday belongs to the week that started
/// six days earlier.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_format_view_count_boundaries() {
        assert_eq!(format_view_count(0), "0");
        assert_eq!(format_view_count(999), "999");
        assert_eq!(format_view_count(1000), "1천");
        assert_eq!(format_view_count(9999), "9천");
        assert_eq!(format_view_count(10000), "1만");
        assert_eq!(format_view_count(15000), "1만");
        assert_eq!(format_view_count(1_234_567), "123만");
    }

    #[test]
    fn test_week_start_mid_week() {
        // 2024-05-08 is a Wednesday.
        assert_eq!(week_start(day("2024-05-08")), day("2024-05-06"));
        assert_eq!(week_start(day("2024-05-06")), day("2024-05-06"));
        assert_eq!(week_start(day("2024-05-06")).to_string(), "2024-05-06");
    }

    #[test]
    fn test_week_start_sunday_closes_week() {
        // 2024-05-12 is a Sunday; the following Monday is 2024-05-13.
        let sunday = day("2024-05-12");
        assert_eq!(week_start(sunday), day("2024-05-06"));
        let next_monday = day("2024-05-13");
        assert_eq!(
            week_start(sunday),
            week_start(next_monday.checked_sub_days(Days::new(6)).unwrap())
        );
        assert_ne!(week_start(sunday), week_start(next_monday));
    }

    #[test]
    fn test_week_start_stable_within_week() {
        let monday = day("2023-12-25");
        for offset in 0..7 {
            let date = monday.checked_add_days(Days::new(offset)).unwrap();
            assert_eq!(week_start(date), monday, "{date}");
        }
        // Crosses the year boundary.
        assert_eq!(week_start(day("2024-01-01")), day("2024-01-01"));
        assert_eq!(week_start(day("2023-12-31")), monday);
    }
}
