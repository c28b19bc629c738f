//! Age range text shown on a group's profile.

use chrono::NaiveDate;

pub const AGE_GAP_PLACEHOLDER: &str = "...";

/// Summarize member ages on `today` from `YYYY-MM-DD` birthdays.
///
/// Dates that fail to parse, or lie after `today`, are ignored.
pub fn age_gap_text(birthdays: &[String], today: NaiveDate) -> String {
    let ages: Vec<u32> = birthdays
        .iter()
        .filter_map(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
        .filter_map(|birthday| today.years_since(birthday))
        .collect();

    match (ages.iter().min(), ages.iter().max()) {
        (Some(min), Some(max)) if min == max => format!("{min} years"),
        (Some(min), Some(max)) => format!("{min}-{max} years"),
        _ => AGE_GAP_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn dates(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn range_from_youngest_to_oldest() {
        let text = age_gap_text(&dates(&["2000-06-15", "1990-06-16", "1995-01-01"]), today());
        assert_eq!(text, "24-33 years");
    }

    #[test]
    fn single_age_is_not_a_range() {
        assert_eq!(age_gap_text(&dates(&["2001-03-02", "2001-05-30"]), today()), "23 years");
    }

    #[test]
    fn unusable_dates_give_placeholder() {
        assert_eq!(age_gap_text(&[], today()), "...");
        assert_eq!(age_gap_text(&dates(&["not a date", "2030-01-01"]), today()), "...");
    }
}
