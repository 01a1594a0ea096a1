//! Named value transformations.
//!
//! Every transformation takes the raw source values of a rule, in
//! `xml_fields` order, and never fails: unparsable input falls back to a
//! documented value instead of aborting the record.

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use patmap_model::{INVALID_AGE, ResolvedValue};

use crate::context::ResolutionContext;

const DOB_FORMAT: &str = "%Y-%m-%d";

/// First source value, or `""` when the rule lists no source fields.
pub(crate) fn first_value(values: &[String]) -> &str {
    values.first().map(String::as_str).unwrap_or("")
}

/// Parse the first value as a base-10 integer; keep the raw string on failure.
pub fn to_int(values: &[String], _context: &ResolutionContext) -> ResolvedValue {
    let raw = first_value(values);
    match raw.parse::<i64>() {
        Ok(n) => ResolvedValue::Integer(n),
        Err(_) => ResolvedValue::String(raw.to_string()),
    }
}

/// Join all values with a single space.
pub fn concat_strings(values: &[String], _context: &ResolutionContext) -> ResolvedValue {
    ResolvedValue::String(values.join(" "))
}

/// Age in whole years from a `YYYY-MM-DD` date of birth.
///
/// Unparsable dates yield [`INVALID_AGE`] and a warning.
pub fn age_from_dob(values: &[String], context: &ResolutionContext) -> ResolvedValue {
    let dob = first_value(values);
    match calculate_age(dob, context.today) {
        Some(age) => ResolvedValue::Integer(age),
        None => {
            warn!(
                value = context.redact(dob),
                expected_format = "YYYY-MM-DD",
                "error parsing date of birth"
            );
            ResolvedValue::Integer(INVALID_AGE)
        }
    }
}

/// Year difference between `today` and `dob`, minus one when today's
/// day-of-year is before the birth day-of-year.
pub fn calculate_age(dob: &str, today: NaiveDate) -> Option<i64> {
    if !is_strict_iso_date(dob) {
        return None;
    }
    let birth = NaiveDate::parse_from_str(dob, DOB_FORMAT).ok()?;
    let mut age = i64::from(today.year() - birth.year());
    if today.ordinal() < birth.ordinal() {
        age -= 1;
    }
    Some(age)
}

/// Exactly `YYYY-MM-DD`: chrono alone accepts one-digit months and days,
/// leading whitespace and a signed year.
fn is_strict_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn june_15() -> ResolutionContext {
        ResolutionContext::at(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    #[test]
    fn to_int_parses_and_falls_back() {
        let ctx = june_15();
        assert_eq!(to_int(&values(&["42"]), &ctx), ResolvedValue::Integer(42));
        assert_eq!(to_int(&values(&["-7"]), &ctx), ResolvedValue::Integer(-7));
        assert_eq!(to_int(&values(&["abc"]), &ctx), ResolvedValue::from("abc"));
        assert_eq!(to_int(&values(&[" 42"]), &ctx), ResolvedValue::from(" 42"));
    }

    #[test]
    fn to_int_uses_only_first_value() {
        let ctx = june_15();
        assert_eq!(
            to_int(&values(&["1", "2"]), &ctx),
            ResolvedValue::Integer(1)
        );
        assert_eq!(to_int(&[], &ctx), ResolvedValue::from(""));
    }

    #[test]
    fn concat_joins_with_single_space() {
        let ctx = june_15();
        assert_eq!(
            concat_strings(&values(&["Jane", "Doe"]), &ctx),
            ResolvedValue::from("Jane Doe")
        );
        assert_eq!(concat_strings(&[], &ctx), ResolvedValue::from(""));
        assert_eq!(
            concat_strings(&values(&["Jane", "", "Doe"]), &ctx),
            ResolvedValue::from("Jane  Doe")
        );
    }

    #[test]
    fn age_counts_birthday_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(calculate_age("2000-06-15", today), Some(24));
        assert_eq!(calculate_age("2000-06-16", today), Some(23));
        assert_eq!(calculate_age("2000-01-01", today), Some(24));
    }

    #[test]
    fn age_rejects_malformed_dates() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(calculate_age("not-a-date", today), None);
        assert_eq!(calculate_age("2000-13-01", today), None);
        assert_eq!(calculate_age("", today), None);
        assert_eq!(
            age_from_dob(&values(&["not-a-date"]), &june_15()),
            ResolvedValue::Integer(INVALID_AGE)
        );
        assert_eq!(
            age_from_dob(&[], &june_15()),
            ResolvedValue::Integer(INVALID_AGE)
        );
    }

    #[test]
    fn age_requires_exact_date_shape() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        for dob in [
            "2000-6-15",
            "2000-06-5",
            " 2000-06-15",
            "2000-06-15 ",
            "+2000-06-15",
            "20000-06-15",
            "2000/06/15",
        ] {
            assert_eq!(calculate_age(dob, today), None, "dob {dob:?}");
            assert_eq!(
                age_from_dob(&values(&[dob]), &june_15()),
                ResolvedValue::Integer(INVALID_AGE),
                "dob {dob:?}"
            );
        }
    }

    #[test]
    fn age_compares_day_of_year_across_leap_years() {
        // 2000-03-01 is day 61 of a leap year, 2023-03-01 is day 60.
        let today = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
        assert_eq!(calculate_age("2000-03-01", today), Some(22));
        let today = NaiveDate::from_ymd_opt(2023, 3, 2).unwrap();
        assert_eq!(calculate_age("2000-03-01", today), Some(23));
    }

    #[test]
    fn redaction_follows_log_data_flag() {
        let ctx = june_15();
        assert_eq!(ctx.redact("1985-07-15"), patmap_model::REDACTED_VALUE);
        assert_eq!(ctx.with_log_data(true).redact("1985-07-15"), "1985-07-15");
    }
}
