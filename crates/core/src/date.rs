use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{Error, Result};

// ascii digits only; `\d` would also accept other scripts' digits
static DATE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})").expect("valid date pattern")
});

/// Parses the leading `YYYY-MM-DD` of a date attribute. Anything after the
/// date is ignored.
///
/// The result is a plain calendar day, so rendering it never shifts across
/// timezones.
///
/// # Errors
///
/// [`Error::DatePattern`] when the value does not start with `YYYY-MM-DD`,
/// [`Error::InvalidDate`] when it does but names no calendar day.
pub fn parse_date_attribute(value: &str) -> Result<NaiveDate> {
	let pattern = || Error::DatePattern(value.to_string());
	let captures = DATE_PREFIX.captures(value).ok_or_else(pattern)?;
	let field = |i: usize| captures[i].parse::<u32>().map_err(|_| pattern());

	let year = i32::try_from(field(1)?).map_err(|_| pattern())?;

	NaiveDate::from_ymd_opt(year, field(2)?, field(3)?)
		.ok_or_else(|| Error::InvalidDate(value.to_string()))
}

/// Renders a date attribute for display, e.g. `2024-03-05` as `05.03.2024`
/// with the default `%d.%m.%Y` format.
///
/// # Errors
///
/// Fails like [`parse_date_attribute`].
pub fn format_date_attribute(value: &str, format: &str) -> Result<String> {
	parse_date_attribute(value).map(|date| date.format(format).to_string())
}
