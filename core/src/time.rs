use chrono::{Duration, Local, NaiveDate};

use crate::error::{Error, Result};

const KEY_FORMAT: &str = "%Y-%m-%d";

/// The working day of the desk, in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Ledger key for a date (`YYYY-MM-DD`).
pub fn date_key(date: NaiveDate) -> String {
    date.format(KEY_FORMAT).to_string()
}

/// `01 Jan 2024`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Parses a day relative to `today`.
///
/// Accepts `today`, `yesterday`, offsets such as `-3d`, `+1d` or `-2w`, and
/// plain `YYYY-MM-DD` dates.
pub fn parse_day(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();

    // 1. Reserved keywords
    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yest" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    // 2. Relative offsets
    if let Some(sign) = input.chars().next().filter(|c| *c == '+' || *c == '-') {
        let body = &input[1..];
        if let Some((split, unit)) = body.char_indices().last().filter(|(i, _)| *i > 0) {
            let invalid = || Error::validation(format!("invalid day offset '{}'", input));
            let count: i64 = body[..split].parse().map_err(|_| invalid())?;
            let count = if sign == '-' { -count } else { count };
            let offset = match unit.to_ascii_lowercase() {
                'd' => Duration::try_days(count),
                'w' => Duration::try_weeks(count),
                _ => {
                    return Err(Error::validation(format!(
                        "unknown unit '{}' in '{}' (use d or w)",
                        unit, input
                    )))
                }
            };
            return offset
                .and_then(|offset| today.checked_add_signed(offset))
                .ok_or_else(|| Error::validation(format!("day offset '{}' is out of range", input)));
        }
    }

    // 3. Calendar date
    NaiveDate::parse_from_str(input, KEY_FORMAT)
        .map_err(|_| Error::validation(format!("could not parse date '{}'", input)))
}
