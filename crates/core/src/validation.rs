//! Input-shape checks run before any query is issued.
//!
//! Each helper takes raw operator text and either returns the typed value
//! to bind or a [`CoreError::ValidationRejected`]. Re-prompting is left to
//! the caller. Surrounding whitespace is ignored everywhere.
//!
//! Airline names are not validated: any text, including the empty string,
//! is a valid substring filter.

use chrono::{Datelike, NaiveDate};

use crate::error::CoreError;
use crate::query::{AirportCode, FlightDate};
use crate::types::FlightId;

/// Number of letters in an IATA airport code.
pub const IATA_CODE_LEN: usize = 3;

/// Accepted date layout: `DD/MM/YYYY`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a base-10 flight identifier.
pub fn parse_flight_id(input: &str) -> Result<FlightId, CoreError> {
    let trimmed = input.trim();
    trimmed
        .parse::<FlightId>()
        .map_err(|e| CoreError::rejected("flight ID", format!("'{trimmed}' ({e})")))
}

/// Parse a `DD/MM/YYYY` date that must exist on the calendar.
///
/// Day and month take one or two digits; the year takes exactly four.
pub fn parse_flight_date(input: &str) -> Result<FlightDate, CoreError> {
    let trimmed = input.trim();
    if !has_date_field_widths(trimmed) {
        return Err(CoreError::rejected(
            "date",
            format!("'{trimmed}' must be in DD/MM/YYYY format"),
        ));
    }
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|e| CoreError::rejected("date", format!("'{trimmed}' ({e})")))?;
    Ok(FlightDate {
        day: date.day(),
        month: date.month(),
        year: date.year(),
    })
}

fn has_date_field_widths(input: &str) -> bool {
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    let mut parts = input.split('/');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(day), Some(month), Some(year), None) => {
            digits(day, 1, 2) && digits(month, 1, 2) && digits(year, 4, 4)
        }
        _ => false,
    }
}

/// Accept exactly three letters in any case and return the upper-cased code.
pub fn parse_airport_code(input: &str) -> Result<AirportCode, CoreError> {
    let trimmed = input.trim();
    if trimmed.chars().count() != IATA_CODE_LEN {
        return Err(CoreError::rejected(
            "airport code",
            format!("'{trimmed}' must be exactly {IATA_CODE_LEN} letters"),
        ));
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CoreError::rejected(
            "airport code",
            format!("'{trimmed}' must contain letters only"),
        ));
    }
    Ok(AirportCode::from_checked(trimmed))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- flight id --

    #[test]
    fn id_accepts_integers() {
        assert_eq!(parse_flight_id("42").unwrap(), 42);
        assert_eq!(parse_flight_id(" 99999999\n").unwrap(), 99_999_999);
        assert_eq!(parse_flight_id("-3").unwrap(), -3);
    }

    #[test]
    fn id_rejects_non_numeric() {
        for input in ["", "abc", "12a", "1.5"] {
            assert_matches!(
                parse_flight_id(input),
                Err(CoreError::ValidationRejected { field: "flight ID", .. }),
                "input {input:?}"
            );
        }
    }

    // -- date --

    #[test]
    fn date_splits_fields() {
        let date = parse_flight_date("01/03/2024").unwrap();
        assert_eq!(
            date,
            FlightDate {
                day: 1,
                month: 3,
                year: 2024
            }
        );
    }

    #[test]
    fn date_rejects_impossible_days() {
        assert_matches!(
            parse_flight_date("31/02/2024"),
            Err(CoreError::ValidationRejected { field: "date", .. })
        );
        assert!(parse_flight_date("31/04/2015").is_err());
        assert!(parse_flight_date("29/02/2015").is_err());
        assert!(parse_flight_date("29/02/2016").is_ok());
    }

    #[test]
    fn date_rejects_other_layouts() {
        assert!(parse_flight_date("2024-03-01").is_err());
        assert!(parse_flight_date("03/01").is_err());
        assert!(parse_flight_date("01/03/24").is_err());
        assert!(parse_flight_date("01/03/+2024").is_err());
        assert!(parse_flight_date("").is_err());
    }

    #[test]
    fn date_requires_four_digit_year() {
        for input in ["01/03/24", "01/03/+2024", "01/03/20245", "1/3/-2024"] {
            assert_matches!(
                parse_flight_date(input),
                Err(CoreError::ValidationRejected { field: "date", .. }),
                "input {input:?}"
            );
        }
        assert_eq!(parse_flight_date("1/3/2024").unwrap().year, 2024);
    }

    #[test]
    fn date_rejects_signed_or_wide_day_and_month() {
        assert!(parse_flight_date("+1/03/2024").is_err());
        assert!(parse_flight_date("001/03/2024").is_err());
        assert!(parse_flight_date("01/03/2024/").is_err());
    }

    // -- airport --

    #[test]
    fn airport_accepts_any_case() {
        assert_eq!(parse_airport_code("jfk").unwrap().as_str(), "JFK");
        assert_eq!(parse_airport_code("JFK").unwrap().as_str(), "JFK");
        assert_eq!(
            parse_airport_code("jfk").unwrap(),
            parse_airport_code("JFK").unwrap()
        );
    }

    #[test]
    fn airport_rejects_digits() {
        assert_matches!(
            parse_airport_code("J7K"),
            Err(CoreError::ValidationRejected { field: "airport code", .. })
        );
    }

    #[test]
    fn airport_rejects_wrong_length() {
        assert!(parse_airport_code("JFKX").is_err());
        assert!(parse_airport_code("JF").is_err());
        assert!(parse_airport_code("").is_err());
    }
}
