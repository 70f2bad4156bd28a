use crate::error::app_error::AppError;
use chrono::NaiveDate;

/// Parses an ISO `YYYY-MM-DD` query parameter.
pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| AppError::BadRequest(format!("Invalid date: {raw}")))
}

/// Parses a comma-separated list of ISO dates, as used by the fast listing
/// filter.
pub fn parse_date_list(csv: &str) -> Result<Vec<NaiveDate>, AppError> {
    csv.split(',').map(|raw| parse_date(raw.trim())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plain_date() {
        assert_eq!(parse_date("2025-03-01").unwrap(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[test]
    fn rejects_non_dates() {
        assert!(parse_date("yesterday").is_err());
        assert!(parse_date("2025-13-40").is_err());
    }

    #[test]
    fn parses_a_csv_of_dates() {
        let dates = parse_date_list("2025-03-01, 2025-03-02").unwrap();
        assert_eq!(dates.len(), 2);
    }

    #[test]
    fn one_bad_entry_fails_the_whole_list() {
        assert!(parse_date_list("2025-03-01,garbage").is_err());
    }
}
