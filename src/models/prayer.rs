use chrono::NaiveDate;
use rocket::serde::{Deserialize, Serialize};
use std::fmt;

/// The five daily prayers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

/// How a prayer was performed: individually, in congregation, or made up
/// after its time had passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrayerMethod {
    Infradi,
    Jamat,
    Qaza,
}

impl PrayerName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }
}

impl PrayerMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerMethod::Infradi => "Infradi",
            PrayerMethod::Jamat => "Jamat",
            PrayerMethod::Qaza => "Qaza",
        }
    }
}

impl fmt::Display for PrayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PrayerMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prayer as read back from storage. The row id and owner stay in the
/// database; queries are already scoped to the authenticated user.
#[derive(Debug, sqlx::FromRow)]
pub struct Prayer {
    pub name: String,
    pub method: String,
    pub date: NaiveDate,
}

#[derive(Deserialize, Debug)]
pub struct PrayerRequest {
    pub name: PrayerName,
    pub method: PrayerMethod,
    pub date: NaiveDate,
}

/// Prayer as returned to clients.
#[derive(Serialize, Debug)]
pub struct PrayerResponse {
    pub name: String,
    pub method: String,
    pub date: NaiveDate,
}

impl From<&Prayer> for PrayerResponse {
    fn from(prayer: &Prayer) -> Self {
        Self {
            name: prayer.name.clone(),
            method: prayer.method.clone(),
            date: prayer.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prayer_vocabulary_serializes_to_the_expected_strings() {
        assert_eq!(serde_json::to_string(&PrayerName::Fajr).unwrap(), "\"Fajr\"");
        assert_eq!(serde_json::to_string(&PrayerMethod::Qaza).unwrap(), "\"Qaza\"");
    }

    #[test]
    fn unknown_prayer_names_are_rejected() {
        assert!(serde_json::from_str::<PrayerName>("\"Tahajjud\"").is_err());
        assert!(serde_json::from_str::<PrayerMethod>("\"Solo\"").is_err());
    }

    #[test]
    fn prayer_request_parses_a_plain_date() {
        let request: PrayerRequest =
            serde_json::from_str(r#"{"name": "Asr", "method": "Jamat", "date": "2025-03-01"}"#).unwrap();
        assert_eq!(request.name, PrayerName::Asr);
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }
}
