use chrono::NaiveDate;
use rocket::serde::Serialize;

/// Fast as read back from storage; queries are already scoped to the
/// authenticated user, so only the day survives into the model.
#[derive(Debug, sqlx::FromRow)]
pub struct Fast {
    pub date: NaiveDate,
}

/// Fast as returned to clients.
#[derive(Serialize, Debug)]
pub struct FastResponse {
    pub date: NaiveDate,
}

impl From<&Fast> for FastResponse {
    fn from(fast: &Fast) -> Self {
        Self { date: fast.date }
    }
}
