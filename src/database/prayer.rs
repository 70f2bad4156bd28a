use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::prayer::{Prayer, PrayerRequest};
use chrono::NaiveDate;

impl PostgresRepository {
    /// One row per (user, prayer, day); re-recording the same prayer updates
    /// the method in place.
    pub async fn upsert_prayer(&self, user_id: i64, request: &PrayerRequest) -> Result<Prayer, AppError> {
        let prayer = sqlx::query_as::<_, Prayer>(
            r#"
            INSERT INTO prayers (user_id, name, method, date)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, name, date)
            DO UPDATE SET method = EXCLUDED.method
            RETURNING name, method, date
            "#,
        )
        .bind(user_id)
        .bind(request.name.as_str())
        .bind(request.method.as_str())
        .bind(request.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(prayer)
    }

    pub async fn list_prayers_on(&self, user_id: i64, date: NaiveDate) -> Result<Vec<Prayer>, AppError> {
        let prayers = sqlx::query_as::<_, Prayer>(
            r#"
            SELECT name, method, date
            FROM prayers
            WHERE user_id = $1 AND date = $2
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(prayers)
    }
}
