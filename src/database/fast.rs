use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::fast::Fast;
use chrono::NaiveDate;

impl PostgresRepository {
    /// Recording the same day twice is a no-op that still returns the row.
    pub async fn record_fast(&self, user_id: i64, date: NaiveDate) -> Result<Fast, AppError> {
        let fast = sqlx::query_as::<_, Fast>(
            r#"
            INSERT INTO fasts (user_id, date)
            VALUES ($1, $2)
            ON CONFLICT (user_id, date)
            DO UPDATE SET date = EXCLUDED.date
            RETURNING date
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        Ok(fast)
    }

    pub async fn list_fasts(&self, user_id: i64, dates: Option<&[NaiveDate]>) -> Result<Vec<Fast>, AppError> {
        let fasts = match dates {
            Some(dates) => {
                sqlx::query_as::<_, Fast>(
                    r#"
                    SELECT date
                    FROM fasts
                    WHERE user_id = $1 AND date = ANY($2)
                    "#,
                )
                .bind(user_id)
                .bind(dates)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Fast>(
                    r#"
                    SELECT date
                    FROM fasts
                    WHERE user_id = $1
                    "#,
                )
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(fasts)
    }
}
