use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::session::Session;

impl PostgresRepository {
    pub async fn create_session(&self, user_id: i64, user_agent: Option<&str>) -> Result<Session, AppError> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (user_id, user_agent)
            VALUES ($1, $2)
            RETURNING id, user_id, valid, user_agent, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(user_agent)
        .fetch_one(&self.pool)
        .await?;

        Ok(session)
    }

    pub async fn get_session_by_id(&self, id: i64) -> Result<Option<Session>, AppError> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            SELECT id, user_id, valid, user_agent, created_at, updated_at
            FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(session)
    }

    /// Flips the session's `valid` flag to false. There is deliberately no
    /// counterpart that sets it back to true; invalidation is a one-way gate.
    pub async fn invalidate_session(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("UPDATE sessions SET valid = FALSE, updated_at = now() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn list_valid_sessions(&self, user_id: i64) -> Result<Vec<Session>, AppError> {
        let sessions = sqlx::query_as::<_, Session>(
            r#"
            SELECT id, user_id, valid, user_agent, created_at, updated_at
            FROM sessions
            WHERE user_id = $1 AND valid = TRUE
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(sessions)
    }
}
