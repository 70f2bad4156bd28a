use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::dua::Dua;

impl PostgresRepository {
    pub async fn list_duas(&self) -> Result<Vec<Dua>, AppError> {
        let duas = sqlx::query_as::<_, Dua>(
            r#"
            SELECT id, english, arabic, urdu, reference, category
            FROM duas
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(duas)
    }

    pub async fn get_dua_by_id(&self, id: i64) -> Result<Option<Dua>, AppError> {
        let dua = sqlx::query_as::<_, Dua>(
            r#"
            SELECT id, english, arabic, urdu, reference, category
            FROM duas
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(dua)
    }
}
