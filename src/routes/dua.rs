use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::dua::Dua;
use rocket::serde::json::Json;
use rocket::{State, routes};
use sqlx::PgPool;

// Duas are reference data; both endpoints are public.

#[rocket::get("/duas")]
pub async fn list_duas(pool: &State<PgPool>) -> Result<Json<Vec<Dua>>, AppError> {
    let repo = PostgresRepository { pool: pool.inner().clone() };
    Ok(Json(repo.list_duas().await?))
}

#[rocket::get("/dua/<id>")]
pub async fn get_dua(pool: &State<PgPool>, id: i64) -> Result<Json<Dua>, AppError> {
    let repo = PostgresRepository { pool: pool.inner().clone() };
    if let Some(dua) = repo.get_dua_by_id(id).await? {
        Ok(Json(dua))
    } else {
        Err(AppError::NotFound(format!("Dua not found: {id}")))
    }
}

pub fn routes() -> Vec<rocket::Route> {
    routes![list_duas, get_dua]
}
