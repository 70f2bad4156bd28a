use crate::auth::CurrentUser;
use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::fast::FastResponse;
use crate::util::parse_date_list;
use chrono::NaiveDate;
use rocket::serde::json::Json;
use rocket::{State, http::Status, routes};
use sqlx::PgPool;

#[rocket::get("/?<dates>")]
pub async fn list_fasts(
    pool: &State<PgPool>,
    current_user: CurrentUser,
    dates: Option<&str>,
) -> Result<Json<Vec<FastResponse>>, AppError> {
    let dates = dates.map(parse_date_list).transpose()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let fasts = repo.list_fasts(current_user.id, dates.as_deref()).await?;
    Ok(Json(fasts.iter().map(FastResponse::from).collect()))
}

#[rocket::post("/", data = "<payload>")]
pub async fn record_fasts(
    pool: &State<PgPool>,
    current_user: CurrentUser,
    payload: Json<Vec<NaiveDate>>,
) -> Result<(Status, Json<Vec<FastResponse>>), AppError> {
    let repo = PostgresRepository { pool: pool.inner().clone() };

    let mut recorded = Vec::with_capacity(payload.len());
    for date in payload.iter() {
        let fast = repo.record_fast(current_user.id, *date).await?;
        recorded.push(FastResponse::from(&fast));
    }

    Ok((Status::Created, Json(recorded)))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![list_fasts, record_fasts]
}
