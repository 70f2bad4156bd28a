use crate::auth::CurrentUser;
use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::prayer::{PrayerRequest, PrayerResponse};
use crate::util::parse_date;
use chrono::Utc;
use rocket::serde::json::Json;
use rocket::{State, http::Status, routes};
use sqlx::PgPool;

#[rocket::get("/?<date>")]
pub async fn list_prayers(
    pool: &State<PgPool>,
    current_user: CurrentUser,
    date: Option<&str>,
) -> Result<Json<Vec<PrayerResponse>>, AppError> {
    // If date is not provided, assume today's prayers are requested
    let date = match date {
        Some(raw) => parse_date(raw)?,
        None => Utc::now().date_naive(),
    };

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let prayers = repo.list_prayers_on(current_user.id, date).await?;
    Ok(Json(prayers.iter().map(PrayerResponse::from).collect()))
}

#[rocket::post("/", data = "<payload>")]
pub async fn record_prayers(
    pool: &State<PgPool>,
    current_user: CurrentUser,
    payload: Json<Vec<PrayerRequest>>,
) -> Result<(Status, Json<Vec<PrayerResponse>>), AppError> {
    let repo = PostgresRepository { pool: pool.inner().clone() };

    let mut recorded = Vec::with_capacity(payload.len());
    for request in payload.iter() {
        let prayer = repo.upsert_prayer(current_user.id, request).await?;
        recorded.push(PrayerResponse::from(&prayer));
    }

    Ok((Status::Created, Json(recorded)))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![list_prayers, record_prayers]
}
