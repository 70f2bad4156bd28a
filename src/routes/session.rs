use crate::auth::CurrentUser;
use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::jwt::{JwtPayload, TokenAuthority};
use crate::middleware::UserAgent;
use crate::models::session::{LogoutResponse, SessionResponse, TokenPairResponse};
use crate::models::user::LoginRequest;
use rocket::serde::json::Json;
use rocket::{State, http::Status, routes};
use sqlx::PgPool;
use validator::Validate;

#[rocket::post("/", data = "<payload>")]
pub async fn login(
    pool: &State<PgPool>,
    authority: &State<TokenAuthority>,
    user_agent: UserAgent,
    payload: Json<LoginRequest>,
) -> Result<(Status, Json<TokenPairResponse>), AppError> {
    payload.validate()?;

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let Some(user) = repo.get_user_by_email(&payload.email).await? else {
        PostgresRepository::dummy_verify(&payload.password);
        return Err(AppError::InvalidCredentials);
    };
    PostgresRepository::verify_password(&user, &payload.password)?;

    let session = repo.create_session(user.id, user_agent.0.as_deref()).await?;
    let claims = JwtPayload {
        id: user.id,
        name: user.name,
        email: user.email,
        session_id: session.id,
    };
    let access_token = authority.sign_access(&claims)?;
    let refresh_token = authority.sign_refresh(&claims)?;

    Ok((Status::Created, Json(TokenPairResponse { access_token, refresh_token })))
}

#[rocket::get("/")]
pub async fn list_sessions(pool: &State<PgPool>, current_user: CurrentUser) -> Result<Json<Vec<SessionResponse>>, AppError> {
    let repo = PostgresRepository { pool: pool.inner().clone() };
    let sessions = repo.list_valid_sessions(current_user.id).await?;
    Ok(Json(sessions.iter().map(SessionResponse::from).collect()))
}

/// Invalidates only the session the presented token belongs to; the user's
/// other sessions stay live. The flag is flipped before the response is
/// acknowledged.
#[rocket::delete("/")]
pub async fn logout(pool: &State<PgPool>, current_user: CurrentUser) -> Result<Json<LogoutResponse>, AppError> {
    let repo = PostgresRepository { pool: pool.inner().clone() };
    repo.invalidate_session(current_user.session_id).await?;

    Ok(Json(LogoutResponse {
        access_token: None,
        refresh_token: None,
    }))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![login, list_sessions, logout]
}
