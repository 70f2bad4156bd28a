use chrono::{DateTime, Utc};
use rocket::serde::Serialize;

/// One authenticated login. Rows are never deleted; logout flips `valid` to
/// false and nothing in this codebase ever flips it back.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub valid: bool,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Debug)]
pub struct SessionResponse {
    pub id: i64,
    pub user_id: i64,
    pub valid: bool,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Login response: the freshly signed token pair.
#[derive(Serialize, Debug)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// Logout response; both fields are always null, signalling the client to
/// drop its stored tokens.
#[derive(Serialize, Debug)]
pub struct LogoutResponse {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id,
            user_id: session.user_id,
            valid: session.valid,
            user_agent: session.user_agent.clone(),
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}
