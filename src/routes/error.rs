use crate::auth::AuthRejection;
use rocket::serde::Serialize;
use rocket::serde::json::Json;
use rocket::{Request, catch};

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct Error {
    pub message: String,
}

#[catch(404)]
pub fn not_found(_: &Request) -> Json<Error> {
    Json(Error {
        message: "Not found".to_string(),
    })
}

#[catch(409)]
pub fn conflict(_: &Request) -> Json<Error> {
    Json(Error {
        message: "Conflict".to_string(),
    })
}

/// The guard parks the rejection reason in the request-local cache; clients
/// get that message and nothing finer-grained.
#[catch(401)]
pub fn unauthorized(req: &Request) -> Json<Error> {
    let message = req
        .local_cache(|| None::<AuthRejection>)
        .as_ref()
        .map(|rejection| rejection.0.clone())
        .unwrap_or_else(|| "Unauthorized".to_string());

    Json(Error { message })
}
