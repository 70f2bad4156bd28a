mod auth;
mod config;
mod database;
mod db;
mod error;
mod jwt;
mod middleware;
mod models;
mod routes;
mod util;

pub use config::Config;

use crate::auth::TokenRelay;
use crate::db::stage_db;
use crate::jwt::TokenAuthority;
use crate::middleware::RequestLogger;
use crate::routes as app_routes;
use rocket::{Build, Rocket, catchers, http::Method};
use rocket_cors::{AllowedOrigins, CorsOptions};
use tracing_subscriber::EnvFilter;

fn init_tracing(log_level: &str, json_format: bool) {
    // RUST_LOG can be used for fine-grained control per module, e.g.
    //   RUST_LOG=debug
    //   RUST_LOG=deen_tracker=debug
    //   RUST_LOG=info,deen_tracker::auth=trace
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).with_line_number(true);

    if json_format {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn build_cors(cors_config: &config::CorsConfig) -> CorsOptions {
    let is_wildcard = cors_config.allowed_origins.len() == 1 && cors_config.allowed_origins[0] == "*";

    if is_wildcard && cors_config.allow_credentials {
        panic!(
            "Invalid CORS configuration: Cannot use wildcard origins (*) with credentials enabled. \
            Either set specific origins or disable credentials."
        );
    }

    let allowed_origins = if cors_config.allowed_origins.is_empty() {
        AllowedOrigins::some_exact::<&str>(&[])
    } else if is_wildcard {
        AllowedOrigins::all()
    } else {
        AllowedOrigins::some_exact(&cors_config.allowed_origins.iter().map(String::as_str).collect::<Vec<_>>())
    };

    CorsOptions {
        allowed_origins,
        allowed_methods: vec![Method::Get, Method::Post, Method::Delete, Method::Options, Method::Head]
            .into_iter()
            .map(From::from)
            .collect(),
        allowed_headers: rocket_cors::AllowedHeaders::some(&["Content-Type", "Authorization", "Accept", "x-refresh"]),
        expose_headers: ["x-access-token".to_string(), "X-Request-Id".to_string()].into_iter().collect(),
        allow_credentials: cors_config.allow_credentials,
        ..Default::default()
    }
}

pub fn build_rocket(config: Config) -> Rocket<Build> {
    init_tracing(&config.logging.level, config.logging.json_format);

    let cors = build_cors(&config.cors).to_cors().expect("Failed to create CORS fairing");
    let authority = TokenAuthority::new(&config.auth).expect("Failed to load RSA key pair from auth config");

    let figment = rocket::Config::figment()
        .merge(("port", config.server.port))
        .merge(("address", config.server.address.clone()));

    rocket::custom(figment)
        .attach(cors)
        .attach(RequestLogger)
        .attach(TokenRelay)
        .attach(stage_db(config.database))
        .manage(authority)
        .mount("/api/user", app_routes::user::routes())
        .mount("/api/session", app_routes::session::routes())
        .mount("/api/prayer", app_routes::prayer::routes())
        .mount("/api/fast", app_routes::fast::routes())
        .mount("/api/health", app_routes::health::routes())
        .mount("/api", app_routes::dua::routes())
        .register(
            "/api",
            catchers![
                app_routes::error::not_found,
                app_routes::error::conflict,
                app_routes::error::unauthorized
            ],
        )
}
