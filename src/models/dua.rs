use rocket::serde::Serialize;

/// Reference supplication in three languages, seeded out of band and served
/// read-only.
#[derive(Serialize, Debug, sqlx::FromRow)]
pub struct Dua {
    pub id: i64,
    pub english: String,
    pub arabic: String,
    pub urdu: String,
    pub reference: String,
    pub category: String,
}
