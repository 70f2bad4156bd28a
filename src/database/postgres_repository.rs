use sqlx::PgPool;

/// All storage access goes through this repository; each operation is a
/// single sqlx round-trip against the shared pool.
pub struct PostgresRepository {
    pub pool: PgPool,
}
