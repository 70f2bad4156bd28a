pub mod dua;
pub mod fast;
pub mod postgres_repository;
pub mod prayer;
pub mod session;
pub mod user;
