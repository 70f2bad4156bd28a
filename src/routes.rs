pub mod dua;
pub mod error;
pub mod fast;
pub mod health;
pub mod prayer;
pub mod session;
pub mod user;
