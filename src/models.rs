pub mod dua;
pub mod fast;
pub mod prayer;
pub mod session;
pub mod user;
