pub mod budget;
pub mod cache;
pub mod config;
pub mod dashboard;
pub mod route;
pub mod session;
pub mod transaction;
pub mod user;
