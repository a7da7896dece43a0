pub mod auth_service;
pub mod budget_service;
pub mod session_gate;
pub mod transaction_service;
