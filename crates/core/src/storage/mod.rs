pub mod session_store;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
