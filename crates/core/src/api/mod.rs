pub mod traits;

// HTTP implementation of the API surface
pub mod http;
