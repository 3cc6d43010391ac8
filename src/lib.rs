pub mod app;
pub mod files;
pub mod router;
pub mod server;
pub mod tokens;

pub use router::AppState;
