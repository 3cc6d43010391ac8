pub mod controller;
pub mod enums;
pub mod envy;
pub mod errors;
pub mod logging;
pub mod models;
