pub mod api;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod views;
