pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod main_lib;
