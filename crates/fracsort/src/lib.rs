//! FracSort library: application logic for the fraction sort race.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
