//! # Task Board Shared
//! 
//! Shared configuration, constants and telemetry for the task board.

pub mod constants;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use error::AppError;
