//! # Task Board Core
//! 
//! Domain entities, repository traits and services for the task board:
//! ownership checks, project bootstrapping, task lifecycle and board aggregation.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::{DomainError, ErrorKind};
