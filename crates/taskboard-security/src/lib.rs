//! # Task Board Security
//! 
//! Credential primitives: JWT access tokens and Argon2 password hashing.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtError, JwtService};
pub use password::{PasswordError, PasswordService};
