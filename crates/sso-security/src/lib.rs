//! # SSO Security
//! 
//! Security primitives: session token signing and password hashing.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtError, JwtService};
pub use password::{PasswordError, PasswordHasher, PasswordService};
