//! Authentication primitives: password hashing and session tokens

mod jwt;
mod password;

pub use jwt::{Claims, JwtService, TokenService, TOKEN_TTL_DAYS};
pub use password::{BcryptHasher, PasswordHasher};
