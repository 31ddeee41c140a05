//! User domain
//!
//! Account records owned by the credential store. Users exist only to
//! authenticate; nothing in the ledger references them.

mod entity;
mod repository;

pub use entity::{NewUser, User};
pub use repository::UserRepository;

#[cfg(test)]
pub use repository::mock::MockUserRepository;
