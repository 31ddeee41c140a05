//! Registration and login flows

use std::sync::Arc;

use crate::domain::user::{NewUser, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::auth::{PasswordHasher, TokenService};

/// A freshly authenticated session: the bearer token and the email it was
/// issued for. Neither the password nor its hash ever leaves this module.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub email: String,
}

/// Authentication service: credential store + hasher + token issuer, plus
/// the shared registration secret, all injected at construction.
#[derive(Debug)]
pub struct AuthService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
    tokens: Arc<dyn TokenService>,
    registration_code: String,
}

impl<R: UserRepository, H: PasswordHasher> AuthService<R, H> {
    pub fn new(
        repository: Arc<R>,
        hasher: Arc<H>,
        tokens: Arc<dyn TokenService>,
        registration_code: String,
    ) -> Self {
        Self {
            repository,
            hasher,
            tokens,
            registration_code,
        }
    }

    /// Register a new account gated by the shared secret code.
    ///
    /// A duplicate email fails with a conflict and leaves the stored record
    /// untouched; a failed *lookup* is a storage error, never a conflict.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        secret_code: &str,
    ) -> Result<AuthSession, DomainError> {
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::validation("email and password required"));
        }

        if secret_code != self.registration_code {
            return Err(DomainError::forbidden("wrong secret code"));
        }

        if self.repository.get_by_email(email).await?.is_some() {
            return Err(DomainError::conflict("user already exists"));
        }

        let password_hash = self.hasher.hash(password)?;

        let user = self
            .repository
            .create(NewUser {
                email: email.to_string(),
                password_hash,
            })
            .await?;

        let token = self.tokens.issue(user.id())?;

        Ok(AuthSession {
            token,
            email: user.email().to_string(),
        })
    }

    /// Authenticate with email and password.
    ///
    /// An unknown email and a wrong password produce the same credential
    /// error, so responses do not reveal whether the email exists.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, DomainError> {
        let user = self
            .repository
            .get_by_email(email)
            .await?
            .ok_or_else(|| DomainError::credential("invalid credentials"))?;

        if !self.hasher.verify(password, user.password_hash())? {
            return Err(DomainError::credential("invalid credentials"));
        }

        let token = self.tokens.issue(user.id())?;

        Ok(AuthSession {
            token,
            email: user.email().to_string(),
        })
    }
}
