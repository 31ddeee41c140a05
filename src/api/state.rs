//! Application state for shared services

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::investor::{Investor, InvestorRepository, InvestorUpdate, NewInvestor};
use crate::domain::payout::{NewPayout, Payout, PayoutRepository};
use crate::domain::user::UserRepository;
use crate::domain::DomainError;
use crate::infrastructure::auth::{PasswordHasher, TokenService};
use crate::infrastructure::ledger::LedgerService;
use crate::infrastructure::user::{AuthService, AuthSession};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServiceTrait>,
    pub token_service: Arc<dyn TokenService>,
    pub ledger_service: Arc<dyn LedgerServiceTrait>,
}

/// Trait for the registration and login flows
#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    async fn register(
        &self,
        email: &str,
        password: &str,
        secret_code: &str,
    ) -> Result<AuthSession, DomainError>;

    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, DomainError>;
}

/// Trait for ledger operations
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    async fn list_investors(&self) -> Result<Vec<Investor>, DomainError>;
    async fn create_investor(&self, new: NewInvestor) -> Result<Investor, DomainError>;
    async fn update_investor(
        &self,
        id: i64,
        update: InvestorUpdate,
    ) -> Result<Investor, DomainError>;
    async fn delete_investor(&self, id: i64) -> Result<(), DomainError>;
    async fn list_payouts(&self) -> Result<Vec<Payout>, DomainError>;
    async fn create_payout(&self, new: NewPayout) -> Result<Payout, DomainError>;
}

// Implement the state traits for the actual services

#[async_trait]
impl<R, H> AuthServiceTrait for AuthService<R, H>
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn register(
        &self,
        email: &str,
        password: &str,
        secret_code: &str,
    ) -> Result<AuthSession, DomainError> {
        AuthService::register(self, email, password, secret_code).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, DomainError> {
        AuthService::login(self, email, password).await
    }
}

#[async_trait]
impl<I, P> LedgerServiceTrait for LedgerService<I, P>
where
    I: InvestorRepository + 'static,
    P: PayoutRepository + 'static,
{
    async fn list_investors(&self) -> Result<Vec<Investor>, DomainError> {
        LedgerService::list_investors(self).await
    }

    async fn create_investor(&self, new: NewInvestor) -> Result<Investor, DomainError> {
        LedgerService::create_investor(self, new).await
    }

    async fn update_investor(
        &self,
        id: i64,
        update: InvestorUpdate,
    ) -> Result<Investor, DomainError> {
        LedgerService::update_investor(self, id, update).await
    }

    async fn delete_investor(&self, id: i64) -> Result<(), DomainError> {
        LedgerService::delete_investor(self, id).await
    }

    async fn list_payouts(&self) -> Result<Vec<Payout>, DomainError> {
        LedgerService::list_payouts(self).await
    }

    async fn create_payout(&self, new: NewPayout) -> Result<Payout, DomainError> {
        LedgerService::create_payout(self, new).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        auth_service: Arc<dyn AuthServiceTrait>,
        token_service: Arc<dyn TokenService>,
        ledger_service: Arc<dyn LedgerServiceTrait>,
    ) -> Self {
        Self {
            auth_service,
            token_service,
            ledger_service,
        }
    }
}
