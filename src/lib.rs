//! Invest Ledger API
//!
//! Tracks investors and their periodic payouts (profit/capital withdrawals,
//! reinvestments, top-ups) behind a JWT-authenticated HTTP API:
//! - Registration gated by a shared secret code, bcrypt credential storage
//! - Stateless 30-day bearer tokens
//! - Append-only payout ledger with field-level investor updates

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::{info, warn};

use api::state::AppState;
use infrastructure::auth::{BcryptHasher, JwtService, TokenService};
use infrastructure::db;
use infrastructure::ledger::{
    LedgerService, PostgresInvestorRepository, PostgresPayoutRepository,
};
use infrastructure::user::{AuthService, PostgresUserRepository};

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    if config.auth.jwt_secret == config::DEFAULT_JWT_SECRET {
        warn!("JWT secret is the development default; set APP__AUTH__JWT_SECRET in production");
    }
    if config.auth.registration_code == config::DEFAULT_REGISTRATION_CODE {
        warn!("Registration code is the development default; set APP__AUTH__REGISTRATION_CODE");
    }

    let pool = db::connect(&config.database).await?;
    db::ensure_schema(&pool).await?;
    info!("PostgreSQL connection established");

    let token_service: Arc<dyn TokenService> = Arc::new(JwtService::new(&config.auth.jwt_secret));

    let auth_service = Arc::new(AuthService::new(
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(BcryptHasher::new()),
        token_service.clone(),
        config.auth.registration_code.clone(),
    ));

    let ledger_service = Arc::new(LedgerService::new(
        Arc::new(PostgresInvestorRepository::new(pool.clone())),
        Arc::new(PostgresPayoutRepository::new(pool)),
    ));

    Ok(AppState::new(auth_service, token_service, ledger_service))
}
