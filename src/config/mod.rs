mod app_config;

pub use app_config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, LogFormat, LoggingConfig, ServerConfig,
    DEFAULT_JWT_SECRET, DEFAULT_REGISTRATION_CODE,
};
