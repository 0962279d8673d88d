mod credentials;
mod loader;
mod types;

pub use credentials::{CredentialStatus, SecureString, API_KEY_ENV};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, UiConfig, DEFAULT_BASE_URL};
