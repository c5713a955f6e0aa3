use dispatch_core::status::{EquipmentStatusSet, DEFAULT_EQUIPMENT_STATUSES};
use dispatch_core::validation::ValidationContext;

/// Which session gate guards the admin surface. The two variants are
/// mutually exclusive; a deployment runs exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAuthMode {
    /// Shared numeric PIN exchanged for a client-side session marker.
    Pin,
    /// Identity delegated to the external account/session provider.
    Account,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL (read separately in `main`) have
/// defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Active session gate variant.
    pub auth_mode: AdminAuthMode,
    /// Shared PIN secret; only consulted in PIN mode.
    pub admin_pin: String,
    /// Deployment-dependent vocabularies used by create/update validation.
    pub validation: ValidationContext,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                |
    /// |------------------------|----------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                              |
    /// | `PORT`                 | `5000`                                 |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`                |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                   |
    /// | `ADMIN_AUTH_MODE`      | `pin` (`pin` or `account`)             |
    /// | `ADMIN_PIN`            | required when `ADMIN_AUTH_MODE=pin`    |
    /// | `EQUIPMENT_STATUSES`   | `Down,Broken,Pending,Repairing,Fixed`  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let auth_mode = match std::env::var("ADMIN_AUTH_MODE")
            .unwrap_or_else(|_| "pin".into())
            .to_lowercase()
            .as_str()
        {
            "pin" => AdminAuthMode::Pin,
            "account" => AdminAuthMode::Account,
            other => panic!("ADMIN_AUTH_MODE must be 'pin' or 'account', got '{other}'"),
        };

        let admin_pin = match auth_mode {
            AdminAuthMode::Pin => std::env::var("ADMIN_PIN")
                .expect("ADMIN_PIN must be set when ADMIN_AUTH_MODE=pin"),
            AdminAuthMode::Account => String::new(),
        };

        let equipment_statuses = EquipmentStatusSet::parse(
            &std::env::var("EQUIPMENT_STATUSES")
                .unwrap_or_else(|_| DEFAULT_EQUIPMENT_STATUSES.into()),
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            auth_mode,
            admin_pin,
            validation: ValidationContext { equipment_statuses },
        }
    }
}
