use std::fmt;
use std::time::Duration;

const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_SMTP_HOST: &str = "localhost";
const DEFAULT_SMTP_PORT: u16 = 1025;
/// Upper bound for a single verification email delivery.
pub const DEFAULT_EMAIL_SEND_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Outgoing mail transport.
#[derive(Clone, PartialEq, Eq)]
pub enum SmtpConfig {
    /// Authenticated TLS relay.
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Unauthenticated local server such as Mailpit.
    Local { host: String, port: u16 },
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmtpConfig::Relay {
                server, username, ..
            } => f
                .debug_struct("Relay")
                .field("server", server)
                .field("username", username)
                .field("password", &"******")
                .finish(),
            SmtpConfig::Local { host, port } => f
                .debug_struct("Local")
                .field("host", host)
                .field("port", port)
                .finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub email_from: String,
    pub smtp: SmtpConfig,
    pub email_send_timeout: Duration,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let host = required("HOST")?;
        let port = parse("PORT", &required("PORT")?)?;
        let database_url = required("DATABASE_URL")?;
        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => parse("DB_MAX_CONNECTIONS", &value)?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };
        let email_from = required("EMAIL_FROM")?;

        let use_local_smtp =
            lookup("RUST_ENV").as_deref() == Some("test") || lookup("SMTP_SERVER").is_none();

        let smtp = if use_local_smtp {
            SmtpConfig::Local {
                host: lookup("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                port: match lookup("SMTP_PORT") {
                    Some(value) => parse("SMTP_PORT", &value)?,
                    None => DEFAULT_SMTP_PORT,
                },
            }
        } else {
            SmtpConfig::Relay {
                server: required("SMTP_SERVER")?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            }
        };

        let email_send_timeout = match lookup("EMAIL_SEND_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse("EMAIL_SEND_TIMEOUT_SECS", &value)?),
            None => DEFAULT_EMAIL_SEND_TIMEOUT,
        };

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            email_from,
            smtp,
            email_send_timeout,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: value.to_string(),
    })
}
