/// Members API configuration loaded from environment variables.
///
/// Constructed once in `main` and injected through `AppState`; nothing else
/// in the codebase reads the environment.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing session tokens.
    pub jwt_secret: String,
    /// Cookie domain attribute (root domain, e.g. "example.com").
    pub cookie_domain: String,
    /// Whether the auth cookie carries the Secure attribute. Disable only
    /// for local development over plain HTTP. Env var: `COOKIE_SECURE`.
    pub cookie_secure: bool,
    /// TCP port to listen on (default 3100). Env var: `API_PORT`.
    pub api_port: u16,
    /// SMTP relay host for outbound verification mail.
    pub smtp_host: String,
    /// SMTP relay port (default 587). Env var: `SMTP_PORT`.
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    /// From mailbox, e.g. "Velvet Rope <no-reply@example.com>".
    pub mail_from: String,
    /// Public site origin used to build verification links.
    pub public_base_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            cookie_domain: std::env::var("COOKIE_DOMAIN").expect("COOKIE_DOMAIN"),
            cookie_secure: std::env::var("COOKIE_SECURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3100),
            smtp_host: std::env::var("SMTP_HOST").expect("SMTP_HOST"),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(587),
            smtp_username: std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME"),
            smtp_password: std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD"),
            mail_from: std::env::var("MAIL_FROM").expect("MAIL_FROM"),
            public_base_url: std::env::var("PUBLIC_BASE_URL").expect("PUBLIC_BASE_URL"),
        }
    }
}
