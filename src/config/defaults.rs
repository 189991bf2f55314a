pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://taskboard.db?mode=rwc";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_DB_MIN_IDLE: u32 = 1;
pub const DEFAULT_JWT_SECRET: &str = "super-secret-change-me";
pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: usize = 60 * 60;
pub const DEFAULT_ADMIN_NAME: &str = "Group Admin";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "adminpassword";
