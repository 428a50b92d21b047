// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names and defaults used across Bikelinks

// Server Configuration
pub const BIKELINKS_HOST: &str = "BIKELINKS_HOST";
pub const BIKELINKS_PORT: &str = "BIKELINKS_PORT";
pub const PORT: &str = "PORT"; // Legacy

// CORS Configuration
pub const BIKELINKS_CORS_ORIGIN: &str = "BIKELINKS_CORS_ORIGIN";

// Database Configuration
pub const BIKELINKS_DATABASE_PATH: &str = "BIKELINKS_DATABASE_PATH";
pub const BIKELINKS_MAX_CONNECTIONS: &str = "BIKELINKS_MAX_CONNECTIONS";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";

// Defaults
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_FILE: &str = "bike-shop.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";
