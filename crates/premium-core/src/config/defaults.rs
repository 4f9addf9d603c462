// Single source of truth for all default values.

// --- Client ---
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PATH: &str = "/items/10";

// --- Config files ---
pub const PROJECT_CONFIG_FILENAME: &str = "premium.toml";
pub const USER_CONFIG_DIRNAME: &str = ".premium";
pub const USER_CONFIG_FILENAME: &str = "config.toml";

// --- Logging ---
pub const LOG_ENV_VAR: &str = "PREMIUM_LOG";
pub const DEFAULT_LOG_FILTER: &str = "premium=info";
