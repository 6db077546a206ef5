//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `cis_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cis.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "cis";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CIS";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 8088;

// ============================================================================
// AUTHENTICATION CONSTANTS
// ============================================================================

/// Default header carrying the admin API key
pub const DEFAULT_ADMIN_KEY_HEADER: &str = "X-Admin-Key";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "CIS_LOG";

/// Fallback file stem for the rolling log file
pub const DEFAULT_LOG_FILE_STEM: &str = "cis";

// ============================================================================
// DASHBOARD CONSTANTS
// ============================================================================

/// Default snapshot file name, relative to the working directory
pub const DEFAULT_SNAPSHOT_FILENAME: &str = "indexing_snapshot.json";
