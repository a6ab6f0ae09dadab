/// Configuration constants for the Foreman API
pub mod api {
    /// Fixed request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 5;

    /// Maximum hosts requested per page - results are fetched in a single
    /// request, change accordingly for very large environments
    pub const HOSTS_PER_PAGE: u32 = 100_000;
}

/// Configuration constants for the settings file
pub mod settings {
    /// Default settings file path (relative to HOME)
    pub const FILE_PATH: &str = ".foreman/settings.json";

    /// Environment variable overriding the settings file path
    pub const PATH_ENV_VAR: &str = "FOREMAN_SETTINGS_PATH";

    /// Required settings keys, checked on load
    pub const REQUIRED_KEYS: &[&str] = &["base_url", "username", "password", "hfile"];
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

/// Constants for the generated inventory file
pub mod inventory {
    /// Timestamp format used in the inventory file header
    pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
}
