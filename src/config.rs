use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Time-related constants
// =============================================================================

/// Default cache time-to-live (24 hours)
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Timeout for the version info request (1 second)
///
/// The check runs near tool startup, so a slow or unreachable endpoint must
/// not hold the tool up for longer than this.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(1);

// =============================================================================
// Endpoints
// =============================================================================

/// Default URL of the document describing the latest published version
pub const VERSION_INFO_URL: &str = "https://dl.update-check.dev/latest-version.json";

/// Upgrade instructions referenced by the advisory
pub const UPGRADE_DOC_URL: &str = "https://github.com/skanehira/update-check#installation";

/// File name of the cache record inside the data directory
pub const CACHE_FILE_NAME: &str = "version.json";

/// Configuration for a version check.
///
/// The host CLI is responsible for producing these values (typically from its
/// flag layer); the checker itself never consults process-wide state.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    /// Skips the check entirely when false
    pub enabled: bool,
    /// Path of the persisted cache record
    pub cache_path: PathBuf,
    /// Maximum age before the cache must be refreshed
    pub cache_ttl: Duration,
    /// Tool name used in advisory messages
    pub tool_name: String,
    /// The running tool's own version
    pub current_version: String,
}

impl CheckConfig {
    pub fn new(tool_name: impl Into<String>, current_version: impl Into<String>) -> Self {
        Self {
            enabled: true,
            cache_path: default_cache_path(),
            cache_ttl: DEFAULT_CACHE_TTL,
            tool_name: tool_name.into(),
            current_version: current_version.into(),
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = path.into();
        self
    }

    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}

/// Returns the path to the data directory for update-check.
/// Uses $XDG_DATA_HOME/update-check if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/update-check,
/// or ./update-check if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the default path of the cache record file.
pub fn default_cache_path() -> PathBuf {
    data_dir().join(CACHE_FILE_NAME)
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("update-check")
}
