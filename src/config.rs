// Application configuration
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/tabsift/config.toml)
// 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Feature flags for optional modules (opt-out: default enabled)
#[derive(Debug, Clone)]
pub struct Features {
    /// Persist the current filter to the state file on every update
    pub persist_filter: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            persist_filter: true,
        }
    }
}

/// Log file rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl LogRotation {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Also write JSON logs to rotating files
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,

    /// Log file name prefix
    pub file_prefix: String,

    /// Rotation policy for log files
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "tabsift".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Tab definitions file; the built-in demo workspace is used when unset
    pub tabs_file: Option<PathBuf>,

    /// Where the current filter is persisted
    pub state_path: PathBuf,

    /// Theme name: "dark", "light", "terminal"
    pub theme: String,

    /// Feature flags for optional modules
    pub features: Features,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Feature flags as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileFeatures {
    persist_filter: Option<bool>,
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
    file_prefix: Option<String>,
    file_rotation: Option<String>,
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    tabs_file: Option<String>,
    state_path: Option<String>,
    theme: Option<String>,

    /// Optional [features] section
    features: Option<FileFeatures>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/tabsift/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("tabsift").join("config.toml"))
    }

    /// Default state file path, next to the config file
    pub fn default_state_path() -> PathBuf {
        dirs::home_dir()
            .map(|p| p.join(".config").join("tabsift").join("state.toml"))
            .unwrap_or_else(|| PathBuf::from("./tabsift-state.toml"))
    }

    /// Create config template if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        let template = r#"# tabsift configuration
# Uncomment and modify options as needed

# Tab definitions file ([[tab]] entries with id/title/body)
# The built-in demo workspace is used when unset
# tabs_file = "./tabs.toml"

# Where the current filter is persisted
# state_path = "~/.config/tabsift/state.toml"

# Theme: dark, light, terminal
# theme = "dark"

# Feature flags (default: all enabled)
# [features]
# persist_filter = true  # Remember the filter across sessions

# Logging configuration
# [logging]
# level = "info"          # trace, debug, info, warn, error (RUST_LOG overrides)
# file_enabled = false    # Also write JSON logs to rotating files
# file_dir = "./logs"
# file_prefix = "tabsift"
# file_rotation = "daily" # hourly, daily, never
"#;

        // Write template (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                FileConfig::default()
            }),
            Err(_) => FileConfig::default(), // File doesn't exist, use defaults
        }
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        let tabs_line = match &self.tabs_file {
            Some(path) => format!("tabs_file = \"{}\"", path.display()),
            None => "# tabs_file = \"./tabs.toml\"".to_string(),
        };

        format!(
            r#"# tabsift configuration

# Tab definitions file ([[tab]] entries with id/title/body)
{tabs_line}

# Where the current filter is persisted
state_path = "{state}"

# Theme: dark, light, terminal
theme = "{theme}"

# Feature flags
[features]
persist_filter = {persist}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_prefix = "{file_prefix}"
file_rotation = "{file_rotation}"
"#,
            tabs_line = tabs_line,
            state = self.state_path.display(),
            theme = self.theme,
            persist = self.features.persist_filter,
            log_level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_prefix = self.logging.file_prefix,
            file_rotation = self.logging.file_rotation.as_str(),
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();

        // Tabs file: env > file > unset (demo workspace)
        let tabs_file = std::env::var("TABSIFT_TABS")
            .ok()
            .or(file.tabs_file)
            .map(PathBuf::from);

        // State path: env > file > default
        let state_path = std::env::var("TABSIFT_STATE")
            .ok()
            .or(file.state_path)
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_state_path);

        // Theme: env > file > default
        let theme = std::env::var("TABSIFT_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or_else(|| "dark".to_string());

        // Feature flags: file config only (env vars would be verbose)
        let file_features = file.features.unwrap_or_default();
        let features = Features {
            persist_filter: file_features.persist_filter.unwrap_or(true),
        };

        // Logging settings: file config only (RUST_LOG env var handled in main.rs)
        let file_logging = file.logging.unwrap_or_default();
        let defaults = LoggingConfig::default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or(defaults.level),
            file_enabled: file_logging.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
            file_prefix: file_logging.file_prefix.unwrap_or(defaults.file_prefix),
            file_rotation: file_logging
                .file_rotation
                .as_deref()
                .and_then(LogRotation::parse)
                .unwrap_or(defaults.file_rotation),
        };

        Self {
            tabs_file,
            state_path,
            theme,
            features,
            logging,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tabs_file: None,
            state_path: Self::default_state_path(),
            theme: "dark".to_string(),
            features: Features::default(),
            logging: LoggingConfig::default(),
        }
    }
}
