use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    pub proxy: ProxyConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Per-request deadline for inbound HTTP requests, in seconds.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    /// Deadline for a single generateContent call, in seconds.
    pub timeout_secs: u64,
    /// Route upstream calls through the configured proxy.
    pub use_proxy: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub enabled: bool,
    pub http_proxy: String,
    pub https_proxy: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Config {
    /// Load configuration with environment variable override support
    ///
    /// Loading order:
    /// 1. Load from config.toml file (explicit path wins over probed paths)
    /// 2. Override with environment variables (prefixed with APP_)
    /// 3. Validate the final configuration
    pub fn load(path: Option<&str>) -> Result<Self, anyhow::Error> {
        // 1. Load from config file
        let mut config = if let Some(explicit) = path {
            Self::from_toml(explicit)?
        } else if let Some(config_path) = Self::find_config_file() {
            Self::from_toml(&config_path)?
        } else {
            tracing::warn!("Configuration file not found, using defaults");
            Config::default()
        };

        // 2. Override with environment variables
        config.apply_env_overrides();

        // 3. Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - APP_SERVER_HOST: Server host (default: 0.0.0.0)
    /// - APP_SERVER_PORT: Server port (default: 8080)
    /// - APP_GEMINI_API_KEY: Generative Language API key (also: GEMINI_API_KEY)
    /// - APP_GEMINI_MODEL: Model identifier (default: gemini-pro)
    /// - APP_GEMINI_TIMEOUT_SECS: Upstream call deadline in seconds
    /// - APP_GEMINI_USE_PROXY: Route upstream calls through the proxy (true/false)
    /// - APP_PROXY_ENABLED: Enable the proxy section (true/false)
    /// - APP_HTTP_PROXY / APP_HTTPS_PROXY: Proxy URLs
    /// - APP_LOG_LEVEL: Logging level (e.g., "info,givename=debug")
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("APP_SERVER_HOST") {
            self.server.host = host;
            tracing::info!("Override server.host from env: {}", self.server.host);
        }

        if let Ok(port) = std::env::var("APP_SERVER_PORT")
            && let Ok(port) = port.parse()
        {
            self.server.port = port;
            tracing::info!("Override server.port from env: {}", self.server.port);
        }

        if let Ok(key) = std::env::var("APP_GEMINI_API_KEY").or_else(|_| std::env::var("GEMINI_API_KEY")) {
            self.gemini.api_key = key;
            tracing::info!("Override gemini.api_key from env");
        }

        if let Ok(model) = std::env::var("APP_GEMINI_MODEL") {
            self.gemini.model = model;
            tracing::info!("Override gemini.model from env: {}", self.gemini.model);
        }

        if let Ok(timeout) = std::env::var("APP_GEMINI_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(val) => {
                    self.gemini.timeout_secs = val;
                    tracing::info!(
                        "Override gemini.timeout_secs from env: {}",
                        self.gemini.timeout_secs
                    );
                },
                Err(e) => tracing::warn!(
                    "Invalid APP_GEMINI_TIMEOUT_SECS '{}': {} (keep {})",
                    timeout,
                    e,
                    self.gemini.timeout_secs
                ),
            }
        }

        if let Ok(use_proxy) = std::env::var("APP_GEMINI_USE_PROXY")
            && let Ok(val) = use_proxy.parse()
        {
            self.gemini.use_proxy = val;
            tracing::info!("Override gemini.use_proxy from env: {}", self.gemini.use_proxy);
        }

        if let Ok(enabled) = std::env::var("APP_PROXY_ENABLED")
            && let Ok(val) = enabled.parse()
        {
            self.proxy.enabled = val;
            tracing::info!("Override proxy.enabled from env: {}", self.proxy.enabled);
        }

        if let Ok(url) = std::env::var("APP_HTTP_PROXY") {
            self.proxy.http_proxy = url;
            tracing::info!("Override proxy.http_proxy from env");
        }

        if let Ok(url) = std::env::var("APP_HTTPS_PROXY") {
            self.proxy.https_proxy = url;
            tracing::info!("Override proxy.https_proxy from env");
        }

        if let Ok(level) = std::env::var("APP_LOG_LEVEL") {
            self.logging.level = level;
            tracing::info!("Override logging.level from env: {}", self.logging.level);
        }
    }

    /// Validate configuration
    ///
    /// Startup validation is fatal: the process must not serve traffic with
    /// an unusable configuration.
    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.gemini.api_key.is_empty() {
            anyhow::bail!(
                "gemini.api_key is required (set APP_GEMINI_API_KEY or edit conf/config.toml)"
            );
        }

        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        if self.server.timeout_secs == 0 {
            anyhow::bail!("server.timeout_secs must be > 0");
        }

        if self.gemini.timeout_secs == 0 {
            anyhow::bail!("gemini.timeout_secs must be > 0");
        }

        if self.gemini.api_base.is_empty() {
            anyhow::bail!("gemini.api_base cannot be empty");
        }

        if self.gemini.use_proxy
            && self.proxy.enabled
            && (self.proxy.http_proxy.is_empty() || self.proxy.https_proxy.is_empty())
        {
            anyhow::bail!("proxy URLs are required when proxying is enabled");
        }

        Ok(())
    }

    fn find_config_file() -> Option<String> {
        let possible_paths = ["conf/config.toml", "config.toml", "./conf/config.toml", "./config.toml"];

        for path in &possible_paths {
            if Path::new(path).exists() {
                return Some(path.to_string());
            }
        }
        None
    }

    fn from_toml(path: &str) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8080, timeout_secs: 30 }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-pro".to_string(),
            api_base: "https://generativelanguage.googleapis.com".to_string(),
            timeout_secs: 20,
            use_proxy: false,
        }
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            http_proxy: "http://127.0.0.1:8118".to_string(),
            https_proxy: "http://127.0.0.1:8118".to_string(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
            allowed_methods: vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info,givename=debug".to_string(), file: None }
    }
}
