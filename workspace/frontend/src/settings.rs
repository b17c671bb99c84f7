use log::Level;
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

const STORAGE_PREFIX: &str = "realty_forecast_";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend API host (e.g., "localhost" or "api.example.com")
    pub api_host: String,

    /// Backend API port (e.g., 5000)
    pub api_port: u16,

    /// API path prefix (e.g., "/api")
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Request timeout in milliseconds. The predictor can take a while on
    /// a cold start, so this is generous.
    pub request_timeout_ms: u32,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 5000,
            api_path: "/api".to_string(),
            api_use_https: false,
            log_level: Level::Info,
            request_timeout_ms: 30000,
            debug_mode: false,
        }
    }
}

fn storage_key(name: &str) -> String {
    format!("{}{}", STORAGE_PREFIX, name)
}

fn read_item(storage: &Storage, name: &str) -> Option<String> {
    storage.get_item(&storage_key(name)).ok().flatten()
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_storage(&storage);
        }

        settings
    }

    /// Override defaults with whatever is present in localStorage
    fn apply_storage(&mut self, storage: &Storage) {
        if let Some(api_host) = read_item(storage, "api_host") {
            self.api_host = api_host;
        }
        if let Some(port) = read_item(storage, "api_port").and_then(|v| v.parse::<u16>().ok()) {
            self.api_port = port;
        }
        if let Some(api_path) = read_item(storage, "api_path") {
            self.api_path = api_path;
        }
        if let Some(use_https) = read_item(storage, "api_use_https") {
            self.api_use_https = use_https.to_lowercase() == "true";
        }
        if let Some(level) = read_item(storage, "log_level").and_then(|v| parse_level(&v)) {
            self.log_level = level;
        }
        if let Some(timeout) =
            read_item(storage, "request_timeout_ms").and_then(|v| v.parse::<u32>().ok())
        {
            self.request_timeout_ms = timeout;
        }
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item(&storage_key("api_host"), &self.api_host)?;
                storage.set_item(&storage_key("api_port"), &self.api_port.to_string())?;
                storage.set_item(&storage_key("api_path"), &self.api_path)?;
                storage.set_item(&storage_key("api_use_https"), &self.api_use_https.to_string())?;
                storage.set_item(
                    &storage_key("log_level"),
                    &format!("{:?}", self.log_level).to_lowercase(),
                )?;
                storage.set_item(
                    &storage_key("request_timeout_ms"),
                    &self.request_timeout_ms.to_string(),
                )?;
            }
        }
        Ok(())
    }

    /// Get the base API URL (protocol + host + port + path)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
