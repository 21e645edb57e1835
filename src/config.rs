use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub toast_duration_ms: u32,
    pub activation_redirect_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            toast_duration_ms: 3500,
            activation_redirect_ms: 3000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(normalize_base_url)
                .unwrap_or(defaults.backend_url),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            toast_duration_ms: option_env!("TOAST_DURATION_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.toast_duration_ms),
            activation_redirect_ms: option_env!("ACTIVATION_REDIRECT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.activation_redirect_ms),
        }
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

/// Quita la barra final para poder concatenar rutas que empiezan por "/"
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(normalize_base_url("http://api.dojo.com/"), "http://api.dojo.com");
        assert_eq!(normalize_base_url(" http://localhost:8000// "), "http://localhost:8000");
        assert_eq!(normalize_base_url("http://localhost:8000"), "http://localhost:8000");
    }

    #[test]
    fn logging_flag_selects_level() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn default_environment_is_development() {
        let config = AppConfig::default();
        assert_eq!(config.environment, "development");
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    }
}
