use serde::{Deserialize, Serialize};

const DEFAULT_API_URL_DEVELOPMENT: &str = "http://localhost:5000/api";
const DEFAULT_API_URL_PRODUCTION: &str = "https://saptavidhi-vendor-api.onrender.com/api";
const DEFAULT_IMAGE_URL_DEVELOPMENT: &str = "http://localhost:5000/uploads";
const DEFAULT_IMAGE_URL_PRODUCTION: &str = "https://saptavidhi-vendor-api.onrender.com/uploads";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url_development: String,
    pub api_base_url_production: String,
    pub image_base_url_development: String,
    pub image_base_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url_development: DEFAULT_API_URL_DEVELOPMENT.to_string(),
            api_base_url_production: DEFAULT_API_URL_PRODUCTION.to_string(),
            image_base_url_development: DEFAULT_IMAGE_URL_DEVELOPMENT.to_string(),
            image_base_url_production: DEFAULT_IMAGE_URL_PRODUCTION.to_string(),
            environment: default_environment().to_string(),
            enable_logging: true,
            toast_duration_ms: 3000,
        }
    }
}

/// Entorno por defecto según el modo de compilación
fn default_environment() -> &'static str {
    if cfg!(debug_assertions) {
        "development"
    } else {
        "production"
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            api_base_url_development: option_env!("API_BASE_URL_DEVELOPMENT")
                .unwrap_or(DEFAULT_API_URL_DEVELOPMENT).to_string(),
            api_base_url_production: option_env!("API_BASE_URL_PRODUCTION")
                .unwrap_or(DEFAULT_API_URL_PRODUCTION).to_string(),
            image_base_url_development: option_env!("IMAGE_BASE_URL_DEVELOPMENT")
                .unwrap_or(DEFAULT_IMAGE_URL_DEVELOPMENT).to_string(),
            image_base_url_production: option_env!("IMAGE_BASE_URL_PRODUCTION")
                .unwrap_or(DEFAULT_IMAGE_URL_PRODUCTION).to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or(default_environment()).to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            toast_duration_ms: option_env!("TOAST_DURATION_MS")
                .unwrap_or("3000").parse().unwrap_or(3000),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// URL base de la API según el entorno actual
    pub fn api_base_url(&self) -> &str {
        if self.is_production() {
            &self.api_base_url_production
        } else {
            &self.api_base_url_development
        }
    }

    /// URL base de imágenes según el entorno actual
    pub fn image_base_url(&self) -> &str {
        if self.is_production() {
            &self.image_base_url_production
        } else {
            &self.image_base_url_development
        }
    }

    /// URL completa de una imagen guardada en el servidor.
    /// Las URLs absolutas se devuelven tal cual.
    pub fn image_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.image_base_url().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(environment: &str) -> AppConfig {
        AppConfig {
            environment: environment.to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_urls_follow_environment() {
        let dev = config("development");
        assert_eq!(dev.api_base_url(), DEFAULT_API_URL_DEVELOPMENT);
        assert_eq!(dev.image_base_url(), DEFAULT_IMAGE_URL_DEVELOPMENT);

        let prod = config("production");
        assert_eq!(prod.api_base_url(), DEFAULT_API_URL_PRODUCTION);
        assert_eq!(prod.image_base_url(), DEFAULT_IMAGE_URL_PRODUCTION);
    }

    #[test]
    fn test_unknown_environment_uses_development() {
        assert_eq!(config("staging").api_base_url(), DEFAULT_API_URL_DEVELOPMENT);
    }

    #[test]
    fn test_image_url_joins_without_double_slash() {
        let mut cfg = config("development");
        cfg.image_base_url_development = "http://img.local/".to_string();
        assert_eq!(cfg.image_url("/banquets/a.jpg"), "http://img.local/banquets/a.jpg");
        assert_eq!(cfg.image_url("b.png"), "http://img.local/b.png");
        assert_eq!(cfg.image_url("https://cdn.x/c.png"), "https://cdn.x/c.png");
    }
}
