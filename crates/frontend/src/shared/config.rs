//! Build-time configuration of the frontend.

/// API base used when `CMS_API_BASE` is not set at build time
pub const DEFAULT_API_BASE: &str = "/api";
/// Rows per page when `CMS_PAGE_SIZE` is not set or invalid
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix of every backend path, e.g. "/api" or "http://localhost:8080/api"
    pub api_base: String,
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl AppConfig {
    /// Reads `CMS_API_BASE` and `CMS_PAGE_SIZE` captured at compile time
    pub fn from_env() -> Self {
        Self::from_values(option_env!("CMS_API_BASE"), option_env!("CMS_PAGE_SIZE"))
    }

    pub fn from_values(api_base: Option<&str>, page_size: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();

        let page_size = match page_size.map(str::trim) {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    log::warn!("CMS_PAGE_SIZE '{}' is not a positive number, using {}", raw, DEFAULT_PAGE_SIZE);
                    DEFAULT_PAGE_SIZE
                }
            },
            None => DEFAULT_PAGE_SIZE,
        };

        Self { api_base, page_size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.page_size, 10);
        assert_eq!(AppConfig::default(), config);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some(" http://localhost:8080/api/ "), Some("25"));
        assert_eq!(config.api_base, "http://localhost:8080/api");
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("   "), Some("0"));
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.page_size, 10);
        assert_eq!(AppConfig::from_values(None, Some("ten")).page_size, 10);
    }
}
