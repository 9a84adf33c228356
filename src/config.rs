use std::fmt;

use crate::{
    constants::{
        DEFAULT_BASE_URL, ENV_APP_ID, ENV_APP_KEY, ENV_APP_SECRET, ENV_BASE_URL, ENV_PACKAGE_NAME,
    },
    errors::MiGlobalIapError,
};

/// Credentials and endpoint for the Mi Global IAP API.
///
/// Read-only once built; share it freely between tasks.
#[derive(Clone)]
pub struct MiGlobalIapConfig {
    app_id: String,
    app_key: String,
    app_secret: String,
    package_name: String,
    base_url: String,
}

impl MiGlobalIapConfig {
    /// Config pointing at the production endpoint
    /// (https://rest-iap.miglobalpay.com).
    pub fn new(
        app_id: impl Into<String>,
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
        package_name: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
            app_secret: app_secret.into(),
            package_name: package_name.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Loads the config from the MI_GLOBAL_IAP_* environment variables.
    /// MI_GLOBAL_IAP_BASE_URL is optional.
    pub fn from_env() -> Result<Self, MiGlobalIapError> {
        let config = Self::new(
            required_var(ENV_APP_ID)?,
            required_var(ENV_APP_KEY)?,
            required_var(ENV_APP_SECRET)?,
            required_var(ENV_PACKAGE_NAME)?,
        );
        Ok(match std::env::var(ENV_BASE_URL) {
            Ok(base_url) if !base_url.is_empty() => config.with_base_url(base_url),
            _ => config,
        })
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    pub(crate) fn app_secret(&self) -> &str {
        &self.app_secret
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for MiGlobalIapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MiGlobalIapConfig")
            .field("app_id", &self.app_id)
            .field("app_key", &"<redacted>")
            .field("app_secret", &"<redacted>")
            .field("package_name", &self.package_name)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn required_var(key: &'static str) -> Result<String, MiGlobalIapError> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(MiGlobalIapError::MissingConfig(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_production_endpoint() {
        let config = MiGlobalIapConfig::new("123456", "123456", "secret", "com.iap.test");
        assert_eq!(config.base_url(), "https://rest-iap.miglobalpay.com");
        assert_eq!(config.package_name(), "com.iap.test");
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let config = MiGlobalIapConfig::new("a", "b", "c", "d").with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let config = MiGlobalIapConfig::new("123456", "app-key-value", "app-secret-value", "pkg");
        let debug = format!("{:?}", config);
        assert!(debug.contains("123456"));
        assert!(!debug.contains("app-key-value"));
        assert!(!debug.contains("app-secret-value"));
    }

    #[test]
    fn test_from_env() {
        std::env::set_var(ENV_APP_ID, "123456");
        std::env::set_var(ENV_APP_KEY, "654321");
        std::env::set_var(ENV_APP_SECRET, "MTIzNDU2Nzg5MA==");
        std::env::remove_var(ENV_PACKAGE_NAME);
        std::env::remove_var(ENV_BASE_URL);

        assert!(matches!(
            MiGlobalIapConfig::from_env(),
            Err(MiGlobalIapError::MissingConfig(ENV_PACKAGE_NAME))
        ));

        std::env::set_var(ENV_PACKAGE_NAME, "com.iap.test");
        std::env::set_var(ENV_BASE_URL, "http://localhost:1234/");
        let config = MiGlobalIapConfig::from_env().unwrap();
        assert_eq!(config.app_id(), "123456");
        assert_eq!(config.app_key(), "654321");
        assert_eq!(config.app_secret(), "MTIzNDU2Nzg5MA==");
        assert_eq!(config.base_url(), "http://localhost:1234");
    }
}
