//! Resolved per-run project configuration

use anyhow::Result;
use std::fmt;

/// Message shown when the app name is missing
pub const APP_NAME_REQUIRED: &str = "App name is required";

/// The user's choices for one scaffolding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Name of the app; also the directory `create-expo-app` generates
    pub app_name: String,
    /// Add NativeWind (Tailwind CSS for React Native)
    pub use_native_wind: bool,
    /// Add a Zustand global store
    pub use_zustand: bool,
    /// Add an Axios API client
    pub use_axios: bool,
    /// Add `.env` files and a typed accessor
    pub use_env_config: bool,
}

impl ProjectConfig {
    /// Create a config with every optional feature enabled (the prompt defaults)
    pub fn new(app_name: &str) -> Result<Self> {
        let app_name =
            normalize_app_name(app_name).ok_or_else(|| anyhow::anyhow!(APP_NAME_REQUIRED))?;

        Ok(Self {
            app_name,
            use_native_wind: true,
            use_zustand: true,
            use_axios: true,
            use_env_config: true,
        })
    }

    /// Set the four feature flags at once
    pub fn with_features(
        mut self,
        native_wind: bool,
        zustand: bool,
        axios: bool,
        env_config: bool,
    ) -> Self {
        self.use_native_wind = native_wind;
        self.use_zustand = zustand;
        self.use_axios = axios;
        self.use_env_config = env_config;
        self
    }
}

impl fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yes_no = |flag: bool| if flag { "Yes" } else { "No" };
        writeln!(f, "App Name: {}", self.app_name)?;
        writeln!(f, "NativeWind: {}", yes_no(self.use_native_wind))?;
        writeln!(f, "Zustand: {}", yes_no(self.use_zustand))?;
        writeln!(f, "Axios: {}", yes_no(self.use_axios))?;
        write!(f, "Env Config: {}", yes_no(self.use_env_config))
    }
}

/// Trim an app name, returning `None` when nothing is left
pub fn normalize_app_name(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validator used by the app name prompt
pub fn validate_app_name(input: &str) -> Result<(), &'static str> {
    match normalize_app_name(input) {
        Some(_) => Ok(()),
        None => Err(APP_NAME_REQUIRED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_all_features_on() {
        let config = ProjectConfig::new("demo").unwrap();
        assert_eq!(config.app_name, "demo");
        assert!(config.use_native_wind);
        assert!(config.use_zustand);
        assert!(config.use_axios);
        assert!(config.use_env_config);
    }

    #[test]
    fn test_new_trims_app_name() {
        let config = ProjectConfig::new("  my-app \n").unwrap();
        assert_eq!(config.app_name, "my-app");
    }

    #[test]
    fn test_empty_app_name_rejected() {
        assert!(ProjectConfig::new("").is_err());
        assert!(ProjectConfig::new("   ").is_err());
        assert_eq!(validate_app_name(" "), Err(APP_NAME_REQUIRED));
        assert_eq!(validate_app_name("demo"), Ok(()));
    }

    #[test]
    fn test_with_features() {
        let config = ProjectConfig::new("demo")
            .unwrap()
            .with_features(false, true, false, true);
        assert!(!config.use_native_wind);
        assert!(config.use_zustand);
        assert!(!config.use_axios);
        assert!(config.use_env_config);
    }

    #[test]
    fn test_display_summary() {
        let config = ProjectConfig::new("demo")
            .unwrap()
            .with_features(true, false, true, false);
        let summary = config.to_string();
        assert!(summary.contains("App Name: demo"));
        assert!(summary.contains("NativeWind: Yes"));
        assert!(summary.contains("Zustand: No"));
        assert!(summary.contains("Env Config: No"));
    }
}
