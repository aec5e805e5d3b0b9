use crate::SiteError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "site.json";

/// Site-wide settings. Every field has a default so a partial `site.json`
/// (or none at all) is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    #[serde(default = "default_toast_fade_ms")]
    pub toast_fade_ms: u64,
    #[serde(default = "default_welcome_delay_ms")]
    pub welcome_delay_ms: u64,
    #[serde(default = "default_category_reveal_step_ms")]
    pub category_reveal_step_ms: u64,
    #[serde(default = "default_recipe_reveal_step_ms")]
    pub recipe_reveal_step_ms: u64,
    #[serde(default = "default_nav_shadow_threshold")]
    pub nav_shadow_threshold: f64,
    #[serde(default = "default_recipe_id")]
    pub default_recipe_id: u32,
}

fn default_base_path() -> String {
    "/".to_string()
}

fn default_search_debounce_ms() -> u64 {
    300
}

fn default_toast_duration_ms() -> u64 {
    3000
}

fn default_toast_fade_ms() -> u64 {
    300
}

fn default_welcome_delay_ms() -> u64 {
    500
}

fn default_category_reveal_step_ms() -> u64 {
    50
}

fn default_recipe_reveal_step_ms() -> u64 {
    100
}

fn default_nav_shadow_threshold() -> f64 {
    100.0
}

fn default_recipe_id() -> u32 {
    1
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            search_debounce_ms: default_search_debounce_ms(),
            toast_duration_ms: default_toast_duration_ms(),
            toast_fade_ms: default_toast_fade_ms(),
            welcome_delay_ms: default_welcome_delay_ms(),
            category_reveal_step_ms: default_category_reveal_step_ms(),
            recipe_reveal_step_ms: default_recipe_reveal_step_ms(),
            nav_shadow_threshold: default_nav_shadow_threshold(),
            default_recipe_id: default_recipe_id(),
        }
    }
}

impl SiteConfig {
    /// Project pages on `*.github.io` live under `/<repo>/`; everything else
    /// is served from the root.
    pub fn for_host(hostname: &str, repo_name: &str) -> Self {
        let base_path = if hostname.contains("github.io") && !repo_name.is_empty() {
            format!("/{}/", repo_name.trim_matches('/'))
        } else {
            default_base_path()
        };

        Self {
            base_path,
            ..Self::default()
        }
    }

    /// Reads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, SiteError> {
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut cfg = serde_json::from_str::<SiteConfig>(&content).map_err(|e| {
            SiteError::Config(format!("failed to parse {}: {e}", path.display()))
        })?;

        if cfg.base_path.is_empty() {
            cfg.base_path = default_base_path();
        }
        if !cfg.base_path.starts_with('/') {
            cfg.base_path.insert(0, '/');
        }
        if !cfg.base_path.ends_with('/') {
            cfg.base_path.push('/');
        }

        Ok(cfg)
    }

    /// Resolves an image reference against the base path. Absolute http(s)
    /// URLs pass through; one leading `./` or `/` is dropped otherwise.
    pub fn image_path(&self, image: &str) -> String {
        if image.is_empty() {
            return String::new();
        }
        if image.starts_with("http://") || image.starts_with("https://") {
            return image.to_string();
        }

        let clean = image
            .strip_prefix("./")
            .or_else(|| image.strip_prefix('/'))
            .unwrap_or(image);
        format!("{}{}", self.base_path, clean)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn toast_fade(&self) -> Duration {
        Duration::from_millis(self.toast_fade_ms)
    }

    pub fn welcome_delay(&self) -> Duration {
        Duration::from_millis(self.welcome_delay_ms)
    }

    pub fn category_reveal_step(&self) -> Duration {
        Duration::from_millis(self.category_reveal_step_ms)
    }

    pub fn recipe_reveal_step(&self) -> Duration {
        Duration::from_millis(self.recipe_reveal_step_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_for_host() {
        assert_eq!(
            SiteConfig::for_host("someone.github.io", "cooking").base_path,
            "/cooking/"
        );
        assert_eq!(SiteConfig::for_host("localhost", "cooking").base_path, "/");
    }

    #[test]
    fn test_image_path() {
        let cfg = SiteConfig::for_host("someone.github.io", "cooking");
        assert_eq!(cfg.image_path(""), "");
        assert_eq!(
            cfg.image_path("https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
        assert_eq!(cfg.image_path("./images/a.jpg"), "/cooking/images/a.jpg");
        assert_eq!(cfg.image_path("/images/a.jpg"), "/cooking/images/a.jpg");
        assert_eq!(cfg.image_path("images/a.jpg"), "/cooking/images/a.jpg");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cfg = SiteConfig::load_or_default(&dir.path().join(CONFIG_FILE_NAME))
            .expect("defaults expected");
        assert_eq!(cfg.search_debounce_ms, 300);
        assert_eq!(cfg.toast_duration_ms, 3000);
        assert_eq!(cfg.base_path, "/");
    }

    #[test]
    fn test_partial_file_is_normalized() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"basePath": "cooking", "toastDurationMs": 1500}"#)
            .expect("write config");

        let cfg = SiteConfig::load_or_default(&path).expect("config should load");
        assert_eq!(cfg.base_path, "/cooking/");
        assert_eq!(cfg.toast_duration_ms, 1500);
        assert_eq!(cfg.toast_fade_ms, 300);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ nope").expect("write config");
        let err = SiteConfig::load_or_default(&path).expect_err("invalid json must fail");
        assert!(matches!(err, SiteError::Config(_)));
    }
}
