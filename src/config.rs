use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{env, fs, path::Path, path::PathBuf};

pub const DEFAULT_API_BASE: &str = "https://newsapi.org/v2";

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub country: Option<String>,
    pub default_category: Option<String>,
    pub page_size: Option<u32>,
    pub category_page_size: Option<u32>,
    pub search_page_size: Option<u32>,
    pub cache_ttl_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub open_command: Option<String>,
    pub header: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub api_key: String,
    pub api_base: String,
    pub country: String,
    pub default_category: String,
    pub category_page_size: u32,
    pub search_page_size: u32,
    pub cache_ttl: Duration,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub open_command: Option<String>,
    pub header: Option<String>,
}

impl From<AppConfig> for RuntimeConfig {
    fn from(c: AppConfig) -> Self {
        RuntimeConfig {
            api_key: c.api_key.unwrap_or_default(),
            api_base: c.api_base.unwrap_or_else(|| DEFAULT_API_BASE.into()),
            country: c.country.unwrap_or_else(|| "us".into()),
            default_category: c.default_category.unwrap_or_else(|| "technology".into()),
            // `page_size` sets both modes unless a mode-specific size is given
            category_page_size: c.category_page_size.or(c.page_size).unwrap_or(12),
            search_page_size: c.search_page_size.or(c.page_size).unwrap_or(15),
            cache_ttl: Duration::from_secs(c.cache_ttl_secs.unwrap_or(300)),
            connect_timeout: Duration::from_secs(c.connect_timeout_secs.unwrap_or(5)),
            timeout: Duration::from_secs(c.timeout_secs.unwrap_or(20)),
            open_command: c.open_command,
            header: c.header,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        AppConfig::default().into()
    }
}

pub fn load(config_override: Option<&Path>, api_key_override: Option<String>) -> Result<RuntimeConfig> {
    let file_cfg = match config_override {
        // An explicit path must exist
        Some(p) => read_config(p)?,
        None => match default_config_path() {
            Some(p) if p.is_file() => read_config(&p)?,
            _ => AppConfig::default(),
        },
    };

    let mut cfg = RuntimeConfig::from(file_cfg);
    if let Some(key) = api_key_override.filter(|k| !k.trim().is_empty()) {
        cfg.api_key = key;
    }
    Ok(cfg)
}

fn read_config(path: &Path) -> Result<AppConfig> {
    let txt = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&txt).with_context(|| format!("failed to parse toml: {}", path.display()))
}

fn parse_config(txt: &str) -> Result<AppConfig> {
    Ok(toml::from_str(txt)?)
}

fn default_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let mut p = PathBuf::from(xdg);
        p.push("news-desk");
        p.push("config.toml");
        return Some(p);
    }
    if let Ok(home) = env::var("HOME") {
        let mut p = PathBuf::from(home);
        p.push(".config");
        p.push("news-desk");
        p.push("config.toml");
        return Some(p);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_newsapi_front_page() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
        assert_eq!(cfg.country, "us");
        assert_eq!(cfg.default_category, "technology");
        assert_eq!(cfg.category_page_size, 12);
        assert_eq!(cfg.search_page_size, 15);
        assert_eq!(cfg.cache_ttl, Duration::from_secs(300));
        assert!(cfg.api_key.is_empty());
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let parsed = parse_config(
            r#"
            api_key = "abc"
            search_page_size = 30
            header = "Morning Edition"
            "#,
        )
        .unwrap();
        let cfg = RuntimeConfig::from(parsed);
        assert_eq!(cfg.api_key, "abc");
        assert_eq!(cfg.search_page_size, 30);
        assert_eq!(cfg.category_page_size, 12);
        assert_eq!(cfg.header.as_deref(), Some("Morning Edition"));
    }

    #[test]
    fn shared_page_size_applies_to_both_modes() {
        let cfg = RuntimeConfig::from(parse_config("page_size = 20").unwrap());
        assert_eq!(cfg.category_page_size, 20);
        assert_eq!(cfg.search_page_size, 20);

        let cfg = RuntimeConfig::from(parse_config("page_size = 20\nsearch_page_size = 50").unwrap());
        assert_eq!(cfg.category_page_size, 20);
        assert_eq!(cfg.search_page_size, 50);
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(parse_config("page_size = \"many\"").is_err());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = load(Some(Path::new("/nonexistent/news-desk.toml")), None).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn explicit_config_file_and_key_override() {
        let path = env::temp_dir().join(format!("news-desk-test-{}.toml", std::process::id()));
        fs::write(&path, "api_key = \"from-file\"\ncountry = \"gb\"\n").unwrap();

        let cfg = load(Some(&path), None).unwrap();
        assert_eq!(cfg.api_key, "from-file");
        assert_eq!(cfg.country, "gb");

        let cfg = load(Some(&path), Some("from-flag".into())).unwrap();
        assert_eq!(cfg.api_key, "from-flag");

        let cfg = load(Some(&path), Some("  ".into())).unwrap();
        assert_eq!(cfg.api_key, "from-file");

        let _ = fs::remove_file(&path);
    }
}
