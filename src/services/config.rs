use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LOOKUP_URL: &str = "http://tools.sbbbb.cn/ip/";
pub const DEFAULT_ECHO_URL: &str = "https://api.ipify.org";
pub const DEFAULT_ECHO_FALLBACK_URL: &str = "https://ifconfig.me";

const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_BATCH_DELAY_MS: u64 = 1_000;

/// Optional `~/.config/iploc/config.toml`. Every key has a built-in
/// default; `IPLOC_*` environment variables override the file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub lookup_url: Option<String>,
    pub echo_url: Option<String>,
    pub echo_fallback_url: Option<String>,
    pub timeout_ms: Option<u64>,
    pub batch_delay_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub lookup_url: String,
    pub echo_url: String,
    pub echo_fallback_url: String,
    pub timeout: Duration,
    pub batch_delay: Duration,
}

fn config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/iploc/config.toml"))
}

fn load_file() -> anyhow::Result<ConfigFile> {
    let Some(path) = config_path() else {
        return Ok(ConfigFile::default());
    };
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn env_ms(name: &str) -> Option<u64> {
    env_var(name).and_then(|v| v.parse().ok())
}

pub fn load() -> anyhow::Result<Settings> {
    let file = load_file()?;
    Ok(Settings {
        lookup_url: env_var("IPLOC_LOOKUP_URL")
            .or(file.lookup_url)
            .unwrap_or_else(|| DEFAULT_LOOKUP_URL.to_string()),
        echo_url: env_var("IPLOC_ECHO_URL")
            .or(file.echo_url)
            .unwrap_or_else(|| DEFAULT_ECHO_URL.to_string()),
        echo_fallback_url: env_var("IPLOC_ECHO_FALLBACK_URL")
            .or(file.echo_fallback_url)
            .unwrap_or_else(|| DEFAULT_ECHO_FALLBACK_URL.to_string()),
        timeout: Duration::from_millis(
            env_ms("IPLOC_TIMEOUT_MS")
                .or(file.timeout_ms)
                .unwrap_or(DEFAULT_TIMEOUT_MS),
        ),
        batch_delay: Duration::from_millis(
            env_ms("IPLOC_BATCH_DELAY_MS")
                .or(file.batch_delay_ms)
                .unwrap_or(DEFAULT_BATCH_DELAY_MS),
        ),
    })
}
