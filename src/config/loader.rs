//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use http::HeaderValue;
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "APITTS_RELAY";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `APITTS_RELAY_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `APITTS_RELAY_SERVER__PORT=5000`
/// - `APITTS_RELAY_DOWNSTREAM__URL=http://127.0.0.1:9988`
/// - `APITTS_RELAY_ASSET__PATH=/srv/voices/simba.wav`
/// - `APITTS_RELAY_SERVER__CORS__ALLOW_ORIGINS=http://a.example,http://b.example`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 5000)?
        .set_default("server.max_body_bytes", 1024_i64 * 1024)?
        .set_default("server.cors.max_age_secs", 3600)?
        .set_default("downstream.url", "http://127.0.0.1:9988")?
        .set_default("downstream.path", "/apitts")?
        .set_default("downstream.timeout_secs", 0)?
        .set_default("asset.path", "static/voicelist/reference.wav")?
        .set_default("asset.content_type", "audio/wav")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("server.cors.allow_origins")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.downstream.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Downstream URL cannot be empty".to_string(),
        ));
    }

    reqwest::Url::parse(&config.downstream.endpoint_url()).map_err(|e| {
        ConfigError::ValidationError(format!(
            "Invalid downstream URL {}: {}",
            config.downstream.endpoint_url(),
            e
        ))
    })?;

    if !config.downstream.path.starts_with('/') {
        return Err(ConfigError::ValidationError(
            "Downstream path must start with '/'".to_string(),
        ));
    }

    if config.asset.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Asset path cannot be empty".to_string(),
        ));
    }

    // 与出站 multipart 使用同一解析，避免启动后每个请求都失败
    if reqwest::multipart::Part::bytes(Vec::new())
        .mime_str(&config.asset.content_type)
        .is_err()
    {
        return Err(ConfigError::ValidationError(format!(
            "Invalid asset content type: {}",
            config.asset.content_type
        )));
    }

    if config.server.cors.allow_origins.is_empty() {
        return Err(ConfigError::ValidationError(
            "CORS allow_origins cannot be empty (use \"*\" for any origin)".to_string(),
        ));
    }

    for origin in &config.server.cors.allow_origins {
        if origin != "*" && HeaderValue::from_str(origin).is_err() {
            return Err(ConfigError::ValidationError(format!(
                "Invalid CORS origin: {}",
                origin
            )));
        }
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Body: {} bytes", config.server.max_body_bytes);
    tracing::info!("CORS Origins: {:?}", config.server.cors.allow_origins);
    tracing::info!("Downstream: {}", config.downstream.endpoint_url());
    if config.downstream.timeout_secs > 0 {
        tracing::info!("Downstream Timeout: {}s", config.downstream.timeout_secs);
    } else {
        tracing::info!("Downstream Timeout: none");
    }
    tracing::info!("Reference Audio: {:?}", config.asset.path);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
