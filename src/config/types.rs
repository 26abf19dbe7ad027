//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 下游 TTS 服务配置
    #[serde(default)]
    pub downstream: DownstreamConfig,

    /// 参考音频配置
    #[serde(default)]
    pub asset: AssetConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 入站请求体大小上限（字节）
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// 跨域配置
    #[serde(default)]
    pub cors: CorsConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_body_bytes() -> usize {
    1024 * 1024 // 1 MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 跨域配置
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// 允许的来源，"*" 表示任意来源
    #[serde(default = "default_allow_origins")]
    pub allow_origins: Vec<String>,

    /// 预检缓存时间（秒）
    #[serde(default = "default_cors_max_age")]
    pub max_age_secs: u64,
}

fn default_allow_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_cors_max_age() -> u64 {
    3600
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: default_allow_origins(),
            max_age_secs: default_cors_max_age(),
        }
    }
}

/// 下游 TTS 服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct DownstreamConfig {
    /// 服务基础 URL
    #[serde(default = "default_downstream_url")]
    pub url: String,

    /// 合成接口路径
    #[serde(default = "default_downstream_path")]
    pub path: String,

    /// 请求超时时间（秒），0 表示不限制
    #[serde(default)]
    pub timeout_secs: u64,
}

fn default_downstream_url() -> String {
    "http://127.0.0.1:9988".to_string()
}

fn default_downstream_path() -> String {
    "/apitts".to_string()
}

impl Default for DownstreamConfig {
    fn default() -> Self {
        Self {
            url: default_downstream_url(),
            path: default_downstream_path(),
            timeout_secs: 0,
        }
    }
}

impl DownstreamConfig {
    /// 完整的合成接口 URL
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), self.path)
    }
}

/// 参考音频配置
#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    /// 参考音频文件路径（每次请求重新读取）
    #[serde(default = "default_asset_path")]
    pub path: PathBuf,

    /// 上传时的 MIME 类型
    #[serde(default = "default_asset_content_type")]
    pub content_type: String,
}

fn default_asset_path() -> PathBuf {
    PathBuf::from("static/voicelist/reference.wav")
}

fn default_asset_content_type() -> String {
    "audio/wav".to_string()
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            path: default_asset_path(),
            content_type: default_asset_content_type(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
