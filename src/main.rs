//! apitts-relay - 语音合成转发服务
//!
//! POST /process_apitts → 附加参考音频 → 下游 TTS 服务 → 原样返回 JSON

use std::sync::Arc;

use apitts_relay::config::{load_config, print_config, AppConfig};
use apitts_relay::infrastructure::adapters::{
    FileReferenceAudio, HttpTtsClient, HttpTtsClientConfig,
};
use apitts_relay::infrastructure::http::{AppState, CorsConfig, HttpServer, ServerConfig};

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},apitts_relay={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("apitts-relay v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 参考音频每次请求重新读取，这里只做提示
    let reference_audio = Arc::new(FileReferenceAudio::new(
        &config.asset.path,
        config.asset.content_type.clone(),
    ));
    if !reference_audio.exists().await {
        tracing::warn!(
            path = %reference_audio.path().display(),
            "Reference audio not found; requests will fail until it exists"
        );
    }

    // 创建下游 TTS 客户端
    let tts_config = HttpTtsClientConfig::new(config.downstream.url.clone())
        .with_path(config.downstream.path.clone())
        .with_timeout(config.downstream.timeout_secs);
    let tts_engine = Arc::new(HttpTtsClient::new(tts_config)?);

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes)
        .with_cors(CorsConfig {
            allow_origins: config.server.cors.allow_origins.clone(),
            max_age_secs: config.server.cors.max_age_secs,
        });
    let state = AppState::new(reference_audio, tts_engine);

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
