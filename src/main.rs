//! Pytania - 问答后端命令行客户端
//!
//! 向后端提交问题、设置年份范围；界面只负责渲染控制器状态

mod cli;

use std::process::ExitCode;

use clap::Parser;
use pytania::config::{load_config_from_path, print_config, AppConfig};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // 加载配置（优先级：命令行 > 环境变量 > 配置文件 > 默认值）
    let mut config = load_config_from_path(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
    if let Some(url) = &cli.backend_url {
        config.backend.url = url.clone();
        pytania::config::validate_config(&config)?;
    }

    init_logging(&config);
    print_config(&config);

    cli::run(cli.command, &config).await
}

/// 初始化日志（输出到 stderr，stdout 只留给回答）
fn init_logging(config: &AppConfig) {
    let log_filter = format!("{},pytania={}", config.log.level, config.log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
