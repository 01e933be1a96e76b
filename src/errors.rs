//! 领域错误类型
//!
//! 文件系统错误走 anyhow 上下文链；需要映射到退出码的失败在这里定义。

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// 环境创建工具以非零状态退出
    #[error("{program} exited with {}: {detail}", exit_label(.code))]
    EnvironmentCreation {
        program: String,
        code: Option<i32>,
        detail: String,
    },

    /// 子进程无法启动（解释器不存在等）
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件无法读取或解析
    #[error("failed to load config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// 配置内容校验失败
    #[error("invalid config {}: {reason}", .path.display())]
    InvalidConfig { path: PathBuf, reason: String },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {}", c),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
