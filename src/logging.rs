//! 日志初始化

use tracing_subscriber::EnvFilter;

/// 安装全局 fmt 订阅器
///
/// 优先读取 `RUST_LOG`，未设置时使用 `default_filter`（如 `"graphlab=info"`）。
/// 已经安装过订阅器时返回 `false`。
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_idempotent() {
        init_tracing("graphlab=debug");
        assert!(!init_tracing("graphlab=debug"));
    }
}
