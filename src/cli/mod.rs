//! 命令行辅助模块

pub mod printer;

pub use printer::{PrintMode, Printer};

/// 初始化日志，默认级别为 warn，可通过 `RUST_LOG` 覆盖
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
