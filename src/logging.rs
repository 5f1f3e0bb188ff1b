//! 日志初始化模块.
//!
//! 面向命令行工具的单层输出: 写 stderr, 以免污染探测结果所在的 stdout.
//! 级别由 -v/-vv 控制, `LIU_LOG` 环境变量可覆盖.

use std::io;

use tracing_subscriber::{EnvFilter, fmt};

/// verbosity 档位对应的默认级别
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// 初始化日志系统
///
/// - `verbosity`: 0=info, 1=debug, 2+=trace (由 -v/-vv 控制)
///
/// 进程内只能调用一次; 库 crate 经 `log` 门面打出的日志会被桥接进来.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env("LIU_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
