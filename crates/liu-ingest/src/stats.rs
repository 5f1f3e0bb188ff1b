//! 会话运行计数.

use std::fmt;
use std::time::{Duration, Instant};

/// 单个接收会话的运行计数
///
/// 所有计数在一个 `start()` 周期内单调递增, 重置时一并清零.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// 已接收帧数 (含被丢弃的帧)
    pub received_frames: u64,
    /// 解码失败帧数
    pub error_frames: u64,
    /// 序列号空洞累计 (网络丢帧数)
    pub skipped_frames: u64,
    /// 已接收字节数
    pub received_bytes: u64,
    start_time: Instant,
}

impl SessionStats {
    pub(crate) fn new() -> Self {
        Self {
            received_frames: 0,
            error_frames: 0,
            skipped_frames: 0,
            received_bytes: 0,
            start_time: Instant::now(),
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    /// 自会话启动以来的时长
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 接收速率 (KiB/s)
    pub fn rate_kib_per_sec(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.received_bytes as f64 / secs / 1024.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frames={},err={},skipped={},bytes={},rate={:.1}KiB/s",
            self.received_frames,
            self.error_frames,
            self.skipped_frames,
            self.received_bytes,
            self.rate_kib_per_sec(),
        )
    }
}
