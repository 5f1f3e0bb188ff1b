//! # liu-ingest
//!
//! Liu 视频接收框架接收侧: 压缩帧模型、外部解码器接口与丢包重同步状态机.
//!
//! 数据流向单向: 传输层 → [`DecodeResyncSession::on_frame`] → 丢帧检测 →
//! 关键帧判定 (仅等待期间) → 送入/丢弃 → 外部解码器.

pub mod decoder;
pub mod frame;
pub mod session;
pub mod stats;

// 重导出常用类型
pub use decoder::{DecodedFrame, VideoDecoder};
pub use frame::Frame;
pub use session::{DecodeResyncSession, FrameOutcome, ResyncState};
pub use stats::SessionStats;
