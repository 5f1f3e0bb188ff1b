//! # Liu (流)
//!
//! 有损传输下的 H.264 Annex B 视频接收核心.
//!
//! 传输层交付的压缩帧可能有空洞 (丢包), Liu 负责:
//! - 在原始 Annex B 缓冲区内定位 NAL 单元边界
//! - 对载荷做图像类型分类 (IDR/I, P, B, 参数集, 分隔符)
//! - 逐帧决定载荷能否安全送入下游的有状态解码器
//!
//! 像素解码、MP4 封装与网络传输都是外部协作方, 不在本框架范围内.
//!
//! # 快速开始
//!
//! ```rust
//! use liu::codec::{first_nal_type, is_key_frame};
//!
//! let access_unit = [
//!     0x00, 0x00, 0x01, 0x67, 0x42, 0x00, 0x1E, // SPS
//!     0x00, 0x00, 0x01, 0x68, 0xCE, 0x38, // PPS
//!     0x00, 0x00, 0x01, 0x65, 0x88, 0x80, // IDR
//! ];
//! assert_eq!(first_nal_type(&access_unit).to_string(), "SPS");
//! assert!(is_key_frame(&access_unit));
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `liu-core` | 错误与共享类型 |
//! | `liu-codec` | 码流字节级解析 |
//! | `liu-ingest` | 接收会话与丢包重同步 |

/// 错误与共享类型
pub use liu_core as core;

/// 码流字节级解析 (Annex B 扫描、NAL 分类、关键帧判定)
pub use liu_codec as codec;

/// 接收会话与丢包重同步
pub use liu_ingest as ingest;

pub mod logging;

/// 获取 Liu 版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
