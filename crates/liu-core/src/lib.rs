//! # liu-core
//!
//! Liu 视频接收框架核心库, 提供错误处理与共享类型定义.
//!
//! 本 crate 不含任何码流解析逻辑, 为其余 Liu crate 提供底层基础设施.

pub mod error;
pub mod video_format;

// 重导出常用类型
pub use error::{LiuError, LiuResult};
pub use video_format::VideoFormat;
