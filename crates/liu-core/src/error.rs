//! 统一错误类型定义.
//!
//! 所有 Liu crate 共用的错误类型, 支持跨模块传播.
//!
//! 注意: "缓冲区里没有起始码"、"这一帧不是关键帧" 这类常见输入
//! 不算错误, 相关接口用普通返回值表达, 不走本类型.

use thiserror::Error;

/// Liu 框架统一错误类型
#[derive(Debug, Error)]
pub enum LiuError {
    /// 无效参数
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 无效数据 (损坏的码流等)
    #[error("无效数据: {0}")]
    InvalidData(String),

    /// 解码器错误 (外部解码器拒绝了送入的帧)
    #[error("解码器错误: {0}")]
    Codec(String),

    /// I/O 错误
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 调用方提供的输出缓冲区容量不足
    #[error("输出缓冲区容量不足: 需要 {required} 字节, 仅有 {available} 字节")]
    Capacity { required: usize, available: usize },

    /// 遍历完整个缓冲区也没有找到可识别的 VOP 类型标记
    #[error("未找到可识别的 VOP 类型标记")]
    VopNotFound,
}

/// Liu 框架统一 Result 类型
pub type LiuResult<T> = Result<T, LiuError>;
