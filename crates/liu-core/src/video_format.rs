//! 视频帧格式定义.
//!
//! 传输层交付的压缩帧所属的编码格式.

use std::fmt;

/// 压缩视频帧格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoFormat {
    /// H.264 / AVC (Annex B 码流)
    H264,
    /// VP8
    Vp8,
    /// Motion JPEG (逐帧独立编码)
    Mjpeg,
}

impl VideoFormat {
    /// 丢帧后是否必须等到关键帧才能恢复解码
    ///
    /// H.264 与 VP8 依赖帧间预测, 丢帧会使解码器参考状态失效;
    /// MJPEG 每帧独立编码, 任意一帧都可直接解码.
    pub fn requires_keyframe_resync(&self) -> bool {
        match self {
            Self::H264 | Self::Vp8 => true,
            Self::Mjpeg => false,
        }
    }
}

impl fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::H264 => "H.264",
            Self::Vp8 => "VP8",
            Self::Mjpeg => "MJPEG",
        };
        write!(f, "{name}")
    }
}
