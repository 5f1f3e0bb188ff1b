//! 传输层交付的压缩视频帧.

use bytes::Bytes;
use liu_core::VideoFormat;

/// 一帧压缩视频数据
///
/// 由传输层按到达顺序交付; 序列号可能有空洞 (丢包),
/// 但契约上不会重复或乱序.
#[derive(Debug, Clone)]
pub struct Frame {
    /// 传输层序列号
    pub sequence: u32,
    /// 编码格式
    pub format: VideoFormat,
    /// 压缩数据
    pub payload: Bytes,
    /// 展示时间戳 (微秒)
    pub timestamp_us: i64,
}

impl Frame {
    /// 从载荷创建帧
    pub fn new(
        sequence: u32,
        format: VideoFormat,
        payload: impl Into<Bytes>,
        timestamp_us: i64,
    ) -> Self {
        Self {
            sequence,
            format,
            payload: payload.into(),
            timestamp_us,
        }
    }

    /// 载荷大小 (字节)
    pub fn size(&self) -> usize {
        self.payload.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_construction() {
        let frame = Frame::new(7, VideoFormat::H264, vec![0x00, 0x00, 0x01, 0x65], 123_456);
        assert_eq!(frame.sequence, 7);
        assert_eq!(frame.format, VideoFormat::H264);
        assert_eq!(frame.size(), 4);
        assert_eq!(frame.timestamp_us, 123_456);
    }
}
