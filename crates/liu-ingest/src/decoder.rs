//! 外部解码器协作接口.
//!
//! 解码到像素与色彩空间转换由外部服务完成, 本 crate 只决定
//! 哪些帧可以送入. 接口按 "送入压缩数据, 可能得到一帧输出" 建模.

use bytes::Bytes;
use liu_core::{LiuError, LiuResult};

/// 解码后的一帧图像
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// 图像宽度 (像素)
    pub width: u32,
    /// 图像高度 (像素)
    pub height: u32,
    /// 解码输出数据
    pub data: Bytes,
    /// 展示时间戳 (微秒)
    pub timestamp_us: i64,
}

impl DecodedFrame {
    /// 将解码数据拷贝到调用方提供的输出缓冲区, 返回写入的字节数
    ///
    /// 输出缓冲区装不下整帧时返回 [`LiuError::Capacity`], 不做部分写入.
    pub fn copy_to(&self, out: &mut [u8]) -> LiuResult<usize> {
        if out.len() < self.data.len() {
            return Err(LiuError::Capacity {
                required: self.data.len(),
                available: out.len(),
            });
        }
        out[..self.data.len()].copy_from_slice(&self.data);
        Ok(self.data.len())
    }
}

/// 外部视频解码器接口
///
/// 会话只在批准转发时调用 [`VideoDecoder::decode`];
/// 等待关键帧期间被丢弃的帧不会触达解码器.
pub trait VideoDecoder {
    /// 送入一帧压缩数据
    ///
    /// # 返回
    /// - `Ok(Some(frame))`: 解码出一帧
    /// - `Ok(None)`: 数据已接受, 暂无输出帧
    /// - `Err(_)`: 解码失败, 解码器内部状态已被污染, 调用方需要重同步
    fn decode(&mut self, payload: &[u8], timestamp_us: i64) -> LiuResult<Option<DecodedFrame>>;
}
