//! 解码重同步状态机.
//!
//! 跟踪传输序列号, 检测丢帧, 并决定每一帧是否送入外部解码器:
//! 丢帧之后必须等到关键帧才恢复送入, 否则参考帧缺失会让有状态的
//! 解码器输出花屏甚至持续报错.
//!
//! 会话由单一传输流驱动, 调用方需保证 `on_frame` 串行调用;
//! 会话不跨调用保留对载荷的引用.

use log::{debug, info, warn};

use liu_codec::{is_key_frame, vp8};
use liu_core::VideoFormat;

use crate::decoder::{DecodedFrame, VideoDecoder};
use crate::frame::Frame;
use crate::stats::SessionStats;

/// 运行计数上报间隔 (按接收帧数)
const STATS_REPORT_INTERVAL: u64 = 500;

/// 重同步状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResyncState {
    /// 等待关键帧, 期间非关键帧直接丢弃
    WaitingForKeyframe,
    /// 正常流转, 帧无条件送入解码器
    Streaming,
}

/// 单帧处理结论
#[derive(Debug)]
pub enum FrameOutcome {
    /// 帧已送入解码器并产出一帧图像
    Decoded(DecodedFrame),
    /// 帧已被解码器接受, 暂无输出
    Accepted,
    /// 等待关键帧期间丢弃, 未触达解码器
    Dropped,
    /// 解码器拒绝该帧, 已强制回到等待关键帧状态
    Rejected,
}

/// 解码重同步会话
///
/// 创建后即处于等待关键帧状态: 首帧也必须先通过关键帧判定.
pub struct DecodeResyncSession<D> {
    decoder: D,
    state: ResyncState,
    last_sequence: Option<u32>,
    stats: SessionStats,
}

impl<D: VideoDecoder> DecodeResyncSession<D> {
    /// 创建会话
    pub fn new(decoder: D) -> Self {
        Self {
            decoder,
            state: ResyncState::WaitingForKeyframe,
            last_sequence: None,
            stats: SessionStats::new(),
        }
    }

    /// 重置会话: 清零计数, 忘记序列号, 回到等待关键帧状态
    pub fn start(&mut self) {
        self.state = ResyncState::WaitingForKeyframe;
        self.last_sequence = None;
        self.stats.reset();
    }

    /// 当前重同步状态
    pub fn state(&self) -> ResyncState {
        self.state
    }

    /// 运行计数
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// 结束会话, 取回解码器
    pub fn into_decoder(self) -> D {
        self.decoder
    }

    /// 处理一帧到达的压缩数据
    ///
    /// 每次调用都会更新接收计数与序列号, 无论帧最终被送入还是丢弃.
    pub fn on_frame(&mut self, frame: &Frame) -> FrameOutcome {
        if let Some(last) = self.last_sequence {
            let expected = last.wrapping_add(1);
            if frame.sequence != expected {
                let lost = frame.sequence.wrapping_sub(expected);
                warn!("检测到丢帧: seq={}, 期望 {}", frame.sequence, expected);
                self.stats.skipped_frames += u64::from(lost);
                if frame.format.requires_keyframe_resync() {
                    self.state = ResyncState::WaitingForKeyframe;
                }
            }
        }

        let outcome = self.dispatch(frame);

        self.stats.received_frames += 1;
        self.stats.received_bytes += frame.size() as u64;
        if matches!(outcome, FrameOutcome::Rejected) {
            self.stats.error_frames += 1;
        }
        self.last_sequence = Some(frame.sequence);

        if self.stats.received_frames % STATS_REPORT_INTERVAL == 0 {
            info!("{}", self.stats);
        }
        outcome
    }

    fn dispatch(&mut self, frame: &Frame) -> FrameOutcome {
        if self.state == ResyncState::WaitingForKeyframe && frame.format.requires_keyframe_resync()
        {
            if !detect_key_frame(frame) {
                debug!("等待关键帧中, 丢弃 seq={}", frame.sequence);
                return FrameOutcome::Dropped;
            }
            info!("找到关键帧 seq={}, 恢复送入解码器", frame.sequence);
            self.state = ResyncState::Streaming;
        }
        match self.decoder.decode(&frame.payload, frame.timestamp_us) {
            Ok(Some(decoded)) => FrameOutcome::Decoded(decoded),
            Ok(None) => FrameOutcome::Accepted,
            Err(err) => {
                warn!("解码器拒绝 seq={}: {err}", frame.sequence);
                self.state = ResyncState::WaitingForKeyframe;
                FrameOutcome::Rejected
            }
        }
    }
}

/// 按帧格式选择关键帧判定
fn detect_key_frame(frame: &Frame) -> bool {
    match frame.format {
        VideoFormat::H264 => is_key_frame(&frame.payload),
        VideoFormat::Vp8 => vp8::is_key_frame(&frame.payload),
        // MJPEG 帧内编码, 不会进入等待状态; 防御性返回 true
        VideoFormat::Mjpeg => true,
    }
}
