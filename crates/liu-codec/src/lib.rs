//! # liu-codec
//!
//! Liu 视频接收框架码流解析库: Annex B 起始码扫描、NAL 单元分类与关键帧判定.
//!
//! 本 crate 只做字节级分类, 不做完整的 H.264 语义解析 (无 slice header
//! 位域解码, 无 SPS/PPS 字段提取), 解析深度以 "丢包后这一帧能否安全送入
//! 解码器" 的判定需要为限.
//!
//! 所有函数均为无状态纯函数, 不分配内存 (调用方缓冲区除外),
//! 可在多个线程上对各自的缓冲区并发调用.

pub mod annexb;
pub mod keyframe;
pub mod nal;
pub mod vp8;

// 重导出常用类型
pub use annexb::{StartCodes, find_start_code, start_codes};
pub use keyframe::is_key_frame;
pub use nal::{NalUnitType, VopType, first_nal_type, first_vop_type, vop_type};
