//! 关键帧判定.
//!
//! 判断一个完整 access unit 缓冲区能否作为解码入口:
//! 携带 IDR slice、访问单元分隔符, 或按序成对出现的 SPS+PPS.
//!
//! 这是 "解码器能否从这里安全起步" 的启发式判定,
//! 不是完整的码流合法性检查.

use log::trace;

use crate::annexb::find_start_code;
use crate::nal::NalUnitType;

/// 判断缓冲区 (一个完整 access unit) 是否为可解码的关键帧
///
/// 判定规则:
/// - IDR slice 或访问单元分隔符 (AUD): 直接判定为关键帧
/// - SPS 与 PPS 必须在同一缓冲区内成对出现, 且 SPS 在前
/// - 单独的 SPS 或 PPS 不构成关键帧; 没有前置 SPS 的孤立 PPS 终止判定
/// - 缓冲区不足 4 字节或没有起始码: 不是关键帧
pub fn is_key_frame(data: &[u8]) -> bool {
    if data.len() <= 3 {
        trace!("缓冲区过短, 不是关键帧");
        return false;
    }
    let Some(mut payload) = find_start_code(data) else {
        trace!("没有找到 Annex B 起始码");
        return false;
    };

    let mut seen_sps = false;
    let mut seen_pps = false;
    loop {
        match NalUnitType::from_type_id(data[payload]) {
            NalUnitType::SliceIdr => {
                trace!("IDR slice, 判定为关键帧");
                return true;
            }
            NalUnitType::Aud => {
                trace!("访问单元分隔符, 判定为关键帧");
                return true;
            }
            NalUnitType::Sps => {
                trace!("找到 SPS, 继续找下一个起始码");
                seen_sps = true;
            }
            NalUnitType::Pps => {
                // 没有前置 SPS 的孤立 PPS: 遍历到此为止, 之后的 NAL 不参与判定
                if !seen_sps {
                    trace!("孤立的 PPS, 停止遍历");
                    return false;
                }
                trace!("找到 PPS, 继续找下一个起始码");
                seen_pps = true;
            }
            NalUnitType::Unspecified => {}
            other => {
                // 起始码后跟着其他类型的载荷: SPS+PPS 都已出现才算关键帧
                trace!("type={:#04x}, 停止遍历", other.type_id());
                return seen_sps && seen_pps;
            }
        }
        payload = match find_start_code(&data[payload + 1..]) {
            Some(rel) => payload + 1 + rel,
            None => return seen_sps && seen_pps,
        };
    }
}
