//! VP8 帧标签探测.
//!
//! VP8 码流没有 Annex B 起始码: 帧头前 3 字节是小端 frame tag,
//! bit 0 为帧类型 (0 = 关键帧), 关键帧紧随 `9D 01 2A` 同步码.
//! 这里只读取帧标签, 不解码压缩头部.

/// 判断一帧 VP8 压缩数据是否为关键帧
pub fn is_key_frame(data: &[u8]) -> bool {
    if data.len() < 3 {
        return false;
    }
    let frame_tag = u32::from_le_bytes([data[0], data[1], data[2], 0]);
    if frame_tag & 1 != 0 {
        return false;
    }
    // 同步码字节存在时顺带校验
    if data.len() >= 6 {
        return data[3] == 0x9D && data[4] == 0x01 && data[5] == 0x2A;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_frame_with_sync_code() {
        let data = [0x50, 0x42, 0x00, 0x9D, 0x01, 0x2A, 0x80, 0x02, 0xE0, 0x01];
        assert!(is_key_frame(&data));
    }

    #[test]
    fn test_inter_frame() {
        // bit 0 置位: 帧间预测帧
        let data = [0x51, 0x42, 0x00, 0x9D, 0x01, 0x2A];
        assert!(!is_key_frame(&data));
    }

    #[test]
    fn test_bad_sync_code() {
        let data = [0x50, 0x42, 0x00, 0xFF, 0x01, 0x2A];
        assert!(!is_key_frame(&data));
    }

    #[test]
    fn test_short_buffer() {
        assert!(!is_key_frame(&[]));
        assert!(!is_key_frame(&[0x50, 0x42]));
    }
}
