//! Annex B 起始码扫描.
//!
//! Annex B 使用起始码 (start code) 分隔 NAL 单元:
//! - 3 字节起始码: `00 00 01`
//! - 4 字节起始码: `00 00 00 01`
//!
//! 扫描只匹配 3 字节后缀, 4 字节起始码的前导 `0x00` 被自然跳过,
//! 任意长度的前导零串同理.

/// 查找最左侧的 Annex B 起始码, 返回紧随其后的 NAL 载荷偏移量.
///
/// 只有当起始码之后至少还有 1 个载荷字节时才算找到 (`i + 3 < len`);
/// 缓冲区不足 4 字节, 或不含合格起始码时返回 `None`.
///
/// 单趟 O(n) 扫描, 无副作用.
pub fn find_start_code(data: &[u8]) -> Option<usize> {
    if data.len() < 4 {
        return None;
    }
    for i in 0..data.len() - 3 {
        if data[i] == 0x00 && data[i + 1] == 0x00 && data[i + 2] == 0x01 {
            return Some(i + 3);
        }
    }
    None
}

/// 遍历缓冲区内全部起始码, 依次产出各 NAL 载荷偏移量
pub fn start_codes(data: &[u8]) -> StartCodes<'_> {
    StartCodes { data, pos: 0 }
}

/// [`start_codes`] 返回的迭代器
///
/// 每次从上一个载荷字节之后继续搜索, 搜索窗口严格缩小, 整体仍为 O(n).
pub struct StartCodes<'a> {
    data: &'a [u8],
    pos: usize,
}

impl Iterator for StartCodes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let rel = find_start_code(&self.data[self.pos..])?;
        let payload = self.pos + rel;
        self.pos = payload + 1;
        Some(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_basic_marker() {
        let data = [0x00, 0x00, 0x01, 0x65, 0x88];
        assert_eq!(find_start_code(&data), Some(3));
    }

    #[test]
    fn test_find_returns_leftmost_match() {
        let data = [0xFF, 0x00, 0x00, 0x01, 0x67, 0x00, 0x00, 0x01, 0x68];
        assert_eq!(find_start_code(&data), Some(4));
    }

    #[test]
    fn test_find_four_byte_start_code() {
        // 4 字节起始码通过 3 字节后缀被找到
        let data = [0x00, 0x00, 0x00, 0x01, 0x65];
        assert_eq!(find_start_code(&data), Some(4));
    }

    #[test]
    fn test_find_minimum_buffer() {
        // 起始码 + 恰好 1 个载荷字节
        let data = [0x00, 0x00, 0x01, 0x65];
        assert_eq!(find_start_code(&data), Some(3));
    }

    #[test]
    fn test_too_short_buffers_never_match() {
        assert_eq!(find_start_code(&[]), None);
        assert_eq!(find_start_code(&[0x00]), None);
        assert_eq!(find_start_code(&[0x00, 0x00]), None);
        assert_eq!(find_start_code(&[0x00, 0x00, 0x01]), None);
    }

    #[test]
    fn test_marker_without_payload_not_found() {
        // 起始码位于末尾, 无载荷字节
        let data = [0xAA, 0x00, 0x00, 0x01];
        assert_eq!(find_start_code(&data), None);
    }

    #[test]
    fn test_no_marker() {
        let data = [0x12, 0x34, 0x56, 0x78, 0x9A];
        assert_eq!(find_start_code(&data), None);
    }

    #[test]
    fn test_start_codes_iterator() {
        let data = [
            0x00, 0x00, 0x01, 0x67, 0xAA, // SPS
            0x00, 0x00, 0x01, 0x68, 0xBB, // PPS
            0x00, 0x00, 0x00, 0x01, 0x65, 0xCC, // IDR (4字节起始码)
        ];
        let offsets: Vec<usize> = start_codes(&data).collect();
        assert_eq!(offsets, vec![3, 8, 14]);
        assert_eq!(data[offsets[0]], 0x67);
        assert_eq!(data[offsets[1]], 0x68);
        assert_eq!(data[offsets[2]], 0x65);
    }

    #[test]
    fn test_start_codes_empty_buffer() {
        assert_eq!(start_codes(&[]).count(), 0);
    }
}
