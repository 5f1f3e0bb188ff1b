//! NAL 单元类型与粗粒度图像类型 (VOP) 分类.
//!
//! # NAL 头部 (1 字节)
//! ```text
//! ┌──────────────────────────────────────┐
//! │ forbidden(1) | ref_idc(2) | type(5)  │
//! └──────────────────────────────────────┘
//! ```
//!
//! VOP 分类基于常见编码器输出的首字节魔数, 是性能捷径而非
//! slice header 解析; 不按此约定输出的编码器可能被误判.

use liu_core::{LiuError, LiuResult};

use crate::annexb::find_start_code;

/// NAL 单元类型 (5 bit, 0-31)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NalUnitType {
    /// 未指定 (0)
    Unspecified,
    /// 非 IDR 图像切片 (P/B slice)
    Slice,
    /// 数据分区 A (DPA)
    SliceDpa,
    /// 数据分区 B (DPB)
    SliceDpb,
    /// 数据分区 C (DPC)
    SliceDpc,
    /// IDR 图像切片 (关键帧)
    SliceIdr,
    /// 增补增强信息 (SEI)
    Sei,
    /// 序列参数集 (SPS)
    Sps,
    /// 图像参数集 (PPS)
    Pps,
    /// 访问单元分隔符 (AUD)
    Aud,
    /// 序列结束
    EndOfSequence,
    /// 流结束
    EndOfStream,
    /// 填充数据
    FillerData,
    /// SPS 扩展 (13)
    SpsExtension,
    /// 前缀 NAL 单元 (14)
    Prefix,
    /// 子集 SPS (15)
    SubsetSps,
    /// 保留类型 (16-23)
    Reserved(u8),
    /// 未指定扩展类型 (24-31)
    UnspecifiedExt(u8),
}

impl NalUnitType {
    /// 从 NAL 头部字节创建 (只取低 5 bit)
    pub fn from_type_id(type_id: u8) -> Self {
        match type_id & 0x1F {
            0 => Self::Unspecified,
            1 => Self::Slice,
            2 => Self::SliceDpa,
            3 => Self::SliceDpb,
            4 => Self::SliceDpc,
            5 => Self::SliceIdr,
            6 => Self::Sei,
            7 => Self::Sps,
            8 => Self::Pps,
            9 => Self::Aud,
            10 => Self::EndOfSequence,
            11 => Self::EndOfStream,
            12 => Self::FillerData,
            13 => Self::SpsExtension,
            14 => Self::Prefix,
            15 => Self::SubsetSps,
            id @ 16..=23 => Self::Reserved(id),
            id => Self::UnspecifiedExt(id),
        }
    }

    /// 获取类型编号
    pub fn type_id(&self) -> u8 {
        match self {
            Self::Unspecified => 0,
            Self::Slice => 1,
            Self::SliceDpa => 2,
            Self::SliceDpb => 3,
            Self::SliceDpc => 4,
            Self::SliceIdr => 5,
            Self::Sei => 6,
            Self::Sps => 7,
            Self::Pps => 8,
            Self::Aud => 9,
            Self::EndOfSequence => 10,
            Self::EndOfStream => 11,
            Self::FillerData => 12,
            Self::SpsExtension => 13,
            Self::Prefix => 14,
            Self::SubsetSps => 15,
            Self::Reserved(id) | Self::UnspecifiedExt(id) => *id,
        }
    }

    /// 是否为 VCL (Video Coding Layer) NAL
    pub fn is_vcl(&self) -> bool {
        matches!(
            self,
            Self::Slice | Self::SliceDpa | Self::SliceDpb | Self::SliceDpc | Self::SliceIdr
        )
    }

    /// 是否为关键帧切片 (IDR)
    pub fn is_idr(&self) -> bool {
        matches!(self, Self::SliceIdr)
    }
}

impl std::fmt::Display for NalUnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unspecified => write!(f, "Unspecified"),
            Self::Slice => write!(f, "Slice"),
            Self::SliceDpa => write!(f, "SliceDPA"),
            Self::SliceDpb => write!(f, "SliceDPB"),
            Self::SliceDpc => write!(f, "SliceDPC"),
            Self::SliceIdr => write!(f, "IDR"),
            Self::Sei => write!(f, "SEI"),
            Self::Sps => write!(f, "SPS"),
            Self::Pps => write!(f, "PPS"),
            Self::Aud => write!(f, "AUD"),
            Self::EndOfSequence => write!(f, "EndOfSeq"),
            Self::EndOfStream => write!(f, "EndOfStream"),
            Self::FillerData => write!(f, "Filler"),
            Self::SpsExtension => write!(f, "SPSExt"),
            Self::Prefix => write!(f, "Prefix"),
            Self::SubsetSps => write!(f, "SubsetSPS"),
            Self::Reserved(id) => write!(f, "Reserved({id})"),
            Self::UnspecifiedExt(id) => write!(f, "UnspecifiedExt({id})"),
        }
    }
}

/// 返回缓冲区内第一个 NAL 单元的类型
///
/// 未找到起始码时返回 [`NalUnitType::Unspecified`].
pub fn first_nal_type(data: &[u8]) -> NalUnitType {
    match find_start_code(data) {
        Some(payload) => NalUnitType::from_type_id(data[payload]),
        None => NalUnitType::Unspecified,
    }
}

/// 粗粒度图像类型 (VOP, Video Object Plane)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VopType {
    /// I 帧 (帧内编码)
    I,
    /// P 帧 (前向预测)
    P,
    /// B 帧 (双向预测)
    B,
    /// S 帧
    S,
}

impl VopType {
    fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Self::I,
            1 => Self::P,
            2 => Self::B,
            _ => Self::S,
        }
    }
}

impl std::fmt::Display for VopType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::I => write!(f, "I"),
            Self::P => write!(f, "P"),
            Self::B => write!(f, "B"),
            Self::S => write!(f, "S"),
        }
    }
}

/// 按首字节魔数匹配 VOP 类型
///
/// `0xB6` 需要读取下一字节的高 2 bit, 缺字节时视为未命中.
fn match_vop_marker(data: &[u8], payload: usize) -> Option<VopType> {
    match data[payload] {
        0x01 => Some(VopType::B),
        0x61 => Some(VopType::P),
        0x65 | 0x69 => Some(VopType::I),
        0xB6 => {
            let next = *data.get(payload + 1)?;
            Some(VopType::from_index((next & 0xC0) >> 6))
        }
        _ => None,
    }
}

/// 返回第一个 NAL 单元的 VOP 类型
///
/// 只看第一个起始码处的字节; 帧前附带 SPS/PPS/AUD 的码流会判定失败,
/// 这类码流应使用 [`vop_type`].
pub fn first_vop_type(data: &[u8]) -> LiuResult<VopType> {
    if data.len() <= 3 {
        return Err(LiuError::VopNotFound);
    }
    let payload = find_start_code(data).ok_or(LiuError::VopNotFound)?;
    match_vop_marker(data, payload).ok_or(LiuError::VopNotFound)
}

/// 向后遍历各 NAL 单元, 返回第一个可识别的 VOP 类型
///
/// 编码器常在 slice NAL 之前附带 SPS/PPS/AUD, 只看第一个 NAL 会误判,
/// 因此逐个跳过无法识别的前缀, 直到命中魔数或遍历完缓冲区.
pub fn vop_type(data: &[u8]) -> LiuResult<VopType> {
    if data.len() <= 3 {
        return Err(LiuError::VopNotFound);
    }
    let mut payload = find_start_code(data).ok_or(LiuError::VopNotFound)?;
    loop {
        if let Some(vop) = match_vop_marker(data, payload) {
            return Ok(vop);
        }
        payload = match find_start_code(&data[payload + 1..]) {
            Some(rel) => payload + 1 + rel,
            None => return Err(LiuError::VopNotFound),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annexb(units: &[&[u8]]) -> Vec<u8> {
        let mut data = Vec::new();
        for unit in units {
            data.extend_from_slice(&[0x00, 0x00, 0x01]);
            data.extend_from_slice(unit);
        }
        data
    }

    #[test]
    fn test_nal_type_roundtrip_all_values() {
        for id in 0..=31u8 {
            let nt = NalUnitType::from_type_id(id);
            assert_eq!(nt.type_id(), id);
        }
    }

    #[test]
    fn test_nal_type_masks_high_bits() {
        // 0x67 = forbidden 0, ref_idc 3, type 7
        assert_eq!(NalUnitType::from_type_id(0x67), NalUnitType::Sps);
        assert_eq!(NalUnitType::from_type_id(0x68), NalUnitType::Pps);
        assert_eq!(NalUnitType::from_type_id(0x65), NalUnitType::SliceIdr);
    }

    #[test]
    fn test_nal_type_properties() {
        assert!(NalUnitType::SliceIdr.is_vcl());
        assert!(NalUnitType::SliceIdr.is_idr());
        assert!(NalUnitType::Slice.is_vcl());
        assert!(!NalUnitType::Slice.is_idr());
        assert!(!NalUnitType::Sps.is_vcl());
    }

    #[test]
    fn test_first_nal_type() {
        let data = annexb(&[&[0x67, 0x42, 0x00, 0x1E]]);
        assert_eq!(first_nal_type(&data), NalUnitType::Sps);
    }

    #[test]
    fn test_first_nal_type_without_marker() {
        assert_eq!(first_nal_type(&[0x12, 0x34, 0x56, 0x78]), NalUnitType::Unspecified);
        assert_eq!(first_nal_type(&[]), NalUnitType::Unspecified);
    }

    #[test]
    fn test_first_vop_type_markers() {
        assert_eq!(first_vop_type(&annexb(&[&[0x65, 0x88]])).unwrap(), VopType::I);
        assert_eq!(first_vop_type(&annexb(&[&[0x69, 0x10]])).unwrap(), VopType::I);
        assert_eq!(first_vop_type(&annexb(&[&[0x61, 0x9A]])).unwrap(), VopType::P);
        assert_eq!(first_vop_type(&annexb(&[&[0x01, 0x9A]])).unwrap(), VopType::B);
    }

    #[test]
    fn test_vop_marker_extended() {
        // 0xB6: 类型取下一字节高 2 bit
        assert_eq!(first_vop_type(&annexb(&[&[0xB6, 0x40]])).unwrap(), VopType::P);
        assert_eq!(first_vop_type(&annexb(&[&[0xB6, 0x80]])).unwrap(), VopType::B);
        // 0xB6 后没有字节: 判定失败
        assert!(first_vop_type(&annexb(&[&[0xB6]])).is_err());
    }

    #[test]
    fn test_first_vop_type_rejects_parameter_set_prefix() {
        let data = annexb(&[&[0x67, 0x42], &[0x65, 0x88]]);
        assert!(first_vop_type(&data).is_err());
    }

    #[test]
    fn test_vop_type_skips_prefix_nals() {
        // SPS + PPS + AUD 前缀之后才是 IDR slice
        let data = annexb(&[&[0x67, 0x42], &[0x68, 0xCE], &[0x09, 0x10], &[0x65, 0x88]]);
        assert_eq!(vop_type(&data).unwrap(), VopType::I);
    }

    #[test]
    fn test_vop_type_not_found() {
        assert!(vop_type(&[0x00, 0x00]).is_err());
        assert!(vop_type(&annexb(&[&[0x67, 0x42], &[0x68, 0xCE]])).is_err());
        assert!(vop_type(&[0x12, 0x34, 0x56, 0x78]).is_err());
    }

    #[test]
    fn test_classification_is_idempotent() {
        let data = annexb(&[&[0x67, 0x42], &[0x65, 0x88]]);
        assert_eq!(first_nal_type(&data), first_nal_type(&data));
        assert_eq!(vop_type(&data).unwrap(), vop_type(&data).unwrap());
    }
}
