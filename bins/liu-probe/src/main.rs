//! liu-probe - Annex B 码流探测工具
//!
//! 读取原始 H.264 Annex B 转储文件 (视作一个 access unit),
//! 列出 NAL 单元并报告关键帧判定与 VOP 分类结果.

use clap::Parser;
use serde::Serialize;
use std::process;

use liu_codec::{NalUnitType, first_nal_type, is_key_frame, start_codes, vop_type};
use liu_core::{LiuError, LiuResult};

/// Annex B 码流探测工具
#[derive(Parser, Debug)]
#[command(name = "liu-probe", version, about = "Annex B 码流探测工具")]
struct Cli {
    /// 输入文件路径 (原始 Annex B 转储)
    input: String,

    /// 输出 JSON 格式
    #[arg(long)]
    json: bool,

    /// 日志详细程度 (-v/-vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// 单个 NAL 单元信息
#[derive(Serialize)]
struct NalInfo {
    /// 载荷在文件内的字节偏移
    offset: usize,
    type_id: u8,
    name: String,
    vcl: bool,
}

/// 完整探测结果
#[derive(Serialize)]
struct ProbeOutput {
    file: String,
    size: usize,
    nal_units: Vec<NalInfo>,
    first_nal_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    vop_type: Option<String>,
    key_frame: bool,
}

fn main() {
    let cli = Cli::parse();
    liu::logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("liu-probe: {err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> LiuResult<()> {
    let data = std::fs::read(&cli.input)?;
    let output = probe(&cli.input, &data);

    if cli.json {
        let text = serde_json::to_string_pretty(&output)
            .map_err(|e| LiuError::InvalidData(e.to_string()))?;
        println!("{text}");
    } else {
        print_text(&output);
    }
    Ok(())
}

fn probe(file: &str, data: &[u8]) -> ProbeOutput {
    let mut nal_units = Vec::new();
    for offset in start_codes(data) {
        let ty = NalUnitType::from_type_id(data[offset]);
        nal_units.push(NalInfo {
            offset,
            type_id: ty.type_id(),
            name: ty.to_string(),
            vcl: ty.is_vcl(),
        });
    }

    ProbeOutput {
        file: file.to_string(),
        size: data.len(),
        first_nal_type: first_nal_type(data).to_string(),
        vop_type: vop_type(data).ok().map(|v| v.to_string()),
        key_frame: is_key_frame(data),
        nal_units,
    }
}

fn print_text(output: &ProbeOutput) {
    println!("文件: {} ({} 字节)", output.file, output.size);
    println!("NAL 单元: {}", output.nal_units.len());
    for nal in &output.nal_units {
        println!(
            "  偏移 {:>8}  type={:>2}  {}{}",
            nal.offset,
            nal.type_id,
            nal.name,
            if nal.vcl { "  [VCL]" } else { "" },
        );
    }
    println!("第一个 NAL 类型: {}", output.first_nal_type);
    match &output.vop_type {
        Some(vop) => println!("VOP 类型: {vop}"),
        None => println!("VOP 类型: 未识别"),
    }
    println!("关键帧: {}", if output.key_frame { "是" } else { "否" });
}
