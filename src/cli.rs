//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在图像的 RGB 通道中隐藏或提取秘密信息。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在图像的 RGB 通道中隐藏或提取秘密信息。不指定子命令时进入交互模式。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 可用的子命令：hide (隐藏) 和 reveal (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损格式图像 (如 PNG, BMP) 中隐藏一段秘密信息，结果保存为 PNG。
    Hide(HideArgs),

    /// 从经过隐写的图像中提取隐藏的信息。
    Reveal(RevealArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的秘密信息内容。
    #[arg(short, long)]
    pub message: String,

    /// 隐写完成后，保存结果图像的输出路径。缺省时在原文件名后追加 "_secret.png"。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 当输出文件已存在时，强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'reveal' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RevealArgs {
    /// 已隐藏信息数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,
}
