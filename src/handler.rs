//! # 命令处理逻辑模块
//!
//! 包含处理 `hide` 和 `reveal` 子命令的高级业务逻辑。
//! 本模块负责协调图像 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{HideArgs, RevealArgs};
use crate::constants::SECRET_SUFFIX;
use crate::steganography::{embed, extract};
use anyhow::{Context, Result};
use colored::Colorize;
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// 根据输入图像路径推导默认的输出路径。
///
/// 在原文件名 (不含扩展名) 后追加固定后缀，扩展名统一为 `.png`，
/// 例如 `photo.bmp` 推导为 `photo_secret.png`。
pub fn default_output_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    image.with_file_name(format!("{stem}{SECRET_SUFFIX}.png"))
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责解码输入图像并转换为 RGB、调用隐写核心函数嵌入信息，
/// 最后将结果以 PNG 格式写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入路径、信息内容和输出路径的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 无法读取或解码输入的图像文件。
/// * 图像没有足够的空间容纳信息，或信息包含无法嵌入的字符。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args
        .output
        .unwrap_or_else(|| default_output_path(&args.image));

    anyhow::ensure!(
        args.force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );

    let picture = image::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    // 统一转换为 RGB，丢弃 alpha 通道和调色板信息。
    let mut pixels = picture.to_rgb8();

    embed(&mut pixels, &args.message).with_context(|| {
        format!(
            "Unable to hide the message in: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    pixels
        .save_with_format(&dest, ImageFormat::Png)
        .with_context(|| {
            format!(
                "Unable to write to target image file: {}",
                dest.to_string_lossy().red().bold()
            )
        })?;

    println!(
        "The message has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Reveal' 命令的执行逻辑。
///
/// 负责解码经过隐写的图像文件、调用提取核心函数扫描隐藏的信息，
/// 并将结果打印给用户。
///
/// 为便于调用方 (交互模式、测试) 检查结果，函数同时返回提取到的信息；
/// `Ok(None)` 表示图像中没有可识别的隐藏信息，这不是一种失败。
///
/// # Arguments
///
/// * `args` - 包含输入路径的 `RevealArgs` 结构体。
///
/// # Errors
///
/// 如果无法读取或解码输入的图像文件，将返回错误。
pub fn handle_reveal(args: RevealArgs) -> Result<Option<String>> {
    let picture = image::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let pixels = picture.to_rgb8();

    match extract(&pixels) {
        Some(message) => {
            println!("Hidden message found:\n\n   {}", message.green().bold());
            Ok(Some(message))
        }
        None => {
            println!(
                "{}",
                "No hidden message found. \n(Did you select the original image instead of the secret one?)"
                    .yellow()
            );
            Ok(None)
        }
    }
}
