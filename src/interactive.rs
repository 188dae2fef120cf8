//! # 交互模式模块
//!
//! 当用户未指定任何子命令时启动的菜单式向导。
//! 本模块只负责收集输入并分派到 `handler` 中的处理函数，
//! 不包含任何隐写逻辑；处理函数返回的错误在此打印后回到菜单。

use crate::cli::{HideArgs, RevealArgs};
use crate::handler::{handle_hide, handle_reveal};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// 运行交互式向导的主循环。
///
/// 菜单提供隐藏、提取和退出三个选项；标准输入到达 EOF 时也会正常退出。
///
/// # Errors
///
/// 仅当标准输入或标准输出本身不可用时返回错误；
/// 处理函数的失败会被打印出来，随后回到菜单。
pub fn run() -> Result<()> {
    loop {
        println!();
        println!("=== secretpixel ===");
        println!("--------------------------------");
        println!("1. Hide a Message");
        println!("2. Reveal a Message");
        println!("3. Exit");

        let Some(choice) = prompt("\n-> Choose an option (1/2/3): ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                if let Err(error) = hide_wizard() {
                    eprintln!("{} {error:#}", "[-] Error:".red().bold());
                }
            }
            "2" => {
                if let Err(error) = reveal_wizard() {
                    eprintln!("{} {error:#}", "[-] Error:".red().bold());
                }
            }
            "3" => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => println!("{}", "Invalid choice!".red()),
        }
    }
}

/// 收集隐藏操作所需的输入并调用处理函数。
///
/// 输出路径由输入路径自动推导，与原文件同目录；
/// 重复对同一图像操作时直接覆盖上次的结果。
fn hide_wizard() -> Result<()> {
    let Some(raw_path) = prompt("-> Enter image path (drag & drop file here): ")? else {
        return Ok(());
    };
    let image = PathBuf::from(strip_quotes(&raw_path));

    if !image.exists() {
        println!(
            "{} File not found: {}",
            "[-]".red(),
            image.to_string_lossy().red().bold()
        );
        return Ok(());
    }

    let Some(message) = prompt("-> Enter your secret message: ")? else {
        return Ok(());
    };
    if message.is_empty() {
        println!("{}", "Message cannot be empty.".red());
        return Ok(());
    }

    handle_hide(HideArgs {
        image,
        message,
        output: None,
        force: true,
    })
}

/// 收集提取操作所需的输入并调用处理函数。
fn reveal_wizard() -> Result<()> {
    let Some(raw_path) = prompt("-> Enter image path to reveal (drag & drop file here): ")? else {
        return Ok(());
    };
    let image = PathBuf::from(strip_quotes(&raw_path));

    if !image.exists() {
        println!(
            "{} File not found: {}",
            "[-]".red(),
            image.to_string_lossy().red().bold()
        );
        return Ok(());
    }

    handle_reveal(RevealArgs { image }).map(|_| ())
}

/// 打印提示并读取一行输入；EOF 时返回 `None`。
fn prompt(text: &str) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush().context("Unable to flush stdout")?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Unable to read from stdin")?;

    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// 去除拖放文件时 shell 附加的成对引号。
fn strip_quotes(path: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = path
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }

    path
}
