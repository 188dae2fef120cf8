//! # secretpixel 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod handler;
pub mod interactive;
pub mod steganography;
