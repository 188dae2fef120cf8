use clap::Parser;

use secretpixel::{
    cli::{Cli, Commands},
    handler::{handle_hide, handle_reveal},
    interactive,
};

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令（`hide` 或 `reveal`）
/// 将执行分派到相应的处理函数；未指定子命令时进入交互模式
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 根据子命令调用相应的处理函数
    match cli.command {
        Some(Commands::Hide(args)) => handle_hide(args),
        Some(Commands::Reveal(args)) => handle_reveal(args).map(|_| ()),
        None => interactive::run(),
    }
}
