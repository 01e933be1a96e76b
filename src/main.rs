use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fastapi_scaffold::{
    environment::SystemRunner, utils::dir_exists, Console, Menu, Platform, ScaffoldConfig,
};

/// FastAPI Project Template Creator
///
/// 交互式创建项目结构、虚拟环境和 requirements.txt
#[derive(Parser)]
#[command(name = "fastapi-scaffold")]
#[command(author, version = env!("APP_VERSION"), about)]
#[command(
    long_about = "Interactive scaffolder for FastAPI services.\n\
                  Without arguments it opens the menu in the current directory."
)]
struct Cli {
    /// 工作目录（默认当前目录）
    #[arg(short, long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// 自定义脚手架配置（YAML），未指定的字段使用内置默认值
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// 输出当前生效的配置后退出
    #[arg(long)]
    print_config: bool,

    /// 诊断日志输出到 stderr（-v debug，-vv trace）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "fastapi_scaffold=debug",
        _ => "fastapi_scaffold=trace",
    };

    // stdout 留给交互界面
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = ScaffoldConfig::load(cli.config.as_deref())?;

    if cli.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    let base = match cli.dir {
        Some(dir) => dir,
        None => env::current_dir().context("Failed to determine current directory")?,
    };
    if !dir_exists(&base) {
        anyhow::bail!("Working directory does not exist: {}", base.display());
    }

    let platform = Platform::current();
    tracing::debug!(base = %base.display(), ?platform, "starting menu");

    let runner = SystemRunner;
    let menu = Menu::new(&base, config, platform, &runner);
    menu.run(&mut Console::stdio())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{}", format!("\n❌ {:#}", err).red());
        std::process::exit(1);
    }
}
