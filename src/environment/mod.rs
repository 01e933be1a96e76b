//! 虚拟环境创建
//!
//! 调用 `<interpreter> -m venv <dir>` 创建隔离的运行环境。
//! 环境目录的内容对本程序不透明，只检查其是否存在。

pub mod runner;

pub use runner::{CommandOutput, CommandRunner, SystemRunner};

use crate::config::ScaffoldConfig;
use crate::console::Console;
use crate::errors::ScaffoldError;
use crate::platform::Platform;
use crate::utils::dir_exists;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;

/// 一次调用的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvOutcome {
    /// 环境已存在且用户选择保留
    Kept,
    /// 新建（或重建）成功
    Created,
}

/// 创建虚拟环境
///
/// 环境已存在时先询问是否重建；只有回答 `y` 才会继续。
/// 创建失败返回 [`ScaffoldError::EnvironmentCreation`]，由调用方终止进程。
pub fn create_virtual_environment<R: BufRead, W: Write>(
    base: &Path,
    config: &ScaffoldConfig,
    platform: Platform,
    console: &mut Console<R, W>,
    runner: &dyn CommandRunner,
) -> Result<EnvOutcome> {
    let venv_path = config.venv_path(base);

    if dir_exists(&venv_path) {
        console.blank()?;
        console.warn(&format!(
            "Virtual environment already exists at {}/",
            config.venv_dir
        ))?;

        let answer = console
            .prompt("Do you want to recreate it? (y/n): ")?
            .unwrap_or_default()
            .to_lowercase();

        if answer != "y" {
            console.line("Keeping existing virtual environment.")?;
            tracing::debug!(path = %venv_path.display(), "kept existing environment");
            return Ok(EnvOutcome::Kept);
        }
    }

    console.blank()?;
    console.line("📦 Creating virtual environment...")?;

    let interpreter = config.interpreter_for(platform);
    run_venv(base, &interpreter, &config.venv_dir, runner)
        .context("Error creating virtual environment")?;

    console.success(&format!(
        "Virtual environment created successfully in {}/ folder!",
        config.venv_dir
    ))?;
    console.blank()?;
    console.hint("To activate the virtual environment, run:")?;
    console.item(platform.activation_command(&config.venv_dir))?;

    tracing::info!(
        path = %venv_path.display(),
        interpreter = %interpreter,
        "environment created"
    );
    Ok(EnvOutcome::Created)
}

fn run_venv(
    base: &Path,
    interpreter: &str,
    venv_dir: &str,
    runner: &dyn CommandRunner,
) -> Result<(), ScaffoldError> {
    let output = runner.run(interpreter, &["-m", "venv", venv_dir], base)?;

    if !output.success() {
        return Err(ScaffoldError::EnvironmentCreation {
            program: interpreter.to_string(),
            code: output.code,
            detail: output.failure_detail(),
        });
    }

    Ok(())
}
