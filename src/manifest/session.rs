//! 交互式清单管理会话

use super::{Insert, Requirements};
use crate::config::ScaffoldConfig;
use crate::console::Console;
use crate::platform::{create_env_command, install_command, Platform};
use crate::utils::dir_exists;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::Path;

const PACKAGE_PROMPT: &str = "Package name (with optional version, e.g., 'fastapi==0.104.1'): ";

/// 一次会话的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestOutcome {
    /// 用户输入 `skip`，未写文件
    Skipped,
    /// 清单为空，未写文件
    Empty,
    /// 已写入，返回写入的清单
    Written(Requirements),
}

/// 交互式管理 requirements.txt
///
/// 清单在会话开始时从文件加载，结束时整体写回；会话之间不保留内存状态。
pub fn manage_requirements<R: BufRead, W: Write>(
    base: &Path,
    config: &ScaffoldConfig,
    platform: Platform,
    console: &mut Console<R, W>,
) -> Result<ManifestOutcome> {
    let manifest_path = config.manifest_path(base);
    let requirements = Requirements::load(&manifest_path)?;

    if !requirements.is_empty() {
        console.blank()?;
        console.line(format!("📦 Current packages in {}:", config.manifest_file))?;
        for (i, pkg) in requirements.entries().iter().enumerate() {
            console.item(format!("{}. {}", i + 1, pkg))?;
        }
    }

    let requirements = match collect_packages(requirements, &config.manifest_file, console)? {
        Some(r) => r,
        None => {
            console.line("Skipping requirements management.")?;
            return Ok(ManifestOutcome::Skipped);
        }
    };

    if requirements.is_empty() {
        console.blank()?;
        console.line("No packages to add.")?;
        return Ok(ManifestOutcome::Empty);
    }

    requirements.save(&manifest_path)?;
    tracing::info!(
        path = %manifest_path.display(),
        count = requirements.len(),
        "manifest written"
    );

    console.blank()?;
    console.success(&format!("Created/Updated {}", config.manifest_file))?;
    console.item(format!("Total packages: {}", requirements.len()))?;

    print_next_steps(base, config, platform, console)?;

    Ok(ManifestOutcome::Written(requirements))
}

/// 读取用户输入直到空行或 EOF；输入 `skip` 时返回 `None`
fn collect_packages<R: BufRead, W: Write>(
    mut requirements: Requirements,
    manifest_file: &str,
    console: &mut Console<R, W>,
) -> Result<Option<Requirements>> {
    console.blank()?;
    console.line("--- Requirements Manager ---")?;
    console.line(format!("Add packages to {} (one per line)", manifest_file))?;
    console.line("Press Enter on empty line when done")?;
    console.line("Type 'skip' to skip this step")?;
    console.blank()?;

    loop {
        let package = match console.prompt(PACKAGE_PROMPT)? {
            Some(p) => p,
            None => break,
        };

        if package.eq_ignore_ascii_case("skip") {
            return Ok(None);
        }

        if package.is_empty() {
            break;
        }

        match requirements.insert(&package) {
            Insert::Added => console.item(format!("✓ Added: {}", package))?,
            Insert::Duplicate => console.item(format!("⚠ Already in list: {}", package))?,
        }
    }

    Ok(Some(requirements))
}

fn print_next_steps<R: BufRead, W: Write>(
    base: &Path,
    config: &ScaffoldConfig,
    platform: Platform,
    console: &mut Console<R, W>,
) -> Result<()> {
    let venv = &config.venv_dir;
    let install = install_command(&config.manifest_file);

    console.blank()?;
    console.hint("Next steps:")?;

    if dir_exists(&config.venv_path(base)) {
        console.item(format!("1. Activate venv: {}", platform.activation_command(venv)))?;
        console.item(format!("2. Install dependencies: {}", install))?;
    } else {
        console.item(format!("1. Create a virtual environment: {}", create_env_command(venv)))?;
        console.item(format!("2. Activate it: {}", platform.activation_command(venv)))?;
        console.item(format!("3. Install dependencies: {}", install))?;
    }

    Ok(())
}
