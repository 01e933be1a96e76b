//! 主菜单
//!
//! 两个状态：MENU（可重入）和 EXITED（仅由选项 5 或输入结束进入）。

use crate::config::ScaffoldConfig;
use crate::console::Console;
use crate::environment::{create_virtual_environment, CommandRunner};
use crate::manifest::manage_requirements;
use crate::platform::Platform;
use crate::project::create_structure;
use anyhow::Result;
use colored::*;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const BANNER_TITLE: &str = "  FastAPI Project Template Creator";
const BANNER_WIDTH: usize = 50;

/// 菜单选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateStructure,
    ManageRequirements,
    FullSetup,
    CreateEnvironment,
    Exit,
}

impl MenuChoice {
    /// 从用户输入解析（去除首尾空白）
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::CreateStructure),
            "2" => Some(MenuChoice::ManageRequirements),
            "3" => Some(MenuChoice::FullSetup),
            "4" => Some(MenuChoice::CreateEnvironment),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::CreateStructure => "Create project structure",
            MenuChoice::ManageRequirements => "Manage requirements.txt",
            MenuChoice::FullSetup => "Full setup (structure + venv + requirements)",
            MenuChoice::CreateEnvironment => "Create virtual environment only",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn all() -> [MenuChoice; 5] {
        [
            MenuChoice::CreateStructure,
            MenuChoice::ManageRequirements,
            MenuChoice::FullSetup,
            MenuChoice::CreateEnvironment,
            MenuChoice::Exit,
        ]
    }
}

pub struct Menu<'a> {
    base: PathBuf,
    config: ScaffoldConfig,
    platform: Platform,
    runner: &'a dyn CommandRunner,
}

impl<'a> Menu<'a> {
    pub fn new(
        base: &Path,
        config: ScaffoldConfig,
        platform: Platform,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            base: base.to_path_buf(),
            config,
            platform,
            runner,
        }
    }

    /// 循环显示菜单直到用户退出
    ///
    /// 只有环境创建失败和文件系统错误会以 `Err` 返回
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        loop {
            self.show(console)?;

            let choice = match console.prompt("\nSelect an option (1-5): ")? {
                Some(input) => match MenuChoice::parse(&input) {
                    Some(choice) => choice,
                    None => {
                        console.blank()?;
                        console.error("Invalid option. Please select 1-5.")?;
                        continue;
                    }
                },
                None => {
                    tracing::debug!("standard input closed, leaving menu");
                    MenuChoice::Exit
                }
            };

            tracing::debug!(?choice, "menu selection");

            if choice == MenuChoice::Exit {
                console.blank()?;
                console.line("Goodbye!")?;
                return Ok(());
            }

            self.dispatch(choice, console)?;
        }
    }

    fn dispatch<R: BufRead, W: Write>(
        &self,
        choice: MenuChoice,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        match choice {
            MenuChoice::CreateStructure => {
                create_structure(&self.base, &self.config, console)?;
            }
            MenuChoice::ManageRequirements => {
                manage_requirements(&self.base, &self.config, self.platform, console)?;
            }
            MenuChoice::FullSetup => {
                // 固定顺序，前一步是空操作也继续
                create_structure(&self.base, &self.config, console)?;
                create_virtual_environment(
                    &self.base,
                    &self.config,
                    self.platform,
                    console,
                    self.runner,
                )?;
                manage_requirements(&self.base, &self.config, self.platform, console)?;
            }
            MenuChoice::CreateEnvironment => {
                create_virtual_environment(
                    &self.base,
                    &self.config,
                    self.platform,
                    console,
                    self.runner,
                )?;
            }
            MenuChoice::Exit => {}
        }
        Ok(())
    }

    fn show<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);

        console.blank()?;
        console.line(rule.cyan().to_string())?;
        console.line(BANNER_TITLE.cyan().bold().to_string())?;
        console.line(rule.cyan().to_string())?;
        console.blank()?;

        for (i, choice) in MenuChoice::all().iter().enumerate() {
            console.line(format!("{}. {}", i + 1, choice.label()))?;
        }
        Ok(())
    }
}
