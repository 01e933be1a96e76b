//! 交互式控制台
//!
//! 封装标准输入输出，便于测试时用脚本化输入驱动各个操作。

use anyhow::{Context, Result};
use colored::*;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// 绑定到进程的标准输入输出
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 输出提示并读取一行
    ///
    /// 返回去掉首尾空白的内容；输入结束（EOF）时返回 `None`
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from standard input")?;

        if read == 0 {
            // 提示行没有换行，补一个保持输出整齐
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// 普通输出行
    pub fn line(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref()).context("Failed to write output")
    }

    pub fn blank(&mut self) -> Result<()> {
        self.line("")
    }

    pub fn success(&mut self, text: &str) -> Result<()> {
        self.line(format!("✓ {}", text).green().to_string())
    }

    pub fn warn(&mut self, text: &str) -> Result<()> {
        self.line(format!("⚠ {}", text).yellow().to_string())
    }

    /// 用户可见的失败，带 ❌ 标记
    pub fn error(&mut self, text: &str) -> Result<()> {
        self.line(format!("❌ {}", text).red().to_string())
    }

    pub fn hint(&mut self, text: &str) -> Result<()> {
        self.line(format!("💡 {}", text).cyan().to_string())
    }

    /// 列表项（缩进两格）
    pub fn item(&mut self, text: impl AsRef<str>) -> Result<()> {
        self.line(format!("  {}", text.as_ref()))
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}
