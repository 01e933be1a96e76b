//! 模板文件嵌入
//!
//! 嵌入脚手架默认布局（scaffold.yaml）

use anyhow::{anyhow, Result};
use rust_embed::RustEmbed;

/// 默认配置文件名
pub const DEFAULT_SCAFFOLD: &str = "scaffold.yaml";

/// 模板文件资源（编译时嵌入）
#[derive(RustEmbed)]
#[folder = "embedded/templates/"]
pub struct TemplateAssets;

impl TemplateAssets {
    /// 获取默认 scaffold.yaml
    pub fn get_default_scaffold() -> Result<String> {
        Self::get_file(DEFAULT_SCAFFOLD)
    }

    /// 获取指定模板文件
    fn get_file(filename: &str) -> Result<String> {
        let file = Self::get(filename)
            .ok_or_else(|| anyhow!("Template '{}' not found", filename))?;

        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| anyhow!("Failed to decode template '{}': {}", filename, e))?;

        Ok(content.to_string())
    }
}
