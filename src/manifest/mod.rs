//! requirements.txt 管理
//!
//! 清单是有序、去重（精确字符串匹配）的依赖说明列表。
//! 读取时忽略空行和 `#` 注释行；写入时每行一条，末尾保留一个换行。

pub mod session;

pub use session::{manage_requirements, ManifestOutcome};

use crate::utils::{file_exists, read_file, write_file};
use anyhow::Result;
use std::path::Path;

/// 插入结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insert {
    Added,
    Duplicate,
}

/// 依赖清单
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirements {
    entries: Vec<String>,
}

impl Requirements {
    pub fn new() -> Self {
        Self::default()
    }

    /// 解析清单文本
    pub fn parse(content: &str) -> Self {
        let mut requirements = Self::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            requirements.insert(line);
        }
        requirements
    }

    /// 文件存在时读取，否则返回空清单
    pub fn load(path: &Path) -> Result<Self> {
        if !file_exists(path) {
            return Ok(Self::new());
        }
        Ok(Self::parse(&read_file(path)?))
    }

    /// 追加一条；已存在（精确匹配）时不追加
    ///
    /// 调用方保证 `spec` 已去除首尾空白且非空
    pub fn insert(&mut self, spec: &str) -> Insert {
        if self.contains(spec) {
            return Insert::Duplicate;
        }
        self.entries.push(spec.to_string());
        Insert::Added
    }

    pub fn contains(&self, spec: &str) -> bool {
        self.entries.iter().any(|e| e == spec)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 渲染为文件内容
    pub fn render(&self) -> String {
        let mut content = self.entries.join("\n");
        content.push('\n');
        content
    }

    /// 覆盖写入清单文件
    pub fn save(&self, path: &Path) -> Result<()> {
        write_file(path, &self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let content = "# web\nfastapi==0.104.1\n\n   \n  uvicorn  \n#pinned\nsqlalchemy>=2.0\n";
        let requirements = Requirements::parse(content);
        assert_eq!(
            requirements.entries(),
            &["fastapi==0.104.1", "uvicorn", "sqlalchemy>=2.0"]
        );
    }

    #[test]
    fn test_parse_indented_comment_is_ignored() {
        let requirements = Requirements::parse("   # indented\nfastapi\n");
        assert_eq!(requirements.entries(), &["fastapi"]);
    }

    #[test]
    fn test_insert_is_exact_match_dedup() {
        let mut requirements = Requirements::new();
        assert_eq!(requirements.insert("fastapi"), Insert::Added);
        assert_eq!(requirements.insert("fastapi"), Insert::Duplicate);
        // 不做语义去重
        assert_eq!(requirements.insert("fastapi==1.0"), Insert::Added);
        assert_eq!(requirements.insert("FastAPI"), Insert::Added);
        assert_eq!(
            requirements.entries(),
            &["fastapi", "fastapi==1.0", "FastAPI"]
        );
    }

    #[test]
    fn test_first_seen_order_preserved() {
        let mut requirements = Requirements::new();
        for spec in ["b", "a", "b", "c", "a"] {
            requirements.insert(spec);
        }
        assert_eq!(requirements.entries(), &["b", "a", "c"]);
    }

    #[test]
    fn test_render_has_single_trailing_newline() {
        let mut requirements = Requirements::new();
        requirements.insert("fastapi==0.104.1");
        requirements.insert("uvicorn");
        assert_eq!(requirements.render(), "fastapi==0.104.1\nuvicorn\n");
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");

        let mut requirements = Requirements::new();
        requirements.insert("fastapi==0.104.1");
        requirements.insert("pydantic[email]");
        requirements.insert("uvicorn>=0.24,<1");
        requirements.save(&path).unwrap();

        assert_eq!(Requirements::load(&path).unwrap(), requirements);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let requirements = Requirements::load(&temp.path().join("requirements.txt")).unwrap();
        assert!(requirements.is_empty());
    }

    #[test]
    fn test_parse_collapses_duplicate_lines() {
        let requirements = Requirements::parse("fastapi\nfastapi\n");
        assert_eq!(requirements.len(), 1);
    }
}
