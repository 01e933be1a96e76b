//! 脚手架配置
//!
//! 默认值来自嵌入的 `scaffold.yaml`；用户配置文件按顶层字段覆盖默认值。

use crate::errors::ScaffoldError;
use crate::platform::Platform;
use crate::templates::TemplateAssets;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// 项目根目录（相对于工作目录）
    pub project_root: String,

    /// 需要创建的空文件，相对于 project_root，按顺序创建
    pub structure: Vec<String>,

    pub venv_dir: String,

    pub manifest_file: String,

    /// 创建虚拟环境使用的解释器；未设置时按平台选择
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<String>,
}

impl ScaffoldConfig {
    /// 嵌入的默认配置
    pub fn embedded() -> Result<Self> {
        let content = TemplateAssets::get_default_scaffold()?;
        let config: Self =
            serde_yaml::from_str(&content).context("Failed to parse embedded scaffold.yaml")?;
        Ok(config)
    }

    /// 加载配置：有路径时读取用户文件并覆盖默认值，否则返回默认值
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::embedded()?,
        };
        Ok(config)
    }

    /// 读取用户配置文件，缺失字段取嵌入默认值
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ScaffoldError::Config {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        let config = Self::merge_with_defaults(&content).map_err(|e| ScaffoldError::Config {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        config
            .validate()
            .map_err(|reason| ScaffoldError::InvalidConfig {
                path: path.to_path_buf(),
                reason,
            })?;

        tracing::debug!(path = %path.display(), "loaded scaffold config");
        Ok(config)
    }

    fn merge_with_defaults(content: &str) -> Result<Self> {
        let defaults = TemplateAssets::get_default_scaffold()?;
        let mut base: serde_yaml::Mapping = serde_yaml::from_str(&defaults)?;

        let overrides: serde_yaml::Value = serde_yaml::from_str(content)?;
        match overrides {
            serde_yaml::Value::Mapping(map) => {
                for (key, value) in map {
                    base.insert(key, value);
                }
            }
            // 空文件
            serde_yaml::Value::Null => {}
            _ => anyhow::bail!("top level must be a mapping"),
        }

        Ok(serde_yaml::from_value(serde_yaml::Value::Mapping(base))?)
    }

    /// 校验：所有路径字段非空，且必须是不含 `..` 的相对路径
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (field, value) in [
            ("project_root", &self.project_root),
            ("venv_dir", &self.venv_dir),
            ("manifest_file", &self.manifest_file),
        ] {
            if value.trim().is_empty() {
                return Err(format!("`{}` must not be empty", field));
            }
            if escapes_base(value) {
                return Err(format!(
                    "`{}` = `{}` must be a relative path inside the working directory",
                    field, value
                ));
            }
        }

        if let Some(interpreter) = &self.interpreter {
            if interpreter.trim().is_empty() {
                return Err("`interpreter` must not be empty".to_string());
            }
        }

        for entry in &self.structure {
            if entry.trim().is_empty() {
                return Err("structure entries must not be empty".to_string());
            }
            if escapes_base(entry) {
                return Err(format!(
                    "structure entry `{}` must be a relative path inside the project root",
                    entry
                ));
            }
        }

        Ok(())
    }

    /// 实际使用的解释器
    pub fn interpreter_for(&self, platform: Platform) -> String {
        self.interpreter
            .clone()
            .unwrap_or_else(|| platform.default_interpreter().to_string())
    }

    pub fn project_path(&self, base: &Path) -> PathBuf {
        base.join(&self.project_root)
    }

    pub fn venv_path(&self, base: &Path) -> PathBuf {
        base.join(&self.venv_dir)
    }

    pub fn manifest_path(&self, base: &Path) -> PathBuf {
        base.join(&self.manifest_file)
    }

    /// 输出为 YAML（`--print-config`）
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config")
    }
}

/// 路径是否可能落到基准目录之外（绝对路径、盘符或 `..`）
fn escapes_base(value: &str) -> bool {
    Path::new(value).components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    })
}
