//! 平台相关的命令文本
//!
//! 所有函数都是 `Platform` 的纯函数，测试时无需依赖宿主系统。

/// 路径约定：Windows 风格或 POSIX 风格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    /// 从操作系统标识解析（`std::env::consts::OS` 的取值）
    pub fn from_os(os: &str) -> Self {
        if os.eq_ignore_ascii_case("windows") || os.eq_ignore_ascii_case("win32") {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// 当前宿主平台
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// 默认的 Python 解释器名称
    pub fn default_interpreter(&self) -> &'static str {
        match self {
            Platform::Windows => "python",
            Platform::Posix => "python3",
        }
    }

    /// 激活虚拟环境的命令
    pub fn activation_command(&self, venv_dir: &str) -> String {
        match self {
            Platform::Windows => format!("{}\\Scripts\\activate", venv_dir),
            Platform::Posix => format!("source {}/bin/activate", venv_dir),
        }
    }
}

/// 安装依赖的命令
pub fn install_command(manifest_file: &str) -> String {
    format!("pip install -r {}", manifest_file)
}

/// 创建虚拟环境的命令（给用户的提示文本）
pub fn create_env_command(venv_dir: &str) -> String {
    format!("python -m venv {}", venv_dir)
}
