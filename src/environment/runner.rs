//! 子进程执行抽象
//!
//! 输入命令和参数，输出退出状态和捕获的输出；测试中用假实现替换。

use crate::errors::ScaffoldError;
use std::path::Path;
use std::process::Command;

/// 子进程执行结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// 退出码；被信号终止时为 None
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// 失败时展示给用户的信息：优先 stderr，其次 stdout
    pub fn failure_detail(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        self.stdout.trim().to_string()
    }
}

pub trait CommandRunner {
    /// 在 `cwd` 下执行命令并阻塞等待结束
    fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
    ) -> Result<CommandOutput, ScaffoldError>;
}

/// 真实进程执行器
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
    ) -> Result<CommandOutput, ScaffoldError> {
        tracing::debug!(program, ?args, cwd = %cwd.display(), "spawning");

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|source| ScaffoldError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        tracing::debug!(program, code = ?result.code, "child exited");
        Ok(result)
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::RefCell;

    /// 记录调用并返回预设结果
    pub struct RecordingRunner {
        pub calls: RefCell<Vec<(String, Vec<String>)>>,
        pub response: CommandOutput,
    }

    impl RecordingRunner {
        pub fn succeeding() -> Self {
            Self::returning(CommandOutput {
                code: Some(0),
                ..Default::default()
            })
        }

        pub fn failing(code: i32, stderr: &str) -> Self {
            Self::returning(CommandOutput {
                code: Some(code),
                stderr: stderr.to_string(),
                ..Default::default()
            })
        }

        pub fn returning(response: CommandOutput) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                response,
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(
            &self,
            program: &str,
            args: &[&str],
            _cwd: &Path,
        ) -> Result<CommandOutput, ScaffoldError> {
            self.calls.borrow_mut().push((
                program.to_string(),
                args.iter().map(|a| a.to_string()).collect(),
            ));
            Ok(self.response.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_failure_detail_prefers_stderr() {
        let output = CommandOutput {
            code: Some(1),
            stdout: "out".to_string(),
            stderr: "  err\n".to_string(),
        };
        assert!(!output.success());
        assert_eq!(output.failure_detail(), "err");

        let output = CommandOutput {
            code: Some(1),
            stdout: "only stdout\n".to_string(),
            stderr: String::new(),
        };
        assert_eq!(output.failure_detail(), "only stdout");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let temp = TempDir::new().unwrap();
        let err = SystemRunner
            .run("definitely-not-a-real-binary-4f1c", &[], temp.path())
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_exit_code_and_output() {
        let temp = TempDir::new().unwrap();
        let output = SystemRunner
            .run("sh", &["-c", "echo hello; echo oops >&2; exit 3"], temp.path())
            .unwrap();
        assert_eq!(output.code, Some(3));
        assert_eq!(output.stdout.trim(), "hello");
        assert_eq!(output.stderr.trim(), "oops");
    }
}
