//! 项目结构生成器
//!
//! 幂等：目录已存在不报错，已存在的文件内容不会被覆盖。

use crate::config::ScaffoldConfig;
use crate::console::Console;
use crate::utils::{ensure_dir, touch_file};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// 一次生成的结果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StructureReport {
    /// 按模板顺序处理过的文件
    pub files: Vec<PathBuf>,
    /// 其中本次新建的文件
    pub created: Vec<PathBuf>,
}

impl StructureReport {
    pub fn existing_count(&self) -> usize {
        self.files.len() - self.created.len()
    }
}

/// 在 `base/<project_root>` 下创建模板中的全部文件
pub fn create_structure<R: BufRead, W: Write>(
    base: &Path,
    config: &ScaffoldConfig,
    console: &mut Console<R, W>,
) -> Result<StructureReport> {
    let root = config.project_path(base);

    let root_created = ensure_dir(&root)?;
    tracing::debug!(root = %root.display(), created = root_created, "project root ready");
    console.line(format!("Created: {}/", config.project_root))?;

    let mut report = StructureReport::default();

    for entry in &config.structure {
        let file_path = root.join(entry);

        if touch_file(&file_path)? {
            report.created.push(file_path.clone());
        } else {
            tracing::debug!(path = %file_path.display(), "already exists, left untouched");
        }

        console.line(format!(
            "Created: {}",
            Path::new(&config.project_root).join(entry).display()
        ))?;
        report.files.push(file_path);
    }

    console.blank()?;
    console.success(&format!(
        "Structure created successfully in {}/ folder!",
        config.project_root
    ))?;

    tracing::info!(
        total = report.files.len(),
        created = report.created.len(),
        "structure generated"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::{scripted, transcript};
    use crate::utils::{read_file, write_file};
    use tempfile::TempDir;

    fn defaults() -> ScaffoldConfig {
        ScaffoldConfig::embedded().unwrap()
    }

    #[test]
    fn test_creates_all_template_files_empty() {
        let temp = TempDir::new().unwrap();
        let config = defaults();
        let mut console = scripted(&[]);

        let report = create_structure(temp.path(), &config, &mut console).unwrap();

        assert_eq!(report.files.len(), 10);
        assert_eq!(report.created.len(), 10);
        for entry in &config.structure {
            let path = temp.path().join("app").join(entry);
            assert!(path.is_file(), "missing {}", path.display());
            assert_eq!(read_file(&path).unwrap(), "");
        }
    }

    #[test]
    fn test_prints_progress_per_path() {
        let temp = TempDir::new().unwrap();
        let mut console = scripted(&[]);

        create_structure(temp.path(), &defaults(), &mut console).unwrap();

        let out = transcript(&console);
        assert!(out.contains("Created: app/\n"));
        assert!(out.contains(&format!(
            "Created: {}",
            Path::new("app").join("api/posts/repository.py").display()
        )));
        assert_eq!(out.matches("Created: ").count(), 11);
        assert!(out.contains("Structure created successfully in app/ folder!"));
    }

    #[test]
    fn test_second_run_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let config = defaults();

        create_structure(temp.path(), &config, &mut scripted(&[])).unwrap();
        let report = create_structure(temp.path(), &config, &mut scripted(&[])).unwrap();

        assert!(report.created.is_empty());
        assert_eq!(report.existing_count(), 10);
    }

    #[test]
    fn test_existing_content_is_preserved() {
        let temp = TempDir::new().unwrap();
        let main_py = temp.path().join("app/main.py");
        write_file(&main_py, "app = FastAPI()\n").unwrap();

        let report = create_structure(temp.path(), &defaults(), &mut scripted(&[])).unwrap();

        assert_eq!(report.created.len(), 9);
        assert_eq!(read_file(&main_py).unwrap(), "app = FastAPI()\n");
    }

    #[test]
    fn test_custom_template() {
        let temp = TempDir::new().unwrap();
        let mut config = defaults();
        config.project_root = "svc".to_string();
        config.structure = vec!["deep/er/mod.py".to_string()];

        create_structure(temp.path(), &config, &mut scripted(&[])).unwrap();

        assert!(temp.path().join("svc/deep/er/mod.py").is_file());
        assert!(!temp.path().join("app").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_failure_propagates() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let locked = temp.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();

        // root 不受权限位限制，此时跳过
        if std::fs::write(locked.join("probe"), "").is_ok() {
            return;
        }

        let result = create_structure(&locked, &defaults(), &mut scripted(&[]));
        assert!(result.is_err());
    }
}
