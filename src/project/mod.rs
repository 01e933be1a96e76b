//! 项目结构生成
//!
//! 按模板创建目录和空的占位文件

pub mod structure;

// 重导出
pub use structure::{create_structure, StructureReport};
