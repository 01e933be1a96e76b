//! 工具模块
//!
//! 文件系统相关的常用函数

pub mod fs;

// 重导出
pub use fs::*;
