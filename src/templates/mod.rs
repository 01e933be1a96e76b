//! 嵌入资源管理
//!
//! 使用 rust-embed 将默认脚手架配置编译进二进制

pub mod files;

pub use files::TemplateAssets;
