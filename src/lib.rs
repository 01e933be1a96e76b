// FastAPI Scaffold - Library Root
//
// 交互式项目脚手架：目录结构、虚拟环境、requirements.txt

pub mod config;
pub mod console;
pub mod environment;
pub mod errors;
pub mod manifest;
pub mod menu;
pub mod platform;
pub mod project;
pub mod templates;
pub mod utils;

// 重新导出常用类型
pub use config::ScaffoldConfig;
pub use console::Console;
pub use errors::ScaffoldError;
pub use menu::{Menu, MenuChoice};
pub use platform::Platform;
